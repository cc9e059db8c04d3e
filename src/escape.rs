//! Quoting and escaping of keys, values and section names.
//!
//! [`safe`] turns a value into a token that can sit on either side of `=` or
//! inside `[...]`. [`unsafe_value`] reads such a token back.
//!
//! A token is written bare unless that would be ambiguous, in which case it is
//! written as a JSON literal:
//!
//! ```text
//! plain          -> plain
//! has;semicolon  -> has\;semicolon
//! a=b            -> "a=b"
//!   padded       -> "  padded"
//! "quoted"       -> "\"quoted\""
//! [bracket       -> "[bracket"
//! ```

use crate::{EscapeOptions, IniValue};
use log::trace;

/// Returns `true` when `s` starts and ends with the same quote character.
///
/// A lone `"` or `'` does not count as quoted.
///
/// # Examples
///
/// ```rust
/// use serde_ini::escape::is_quoted;
///
/// assert!(is_quoted("\"a\""));
/// assert!(is_quoted("'a'"));
/// assert!(!is_quoted("\"a'"));
/// assert!(!is_quoted("\""));
/// ```
#[inline]
#[must_use]
pub fn is_quoted(s: &str) -> bool {
    s.len() >= 2
        && ((s.starts_with('"') && s.ends_with('"'))
            || (s.starts_with('\'') && s.ends_with('\'')))
}

#[inline]
fn needs_quotes(s: &str) -> bool {
    s.contains(['=', '\r', '\n']) || s.starts_with('[') || is_quoted(s) || s != s.trim()
}

/// Encodes a value as a single INI token.
///
/// Non-string values are written as JSON (`true`, `null`, `5`, `["a"]`).
///
/// # Examples
///
/// ```rust
/// use serde_ini::{safe, EscapeOptions, Value};
///
/// let options = EscapeOptions::default();
/// assert_eq!(safe(&Value::from("plain"), &options), "plain");
/// assert_eq!(safe(&Value::from(true), &options), "true");
/// assert_eq!(safe(&Value::from("  padded"), &options), "\"  padded\"");
/// ```
#[must_use]
pub fn safe(value: &IniValue, options: &EscapeOptions) -> String {
    match value {
        IniValue::String(s) => safe_str(s, options),
        other => other.to_string(),
    }
}

/// Encodes a string as a single INI token.
///
/// # Examples
///
/// ```rust
/// use serde_ini::{safe_str, EscapeOptions};
///
/// let options = EscapeOptions::default();
/// assert_eq!(safe_str("has;semicolon", &options), "has\\;semicolon");
/// assert_eq!(safe_str("a=b", &options), "\"a=b\"");
/// ```
#[must_use]
pub fn safe_str(s: &str, options: &EscapeOptions) -> String {
    if needs_quotes(s) {
        return IniValue::from(s).to_string();
    }
    if !options.data_comments {
        return s.to_string();
    }

    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if options.is_comment_delimiter(c) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Decodes a single INI token.
///
/// Quoted tokens are parsed as JSON (single quotes are stripped first); when
/// that fails the text is kept as a string. Bare tokens are unescaped and cut
/// at the first unescaped comment delimiter.
///
/// # Examples
///
/// ```rust
/// use serde_ini::{unsafe_value, EscapeOptions, Number, Value};
///
/// let options = EscapeOptions::default();
/// assert_eq!(unsafe_value("value ; comment", &options), Value::from("value"));
/// assert_eq!(unsafe_value("a\\;b", &options), Value::from("a;b"));
/// assert_eq!(unsafe_value("\"a=b\"", &options), Value::from("a=b"));
/// assert_eq!(unsafe_value("'5'", &options), Value::Number(Number::Integer(5)));
/// ```
#[must_use]
pub fn unsafe_value(raw: &str, options: &EscapeOptions) -> IniValue {
    let token = raw.trim();
    if is_quoted(token) {
        let literal = if token.starts_with('\'') {
            &token[1..token.len() - 1]
        } else {
            token
        };
        return match serde_json::from_str::<serde_json::Value>(literal) {
            Ok(parsed) => IniValue::from(parsed),
            Err(e) => {
                trace!("keeping unparsable quoted token {literal:?} as text: {e}");
                IniValue::String(literal.to_string())
            }
        };
    }

    IniValue::String(unescape_bare(token, options))
}

fn unescape_bare(token: &str, options: &EscapeOptions) -> String {
    let mut out = String::with_capacity(token.len());
    let mut escaped = false;

    for c in token.chars() {
        if escaped {
            if c != '\\' && !options.is_comment_delimiter(c) {
                out.push('\\');
            }
            out.push(c);
            escaped = false;
        } else if options.data_comments && options.is_comment_delimiter(c) {
            break;
        } else if c == '\\' {
            escaped = true;
        } else {
            out.push(c);
        }
    }
    if escaped {
        out.push('\\');
    }

    out.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{IniMap, Number};

    fn defaults() -> EscapeOptions {
        EscapeOptions::default()
    }

    #[test]
    fn test_safe_quotes_structural_strings() {
        let o = defaults();
        assert_eq!(safe_str("[section", &o), r#""[section""#);
        assert_eq!(safe_str("line\nbreak", &o), r#""line\nbreak""#);
        assert_eq!(safe_str("cr\r", &o), r#""cr\r""#);
        assert_eq!(safe_str("trailing ", &o), r#""trailing ""#);
        assert_eq!(safe_str("\"x\"", &o), r#""\"x\"""#);
        assert_eq!(safe_str("'x'", &o), r#""'x'""#);
    }

    #[test]
    fn test_safe_leaves_plain_strings() {
        let o = defaults();
        assert_eq!(safe_str("", &o), "");
        assert_eq!(safe_str("\"", &o), "\"");
        assert_eq!(safe_str("inner ] bracket", &o), "inner ] bracket");
        assert_eq!(safe_str("5", &o), "5");
        assert_eq!(safe_str(r"C:\dir", &o), r"C:\dir");
    }

    #[test]
    fn test_safe_non_strings_are_json() {
        let o = defaults();
        assert_eq!(safe(&IniValue::Null, &o), "null");
        assert_eq!(safe(&IniValue::Bool(false), &o), "false");
        assert_eq!(safe(&IniValue::Number(Number::Integer(5)), &o), "5");
        assert_eq!(safe(&IniValue::Number(Number::Float(0.5)), &o), "0.5");
        assert_eq!(safe(&IniValue::Section(IniMap::new()), &o), "{}");
    }

    #[test]
    fn test_safe_delimiter_escaping_follows_options() {
        let custom = EscapeOptions {
            comment_delimiters: vec!['%'],
            data_comments: true,
        };
        assert_eq!(safe_str("50% off; today", &custom), r"50\% off; today");

        let off = EscapeOptions {
            data_comments: false,
            ..defaults()
        };
        assert_eq!(safe_str("a;b#c", &off), "a;b#c");
    }

    #[test]
    fn test_unsafe_strips_trailing_comment() {
        let o = defaults();
        assert_eq!(unsafe_value("  value   # note", &o), IniValue::from("value"));
        assert_eq!(unsafe_value(";everything", &o), IniValue::from(""));
    }

    #[test]
    fn test_unsafe_escape_rules() {
        let o = defaults();
        assert_eq!(unsafe_value(r"a\\b", &o), IniValue::from(r"a\b"));
        assert_eq!(unsafe_value(r"a\#b", &o), IniValue::from("a#b"));
        assert_eq!(unsafe_value(r"a\nb", &o), IniValue::from(r"a\nb"));
        assert_eq!(unsafe_value(r"dangling\", &o), IniValue::from(r"dangling\"));
    }

    #[test]
    fn test_unsafe_without_data_comments_keeps_delimiters() {
        let o = EscapeOptions {
            data_comments: false,
            ..defaults()
        };
        assert_eq!(unsafe_value("a;b", &o), IniValue::from("a;b"));
        // escapes of delimiters are still honoured
        assert_eq!(unsafe_value(r"a\;b", &o), IniValue::from("a;b"));
    }

    #[test]
    fn test_unsafe_quoted_literals() {
        let o = defaults();
        assert_eq!(unsafe_value(r#""a\tb""#, &o), IniValue::from("a\tb"));
        assert_eq!(unsafe_value(r#"'"x"'"#, &o), IniValue::from("x"));
        assert_eq!(unsafe_value("'true'", &o), IniValue::Bool(true));
        assert_eq!(
            unsafe_value("'[1, \"two\"]'", &o),
            IniValue::Array(vec![IniValue::from(1), IniValue::from("two")])
        );
    }

    #[test]
    fn test_unsafe_unparsable_quoted_falls_back() {
        let o = defaults();
        assert_eq!(unsafe_value("'plain words'", &o), IniValue::from("plain words"));
        assert_eq!(unsafe_value(r#""a"b""#, &o), IniValue::from(r#""a"b""#));
        // quoted tokens are never cut at comment delimiters
        assert_eq!(unsafe_value("'a;b'", &o), IniValue::from("a;b"));
    }

    #[test]
    fn test_lone_quote_is_bare() {
        let o = defaults();
        assert_eq!(unsafe_value("'", &o), IniValue::from("'"));
        assert_eq!(unsafe_value("\"", &o), IniValue::from("\""));
    }

    #[test]
    fn test_safe_then_unsafe() {
        let o = defaults();
        for s in [
            "plain",
            "has;semicolon",
            "hash # tag",
            "  padded  ",
            "a=b",
            "[x]",
            "'single'",
            "\"double\"",
            "true",
            "",
        ] {
            let token = safe_str(s, &o);
            assert_eq!(unsafe_value(&token, &o), IniValue::from(s), "{s:?} -> {token:?}");
        }
    }
}
