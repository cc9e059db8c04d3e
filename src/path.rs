//! Dotted section paths.
//!
//! Section names such as `a.b.c` describe nesting: `[a.b.c]` decodes to
//! `{ a: { b: { c: { .. } } } }`. A dot that belongs to a key is written as
//! `\.`, so `[a\.b]` names a single section called `a.b`.

/// Splits `path` on unescaped dots, keeping `\.` escapes inside each segment.
///
/// A backslash only escapes a directly following dot; any other backslash is
/// kept as an ordinary character.
///
/// # Examples
///
/// ```rust
/// use serde_ini::path::split_path_raw;
///
/// assert_eq!(split_path_raw("a.b"), vec!["a", "b"]);
/// assert_eq!(split_path_raw(r"a\.b.c"), vec![r"a\.b", "c"]);
/// assert_eq!(split_path_raw("plain"), vec!["plain"]);
/// ```
#[must_use]
pub fn split_path_raw(path: &str) -> Vec<String> {
    let mut segments = Vec::new();
    let mut current = String::with_capacity(path.len());
    let mut chars = path.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' if chars.peek() == Some(&'.') => {
                chars.next();
                current.push_str("\\.");
            }
            '.' => segments.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    segments.push(current);
    segments
}

/// Splits `path` on unescaped dots and turns `\.` back into `.`.
///
/// # Examples
///
/// ```rust
/// use serde_ini::path::split_path;
///
/// assert_eq!(split_path(r"a\.b.c"), vec!["a.b", "c"]);
/// ```
#[must_use]
pub fn split_path(path: &str) -> Vec<String> {
    split_path_raw(path)
        .iter()
        .map(|segment| unescape_dots(segment))
        .collect()
}

/// Replaces every `\.` with `.`.
#[must_use]
pub fn unescape_dots(segment: &str) -> String {
    segment.replace("\\.", ".")
}

/// Escapes the unescaped dots of `key` so the whole key reads as one segment.
///
/// Dots that are already escaped stay as they are.
///
/// # Examples
///
/// ```rust
/// use serde_ini::path::escape_segment;
///
/// assert_eq!(escape_segment("a.b"), r"a\.b");
/// assert_eq!(escape_segment(r"a\.b"), r"a\.b");
/// assert_eq!(escape_segment("plain"), "plain");
/// ```
#[must_use]
pub fn escape_segment(key: &str) -> String {
    split_path_raw(key).join("\\.")
}

/// Appends `key` as a literal segment under `parent`.
///
/// An empty or missing parent means the key sits at the top level.
#[must_use]
pub fn join_path(parent: Option<&str>, key: &str) -> String {
    match parent {
        Some(parent) if !parent.is_empty() => format!("{}.{}", parent, escape_segment(key)),
        _ => escape_segment(key),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_segments_are_kept() {
        assert_eq!(split_path_raw(""), vec![""]);
        assert_eq!(split_path_raw("a..b"), vec!["a", "", "b"]);
        assert_eq!(split_path_raw(".a."), vec!["", "a", ""]);
    }

    #[test]
    fn test_backslash_without_dot_is_literal() {
        assert_eq!(split_path_raw(r"a\b.c"), vec![r"a\b", "c"]);
        assert_eq!(split_path_raw(r"a\"), vec![r"a\"]);
        // the second backslash escapes the dot
        assert_eq!(split_path_raw(r"a\\.b"), vec![r"a\\.b"]);
    }

    #[test]
    fn test_split_path_unescapes_every_segment() {
        assert_eq!(split_path(r"x\.y.z\.w"), vec!["x.y", "z.w"]);
    }

    #[test]
    fn test_join_path() {
        assert_eq!(join_path(None, "a.b"), r"a\.b");
        assert_eq!(join_path(Some(""), "a"), "a");
        assert_eq!(join_path(Some("root"), "child"), "root.child");
        assert_eq!(join_path(Some(r"a\.b"), "c.d"), r"a\.b.c\.d");
    }

    #[test]
    fn test_escape_then_split_is_single_segment() {
        for key in ["a.b.c", "no-dots", r"mixed\.and.plain", "trailing."] {
            let escaped = escape_segment(key);
            assert_eq!(split_path_raw(&escaped).len(), 1, "{key}");
        }
    }
}
