//! Configuration options for encoding and decoding.
//!
//! - [`EscapeOptions`]: comment delimiters and whether values may carry
//!   trailing comments; shared by both directions
//! - [`EncodeOptions`]: section name, separator style and line ending
//! - [`DecodeOptions`]: escaping plus the optional filter comment
//! - [`LineEnding`]: `\n` or `\r\n`
//!
//! ## Examples
//!
//! ```rust
//! use serde_ini::{encode, ini, EncodeOptions, LineEnding};
//!
//! let doc = ini!({ "port": "8080" });
//! let doc = doc.as_section().unwrap();
//!
//! // Plain string shorthand: wrap everything in a `[server]` section
//! let text = encode(doc, "server");
//!
//! // Spaces around `=` and Unix line endings
//! let options = EncodeOptions::new()
//!     .with_whitespace(true)
//!     .with_line_ending(LineEnding::Lf);
//! assert_eq!(encode(doc, options), "port = 8080\n");
//! ```

/// Comment delimiters recognized when no others are configured.
pub const DEFAULT_COMMENT_DELIMITERS: [char; 2] = [';', '#'];

/// Line terminator written by the encoder.
///
/// The decoder accepts any mix of `\r` and `\n` regardless of this setting.
///
/// # Examples
///
/// ```rust
/// use serde_ini::LineEnding;
///
/// assert_eq!(LineEnding::Lf.as_str(), "\n");
/// assert_eq!(LineEnding::CrLf.as_str(), "\r\n");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineEnding {
    Lf,
    CrLf,
}

impl LineEnding {
    /// The platform's conventional line ending, fixed at compile time.
    #[must_use]
    pub const fn native() -> Self {
        if cfg!(windows) {
            LineEnding::CrLf
        } else {
            LineEnding::Lf
        }
    }

    /// Returns the string representation of this line ending.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

impl Default for LineEnding {
    fn default() -> Self {
        Self::native()
    }
}

/// Escaping rules shared by [`safe`](crate::safe) and
/// [`unsafe_value`](crate::unsafe_value).
///
/// # Examples
///
/// ```rust
/// use serde_ini::EscapeOptions;
///
/// let options = EscapeOptions::default();
/// assert!(options.is_comment_delimiter(';'));
/// assert!(options.is_comment_delimiter('#'));
/// assert!(options.data_comments);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EscapeOptions {
    /// Characters that start a comment, both on their own line and after a value.
    pub comment_delimiters: Vec<char>,
    /// When `false`, delimiters inside values are neither escaped on encode nor
    /// treated as the start of a trailing comment on decode.
    pub data_comments: bool,
}

impl Default for EscapeOptions {
    fn default() -> Self {
        EscapeOptions {
            comment_delimiters: DEFAULT_COMMENT_DELIMITERS.to_vec(),
            data_comments: true,
        }
    }
}

impl EscapeOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub fn is_comment_delimiter(&self, c: char) -> bool {
        self.comment_delimiters.contains(&c)
    }
}

/// Options for [`encode`](crate::encode).
///
/// A `&str` or `String` converts into options that only set the section name.
///
/// # Examples
///
/// ```rust
/// use serde_ini::EncodeOptions;
///
/// let options = EncodeOptions::from("server");
/// assert_eq!(options.section.as_deref(), Some("server"));
/// assert!(!options.whitespace);
///
/// let options = EncodeOptions::new()
///     .with_comment_delimiters(['#'])
///     .with_data_comments(false);
/// assert_eq!(options.escape.comment_delimiters, vec!['#']);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct EncodeOptions {
    /// Section header wrapping the top-level keys.
    pub section: Option<String>,
    /// Write `key = value` instead of `key=value`.
    pub whitespace: bool,
    pub escape: EscapeOptions,
    pub line_ending: LineEnding,
}

impl EncodeOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_section(mut self, section: impl Into<String>) -> Self {
        self.section = Some(section.into());
        self
    }

    #[must_use]
    pub fn with_whitespace(mut self, whitespace: bool) -> Self {
        self.whitespace = whitespace;
        self
    }

    #[must_use]
    pub fn with_comment_delimiters(mut self, delimiters: impl IntoIterator<Item = char>) -> Self {
        self.escape.comment_delimiters = delimiters.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_data_comments(mut self, data_comments: bool) -> Self {
        self.escape.data_comments = data_comments;
        self
    }

    #[must_use]
    pub fn with_line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }

    /// The key/value separator selected by [`whitespace`](Self::whitespace).
    #[must_use]
    pub const fn separator(&self) -> &'static str {
        if self.whitespace {
            " = "
        } else {
            "="
        }
    }
}

impl From<&str> for EncodeOptions {
    fn from(section: &str) -> Self {
        EncodeOptions::new().with_section(section)
    }
}

impl From<String> for EncodeOptions {
    fn from(section: String) -> Self {
        EncodeOptions::new().with_section(section)
    }
}

impl From<&EncodeOptions> for EncodeOptions {
    fn from(options: &EncodeOptions) -> Self {
        options.clone()
    }
}

/// Options for [`decode_with_options`](crate::decode_with_options).
///
/// # Examples
///
/// ```rust
/// use serde_ini::DecodeOptions;
///
/// let options = DecodeOptions::new().with_filter_comment("IMPORTANT");
/// assert_eq!(options.filter_comment.as_deref(), Some("IMPORTANT"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct DecodeOptions {
    pub escape: EscapeOptions,
    /// Only keep entries marked by a comment whose text equals this string.
    pub filter_comment: Option<String>,
}

impl DecodeOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_comment_delimiters(mut self, delimiters: impl IntoIterator<Item = char>) -> Self {
        self.escape.comment_delimiters = delimiters.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_data_comments(mut self, data_comments: bool) -> Self {
        self.escape.data_comments = data_comments;
        self
    }

    #[must_use]
    pub fn with_filter_comment(mut self, filter_comment: impl Into<String>) -> Self {
        self.filter_comment = Some(filter_comment.into());
        self
    }

    /// The filter comment, if one is configured and non-empty.
    #[must_use]
    pub fn active_filter(&self) -> Option<&str> {
        self.filter_comment.as_deref().filter(|f| !f.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_shorthand_uses_defaults() {
        let options = EncodeOptions::from(String::from("a.b"));
        assert_eq!(options.section.as_deref(), Some("a.b"));
        assert!(!options.whitespace);
        assert_eq!(options.escape, EscapeOptions::default());
        assert_eq!(options.line_ending, LineEnding::native());
    }

    #[test]
    fn test_separator() {
        assert_eq!(EncodeOptions::new().separator(), "=");
        assert_eq!(EncodeOptions::new().with_whitespace(true).separator(), " = ");
    }

    #[test]
    fn test_empty_filter_is_inactive() {
        assert_eq!(DecodeOptions::new().with_filter_comment("").active_filter(), None);
        assert_eq!(DecodeOptions::new().active_filter(), None);
        assert_eq!(
            DecodeOptions::new().with_filter_comment("X").active_filter(),
            Some("X")
        );
    }
}
