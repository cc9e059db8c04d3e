//! # serde_ini
//!
//! An INI encoder and decoder with a Serde bridge.
//!
//! ## What is supported?
//!
//! The format is the loose INI dialect used by npm-style config files:
//!
//! - `key=value` pairs, with `key` alone meaning `true`
//! - `[section]` headers, nested with dotted names (`[server.tls]`)
//! - Arrays as repeated `key[]=item` lines
//! - `;` and `#` comments, also trailing a value (`port = 80 ; default`)
//! - JSON-quoted tokens for anything that would otherwise be ambiguous
//!
//! ## Key Features
//!
//! - **Never fails on input**: malformed lines are dropped, bad quoting falls
//!   back to plain text
//! - **Ordered**: documents keep key order, so decoded files encode back in the
//!   order they were read
//! - **Serde Compatible**: read and write your own types with
//!   `#[derive(Serialize, Deserialize)]`
//! - **Comment filters**: decode only the entries marked by a given comment
//! - **No Unsafe Code**
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! serde_ini = "0.1"
//! serde = { version = "1.0", features = ["derive"] }
//! ```
//!
//! ### Encoding and Decoding Documents
//!
//! ```rust
//! use serde_ini::{decode, encode, ini, EncodeOptions, LineEnding};
//!
//! let doc = ini!({
//!     "scope": "global",
//!     "database": { "user": "dbuser", "password": "dbpassword" }
//! });
//! let doc = doc.as_section().unwrap();
//!
//! let options = EncodeOptions::new().with_line_ending(LineEnding::Lf);
//! let text = encode(doc, options);
//! assert_eq!(
//!     text,
//!     "scope=global\n\n[database]\nuser=dbuser\npassword=dbpassword\n"
//! );
//!
//! assert_eq!(&decode(&text), doc);
//! ```
//!
//! ### Using Your Own Types
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use serde_ini::{from_str, to_string};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct Database {
//!     user: String,
//!     port: u16,
//! }
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct Config {
//!     scope: String,
//!     database: Database,
//! }
//!
//! let config = Config {
//!     scope: "global".to_string(),
//!     database: Database { user: "dbuser".to_string(), port: 5432 },
//! };
//!
//! let text = to_string(&config).unwrap();
//! let back: Config = from_str(&text).unwrap();
//! assert_eq!(config, back);
//! ```
//!
//! Everything decodes as text, so `port` above round-trips through the string
//! `"5432"`; numbers and booleans are parsed back on deserialization.
//!
//! ## Format Description
//!
//! See the [`format`] module for the full grammar and escaping rules.
//!
//! ## Examples
//!
//! See the `demos/` directory:
//!
//! - **`simple.rs`** - Encode and decode a config struct
//! - **`macro.rs`** - Building documents with the ini! macro
//! - **`nested_sections.rs`** - Dotted section names and escaped dots
//! - **`dynamic_values.rs`** - Walking a decoded document
//! - **`custom_options.rs`** - Whitespace, delimiters and line endings
//! - **`comment_filter.rs`** - Decoding only marked entries
//!
//! Run any example with: `cargo run --example <name>`

pub mod de;
pub mod error;
pub mod escape;
pub mod format;
pub mod macros;
pub mod map;
pub mod options;
pub mod path;
pub mod ser;
pub mod value;

pub use de::Decoder;
pub use error::{Error, Result};
pub use escape::{safe, safe_str, unsafe_value};
pub use map::IniMap;
pub use options::{DecodeOptions, EncodeOptions, EscapeOptions, LineEnding};
pub use ser::{Encoder, IniValueSerializer};
pub use value::{IniValue, IniValue as Value, Number};

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io;

/// Encodes a document as INI text.
///
/// `options` is either an [`EncodeOptions`] or a section name, which wraps the
/// top level of the document in that section.
///
/// # Examples
///
/// ```rust
/// use serde_ini::{encode, ini, EncodeOptions, LineEnding};
///
/// let doc = ini!({ "user": "root", "tags": ["a", "b"] });
/// let doc = doc.as_section().unwrap();
///
/// let options = EncodeOptions::new()
///     .with_whitespace(true)
///     .with_line_ending(LineEnding::Lf);
/// assert_eq!(encode(doc, options), "user = root\ntags[] = a\ntags[] = b\n");
///
/// let text = encode(doc, "main");
/// assert!(text.starts_with("[main]"));
/// ```
#[must_use]
pub fn encode(doc: &IniMap, options: impl Into<EncodeOptions>) -> String {
    let mut encoder = Encoder::new(options.into());
    encoder.write_document(doc);
    encoder.into_inner()
}

/// Encodes a document with default options.
#[must_use]
pub fn encode_default(doc: &IniMap) -> String {
    encode(doc, EncodeOptions::default())
}

/// Alias of [`encode_default`].
#[must_use]
pub fn stringify(doc: &IniMap) -> String {
    encode_default(doc)
}

/// Decodes INI text with default options.
///
/// # Examples
///
/// ```rust
/// use serde_ini::{decode, Value};
///
/// let doc = decode("; comment\nname = demo\nflag\n[a.b]\nc = 1\n");
/// assert_eq!(doc.get("name"), Some(&Value::from("demo")));
/// assert_eq!(doc.get("flag"), Some(&Value::Bool(true)));
/// assert!(doc["a"].as_section().unwrap().contains_key("b"));
/// ```
#[must_use]
pub fn decode(text: &str) -> IniMap {
    decode_with_options(text, &DecodeOptions::default())
}

/// Decodes INI text.
///
/// # Examples
///
/// ```rust
/// use serde_ini::{decode_with_options, DecodeOptions, Value};
///
/// let options = DecodeOptions::new().with_comment_delimiters(['#']);
/// let doc = decode_with_options("k = a;b # tail", &options);
/// assert_eq!(doc.get("k"), Some(&Value::from("a;b")));
/// ```
#[must_use]
pub fn decode_with_options(text: &str, options: &DecodeOptions) -> IniMap {
    let mut decoder = Decoder::new(options);
    decoder.feed(text);
    decoder.finish()
}

/// Alias of [`decode_with_options`].
#[must_use]
pub fn parse(text: &str, options: &DecodeOptions) -> IniMap {
    decode_with_options(text, options)
}

/// Serialize any `T: Serialize` to INI text.
///
/// # Errors
///
/// Returns [`Error::UnsupportedType`] if `value` does not serialize to a map or
/// struct, or any error raised by its `Serialize` impl.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(value, EncodeOptions::default())
}

/// Serialize any `T: Serialize` to INI text with custom options.
///
/// # Examples
///
/// ```rust
/// use serde::Serialize;
/// use serde_ini::{to_string_with_options, EncodeOptions, LineEnding};
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let options = EncodeOptions::new()
///     .with_section("point")
///     .with_line_ending(LineEnding::Lf);
/// let text = to_string_with_options(&Point { x: 1, y: 2 }, options).unwrap();
/// assert_eq!(text, "[point]\nx=1\ny=2\n");
/// ```
///
/// # Errors
///
/// Returns [`Error::UnsupportedType`] if `value` does not serialize to a map or
/// struct.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options<T>(value: &T, options: EncodeOptions) -> Result<String>
where
    T: ?Sized + Serialize,
{
    match to_value(value)? {
        IniValue::Section(doc) => Ok(encode(&doc, options)),
        other => Err(Error::unsupported_type(&format!(
            "top-level {} cannot be written as INI",
            other.type_name()
        ))),
    }
}

/// Convert any `T: Serialize` to an `IniValue`.
///
/// # Examples
///
/// ```rust
/// use serde::Serialize;
/// use serde_ini::to_value;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let value = to_value(&Point { x: 1, y: 2 }).unwrap();
/// assert!(value.is_section());
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value<T>(value: &T) -> Result<IniValue>
where
    T: ?Sized + Serialize,
{
    value.serialize(IniValueSerializer)
}

/// Convert an `IniValue` into any `T: Deserialize`.
///
/// # Examples
///
/// ```rust
/// use serde::Deserialize;
/// use serde_ini::{from_value, ini};
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let point: Point = from_value(ini!({ "x": "1", "y": "2" })).unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// Returns an error if the value does not fit `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_value<T>(value: IniValue) -> Result<T>
where
    T: DeserializeOwned,
{
    T::deserialize(de::ValueDeserializer::new(value))
}

/// Serialize any `T: Serialize` to a writer as INI text.
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, T>(mut writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    let text = to_string(value)?;
    writer
        .write_all(text.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}

/// Deserialize an instance of type `T` from INI text.
///
/// # Examples
///
/// ```rust
/// use serde::Deserialize;
/// use serde_ini::from_str;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let point: Point = from_str("x = 1\ny = 2").unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// Returns an error if the decoded document cannot be deserialized to type `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str<T>(s: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    from_str_with_options(s, &DecodeOptions::default())
}

/// Deserialize an instance of type `T` from INI text with custom options.
///
/// # Errors
///
/// Returns an error if the decoded document cannot be deserialized to type `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str_with_options<T>(s: &str, options: &DecodeOptions) -> Result<T>
where
    T: DeserializeOwned,
{
    from_value(IniValue::Section(decode_with_options(s, options)))
}

/// Deserialize an instance of type `T` from an I/O stream of INI text.
///
/// # Examples
///
/// ```rust
/// use serde::Deserialize;
/// use serde_ini::from_reader;
/// use std::io::Cursor;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let point: Point = from_reader(Cursor::new(b"x=1\ny=2")).unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// Returns an error if reading from the reader fails or the data cannot be
/// deserialized to type `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R, T>(mut reader: R) -> Result<T>
where
    R: io::Read,
    T: DeserializeOwned,
{
    let mut string = String::new();
    reader
        .read_to_string(&mut string)
        .map_err(|e| Error::io(&e.to_string()))?;
    from_str(&string)
}

/// Deserialize an instance of type `T` from bytes of INI text.
///
/// # Errors
///
/// Returns an error if the bytes are not valid UTF-8 or cannot be deserialized
/// to type `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice<T>(v: &[u8]) -> Result<T>
where
    T: DeserializeOwned,
{
    let s = std::str::from_utf8(v).map_err(|e| Error::custom(e.to_string()))?;
    from_str(s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Point {
        x: i32,
        y: i32,
    }

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct User {
        id: u32,
        name: String,
        active: bool,
        tags: Vec<String>,
    }

    #[test]
    fn test_serialize_deserialize_point() {
        let point = Point { x: 1, y: 2 };
        let text = to_string(&point).unwrap();
        let point_back: Point = from_str(&text).unwrap();
        assert_eq!(point, point_back);
    }

    #[test]
    fn test_serialize_deserialize_user() {
        let user = User {
            id: 123,
            name: "Alice".to_string(),
            active: true,
            tags: vec!["admin".to_string(), "user".to_string()],
        };

        let text = to_string(&user).unwrap();
        let user_back: User = from_str(&text).unwrap();
        assert_eq!(user, user_back);
    }

    #[test]
    fn test_top_level_must_be_a_map() {
        assert!(matches!(to_string(&42), Err(Error::UnsupportedType(_))));
        assert!(matches!(to_string("text"), Err(Error::UnsupportedType(_))));
    }

    #[test]
    fn test_section_option_shorthand() {
        let doc = decode("a=1");
        let text = encode(&doc, "top");
        let back = decode(&text);
        assert_eq!(back["top"].as_section(), Some(&doc));
    }

    #[test]
    fn test_stringify_matches_encode_default() {
        let doc = decode("[s]\nk=v");
        assert_eq!(stringify(&doc), encode(&doc, EncodeOptions::default()));
    }

    #[test]
    fn test_parse_is_decode_with_options() {
        let options = DecodeOptions::new().with_filter_comment("x");
        assert_eq!(parse(";x\na=1\nb=2", &options), decode("a=1"));
    }

    #[test]
    fn test_from_slice_rejects_invalid_utf8() {
        let result: Result<Point> = from_slice(&[0xff, 0xfe]);
        assert!(matches!(result, Err(Error::Custom(_))));
    }

    #[test]
    fn test_to_writer() {
        let mut buffer = Vec::new();
        to_writer(&mut buffer, &Point { x: 1, y: 2 }).unwrap();
        let point: Point = from_slice(&buffer).unwrap();
        assert_eq!(point, Point { x: 1, y: 2 });
    }
}
