//! Dynamic value representation for INI data.
//!
//! [`IniValue`] (re-exported as [`Value`](crate::Value)) is the in-memory form
//! of a decoded document. Decoding only ever produces strings, booleans,
//! `null`, arrays and sections; [`Number`]s come from JSON-quoted tokens such as
//! `'5'` or from serializing Rust numbers.
//!
//! ```rust
//! use serde_ini::{decode, Value};
//!
//! let doc = decode("name = demo\nflag\nlimit = '5'\n");
//! assert_eq!(doc["name"].as_str(), Some("demo"));
//! assert_eq!(doc["flag"].as_bool(), Some(true));
//! assert_eq!(doc["limit"].to_string(), "5");
//! ```

use crate::IniMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A dynamically-typed INI value.
///
/// An [`Array`](IniValue::Array) is written as repeated `key[]=item` lines and
/// a [`Section`](IniValue::Section) as a `[name]` block; everything else is a
/// single token.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum IniValue {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Vec<IniValue>),
    Section(IniMap),
}

/// A numeric value.
///
/// Whole floats print without a fraction and non-finite values print as
/// `null`:
///
/// ```rust
/// use serde_ini::Number;
///
/// assert_eq!(Number::Float(3.0).to_string(), "3");
/// assert_eq!(Number::Float(f64::INFINITY).to_string(), "null");
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

impl Number {
    fn to_json(self) -> serde_json::Value {
        match self {
            Number::Integer(i) => serde_json::Value::from(i),
            Number::Float(f) => serde_json::Number::from_f64(f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{}", i),
            Number::Float(fl) if fl.is_finite() => write!(f, "{}", fl),
            Number::Float(_) => write!(f, "null"),
        }
    }
}

impl From<serde_json::Number> for Number {
    fn from(n: serde_json::Number) -> Self {
        match n.as_i64() {
            Some(i) => Number::Integer(i),
            None => Number::Float(n.as_f64().unwrap_or(f64::NAN)),
        }
    }
}

impl IniValue {
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, IniValue::Null)
    }

    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, IniValue::Bool(_))
    }

    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, IniValue::String(_))
    }

    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, IniValue::Array(_))
    }

    #[must_use]
    pub const fn is_section(&self) -> bool {
        matches!(self, IniValue::Section(_))
    }

    /// Returns the boolean, without parsing strings: `"true"` gives `None`.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            IniValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            IniValue::String(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_array(&self) -> Option<&Vec<IniValue>> {
        match self {
            IniValue::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_array_mut(&mut self) -> Option<&mut Vec<IniValue>> {
        match self {
            IniValue::Array(items) => Some(items),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_section(&self) -> Option<&IniMap> {
        match self {
            IniValue::Section(map) => Some(map),
            _ => None,
        }
    }

    /// Returns the section held by this value, first replacing any other
    /// variant with an empty section.
    pub(crate) fn make_section(&mut self) -> &mut IniMap {
        match self {
            IniValue::Section(map) => map,
            other => {
                *other = IniValue::Section(IniMap::new());
                other.make_section()
            }
        }
    }

    /// Short name of the variant, used in error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            IniValue::Null => "null",
            IniValue::Bool(_) => "boolean",
            IniValue::Number(_) => "number",
            IniValue::String(_) => "string",
            IniValue::Array(_) => "array",
            IniValue::Section(_) => "section",
        }
    }

    /// Renders the value as a map key: strings are used as-is, anything else
    /// by its JSON text.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_ini::{Number, Value};
    ///
    /// assert_eq!(Value::from("port").into_key(), "port");
    /// assert_eq!(Value::Number(Number::Integer(5)).into_key(), "5");
    /// assert_eq!(Value::Null.into_key(), "null");
    /// ```
    #[must_use]
    pub fn into_key(self) -> String {
        match self {
            IniValue::String(s) => s,
            other => other.to_string(),
        }
    }

    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            IniValue::Null => serde_json::Value::Null,
            IniValue::Bool(b) => serde_json::Value::Bool(*b),
            IniValue::Number(n) => n.to_json(),
            IniValue::String(s) => serde_json::Value::String(s.clone()),
            IniValue::Array(items) => {
                serde_json::Value::Array(items.iter().map(IniValue::to_json).collect())
            }
            IniValue::Section(map) => serde_json::Value::Object(
                map.iter().map(|(k, v)| (k.clone(), v.to_json())).collect(),
            ),
        }
    }
}

/// JSON text; this is the quoted form the encoder falls back to.
impl fmt::Display for IniValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IniValue::Null => write!(f, "null"),
            IniValue::Bool(b) => write!(f, "{}", b),
            IniValue::Number(n) => write!(f, "{}", n),
            IniValue::String(_) | IniValue::Array(_) | IniValue::Section(_) => {
                write!(f, "{}", self.to_json())
            }
        }
    }
}

impl From<serde_json::Value> for IniValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => IniValue::Null,
            serde_json::Value::Bool(b) => IniValue::Bool(b),
            serde_json::Value::Number(n) => IniValue::Number(Number::from(n)),
            serde_json::Value::String(s) => IniValue::String(s),
            serde_json::Value::Array(items) => {
                IniValue::Array(items.into_iter().map(IniValue::from).collect())
            }
            serde_json::Value::Object(obj) => IniValue::Section(
                obj.into_iter()
                    .map(|(k, v)| (k, IniValue::from(v)))
                    .collect(),
            ),
        }
    }
}

// Both directions go through the JSON data model, which maps one-to-one
// onto IniValue apart from non-finite floats.
impl Serialize for IniValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_json().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for IniValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        serde_json::Value::deserialize(deserializer).map(IniValue::from)
    }
}

impl TryFrom<IniValue> for IniMap {
    type Error = crate::Error;

    fn try_from(value: IniValue) -> crate::Result<Self> {
        match value {
            IniValue::Section(map) => Ok(map),
            other => Err(crate::Error::type_mismatch("section", other.type_name())),
        }
    }
}

impl From<bool> for IniValue {
    fn from(value: bool) -> Self {
        IniValue::Bool(value)
    }
}

impl From<i32> for IniValue {
    fn from(value: i32) -> Self {
        IniValue::Number(Number::Integer(i64::from(value)))
    }
}

impl From<f64> for IniValue {
    fn from(value: f64) -> Self {
        IniValue::Number(Number::Float(value))
    }
}

impl From<String> for IniValue {
    fn from(value: String) -> Self {
        IniValue::String(value)
    }
}

impl From<&str> for IniValue {
    fn from(value: &str) -> Self {
        IniValue::String(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ini;

    #[test]
    fn test_display_is_json_text() {
        assert_eq!(IniValue::Null.to_string(), "null");
        assert_eq!(IniValue::Bool(false).to_string(), "false");
        assert_eq!(IniValue::from(5).to_string(), "5");
        assert_eq!(IniValue::from(2.5).to_string(), "2.5");
        assert_eq!(IniValue::from(f64::NAN).to_string(), "null");
        assert_eq!(IniValue::from("a \"b\"").to_string(), r#""a \"b\"""#);
        assert_eq!(ini!(["x", 1]).to_string(), r#"["x",1]"#);
    }

    #[test]
    fn test_from_json() {
        let json: serde_json::Value =
            serde_json::from_str(r#"{"a":[1,2.5,null],"b":true}"#).unwrap();
        assert_eq!(
            IniValue::from(json),
            ini!({ "a": [1, 2.5, null], "b": true })
        );
    }

    #[test]
    fn test_serde_impls_keep_order() {
        let value: IniValue = serde_json::from_str(r#"{"z":"1","a":{"k":[true]}}"#).unwrap();
        let keys: Vec<_> = value.as_section().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["z", "a"]);

        assert_eq!(
            serde_json::to_string(&value).unwrap(),
            r#"{"z":"1","a":{"k":[true]}}"#
        );
    }

    #[test]
    fn test_try_into_section() {
        assert_eq!(IniMap::try_from(ini!({})).unwrap(), IniMap::new());
        assert!(matches!(
            IniMap::try_from(IniValue::from("x")),
            Err(crate::Error::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_make_section_replaces_scalars() {
        let mut value = IniValue::from("scalar");
        value.make_section().insert("k".to_string(), IniValue::Bool(true));
        assert_eq!(value, ini!({ "k": true }));
    }

    #[test]
    fn test_into_key() {
        assert_eq!(IniValue::from("k").into_key(), "k");
        assert_eq!(IniValue::Bool(true).into_key(), "true");
        assert_eq!(IniValue::from(1.5).into_key(), "1.5");
    }

    #[test]
    fn test_type_names() {
        assert_eq!(ini!({}).type_name(), "section");
        assert_eq!(ini!([]).type_name(), "array");
        assert!(IniValue::default().is_null());
    }
}
