//! INI encoding.
//!
//! This module provides the [`Encoder`] that writes an [`IniMap`] as INI text,
//! and [`IniValueSerializer`], which turns any `T: Serialize` into an
//! [`IniValue`] so it can be encoded.
//!
//! ## Output Layout
//!
//! - Scalars become `key=value` lines, in map order
//! - Arrays become one `key[]=item` line per element
//! - Nested maps become `[section]` blocks after the scalar lines, with dotted
//!   names for deeper levels (`[parent.child]`)
//! - Blocks are separated by one empty line
//!
//! ```rust
//! use serde_ini::{ini, Encoder, EncodeOptions, LineEnding};
//!
//! let doc = ini!({
//!     "name": "demo",
//!     "tags": ["a", "b"],
//!     "server": { "port": "8080" }
//! });
//!
//! let mut encoder = Encoder::new(EncodeOptions::new().with_line_ending(LineEnding::Lf));
//! encoder.write_document(doc.as_section().unwrap());
//! assert_eq!(
//!     encoder.into_inner(),
//!     "name=demo\ntags[]=a\ntags[]=b\n\n[server]\nport=8080\n"
//! );
//! ```

use crate::escape::{safe, safe_str};
use crate::path::join_path;
use crate::{EncodeOptions, Error, IniMap, IniValue, Number, Result};
use log::trace;
use serde::{ser, Serialize};

/// Writes INI documents.
///
/// Created via [`Encoder::new`]; the text accumulates across
/// [`write_document`](Encoder::write_document) calls and is taken with
/// [`into_inner`](Encoder::into_inner).
pub struct Encoder {
    output: String,
    options: EncodeOptions,
}

impl Encoder {
    pub fn new(options: EncodeOptions) -> Self {
        Encoder {
            output: String::with_capacity(256),
            options,
        }
    }

    pub fn into_inner(self) -> String {
        self.output
    }

    /// Encodes `doc` under the configured top-level section, if any.
    pub fn write_document(&mut self, doc: &IniMap) {
        let block = self.encode_block(doc, self.options.section.as_deref());
        self.output.push_str(&block);
    }

    fn encode_block(&self, doc: &IniMap, section: Option<&str>) -> String {
        let eol = self.options.line_ending.as_str();
        let separator = self.options.separator();
        let escape = &self.options.escape;

        let mut out = String::new();
        let mut children = Vec::new();

        for (key, value) in doc.iter() {
            match value {
                IniValue::Array(items) => {
                    let array_key = safe_str(&format!("{}[]", key), escape);
                    for item in items {
                        out.push_str(&array_key);
                        out.push_str(separator);
                        out.push_str(&safe(item, escape));
                        out.push_str(eol);
                    }
                }
                IniValue::Section(child) => children.push((key, child)),
                scalar => {
                    out.push_str(&safe_str(key, escape));
                    out.push_str(separator);
                    out.push_str(&safe(scalar, escape));
                    out.push_str(eol);
                }
            }
        }

        if let Some(name) = section.filter(|name| !name.is_empty()) {
            if !out.is_empty() {
                out.insert_str(0, &format!("[{}]{}", safe_str(name, escape), eol));
            }
        }

        for (key, child) in children {
            let child_section = join_path(section, key);
            trace!("encoding nested section [{child_section}]");
            let block = self.encode_block(child, Some(&child_section));
            if !out.is_empty() && !block.is_empty() {
                out.push_str(eol);
            }
            out.push_str(&block);
        }

        out
    }
}

/// Serializes Rust values into [`IniValue`]s.
///
/// # Examples
///
/// ```rust
/// use serde::Serialize;
/// use serde_ini::{IniValueSerializer, Value};
///
/// #[derive(Serialize)]
/// struct Server { host: String, port: u16 }
///
/// let server = Server { host: "localhost".into(), port: 8080 };
/// let value = server.serialize(IniValueSerializer).unwrap();
/// assert_eq!(value.as_section().unwrap().get("host"), Some(&Value::from("localhost")));
/// ```
pub struct IniValueSerializer;

pub struct SerializeVec {
    vec: Vec<IniValue>,
}

pub struct SerializeMap {
    map: IniMap,
    current_key: Option<String>,
}

impl ser::Serializer for IniValueSerializer {
    type Ok = IniValue;
    type Error = Error;

    type SerializeSeq = SerializeVec;
    type SerializeTuple = SerializeVec;
    type SerializeTupleStruct = SerializeVec;
    type SerializeTupleVariant = ser::Impossible<IniValue, Error>;
    type SerializeMap = SerializeMap;
    type SerializeStruct = SerializeMap;
    type SerializeStructVariant = ser::Impossible<IniValue, Error>;

    fn serialize_bool(self, v: bool) -> Result<IniValue> {
        Ok(IniValue::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<IniValue> {
        self.serialize_i64(v as i64)
    }

    fn serialize_i16(self, v: i16) -> Result<IniValue> {
        self.serialize_i64(v as i64)
    }

    fn serialize_i32(self, v: i32) -> Result<IniValue> {
        self.serialize_i64(v as i64)
    }

    fn serialize_i64(self, v: i64) -> Result<IniValue> {
        Ok(IniValue::Number(Number::Integer(v)))
    }

    fn serialize_u8(self, v: u8) -> Result<IniValue> {
        self.serialize_i64(v as i64)
    }

    fn serialize_u16(self, v: u16) -> Result<IniValue> {
        self.serialize_i64(v as i64)
    }

    fn serialize_u32(self, v: u32) -> Result<IniValue> {
        self.serialize_i64(v as i64)
    }

    fn serialize_u64(self, v: u64) -> Result<IniValue> {
        if v <= i64::MAX as u64 {
            Ok(IniValue::Number(Number::Integer(v as i64)))
        } else {
            Ok(IniValue::Number(Number::Float(v as f64)))
        }
    }

    fn serialize_f32(self, v: f32) -> Result<IniValue> {
        self.serialize_f64(v as f64)
    }

    fn serialize_f64(self, v: f64) -> Result<IniValue> {
        Ok(IniValue::Number(Number::Float(v)))
    }

    fn serialize_char(self, v: char) -> Result<IniValue> {
        Ok(IniValue::String(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<IniValue> {
        Ok(IniValue::String(v.to_string()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<IniValue> {
        let vec = v
            .iter()
            .map(|&b| IniValue::Number(Number::Integer(b as i64)))
            .collect();
        Ok(IniValue::Array(vec))
    }

    fn serialize_none(self) -> Result<IniValue> {
        Ok(IniValue::Null)
    }

    fn serialize_some<T>(self, value: &T) -> Result<IniValue>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<IniValue> {
        Ok(IniValue::Null)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<IniValue> {
        Ok(IniValue::Null)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<IniValue> {
        Ok(IniValue::String(variant.to_string()))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<IniValue>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<IniValue>
    where
        T: ?Sized + Serialize,
    {
        let mut map = IniMap::new();
        map.insert(variant.to_string(), to_ini_value(value)?);
        Ok(IniValue::Section(map))
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<SerializeVec> {
        Ok(SerializeVec::new())
    }

    fn serialize_tuple(self, _len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::new())
    }

    fn serialize_tuple_struct(self, _name: &'static str, _len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::new())
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Err(Error::unsupported_type("tuple variants"))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<SerializeMap> {
        Ok(SerializeMap::new())
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<SerializeMap> {
        Ok(SerializeMap::new())
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Err(Error::unsupported_type("struct variants"))
    }
}

impl SerializeVec {
    fn new() -> Self {
        SerializeVec { vec: Vec::new() }
    }
}

impl SerializeMap {
    fn new() -> Self {
        SerializeMap {
            map: IniMap::new(),
            current_key: None,
        }
    }
}

impl ser::SerializeSeq for SerializeVec {
    type Ok = IniValue;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_ini_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<IniValue> {
        Ok(IniValue::Array(self.vec))
    }
}

impl ser::SerializeTuple for SerializeVec {
    type Ok = IniValue;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_ini_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<IniValue> {
        Ok(IniValue::Array(self.vec))
    }
}

impl ser::SerializeTupleStruct for SerializeVec {
    type Ok = IniValue;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_ini_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<IniValue> {
        Ok(IniValue::Array(self.vec))
    }
}

impl ser::SerializeMap for SerializeMap {
    type Ok = IniValue;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        match to_ini_value(key)? {
            key @ (IniValue::String(_) | IniValue::Bool(_) | IniValue::Number(_)) => {
                self.current_key = Some(key.into_key());
                Ok(())
            }
            other => Err(Error::type_mismatch("scalar map key", other.type_name())),
        }
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self
            .current_key
            .take()
            .ok_or_else(|| Error::custom("serialize_value called without serialize_key"))?;
        self.map.insert(key, to_ini_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<IniValue> {
        Ok(IniValue::Section(self.map))
    }
}

impl ser::SerializeStruct for SerializeMap {
    type Ok = IniValue;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.map.insert(key.to_string(), to_ini_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<IniValue> {
        Ok(IniValue::Section(self.map))
    }
}

fn to_ini_value<T: Serialize + ?Sized>(value: &T) -> Result<IniValue> {
    value.serialize(IniValueSerializer)
}
