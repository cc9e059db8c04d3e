//! INI decoding.
//!
//! This module provides the [`Decoder`] that reads INI text into an
//! [`IniMap`], and the value deserializer behind [`from_value`](crate::from_value).
//!
//! ## Overview
//!
//! Decoding is line based and never fails:
//!
//! - Lines starting with a comment delimiter (`;` or `#` by default) are comments
//! - `[name]` opens a section; dotted names nest (`[a.b]` → `{ a: { b: .. } }`)
//! - `key=value` and bare `key` (meaning `true`) are entries
//! - `key[]=value` lines collect into an array
//! - Anything else is dropped
//!
//! ```rust
//! use serde_ini::{decode, Value};
//!
//! let doc = decode("debug\n[server.tls]\nport = 443 ; https\n");
//! assert_eq!(doc.get("debug"), Some(&Value::Bool(true)));
//!
//! let tls = doc["server"].as_section().unwrap()["tls"].as_section().unwrap();
//! assert_eq!(tls.get("port"), Some(&Value::from("443")));
//! ```
//!
//! ## Comment Filters
//!
//! With [`DecodeOptions::with_filter_comment`], only entries marked by a
//! matching comment are kept. A marker directly above a section header keeps
//! the whole section; a marker directly above an entry keeps that entry.
//!
//! ```rust
//! use serde_ini::{decode_with_options, DecodeOptions};
//!
//! let text = "[app]\nname = x\n# KEEP\nport = 80\n";
//! let doc = decode_with_options(text, &DecodeOptions::new().with_filter_comment("KEEP"));
//! let app = doc["app"].as_section().unwrap();
//! assert_eq!(app.len(), 1);
//! assert!(app.contains_key("port"));
//! ```

use crate::escape::unsafe_value;
use crate::path::{split_path_raw, unescape_dots};
use crate::{DecodeOptions, Error, IniMap, IniValue, Number, Result};
use log::{debug, trace};
use serde::de::{self, IntoDeserializer};
use serde::forward_to_deserialize_any;

/// A single classified input line.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Line<'a> {
    Blank,
    /// Comment text after the delimiter and at most one space.
    Comment(&'a str),
    SectionHeader(&'a str),
    KeyValue {
        key: &'a str,
        value: Option<&'a str>,
    },
    Unmatched,
}

impl<'a> Line<'a> {
    fn classify(line: &'a str, options: &DecodeOptions) -> Self {
        if line.is_empty() {
            return Line::Blank;
        }

        // whitespace-only lines fall through and become the empty key
        let mut chars = line.trim_start().chars();
        if let Some(first) = chars.next() {
            if options.escape.is_comment_delimiter(first) {
                let body = chars.as_str();
                return Line::Comment(body.strip_prefix(' ').unwrap_or(body));
            }
        }

        if let Some(name) = line.strip_prefix('[').and_then(|rest| rest.strip_suffix(']')) {
            if !name.contains(']') {
                return Line::SectionHeader(name);
            }
        }

        match line.split_once('=') {
            Some(("", _)) => Line::Unmatched,
            Some((key, value)) => Line::KeyValue {
                key,
                value: Some(value),
            },
            None => Line::KeyValue {
                key: line,
                value: None,
            },
        }
    }
}

/// Progress of the comment filter through the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FilterState {
    /// Entries are skipped.
    Idle,
    /// A marker comment was seen; the next header or entry is kept.
    Armed { in_active_section: bool },
    /// The current section was opened right after a marker comment.
    SectionActive,
}

impl FilterState {
    fn on_marker(self) -> Self {
        match self {
            FilterState::Idle => FilterState::Armed {
                in_active_section: false,
            },
            FilterState::SectionActive => FilterState::Armed {
                in_active_section: true,
            },
            armed => armed,
        }
    }

    fn on_section(self) -> Self {
        match self {
            FilterState::Armed { .. } => FilterState::SectionActive,
            _ => FilterState::Idle,
        }
    }

    fn on_stored(self) -> Self {
        match self {
            FilterState::Armed {
                in_active_section: true,
            } => FilterState::SectionActive,
            FilterState::Armed {
                in_active_section: false,
            } => FilterState::Idle,
            state => state,
        }
    }

    fn keeps_entries(self) -> bool {
        !matches!(self, FilterState::Idle)
    }
}

/// Line-by-line INI reader.
///
/// Most users should call [`decode`](crate::decode) or
/// [`decode_with_options`](crate::decode_with_options) instead.
///
/// # Examples
///
/// ```rust
/// use serde_ini::{Decoder, DecodeOptions, Value};
///
/// let options = DecodeOptions::new();
/// let mut decoder = Decoder::new(&options);
/// decoder.feed_line("[a.b]");
/// decoder.feed_line("x=1");
///
/// let doc = decoder.finish();
/// let b = doc["a"].as_section().unwrap()["b"].as_section().unwrap();
/// assert_eq!(b.get("x"), Some(&Value::from("1")));
/// ```
pub struct Decoder<'o> {
    options: &'o DecodeOptions,
    out: IniMap,
    section: Option<String>,
    filter: FilterState,
}

impl<'o> Decoder<'o> {
    pub fn new(options: &'o DecodeOptions) -> Self {
        Decoder {
            options,
            out: IniMap::new(),
            section: None,
            filter: FilterState::Idle,
        }
    }

    /// Decodes every line of `text`. Any run of `\r` and `\n` ends a line.
    pub fn feed(&mut self, text: &str) {
        for line in text.split(['\r', '\n']).filter(|line| !line.is_empty()) {
            self.feed_line(line);
        }
    }

    /// Decodes a single line, which must not contain line breaks.
    pub fn feed_line(&mut self, line: &str) {
        match Line::classify(line, self.options) {
            Line::Blank => {}
            Line::Comment(body) => {
                if self.options.active_filter() == Some(body) {
                    trace!("filter comment found: {body:?}");
                    self.filter = self.filter.on_marker();
                }
            }
            Line::SectionHeader(name) => {
                self.filter = self.filter.on_section();
                let name = unsafe_value(name, &self.options.escape).into_key();
                self.section = if name.is_empty() { None } else { Some(name) };
            }
            Line::KeyValue { key, value } => self.entry(key, value),
            Line::Unmatched => trace!("dropping unmatched line {line:?}"),
        }
    }

    /// Rebuilds nesting from dotted section names and returns the document.
    pub fn finish(self) -> IniMap {
        nest_sections(self.out)
    }

    fn entry(&mut self, raw_key: &str, raw_value: Option<&str>) {
        let escape = &self.options.escape;
        let key = unsafe_value(raw_key, escape).into_key();
        let value = match raw_value {
            None => IniValue::Bool(true),
            Some(raw) => coerce_literal(unsafe_value(raw, escape)),
        };

        if self.options.active_filter().is_some() {
            if !self.filter.keeps_entries() {
                debug!("filtered out {key:?} in section {:?}", self.section);
                return;
            }
            self.filter = self.filter.on_stored();
        }

        let parent = match &self.section {
            Some(name) => {
                if matches!(self.out.get(name), Some(v) if !v.is_section()) {
                    debug!("section [{name}] replaces top-level value of the same name");
                }
                self.out.section_mut(name)
            }
            None => &mut self.out,
        };
        store(parent, key, value);
    }
}

/// Maps the text `true`, `false` and `null` to their literal values.
fn coerce_literal(value: IniValue) -> IniValue {
    match value {
        IniValue::String(s) => match s.as_str() {
            "true" => IniValue::Bool(true),
            "false" => IniValue::Bool(false),
            "null" => IniValue::Null,
            _ => IniValue::String(s),
        },
        other => other,
    }
}

fn store(parent: &mut IniMap, mut key: String, value: IniValue) {
    if key.len() > 2 && key.ends_with("[]") {
        key.truncate(key.len() - 2);
        match parent.get_mut(&key) {
            None => {
                parent.insert(key.clone(), IniValue::Array(Vec::new()));
            }
            Some(IniValue::Array(_)) => {}
            Some(existing) => {
                debug!("promoting {key:?} to an array");
                let previous = std::mem::take(existing);
                *existing = IniValue::Array(vec![previous]);
            }
        }
    }

    // a repeated key that lost its `[]` still appends
    if let Some(items) = parent.get_mut(&key).and_then(IniValue::as_array_mut) {
        items.push(value);
    } else {
        parent.insert(key, value);
    }
}

/// Moves dotted top-level sections (`"a.b"`) to their nested location.
///
/// Sections whose name has a single segment stay where they are unless the
/// segment contains an escaped dot, in which case the key is unescaped.
fn nest_sections(mut out: IniMap) -> IniMap {
    let dotted: Vec<String> = out
        .iter()
        .filter(|(_, value)| value.is_section())
        .map(|(key, _)| key.clone())
        .collect();

    for key in dotted {
        let mut parents = split_path_raw(&key);
        let last_raw = parents.pop().unwrap_or_default();
        let last = unescape_dots(&last_raw);
        if parents.is_empty() && last == last_raw {
            continue;
        }

        let Some(entry) = out.remove(&key) else {
            continue;
        };
        trace!("nesting section {key:?}");

        let mut parent = &mut out;
        for segment in &parents {
            parent = parent.section_mut(&unescape_dots(segment));
        }
        attach(parent, last, entry);
    }

    out
}

/// Inserts `entry` under `name`, replacing whatever is already there.
fn attach(parent: &mut IniMap, name: String, entry: IniValue) {
    if let Some(previous) = parent.get(&name) {
        debug!(
            "section {name:?} replaces an existing {}",
            previous.type_name()
        );
    }
    parent.insert(name, entry);
}

/// Deserializes Rust values out of an [`IniValue`].
///
/// INI has no typed scalars, so numbers and booleans are also accepted as
/// strings, and a single value is accepted where a sequence is expected.
pub(crate) struct ValueDeserializer {
    value: IniValue,
}

impl ValueDeserializer {
    pub(crate) fn new(value: IniValue) -> Self {
        ValueDeserializer { value }
    }

    fn mismatch(&self, expected: &str) -> Error {
        Error::type_mismatch(expected, self.value.type_name())
    }
}

macro_rules! deserialize_number {
    ($($method:ident => $visit:ident : $ty:ty),* $(,)?) => {
        $(
            fn $method<V>(self, visitor: V) -> Result<V::Value>
            where
                V: de::Visitor<'de>,
            {
                match self.value {
                    IniValue::Number(Number::Integer(i)) => visitor.visit_i64(i),
                    IniValue::Number(Number::Float(f)) => visitor.visit_f64(f),
                    IniValue::String(ref s) => match s.trim().parse::<$ty>() {
                        Ok(n) => visitor.$visit(n),
                        Err(_) => Err(Error::invalid_number(s, stringify!($ty))),
                    },
                    _ => Err(self.mismatch(stringify!($ty))),
                }
            }
        )*
    };
}

impl<'de> de::Deserializer<'de> for ValueDeserializer {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            IniValue::Null => visitor.visit_unit(),
            IniValue::Bool(b) => visitor.visit_bool(b),
            IniValue::Number(Number::Integer(i)) => visitor.visit_i64(i),
            IniValue::Number(Number::Float(f)) => visitor.visit_f64(f),
            IniValue::String(s) => visitor.visit_string(s),
            IniValue::Array(arr) => visitor.visit_seq(SeqDeserializer::new(arr)),
            IniValue::Section(map) => visitor.visit_map(MapDeserializer::new(map)),
        }
    }

    fn deserialize_bool<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            IniValue::Bool(b) => visitor.visit_bool(b),
            IniValue::String(ref s) => match s.trim() {
                "true" => visitor.visit_bool(true),
                "false" => visitor.visit_bool(false),
                _ => Err(self.mismatch("boolean")),
            },
            _ => Err(self.mismatch("boolean")),
        }
    }

    deserialize_number! {
        deserialize_i8 => visit_i8: i8,
        deserialize_i16 => visit_i16: i16,
        deserialize_i32 => visit_i32: i32,
        deserialize_i64 => visit_i64: i64,
        deserialize_u8 => visit_u8: u8,
        deserialize_u16 => visit_u16: u16,
        deserialize_u32 => visit_u32: u32,
        deserialize_u64 => visit_u64: u64,
        deserialize_f32 => visit_f32: f32,
        deserialize_f64 => visit_f64: f64,
    }

    fn deserialize_string<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            IniValue::Array(_) | IniValue::Section(_) => Err(self.mismatch("string")),
            scalar => visitor.visit_string(scalar.into_key()),
        }
    }

    fn deserialize_str<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_string(visitor)
    }

    fn deserialize_char<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_string(visitor)
    }

    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            IniValue::Null => visitor.visit_none(),
            _ => visitor.visit_some(self),
        }
    }

    fn deserialize_newtype_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_seq<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            IniValue::Array(arr) => visitor.visit_seq(SeqDeserializer::new(arr)),
            IniValue::Section(_) => Err(self.mismatch("array")),
            scalar => visitor.visit_seq(SeqDeserializer::new(vec![scalar])),
        }
    }

    fn deserialize_tuple<V>(self, _len: usize, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_seq(visitor)
    }

    fn deserialize_tuple_struct<V>(
        self,
        _name: &'static str,
        _len: usize,
        visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_seq(visitor)
    }

    fn deserialize_map<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            IniValue::Section(map) => visitor.visit_map(MapDeserializer::new(map)),
            _ => Err(self.mismatch("section")),
        }
    }

    fn deserialize_struct<V>(
        self,
        _name: &'static str,
        _fields: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_map(visitor)
    }

    fn deserialize_enum<V>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            IniValue::String(variant) => visitor.visit_enum(variant.into_deserializer()),
            IniValue::Section(map) if map.len() == 1 => {
                let (variant, value) = map
                    .into_iter()
                    .next()
                    .ok_or_else(|| Error::custom("empty enum section"))?;
                visitor.visit_enum(EnumDeserializer::new(variant, value))
            }
            _ => Err(self.mismatch("enum")),
        }
    }

    fn deserialize_identifier<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_string(visitor)
    }

    fn deserialize_ignored_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_unit()
    }

    forward_to_deserialize_any! {
        i128 u128 bytes byte_buf unit unit_struct
    }
}

struct SeqDeserializer {
    iter: std::vec::IntoIter<IniValue>,
}

impl SeqDeserializer {
    fn new(vec: Vec<IniValue>) -> Self {
        SeqDeserializer {
            iter: vec.into_iter(),
        }
    }
}

impl<'de> de::SeqAccess<'de> for SeqDeserializer {
    type Error = Error;

    fn next_element_seed<T>(&mut self, seed: T) -> Result<Option<T::Value>>
    where
        T: de::DeserializeSeed<'de>,
    {
        match self.iter.next() {
            Some(value) => seed.deserialize(ValueDeserializer::new(value)).map(Some),
            None => Ok(None),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        match self.iter.size_hint() {
            (lower, Some(upper)) if lower == upper => Some(upper),
            _ => None,
        }
    }
}

struct MapDeserializer {
    iter: indexmap::map::IntoIter<String, IniValue>,
    value: Option<IniValue>,
}

impl MapDeserializer {
    fn new(map: IniMap) -> Self {
        MapDeserializer {
            iter: map.into_iter(),
            value: None,
        }
    }
}

impl<'de> de::MapAccess<'de> for MapDeserializer {
    type Error = Error;

    fn next_key_seed<K>(&mut self, seed: K) -> Result<Option<K::Value>>
    where
        K: de::DeserializeSeed<'de>,
    {
        match self.iter.next() {
            Some((key, value)) => {
                self.value = Some(value);
                seed.deserialize(ValueDeserializer::new(IniValue::String(key)))
                    .map(Some)
            }
            None => Ok(None),
        }
    }

    fn next_value_seed<V>(&mut self, seed: V) -> Result<V::Value>
    where
        V: de::DeserializeSeed<'de>,
    {
        match self.value.take() {
            Some(value) => seed.deserialize(ValueDeserializer::new(value)),
            None => Err(Error::custom("next_value_seed called before next_key_seed")),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        match self.iter.size_hint() {
            (lower, Some(upper)) if lower == upper => Some(upper),
            _ => None,
        }
    }
}

struct EnumDeserializer {
    variant: String,
    value: IniValue,
}

impl EnumDeserializer {
    fn new(variant: String, value: IniValue) -> Self {
        EnumDeserializer { variant, value }
    }
}

impl<'de> de::EnumAccess<'de> for EnumDeserializer {
    type Error = Error;
    type Variant = VariantDeserializer;

    fn variant_seed<V>(self, seed: V) -> Result<(V::Value, Self::Variant)>
    where
        V: de::DeserializeSeed<'de>,
    {
        let variant = seed.deserialize(ValueDeserializer::new(IniValue::String(self.variant)))?;
        Ok((variant, VariantDeserializer { value: self.value }))
    }
}

struct VariantDeserializer {
    value: IniValue,
}

impl<'de> de::VariantAccess<'de> for VariantDeserializer {
    type Error = Error;

    fn unit_variant(self) -> Result<()> {
        match self.value {
            IniValue::Null => Ok(()),
            _ => Err(Error::custom("Expected unit variant")),
        }
    }

    fn newtype_variant_seed<T>(self, seed: T) -> Result<T::Value>
    where
        T: de::DeserializeSeed<'de>,
    {
        seed.deserialize(ValueDeserializer::new(self.value))
    }

    fn tuple_variant<V>(self, _len: usize, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            IniValue::Array(arr) => visitor.visit_seq(SeqDeserializer::new(arr)),
            _ => Err(Error::custom("Expected tuple variant")),
        }
    }

    fn struct_variant<V>(self, _fields: &'static [&'static str], visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            IniValue::Section(map) => visitor.visit_map(MapDeserializer::new(map)),
            _ => Err(Error::custom("Expected struct variant")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ini;

    fn decode(text: &str) -> IniMap {
        decode_opts(text, &DecodeOptions::new())
    }

    fn decode_opts(text: &str, options: &DecodeOptions) -> IniMap {
        let mut decoder = Decoder::new(options);
        decoder.feed(text);
        decoder.finish()
    }

    fn doc(value: IniValue) -> IniMap {
        IniMap::try_from(value).unwrap()
    }

    #[test]
    fn test_classify() {
        let o = DecodeOptions::new();
        assert_eq!(Line::classify("", &o), Line::Blank);
        assert_eq!(
            Line::classify("   ", &o),
            Line::KeyValue {
                key: "   ",
                value: None
            }
        );
        assert_eq!(Line::classify("  ; note", &o), Line::Comment("note"));
        assert_eq!(Line::classify("#  two", &o), Line::Comment(" two"));
        assert_eq!(Line::classify("[a.b]", &o), Line::SectionHeader("a.b"));
        assert_eq!(Line::classify("[]", &o), Line::SectionHeader(""));
        assert_eq!(
            Line::classify("[a] ", &o),
            Line::KeyValue {
                key: "[a] ",
                value: None
            }
        );
        assert_eq!(
            Line::classify("[a]b]", &o),
            Line::KeyValue {
                key: "[a]b]",
                value: None
            }
        );
        assert_eq!(
            Line::classify("k = v=w", &o),
            Line::KeyValue {
                key: "k ",
                value: Some(" v=w")
            }
        );
        assert_eq!(Line::classify("=orphan", &o), Line::Unmatched);
    }

    #[test]
    fn test_filter_state_transitions() {
        let idle = FilterState::Idle;
        let armed = idle.on_marker();
        assert_eq!(
            armed,
            FilterState::Armed {
                in_active_section: false
            }
        );
        assert_eq!(armed.on_section(), FilterState::SectionActive);
        assert_eq!(armed.on_stored(), FilterState::Idle);

        let active = FilterState::SectionActive;
        assert_eq!(active.on_section(), FilterState::Idle);
        assert_eq!(active.on_marker().on_stored(), FilterState::SectionActive);
        assert_eq!(active.on_marker().on_section(), FilterState::SectionActive);
        assert!(!idle.keeps_entries());
    }

    #[test]
    fn test_valueless_key_and_literals() {
        let out = decode("foo\nbar=false\nbaz=null\nqux='null'\nquoted=\"true\"");
        assert_eq!(
            out,
            doc(ini!({
                "foo": true,
                "bar": false,
                "baz": null,
                "qux": null,
                "quoted": true
            }))
        );
    }

    #[test]
    fn test_empty_value_is_empty_string() {
        assert_eq!(decode("k="), doc(ini!({ "k": "" })));
    }

    #[test]
    fn test_arrays_accumulate() {
        let out = decode("a[]=1\na[]=2\nb=x\nb[]=y\nc[]=z\nc=w");
        assert_eq!(
            out,
            doc(ini!({
                "a": ["1", "2"],
                "b": ["x", "y"],
                "c": ["z", "w"]
            }))
        );
    }

    #[test]
    fn test_later_scalar_overwrites_and_keeps_position() {
        assert_eq!(decode("a=1\nb=2\na=3"), doc(ini!({ "a": "3", "b": "2" })));
    }

    #[test]
    fn test_bare_brackets_key_is_not_an_array() {
        assert_eq!(decode("[]=x"), doc(ini!({ "[]": "x" })));
    }

    #[test]
    fn test_empty_section_name_is_top_level() {
        assert_eq!(decode("[s]\na=1\n[]\nb=2"), doc(ini!({ "s": { "a": "1" }, "b": "2" })));
    }

    #[test]
    fn test_section_replaces_top_level_scalar() {
        assert_eq!(decode("a=1\n[a]\nb=2"), doc(ini!({ "a": { "b": "2" } })));
    }

    #[test]
    fn test_nesting_into_existing_parent() {
        let out = decode("[a]\ny=1\n[a.b]\nx=2");
        assert_eq!(out, doc(ini!({ "a": { "y": "1", "b": { "x": "2" } } })));

        let out = decode("[a.b]\nx=2\n[a]\ny=1");
        assert_eq!(out, doc(ini!({ "a": { "b": { "x": "2" }, "y": "1" } })));
    }

    #[test]
    fn test_nesting_replaces_scalar_parent() {
        let out = decode("a=1\n[a.b]\nx=2");
        assert_eq!(out, doc(ini!({ "a": { "b": { "x": "2" } } })));
    }

    #[test]
    fn test_later_section_overwrites_nested_one() {
        let out = decode("[a.b.c]\nz=1\n[a.b]\nx=2");
        assert_eq!(out, doc(ini!({ "a": { "b": { "x": "2" } } })));

        let out = decode("[a.b]\nx=2\n[a.b.c]\nz=1");
        assert_eq!(
            out,
            doc(ini!({ "a": { "b": { "x": "2", "c": { "z": "1" } } } }))
        );
    }

    #[test]
    fn test_whitespace_only_line_is_empty_key() {
        assert_eq!(decode("a=1\n  \t\nb=2"), doc(ini!({ "a": "1", "": true, "b": "2" })));
    }

    #[test]
    fn test_escaped_dots() {
        // parent segments are unescaped as well, so `c` lands under `a.b`
        let out = decode("[a\\.b]\nx=1\n[a\\.b.c]\ny=2");
        assert_eq!(out, doc(ini!({ "a.b": { "x": "1", "c": { "y": "2" } } })));
    }

    #[test]
    fn test_top_level_dotted_scalars_are_not_nested() {
        assert_eq!(decode("a.b=1"), doc(ini!({ "a.b": "1" })));
    }

    #[test]
    fn test_filter_without_marker_keeps_nothing() {
        let options = DecodeOptions::new().with_filter_comment("KEEP");
        assert!(decode_opts("a=1\n[s]\nb=2", &options).is_empty());
    }

    #[test]
    fn test_filter_marker_before_top_level_entry() {
        let options = DecodeOptions::new().with_filter_comment("KEEP");
        let out = decode_opts("a=1\n;KEEP\nb=2\nc=3", &options);
        assert_eq!(out, doc(ini!({ "b": "2" })));
    }

    #[test]
    fn test_filter_marker_inside_active_section_carries_over() {
        let options = DecodeOptions::new().with_filter_comment("KEEP");
        let out = decode_opts("# KEEP\n[one]\na=1\n# KEEP\n[two]\nb=2\n[three]\nc=3", &options);
        assert_eq!(out, doc(ini!({ "one": { "a": "1" }, "two": { "b": "2" } })));
    }

    #[test]
    fn test_custom_delimiters() {
        let options = DecodeOptions::new().with_comment_delimiters(['%']);
        let out = decode_opts("% comment\n; not a comment\nk=v % trailing", &options);
        assert_eq!(out, doc(ini!({ "; not a comment": true, "k": "v" })));
    }

    #[test]
    fn test_value_deserializer_is_lenient() {
        use serde::Deserialize;

        #[derive(Deserialize, Debug, PartialEq)]
        struct Server {
            port: u16,
            ratio: f64,
            verbose: bool,
            name: Option<String>,
            hosts: Vec<String>,
            label: String,
        }

        let value = ini!({
            "port": "8080",
            "ratio": "0.5",
            "verbose": "true",
            "name": null,
            "hosts": "only-one",
            "label": true
        });
        let server = Server::deserialize(ValueDeserializer::new(value)).unwrap();
        assert_eq!(
            server,
            Server {
                port: 8080,
                ratio: 0.5,
                verbose: true,
                name: None,
                hosts: vec!["only-one".to_string()],
                label: "true".to_string(),
            }
        );
    }

    #[test]
    fn test_value_deserializer_reports_bad_numbers() {
        use serde::Deserialize;

        let err = u8::deserialize(ValueDeserializer::new(IniValue::from("300"))).unwrap_err();
        assert!(matches!(err, Error::InvalidNumber { .. }));

        let err = u8::deserialize(ValueDeserializer::new(ini!([]))).unwrap_err();
        assert!(matches!(err, Error::TypeMismatch { .. }));
    }
}
