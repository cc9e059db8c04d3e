//! Ordered map type for INI documents and sections.
//!
//! [`IniMap`] wraps an [`IndexMap`] so that keys keep the order in which they
//! were inserted. The encoder walks keys in that order, which makes output
//! deterministic and lets a decoded document be written back in the order it
//! was read.
//!
//! ## Examples
//!
//! ```rust
//! use serde_ini::{IniMap, Value};
//!
//! let mut map = IniMap::new();
//! map.insert("name".to_string(), Value::from("Alice"));
//! map.insert("admin".to_string(), Value::from(true));
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get("name").and_then(|v| v.as_str()), Some("Alice"));
//! ```

use indexmap::IndexMap;
use std::collections::HashMap;

/// An ordered map of string keys to INI values.
///
/// # Examples
///
/// ```rust
/// use serde_ini::{IniMap, Value};
///
/// let mut map = IniMap::new();
/// map.insert("first".to_string(), Value::from("1"));
/// map.insert("second".to_string(), Value::from("2"));
///
/// // Iteration maintains insertion order
/// let keys: Vec<_> = map.keys().cloned().collect();
/// assert_eq!(keys, vec!["first", "second"]);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct IniMap(IndexMap<String, crate::Value>);

impl IniMap {
    /// Creates an empty `IniMap`.
    #[must_use]
    pub fn new() -> Self {
        IniMap(IndexMap::new())
    }

    /// Creates an empty `IniMap` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        IniMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair into the map.
    ///
    /// An existing key keeps its position and the old value is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_ini::{IniMap, Value};
    ///
    /// let mut map = IniMap::new();
    /// assert!(map.insert("key".to_string(), Value::from("a")).is_none());
    /// assert!(map.insert("key".to_string(), Value::from("b")).is_some());
    /// ```
    pub fn insert(&mut self, key: String, value: crate::Value) -> Option<crate::Value> {
        self.0.insert(key, value)
    }

    /// Returns a reference to the value corresponding to the key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&crate::Value> {
        self.0.get(key)
    }

    /// Returns a mutable reference to the value corresponding to the key.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut crate::Value> {
        self.0.get_mut(key)
    }

    /// Returns `true` if the map contains the key.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Removes a key, preserving the order of the remaining entries.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_ini::{IniMap, Value};
    ///
    /// let mut map = IniMap::new();
    /// map.insert("a".to_string(), Value::from("1"));
    /// map.insert("b".to_string(), Value::from("2"));
    /// map.insert("c".to_string(), Value::from("3"));
    /// map.remove("a");
    ///
    /// let keys: Vec<_> = map.keys().cloned().collect();
    /// assert_eq!(keys, vec!["b", "c"]);
    /// ```
    pub fn remove(&mut self, key: &str) -> Option<crate::Value> {
        self.0.shift_remove(key)
    }

    /// Returns the number of elements in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map contains no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys of the map, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, crate::Value> {
        self.0.keys()
    }

    /// Returns an iterator over the values of the map, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, crate::Value> {
        self.0.values()
    }

    /// Returns an iterator over the key-value pairs of the map, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, crate::Value> {
        self.0.iter()
    }

    /// Returns a mutable iterator over the key-value pairs, in insertion order.
    pub fn iter_mut(&mut self) -> indexmap::map::IterMut<'_, String, crate::Value> {
        self.0.iter_mut()
    }

    /// Returns the section stored under `key`, creating it when the key is
    /// missing and replacing the value when it is not a section.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_ini::{IniMap, Value};
    ///
    /// let mut map = IniMap::new();
    /// map.insert("a".to_string(), Value::from("scalar"));
    /// map.section_mut("a").insert("b".to_string(), Value::from("1"));
    ///
    /// assert!(map.get("a").unwrap().is_section());
    /// ```
    pub fn section_mut(&mut self, key: &str) -> &mut IniMap {
        self.0
            .entry(key.to_string())
            .or_insert_with(|| crate::Value::Section(IniMap::new()))
            .make_section()
    }

    /// Moves every entry of `other` into `self`; later keys win.
    pub fn extend(&mut self, other: IniMap) {
        self.0.extend(other.0);
    }
}

impl From<HashMap<String, crate::Value>> for IniMap {
    fn from(map: HashMap<String, crate::Value>) -> Self {
        IniMap(map.into_iter().collect())
    }
}

impl From<IniMap> for HashMap<String, crate::Value> {
    fn from(map: IniMap) -> Self {
        map.0.into_iter().collect()
    }
}

impl std::ops::Index<&str> for IniMap {
    type Output = crate::Value;

    /// # Panics
    ///
    /// Panics if the key is not present.
    fn index(&self, key: &str) -> &crate::Value {
        match self.0.get(key) {
            Some(value) => value,
            None => panic!("key {key:?} not found in IniMap"),
        }
    }
}

impl IntoIterator for IniMap {
    type Item = (String, crate::Value);
    type IntoIter = indexmap::map::IntoIter<String, crate::Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a IniMap {
    type Item = (&'a String, &'a crate::Value);
    type IntoIter = indexmap::map::Iter<'a, String, crate::Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, crate::Value)> for IniMap {
    fn from_iter<T: IntoIterator<Item = (String, crate::Value)>>(iter: T) -> Self {
        IniMap(IndexMap::from_iter(iter))
    }
}
