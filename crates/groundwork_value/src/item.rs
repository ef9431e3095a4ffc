//! Item: the store's native per-record representation.

use crate::value::Value;
use std::collections::btree_map;
use std::collections::BTreeMap;

/// Presence of a field on an item.
///
/// Key absence ("field not set") and an explicit null tag ("field set to
/// null") are different assertions. Modelling them as distinct constructors
/// keeps the distinction compiler-checked instead of relying on key-presence
/// checks scattered through the mappers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence<T> {
    /// The key is absent from the item.
    Absent,
    /// The key is present with an explicit null tag.
    Null,
    /// The key is present with a non-null value.
    Present(T),
}

/// A string-keyed map of tagged values.
///
/// Items are ephemeral: they are recomputed fresh on every write and
/// discarded immediately after every read. No entity-shaped object is ever
/// persisted as-is; only its item projection is.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Item(BTreeMap<String, Value>);

impl Item {
    /// Creates an empty item.
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Creates a single-attribute item, typically used as a primary key.
    pub fn key(field: impl Into<String>, value: Value) -> Self {
        let mut item = Self::new();
        item.insert(field, value);
        item
    }

    /// Returns true if the item has no attributes.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of attributes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Inserts an attribute, replacing any existing value for the key.
    pub fn insert(&mut self, field: impl Into<String>, value: Value) {
        self.0.insert(field.into(), value);
    }

    /// Looks up an attribute by name.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Returns true if the item carries the given key (even if null-tagged).
    pub fn contains_key(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Removes an attribute, returning its previous value.
    pub fn remove(&mut self, field: &str) -> Option<Value> {
        self.0.remove(field)
    }

    /// Reports the presence of a field, distinguishing absent from null.
    pub fn presence(&self, field: &str) -> Presence<&Value> {
        match self.0.get(field) {
            None => Presence::Absent,
            Some(Value::Null) => Presence::Null,
            Some(v) => Presence::Present(v),
        }
    }

    /// Iterates over attributes in key order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, Value> {
        self.0.iter()
    }

    /// Rough serialized size of this item in bytes.
    pub fn estimated_size(&self) -> usize {
        self.0
            .iter()
            .map(|(k, v)| k.len() + v.estimated_size())
            .sum()
    }
}

impl FromIterator<(String, Value)> for Item {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Item {
    type Item = (String, Value);
    type IntoIter = btree_map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
