//! Insertion-ordered string-keyed maps.

use std::fmt;
use std::marker::PhantomData;

use indexmap::IndexMap;
use serde::de::{DeserializeOwned, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A string-keyed map that remembers document order.
///
/// Emission order of style and settings nodes follows the order blocks and
/// elements appear in the input.
///
/// Deserialization is forgiving: an entry whose value does not fit `V` is
/// dropped with a warning instead of failing the whole map.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Entries<V> {
    items: IndexMap<String, V>,
}

impl<V> Entries<V> {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self {
            items: IndexMap::new(),
        }
    }

    /// Inserts a value, replacing an existing entry in place.
    pub fn insert(&mut self, key: impl Into<String>, value: V) {
        self.items.insert(key.into(), value);
    }

    /// Adds an entry, returning the updated map for chaining.
    pub fn with(mut self, key: impl Into<String>, value: V) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.items.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.items.contains_key(key)
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.items.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.items.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<V> Default for Entries<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for Entries<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl<'de, V: DeserializeOwned> Deserialize<'de> for Entries<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(EntriesVisitor(PhantomData))
    }
}

struct EntriesVisitor<V>(PhantomData<V>);

impl<'de, V: DeserializeOwned> Visitor<'de> for EntriesVisitor<V> {
    type Value = Entries<V>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map with string keys")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut items = IndexMap::with_capacity(access.size_hint().unwrap_or(0));
        while let Some(key) = access.next_key::<String>()? {
            let raw: Value = access.next_value()?;
            match V::deserialize(raw) {
                Ok(value) => {
                    items.insert(key, value);
                }
                Err(err) => {
                    tracing::warn!(key = %key, error = %err, "dropping malformed entry");
                }
            }
        }
        Ok(Entries { items })
    }
}
