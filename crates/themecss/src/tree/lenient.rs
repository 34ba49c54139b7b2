//! Forgiving field deserializers.
//!
//! Style trees are assembled from theme files and user edits, so a branch of
//! the wrong shape is common. These helpers replace such a branch with its
//! default instead of rejecting the document.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserializes a field, falling back to `T::default()` when the value has the
/// wrong shape.
pub(crate) fn value<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let raw = Value::deserialize(deserializer)?;
    Ok(convert(raw))
}

/// Deserializes an optional list, dropping items of the wrong shape.
///
/// A value that is not a list at all yields `None`.
pub(crate) fn list<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let items = match Value::deserialize(deserializer)? {
        Value::Array(items) => items,
        Value::Null => return Ok(None),
        other => {
            tracing::warn!(found = %kind(&other), "expected a list, ignoring");
            return Ok(None);
        }
    };

    let parsed = items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match T::deserialize(item) {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::warn!(index, error = %err, "dropping malformed list item");
                None
            }
        })
        .collect();
    Ok(Some(parsed))
}

pub(crate) fn convert<T: DeserializeOwned + Default>(raw: Value) -> T {
    if raw.is_null() {
        return T::default();
    }
    let found = kind(&raw);
    T::deserialize(raw).unwrap_or_else(|err| {
        tracing::warn!(found = %found, error = %err, "ignoring malformed branch");
        T::default()
    })
}

/// Describes a value's shape for diagnostics ("a list", "a mapping", ...).
pub(crate) fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "a mapping",
    }
}
