//! # Value Snapshots
//!
//! The rendering layer owns the widgets; the dispatcher only ever sees the
//! current string value of each field. A [`ValueSnapshot`] holds those
//! values for one form, and a [`FieldUpdate`] is a single change to one of
//! them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Current values of one form's fields, keyed by field name.
///
/// A field with no entry has the empty string as its value. Serializes as a
/// plain JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValueSnapshot {
    values: BTreeMap<String, String>,
}

impl ValueSnapshot {
    /// An empty snapshot: every field reads as `""`.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current value of `field`, or `""` if none was recorded.
    pub fn get(&self, field: &str) -> &str {
        self.values.get(field).map(String::as_str).unwrap_or("")
    }

    /// Record `value` for `field`, returning the previous value if any.
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.values.insert(field.into(), value.into())
    }

    /// Record an update from the rendering layer.
    pub fn apply(&mut self, update: FieldUpdate) -> Option<String> {
        self.values.insert(update.field, update.value)
    }

    /// Recorded field names, sorted.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Number of recorded values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for ValueSnapshot
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// One field-value change reported by the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldUpdate {
    /// Name of the field that changed.
    pub field: String,
    /// Its new value.
    pub value: String,
}

impl FieldUpdate {
    /// An update setting `field` to `value`.
    pub fn new(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
        }
    }
}
