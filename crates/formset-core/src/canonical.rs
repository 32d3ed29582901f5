//! # Canonical Serialization
//!
//! `CanonicalBytes` is the only input accepted by the digest functions. Its
//! constructor serializes a value to JSON and re-emits it in RFC 8785 (JCS)
//! form: sorted object keys, compact separators, deterministic bytes.
//!
//! Array order is preserved. For form schemas this matters: field order and
//! option order are part of the schema's meaning, so two schemas that differ
//! only in field order produce different bytes.
//!
//! Floats are rejected. Schema documents contain only strings, booleans and
//! arrays, and JCS number formatting is the one place where canonical output
//! can diverge between implementations.

use serde::Serialize;
use serde_json::Value;

use crate::error::CanonicalizationError;

/// Bytes produced exclusively by JCS canonicalization.
///
/// The inner `Vec<u8>` is private; the only constructor is
/// [`CanonicalBytes::new()`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalBytes(Vec<u8>);

impl CanonicalBytes {
    /// Construct canonical bytes from any serializable value.
    ///
    /// # Errors
    ///
    /// Returns `CanonicalizationError::FloatRejected` if the value contains a
    /// non-integer number, or `CanonicalizationError::SerializationFailed`
    /// if serialization fails.
    pub fn new(obj: &impl Serialize) -> Result<Self, CanonicalizationError> {
        let value = serde_json::to_value(obj)?;
        reject_floats(&value)?;
        let s = serde_jcs::to_string(&value)?;
        Ok(Self(s.into_bytes()))
    }

    /// Access the canonical bytes for digest computation.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Returns the length of the canonical byte sequence.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the canonical byte sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<[u8]> for CanonicalBytes {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

fn reject_floats(value: &Value) -> Result<(), CanonicalizationError> {
    match value {
        Value::Null | Value::Bool(_) | Value::String(_) => Ok(()),
        Value::Number(n) => {
            if n.is_f64() {
                if let Some(f) = n.as_f64() {
                    return Err(CanonicalizationError::FloatRejected(f));
                }
            }
            Ok(())
        }
        Value::Array(items) => items.iter().try_for_each(reject_floats),
        Value::Object(map) => map.values().try_for_each(reject_floats),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn as_str(cb: &CanonicalBytes) -> &str {
        std::str::from_utf8(cb.as_bytes()).unwrap()
    }

    #[test]
    fn test_keys_sorted_compact() {
        let data = serde_json::json!({"type": "text", "name": "email", "required": false});
        let cb = CanonicalBytes::new(&data).unwrap();
        assert_eq!(as_str(&cb), r#"{"name":"email","required":false,"type":"text"}"#);
    }

    #[test]
    fn test_array_order_preserved() {
        let data = serde_json::json!({"options": ["male", "female"]});
        let cb = CanonicalBytes::new(&data).unwrap();
        assert_eq!(as_str(&cb), r#"{"options":["male","female"]}"#);
    }

    #[test]
    fn test_nested_objects_sorted() {
        let data = serde_json::json!({"forms": [{"name": "a", "fields": []}]});
        let cb = CanonicalBytes::new(&data).unwrap();
        assert_eq!(as_str(&cb), r#"{"forms":[{"fields":[],"name":"a"}]}"#);
    }

    #[test]
    fn test_float_rejected() {
        let data = serde_json::json!({"fields": [{"weight": 0.5}]});
        match CanonicalBytes::new(&data) {
            Err(CanonicalizationError::FloatRejected(f)) => assert_eq!(f, 0.5),
            other => panic!("Expected FloatRejected, got: {other:?}"),
        }
    }

    #[test]
    fn test_integer_accepted() {
        let cb = CanonicalBytes::new(&serde_json::json!({"n": 42})).unwrap();
        assert_eq!(as_str(&cb), r#"{"n":42}"#);
    }

    #[test]
    fn test_unicode_passthrough() {
        let cb = CanonicalBytes::new(&serde_json::json!({"label": "\u{00e9}"})).unwrap();
        assert!(as_str(&cb).contains('\u{00e9}'));
        assert!(!cb.is_empty());
        assert_eq!(cb.len(), cb.as_ref().len());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn json_value_no_floats() -> impl Strategy<Value = Value> {
        let leaf = prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            any::<i64>().prop_map(|n| serde_json::json!(n)),
            "[a-zA-Z0-9_ -]{0,24}".prop_map(Value::String),
        ];
        leaf.prop_recursive(4, 48, 6, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
                prop::collection::btree_map("[a-z]{1,8}", inner, 0..6)
                    .prop_map(|m| Value::Object(m.into_iter().collect())),
            ]
        })
    }

    proptest! {
        #[test]
        fn canonical_bytes_deterministic(value in json_value_no_floats()) {
            let a = CanonicalBytes::new(&value).unwrap();
            let b = CanonicalBytes::new(&value).unwrap();
            prop_assert_eq!(a.as_bytes(), b.as_bytes());
        }

        #[test]
        fn canonical_bytes_parse_back_to_same_value(value in json_value_no_floats()) {
            let cb = CanonicalBytes::new(&value).unwrap();
            let parsed: Value = serde_json::from_slice(cb.as_bytes()).unwrap();
            prop_assert_eq!(parsed, value);
        }
    }
}
