//! # Error Types
//!
//! Errors raised by the foundational types. Crates further up the DAG wrap
//! these in their own `thiserror` enums with form/field context attached.

use thiserror::Error;

/// An identifier (form, field, or validator name) failed validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdentifierError {
    /// The identifier is empty or consists only of whitespace.
    #[error("{kind} must not be empty")]
    Empty {
        /// Which identifier namespace was being constructed.
        kind: &'static str,
    },

    /// The identifier has leading or trailing whitespace.
    #[error("{kind} {value:?} has leading or trailing whitespace")]
    SurroundingWhitespace {
        /// Which identifier namespace was being constructed.
        kind: &'static str,
        /// The rejected value.
        value: String,
    },
}

/// Error during canonical serialization.
#[derive(Error, Debug)]
pub enum CanonicalizationError {
    /// Float values are not permitted in canonical representations.
    #[error("float values are not permitted in canonical representations: {0}")]
    FloatRejected(f64),

    /// JSON serialization failed.
    #[error("serialization failed: {0}")]
    SerializationFailed(#[from] serde_json::Error),
}
