//! # Field Kinds
//!
//! The closed set of field kinds a schema may use. The wire format carries
//! the kind as an open string tag (`"text"`, `"select"`); here it is an
//! enum so that every `match` on a kind is exhaustive. Adding a kind is a
//! deliberate schema change: the compiler then points at every place that
//! must define the new kind's required-ness and validation semantics.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The kind of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Free-text input, checked by named validators.
    Text,
    /// Choice among a fixed, ordered list of options.
    Select,
}

impl FieldKind {
    /// Returns all field kinds in canonical order.
    pub fn all_kinds() -> &'static [FieldKind] {
        &[Self::Text, Self::Select]
    }

    /// Returns the wire-format tag for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Select => "select",
        }
    }

    /// Keys a field of this kind may carry besides `type`, `name` and
    /// `required`.
    pub fn specific_keys(&self) -> &'static [&'static str] {
        match self {
            Self::Text => &["validations"],
            Self::Select => &["options"],
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a type tag names no known field kind.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown field kind: {0:?}")]
pub struct UnknownKind(pub String);

impl FromStr for FieldKind {
    type Err = UnknownKind;

    /// Parse a field kind from its wire-format tag. Case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "select" => Ok(Self::Select),
            other => Err(UnknownKind(other.to_string())),
        }
    }
}
