//! # Identifier Newtypes
//!
//! Newtype wrappers for the three name namespaces of a form schema. These
//! prevent accidental identifier confusion: a `ValidatorName` cannot be
//! passed where a `FieldName` is expected.
//!
//! All three share the same validation rule: non-empty, and no leading or
//! trailing whitespace. Beyond that the names are opaque keys; no case
//! folding or normalization is applied.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::IdentifierError;

fn check_identifier(kind: &'static str, value: &str) -> Result<(), IdentifierError> {
    if value.trim().is_empty() {
        return Err(IdentifierError::Empty { kind });
    }
    if value.trim() != value {
        return Err(IdentifierError::SurroundingWhitespace {
            kind,
            value: value.to_string(),
        });
    }
    Ok(())
}

macro_rules! identifier {
    ($(#[$meta:meta])* $name:ident, $kind:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Construct a validated identifier.
            ///
            /// # Errors
            ///
            /// Returns [`IdentifierError`] if the value is empty or has
            /// surrounding whitespace.
            pub fn new(value: impl Into<String>) -> Result<Self, IdentifierError> {
                let value = value.into();
                check_identifier($kind, &value)?;
                Ok(Self(value))
            }

            /// Access the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = IdentifierError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = IdentifierError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }
    };
}

identifier!(
    /// Name of a form, unique within a form set.
    FormName,
    "form name"
);

identifier!(
    /// Name of a field, unique within its form.
    FieldName,
    "field name"
);

identifier!(
    /// Key of a validation rule (e.g. `is-blank`), resolved against a
    /// validator registry at dispatch time.
    ValidatorName,
    "validator name"
);
