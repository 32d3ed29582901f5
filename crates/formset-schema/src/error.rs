//! # Schema Errors
//!
//! Every variant is a configuration fault: the form definition itself is
//! broken. None of them describe invalid user input. Each carries the names
//! needed to locate the fault in the source document.

use std::path::PathBuf;

use formset_core::{CanonicalizationError, IdentifierError};
use thiserror::Error;

/// Error raised while loading or constructing a [`FormSet`](crate::FormSet).
#[derive(Error, Debug)]
pub enum SchemaError {
    /// Two forms in one set share a name.
    #[error("duplicate form name '{form}'")]
    DuplicateFormName {
        /// The repeated form name.
        form: String,
    },

    /// Two fields in one form share a name.
    #[error("duplicate field name '{field}' in form '{form}'")]
    DuplicateFieldName {
        /// Form containing the duplicate.
        form: String,
        /// The repeated field name.
        field: String,
    },

    /// A select field declares no options.
    #[error("select field '{field}' in form '{form}' has an empty option list")]
    EmptyOptionList {
        /// Form containing the field.
        form: String,
        /// The select field.
        field: String,
    },

    /// A field's `type` tag names no known field kind.
    #[error("field '{field}' in form '{form}' has unknown type '{kind}'")]
    UnknownFieldKind {
        /// Form containing the field.
        form: String,
        /// The offending field.
        field: String,
        /// The unrecognized type tag.
        kind: String,
    },

    /// A select field lists an empty or whitespace-only option.
    #[error("select field '{field}' in form '{form}' has a blank option")]
    BlankOption {
        /// Form containing the field.
        form: String,
        /// The select field.
        field: String,
    },

    /// A select field lists the same option twice.
    #[error("select field '{field}' in form '{form}' repeats option '{option}'")]
    DuplicateOption {
        /// Form containing the field.
        form: String,
        /// The select field.
        field: String,
        /// The repeated option.
        option: String,
    },

    /// A text field lists the same validator name twice.
    #[error("text field '{field}' in form '{form}' repeats validation '{validator}'")]
    DuplicateValidation {
        /// Form containing the field.
        form: String,
        /// The text field.
        field: String,
        /// The repeated validator name.
        validator: String,
    },

    /// A field carries a key that does not belong to its kind.
    #[error("field '{field}' in form '{form}' of type '{kind}' does not accept key '{key}'")]
    UnexpectedKey {
        /// Form containing the field.
        form: String,
        /// The offending field.
        field: String,
        /// The field's type tag.
        kind: String,
        /// The key that is not allowed.
        key: String,
    },

    /// A form, field, or validator name is not a valid identifier.
    #[error("invalid identifier at {location}: {source}")]
    InvalidIdentifier {
        /// Where in the document the identifier appeared.
        location: String,
        /// Why the identifier was rejected.
        #[source]
        source: IdentifierError,
    },

    /// The document does not have the expected shape.
    #[error("malformed form schema: {reason}")]
    Malformed {
        /// Parser message describing the structural problem.
        reason: String,
    },

    /// `load_path` was given a file whose format cannot be determined.
    #[error("unsupported schema format for '{path}': expected .json, .yaml or .yml")]
    UnsupportedFormat {
        /// The file path.
        path: PathBuf,
    },

    /// The schema file could not be read.
    #[error("cannot read schema file '{path}': {source}")]
    Io {
        /// The file path.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The schema could not be written out in the requested format.
    #[error("schema serialization failed: {0}")]
    Serialization(String),

    /// Canonicalization for the schema digest failed.
    #[error("schema digest failed: {0}")]
    Digest(#[from] CanonicalizationError),
}

impl SchemaError {
    pub(crate) fn malformed(err: impl std::fmt::Display) -> Self {
        Self::Malformed {
            reason: err.to_string(),
        }
    }
}
