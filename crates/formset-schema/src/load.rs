//! # Schema Loading
//!
//! Entry points that turn a schema document into a checked [`FormSet`].
//! Every path parses into the wire format first ([`RawFormSet`]) and then
//! converts, so JSON, YAML and in-memory values are held to the same rules.
//!
//! Loading has no side effects beyond reading the named file, and is
//! deterministic: the same document always yields an equal set.

use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use crate::error::SchemaError;
use crate::model::FormSet;
use crate::raw::RawFormSet;

/// Source format of a schema document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaFormat {
    /// JSON text.
    Json,
    /// YAML text.
    Yaml,
}

impl SchemaFormat {
    /// Infer the format from a file extension (`.json`, `.yaml`, `.yml`).
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Some(Self::Json),
            Some("yaml") | Some("yml") => Some(Self::Yaml),
            _ => None,
        }
    }

    /// Parse text in this format.
    pub fn parse(self, text: &str) -> Result<FormSet, SchemaError> {
        match self {
            Self::Json => load_json(text),
            Self::Yaml => load_yaml(text),
        }
    }
}

/// Load a form set from a semi-structured value (mapping of mappings).
///
/// # Errors
///
/// Returns `SchemaError::Malformed` if the value does not have the wire
/// shape, or the matching invariant error (`DuplicateFormName`,
/// `DuplicateFieldName`, `EmptyOptionList`, `UnknownFieldKind`, ...) if a
/// check fails. No partial set is returned.
pub fn load(raw: &Value) -> Result<FormSet, SchemaError> {
    let raw = RawFormSet::deserialize(raw).map_err(SchemaError::malformed)?;
    finish(raw)
}

/// Load a form set from JSON text.
pub fn load_json(text: &str) -> Result<FormSet, SchemaError> {
    let raw: RawFormSet = serde_json::from_str(text).map_err(SchemaError::malformed)?;
    finish(raw)
}

/// Load a form set from YAML text.
pub fn load_yaml(text: &str) -> Result<FormSet, SchemaError> {
    let raw: RawFormSet = serde_yaml::from_str(text).map_err(SchemaError::malformed)?;
    finish(raw)
}

/// Load a form set from a `.json`, `.yaml` or `.yml` file.
///
/// # Errors
///
/// Returns `SchemaError::UnsupportedFormat` for any other extension and
/// `SchemaError::Io` if the file cannot be read, in addition to the parse
/// and invariant errors of [`load`].
pub fn load_path(path: impl AsRef<Path>) -> Result<FormSet, SchemaError> {
    let path = path.as_ref();
    let format = SchemaFormat::from_path(path).ok_or_else(|| SchemaError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;
    let text = std::fs::read_to_string(path).map_err(|source| SchemaError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    format.parse(&text)
}

fn finish(raw: RawFormSet) -> Result<FormSet, SchemaError> {
    let set = FormSet::try_from(raw)?;
    if tracing::enabled!(tracing::Level::DEBUG) {
        let digest = set.digest()?;
        tracing::debug!(
            forms = set.len(),
            fields = set.forms().iter().map(|f| f.len()).sum::<usize>(),
            digest = %digest,
            "form schema loaded"
        );
    }
    Ok(set)
}
