//! # formset-schema — Form Schema Model
//!
//! Typed, immutable representation of a set of named forms, each made of
//! typed fields with required-ness and named validation rules.
//!
//! ## Loading (`load`)
//!
//! The [`load`] module parses the wire format (a mapping with a top-level
//! `forms` key) from JSON, YAML, a `serde_json::Value`, or a file, and
//! checks every invariant before a [`FormSet`] is returned:
//!
//! - form names unique within the set;
//! - field names unique within a form;
//! - select fields have at least one option, none blank, with no repeats;
//! - text fields list each validator name at most once;
//! - every field `type` is a known [`FieldKind`];
//! - no field carries a key that does not belong to its kind.
//!
//! Construction is all-or-nothing: on any violation a [`SchemaError`] is
//! returned and no partial set exists.
//!
//! ## Serialization (`raw`)
//!
//! [`FormSet::to_raw`] produces the wire format again. Loading the output
//! of a serialized set yields a set equal to the original; field order and
//! option order are preserved because they carry rendering priority.
//!
//! ## Crate Policy
//!
//! - Depends only on `formset-core` internally.
//! - Validator names are not resolved here. Binding a name to a predicate
//!   happens at dispatch time in `formset-validate`.

pub mod error;
pub mod kind;
pub mod load;
pub mod model;
pub mod raw;

pub use error::SchemaError;
pub use kind::FieldKind;
pub use load::{load, load_json, load_path, load_yaml, SchemaFormat};
pub use model::{Field, Form, FormSet, SelectField, TextField};
pub use raw::{RawField, RawForm, RawFormSet};
