//! # Dispatch Errors
//!
//! Configuration faults detected while setting up or running a dispatch.
//! A user's input being invalid is never one of these; that is reported in
//! [`FieldResult`](crate::FieldResult).

use formset_core::{FieldName, FormName, ValidatorName};
use thiserror::Error;

/// A configuration fault that aborts a dispatch run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// The requested form is not part of the schema.
    #[error("unknown form '{form}'")]
    UnknownForm {
        /// The requested name, verbatim. Kept as a string: a name the
        /// schema does not declare may not be a valid `FormName` either
        /// (empty, or with surrounding whitespace).
        form: String,
    },

    /// A field name was supplied that the form does not declare.
    #[error("form '{form}' has no field '{field}'")]
    UnknownField {
        /// The form being validated.
        form: FormName,
        /// The unrecognized field name, verbatim. A string for the same
        /// reason as `UnknownForm::form`.
        field: String,
    },

    /// A field references a validator name that nothing registered.
    #[error("validator '{validator}' used by field '{field}' in form '{form}' is not registered")]
    UnregisteredValidator {
        /// Form containing the field.
        form: FormName,
        /// Field that references the validator.
        field: FieldName,
        /// The unresolved validator name.
        validator: ValidatorName,
    },
}
