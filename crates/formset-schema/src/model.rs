//! # Schema Model
//!
//! Typed, immutable forms and fields. All fields are private; a [`FormSet`]
//! can only be obtained through [`FormSet::new`] or the [`load`](crate::load)
//! functions, both of which check every invariant first. Once built, a set
//! is read-only and may be shared across threads without synchronization.

use std::collections::{BTreeSet, HashSet};

use formset_core::{CanonicalBytes, FieldName, FormName, SchemaDigest, ValidatorName};
use serde::{Deserialize, Serialize};

use crate::error::SchemaError;
use crate::kind::FieldKind;
use crate::raw::RawFormSet;

// ─── Fields ──────────────────────────────────────────────────────────

/// A free-text field.
///
/// An empty `validations` list means the field is format-unchecked; only
/// its required-ness applies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextField {
    name: FieldName,
    validations: Vec<ValidatorName>,
    required: bool,
}

impl TextField {
    /// Build a text field. Validator names are kept in declared order;
    /// repeats are rejected when the field is placed in a [`FormSet`].
    pub fn new(name: FieldName, validations: Vec<ValidatorName>, required: bool) -> Self {
        Self {
            name,
            validations,
            required,
        }
    }

    /// The field name.
    pub fn name(&self) -> &FieldName {
        &self.name
    }

    /// Validator names in declared order.
    pub fn validations(&self) -> &[ValidatorName] {
        &self.validations
    }

    /// Whether a value must be supplied.
    pub fn is_required(&self) -> bool {
        self.required
    }
}

/// A field whose value must be one of a fixed list of options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectField {
    name: FieldName,
    options: Vec<String>,
    required: bool,
}

impl SelectField {
    /// Build a select field. Options are kept in declared order; an empty
    /// list or a repeated option is rejected when the field is placed in a
    /// [`FormSet`].
    pub fn new(name: FieldName, options: Vec<String>, required: bool) -> Self {
        Self {
            name,
            options,
            required,
        }
    }

    /// The field name.
    pub fn name(&self) -> &FieldName {
        &self.name
    }

    /// Options in declared order.
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Whether a value must be supplied.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Whether `value` is one of the declared options.
    pub fn has_option(&self, value: &str) -> bool {
        self.options.iter().any(|o| o == value)
    }
}

/// One typed input slot within a form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field {
    /// Free-text input.
    Text(TextField),
    /// Choice among fixed options.
    Select(SelectField),
}

impl Field {
    /// The field name.
    pub fn name(&self) -> &FieldName {
        match self {
            Self::Text(f) => f.name(),
            Self::Select(f) => f.name(),
        }
    }

    /// The field kind.
    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Text(_) => FieldKind::Text,
            Self::Select(_) => FieldKind::Select,
        }
    }

    /// Whether a value must be supplied.
    pub fn is_required(&self) -> bool {
        match self {
            Self::Text(f) => f.is_required(),
            Self::Select(f) => f.is_required(),
        }
    }

    /// Named validators that apply to this field. Always empty for select
    /// fields: their values are checked against `options` only.
    pub fn validations(&self) -> &[ValidatorName] {
        match self {
            Self::Text(f) => f.validations(),
            Self::Select(_) => &[],
        }
    }

    /// The option list, for kinds that have one.
    pub fn options(&self) -> Option<&[String]> {
        match self {
            Self::Text(_) => None,
            Self::Select(f) => Some(f.options()),
        }
    }

    /// The kind's emptiness rule: does `value` count as a supplied value?
    ///
    /// - text: non-empty after trimming whitespace;
    /// - select: exactly one of the declared options.
    pub fn is_filled(&self, value: &str) -> bool {
        match self {
            Self::Text(_) => !value.trim().is_empty(),
            Self::Select(f) => f.has_option(value),
        }
    }
}

impl From<TextField> for Field {
    fn from(f: TextField) -> Self {
        Self::Text(f)
    }
}

impl From<SelectField> for Field {
    fn from(f: SelectField) -> Self {
        Self::Select(f)
    }
}

// ─── Forms ───────────────────────────────────────────────────────────

/// A named, ordered collection of fields.
///
/// Field order is rendering priority and is preserved from the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Form {
    name: FormName,
    fields: Vec<Field>,
}

impl Form {
    /// Build a form. Field-name uniqueness is checked when the form is
    /// placed in a [`FormSet`].
    pub fn new(name: FormName, fields: Vec<Field>) -> Self {
        Self { name, fields }
    }

    /// The form name.
    pub fn name(&self) -> &FormName {
        &self.name
    }

    /// Fields in declared order.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Look up a field by name.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name().as_str() == name)
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the form has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    fn check(&self) -> Result<(), SchemaError> {
        let form = self.name.as_str();
        let mut seen = HashSet::new();
        for field in &self.fields {
            if !seen.insert(field.name().as_str()) {
                return Err(SchemaError::DuplicateFieldName {
                    form: form.to_string(),
                    field: field.name().to_string(),
                });
            }
            match field {
                Field::Text(text) => {
                    let mut validators = HashSet::new();
                    for v in text.validations() {
                        if !validators.insert(v.as_str()) {
                            return Err(SchemaError::DuplicateValidation {
                                form: form.to_string(),
                                field: text.name().to_string(),
                                validator: v.to_string(),
                            });
                        }
                    }
                }
                Field::Select(select) => {
                    if select.options().is_empty() {
                        return Err(SchemaError::EmptyOptionList {
                            form: form.to_string(),
                            field: select.name().to_string(),
                        });
                    }
                    let mut options = HashSet::new();
                    for option in select.options() {
                        if option.trim().is_empty() {
                            return Err(SchemaError::BlankOption {
                                form: form.to_string(),
                                field: select.name().to_string(),
                            });
                        }
                        if !options.insert(option.as_str()) {
                            return Err(SchemaError::DuplicateOption {
                                form: form.to_string(),
                                field: select.name().to_string(),
                                option: option.clone(),
                            });
                        }
                    }
                }
            }
        }
        Ok(())
    }
}

// ─── Form Sets ───────────────────────────────────────────────────────

/// The whole schema: an ordered sequence of uniquely named forms.
///
/// Serializes to, and deserializes from, the wire format. Deserialization
/// runs the same checks as [`FormSet::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawFormSet", into = "RawFormSet")]
pub struct FormSet {
    forms: Vec<Form>,
}

impl FormSet {
    /// Build a form set, checking every invariant.
    ///
    /// # Errors
    ///
    /// - `DuplicateFormName` if two forms share a name;
    /// - `DuplicateFieldName` if two fields of one form share a name;
    /// - `EmptyOptionList` / `BlankOption` / `DuplicateOption` for a bad
    ///   select field;
    /// - `DuplicateValidation` for a text field listing a validator twice.
    pub fn new(forms: Vec<Form>) -> Result<Self, SchemaError> {
        let mut seen = HashSet::new();
        for form in &forms {
            if !seen.insert(form.name().as_str()) {
                return Err(SchemaError::DuplicateFormName {
                    form: form.name().to_string(),
                });
            }
            form.check()?;
        }
        Ok(Self { forms })
    }

    /// Forms in declared order.
    pub fn forms(&self) -> &[Form] {
        &self.forms
    }

    /// Look up a form by name.
    pub fn form(&self, name: &str) -> Option<&Form> {
        self.forms.iter().find(|f| f.name().as_str() == name)
    }

    /// Look up a field of a form.
    pub fn field(&self, form: &str, field: &str) -> Option<&Field> {
        self.form(form).and_then(|f| f.field(field))
    }

    /// Number of forms.
    pub fn len(&self) -> usize {
        self.forms.len()
    }

    /// Whether the set has no forms.
    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }

    /// Every validator name referenced by any field, sorted and deduplicated.
    pub fn validator_names(&self) -> BTreeSet<&ValidatorName> {
        self.forms
            .iter()
            .flat_map(|form| form.fields())
            .flat_map(|field| field.validations())
            .collect()
    }

    /// Convert back to the wire format.
    pub fn to_raw(&self) -> RawFormSet {
        RawFormSet::from(self)
    }

    /// Serialize to a `serde_json::Value` in the wire format.
    pub fn to_value(&self) -> Result<serde_json::Value, SchemaError> {
        serde_json::to_value(self.to_raw()).map_err(|e| SchemaError::Serialization(e.to_string()))
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String, SchemaError> {
        serde_json::to_string_pretty(&self.to_raw())
            .map_err(|e| SchemaError::Serialization(e.to_string()))
    }

    /// Serialize to YAML.
    pub fn to_yaml_string(&self) -> Result<String, SchemaError> {
        serde_yaml::to_string(&self.to_raw()).map_err(|e| SchemaError::Serialization(e.to_string()))
    }

    /// SHA-256 over the canonical JSON of the wire format.
    ///
    /// Key order in the source document does not affect the digest; field
    /// and option order do.
    pub fn digest(&self) -> Result<SchemaDigest, SchemaError> {
        let canonical = CanonicalBytes::new(&self.to_raw())?;
        Ok(SchemaDigest::of(&canonical))
    }
}

impl<'a> IntoIterator for &'a FormSet {
    type Item = &'a Form;
    type IntoIter = std::slice::Iter<'a, Form>;

    fn into_iter(self) -> Self::IntoIter {
        self.forms.iter()
    }
}
