//! # Wire Format
//!
//! The on-disk / over-the-wire shape of a form schema:
//!
//! ```yaml
//! forms:
//!   - name: personal-information
//!     fields:
//!       - type: text
//!         name: last-name
//!         validations: [is-blank]
//!         required: true
//!       - type: select
//!         name: gender
//!         options: [male, female]
//!         required: true
//! ```
//!
//! `Raw*` types mirror the document one-to-one and accept anything with the
//! right structural shape. Semantic checks (known kinds, keys allowed per
//! kind, identifier validity, uniqueness) happen in the conversion to
//! [`FormSet`]. Field keys the parser does not recognize are captured in
//! [`RawField::extra`] rather than dropped, so they can be rejected with
//! the field's name attached.

use std::collections::BTreeMap;

use formset_core::{FieldName, FormName, IdentifierError, ValidatorName};
use serde::{Deserialize, Serialize};

use crate::error::SchemaError;
use crate::kind::FieldKind;
use crate::model::{Field, Form, FormSet, SelectField, TextField};

/// Top-level schema document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawFormSet {
    /// Forms in declared order.
    pub forms: Vec<RawForm>,
}

/// One form in the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawForm {
    /// Form name.
    pub name: String,
    /// Fields in declared order.
    pub fields: Vec<RawField>,
}

/// One field in the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawField {
    /// The `type` tag (`"text"`, `"select"`).
    #[serde(rename = "type")]
    pub kind: String,
    /// Field name.
    pub name: String,
    /// Validator names, for text fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validations: Option<Vec<String>>,
    /// Option list, for select fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    /// Whether a value must be supplied. Defaults to `false`.
    #[serde(default)]
    pub required: bool,
    /// Keys not recognized by the parser.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

fn identifier<T>(
    location: impl FnOnce() -> String,
    result: Result<T, IdentifierError>,
) -> Result<T, SchemaError> {
    result.map_err(|source| SchemaError::InvalidIdentifier {
        location: location(),
        source,
    })
}

impl RawField {
    fn into_field(self, form: &str) -> Result<Field, SchemaError> {
        let kind: FieldKind = self.kind.parse().map_err(|_| SchemaError::UnknownFieldKind {
            form: form.to_string(),
            field: self.name.clone(),
            kind: self.kind.clone(),
        })?;

        let unexpected = |key: &str| SchemaError::UnexpectedKey {
            form: form.to_string(),
            field: self.name.clone(),
            kind: kind.as_str().to_string(),
            key: key.to_string(),
        };
        if let Some(key) = self.extra.keys().next() {
            return Err(unexpected(key));
        }
        match kind {
            FieldKind::Text if self.options.is_some() => return Err(unexpected("options")),
            FieldKind::Select if self.validations.is_some() => {
                return Err(unexpected("validations"))
            }
            _ => {}
        }

        let name = identifier(
            || format!("form '{form}' field name"),
            FieldName::new(self.name.as_str()),
        )?;

        let field = match kind {
            FieldKind::Text => {
                let validations = self
                    .validations
                    .unwrap_or_default()
                    .into_iter()
                    .map(|v| {
                        identifier(
                            || format!("form '{form}' field '{name}' validations"),
                            ValidatorName::new(v),
                        )
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                Field::Text(TextField::new(name, validations, self.required))
            }
            FieldKind::Select => Field::Select(SelectField::new(
                name,
                self.options.unwrap_or_default(),
                self.required,
            )),
        };
        Ok(field)
    }
}

impl TryFrom<RawFormSet> for FormSet {
    type Error = SchemaError;

    fn try_from(raw: RawFormSet) -> Result<Self, Self::Error> {
        let mut forms = Vec::with_capacity(raw.forms.len());
        for (index, raw_form) in raw.forms.into_iter().enumerate() {
            let name = identifier(
                || format!("forms[{index}] name"),
                FormName::new(raw_form.name),
            )?;
            let fields = raw_form
                .fields
                .into_iter()
                .map(|f| f.into_field(name.as_str()))
                .collect::<Result<Vec<_>, _>>()?;
            forms.push(Form::new(name, fields));
        }
        FormSet::new(forms)
    }
}

impl From<&Field> for RawField {
    fn from(field: &Field) -> Self {
        let (validations, options) = match field {
            Field::Text(f) => (
                Some(f.validations().iter().map(|v| v.to_string()).collect()),
                None,
            ),
            Field::Select(f) => (None, Some(f.options().to_vec())),
        };
        Self {
            kind: field.kind().as_str().to_string(),
            name: field.name().to_string(),
            validations,
            options,
            required: field.is_required(),
            extra: BTreeMap::new(),
        }
    }
}

impl From<&FormSet> for RawFormSet {
    fn from(set: &FormSet) -> Self {
        Self {
            forms: set
                .forms()
                .iter()
                .map(|form| RawForm {
                    name: form.name().to_string(),
                    fields: form.fields().iter().map(RawField::from).collect(),
                })
                .collect(),
        }
    }
}

impl From<FormSet> for RawFormSet {
    fn from(set: FormSet) -> Self {
        Self::from(&set)
    }
}
