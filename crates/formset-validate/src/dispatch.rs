//! # Dispatcher
//!
//! Evaluates field values against a borrowed [`FormSet`].
//!
//! ## Per-Field Algorithm
//!
//! 1. `satisfies_required`: `true` if the field is optional, otherwise the
//!    value must be filled according to the field kind (text: non-blank,
//!    select: one of the options).
//! 2. Select fields: a non-empty value outside the option list sets
//!    `option_mismatch`, whether or not the field is required.
//! 3. Text fields: every named validator runs, in declared order, with no
//!    short-circuit, so one run reports every violated rule. Validators run
//!    on empty values too; required-ness and format are independent.
//!
//! A validator name with no registration aborts the run with
//! [`DispatchError::UnregisteredValidator`]. It is never read as a pass.
//!
//! Dispatch performs no I/O and holds no mutable state. `&Dispatcher` is
//! `Sync`, so one instance may serve concurrent runs.

use std::collections::BTreeMap;

use formset_core::FormName;
use formset_schema::{Field, Form, FormSet};

use crate::config::{DispatchConfig, UnknownValuePolicy};
use crate::error::DispatchError;
use crate::outcome::{FieldResult, FormResult, Outcome, ValidatorFailure};
use crate::registry::ValidatorRegistry;
use crate::snapshot::{FieldUpdate, ValueSnapshot};

/// Validates values for the forms of one [`FormSet`].
#[derive(Debug, Clone)]
pub struct Dispatcher<'a> {
    forms: &'a FormSet,
    registry: ValidatorRegistry,
    config: DispatchConfig,
}

impl<'a> Dispatcher<'a> {
    /// Dispatcher with the default configuration.
    pub fn new(forms: &'a FormSet, registry: ValidatorRegistry) -> Self {
        Self::with_config(forms, registry, DispatchConfig::default())
    }

    /// Dispatcher with an explicit configuration.
    pub fn with_config(forms: &'a FormSet, registry: ValidatorRegistry, config: DispatchConfig) -> Self {
        Self {
            forms,
            registry,
            config,
        }
    }

    /// The form set being validated.
    pub fn forms(&self) -> &'a FormSet {
        self.forms
    }

    /// The registry validator names are resolved against.
    pub fn registry(&self) -> &ValidatorRegistry {
        &self.registry
    }

    /// The active configuration.
    pub fn config(&self) -> &DispatchConfig {
        &self.config
    }

    /// Resolve every validator name the form set references.
    ///
    /// Optional. Without it, an unregistered name surfaces on the first run
    /// that reaches the field.
    pub fn preflight(&self) -> Result<(), DispatchError> {
        self.registry.check_coverage(self.forms)
    }

    /// Validate every field of `form` against `values`.
    ///
    /// Fields missing from `values` are validated as `""`. Entries naming no
    /// field of the form are handled per [`DispatchConfig::unknown_values`].
    ///
    /// # Errors
    ///
    /// Configuration faults only: unknown form, unknown field (under
    /// [`UnknownValuePolicy::Reject`]), or an unregistered validator.
    pub fn validate_form(&self, form: &str, values: &ValueSnapshot) -> Result<FormResult, DispatchError> {
        let form = self.lookup_form(form)?;
        self.run_form(form, values)
    }

    /// Validate a single field with `value`.
    pub fn validate_field(&self, form: &str, field: &str, value: &str) -> Result<FieldResult, DispatchError> {
        let form = self.lookup_form(form)?;
        let field = lookup_field(form, field)?;
        self.run_field(form, field, value)
    }

    /// Validate the field an update touches, then record the update.
    ///
    /// Only the touched field is re-validated. The snapshot is left
    /// unchanged if the update fails with a configuration fault. An update
    /// for an undeclared field is always [`DispatchError::UnknownField`],
    /// whatever the policy: there is no field to report a result for.
    pub fn apply_update(
        &self,
        form: &str,
        values: &mut ValueSnapshot,
        update: FieldUpdate,
    ) -> Result<FieldResult, DispatchError> {
        let form = self.lookup_form(form)?;
        let field = lookup_field(form, &update.field)?;
        let result = self.run_field(form, field, &update.value)?;
        values.apply(update);
        Ok(result)
    }

    /// Validate every form of the set, in declared order.
    ///
    /// A form with no snapshot in `values` is validated with every value
    /// empty. Under [`UnknownValuePolicy::Reject`], a snapshot keyed by a
    /// form that is not in the set fails with [`DispatchError::UnknownForm`].
    pub fn validate_all(
        &self,
        values: &BTreeMap<FormName, ValueSnapshot>,
    ) -> Result<Vec<FormResult>, DispatchError> {
        if self.config.unknown_values == UnknownValuePolicy::Reject {
            if let Some(name) = values.keys().find(|name| self.forms.form(name.as_str()).is_none()) {
                return Err(DispatchError::UnknownForm {
                    form: name.to_string(),
                });
            }
        }

        let empty = ValueSnapshot::new();
        self.forms
            .forms()
            .iter()
            .map(|form| self.run_form(form, values.get(form.name()).unwrap_or(&empty)))
            .collect()
    }

    fn lookup_form(&self, name: &str) -> Result<&'a Form, DispatchError> {
        self.forms.form(name).ok_or_else(|| DispatchError::UnknownForm {
            form: name.to_string(),
        })
    }

    fn run_form(&self, form: &Form, values: &ValueSnapshot) -> Result<FormResult, DispatchError> {
        for key in values.keys() {
            if form.field(key).is_some() {
                continue;
            }
            match self.config.unknown_values {
                UnknownValuePolicy::Ignore => {
                    tracing::debug!(form = %form.name(), field = key, "ignoring value for undeclared field");
                }
                UnknownValuePolicy::Reject => {
                    return Err(DispatchError::UnknownField {
                        form: form.name().clone(),
                        field: key.to_string(),
                    });
                }
            }
        }

        let fields = form
            .fields()
            .iter()
            .map(|field| self.run_field(form, field, values.get(field.name().as_str())))
            .collect::<Result<Vec<_>, _>>()?;

        let result = FormResult {
            form: form.name().clone(),
            fields,
        };
        tracing::debug!(
            form = %result.form,
            valid = result.is_valid(),
            invalid_fields = result.invalid_fields().len(),
            "form validated"
        );
        Ok(result)
    }

    fn run_field(&self, form: &Form, field: &Field, value: &str) -> Result<FieldResult, DispatchError> {
        let satisfies_required = !field.is_required() || field.is_filled(value);
        let option_mismatch = match field {
            Field::Text(_) => false,
            Field::Select(select) => !value.is_empty() && !select.has_option(value),
        };

        let mut failures = Vec::new();
        for name in field.validations() {
            let validator = self
                .registry
                .resolve(form.name(), field, name)
                .inspect_err(|e| tracing::warn!(error = %e, "dispatch aborted"))?;
            if let Outcome::Fail(reason) = validator.check(value, field) {
                failures.push(ValidatorFailure {
                    validator: name.clone(),
                    reason,
                });
            }
        }

        tracing::trace!(
            form = %form.name(),
            field = %field.name(),
            satisfies_required,
            option_mismatch,
            failures = failures.len(),
            "field validated"
        );
        Ok(FieldResult {
            field: field.name().clone(),
            satisfies_required,
            option_mismatch,
            failures,
        })
    }
}

fn lookup_field<'f>(form: &'f Form, name: &str) -> Result<&'f Field, DispatchError> {
    form.field(name).ok_or_else(|| DispatchError::UnknownField {
        form: form.name().clone(),
        field: name.to_string(),
    })
}
