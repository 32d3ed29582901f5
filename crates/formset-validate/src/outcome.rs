//! # Validation Outcomes
//!
//! [`Outcome`] is what one validator returns for one value. [`FieldResult`]
//! and [`FormResult`] are what a dispatch run hands back to the rendering
//! layer; both serialize to JSON so they can cross a process boundary.
//!
//! Validity composes pessimistically: a form is valid only if every one of
//! its fields is valid, and a field is valid only if it satisfies its
//! required constraint, holds an allowed option (select fields), and no
//! validator failed.
//!
//! The JSON form carries the aggregate as well, so a consumer in another
//! language reads `valid` and `invalid_fields` instead of re-deriving them:
//!
//! ```json
//! {
//!   "form": "contact-information",
//!   "valid": false,
//!   "invalid_fields": ["email"],
//!   "fields": [
//!     {"field": "email", "valid": false, "satisfies_required": true,
//!      "option_mismatch": false,
//!      "failures": [{"validator": "isnt-valid-email", "reason": "..."}]}
//!   ]
//! }
//! ```
//!
//! Both aggregate keys are recomputed from the per-field data on input.

use std::collections::BTreeSet;
use std::fmt;

use formset_core::{FieldName, FormName, ValidatorName};
use serde::{Deserialize, Serialize};

/// Result of applying one validator to one value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "reason", rename_all = "snake_case")]
pub enum Outcome {
    /// The value satisfies the rule.
    Pass,
    /// The value violates the rule, with a human-readable reason.
    Fail(String),
}

impl Outcome {
    /// Shorthand for `Outcome::Fail(reason.into())`.
    pub fn fail(reason: impl Into<String>) -> Self {
        Self::Fail(reason.into())
    }

    /// Whether this outcome is a pass.
    pub fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pass => f.write_str("pass"),
            Self::Fail(reason) => write!(f, "fail: {reason}"),
        }
    }
}

/// One failed validator on one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorFailure {
    /// The validator that failed.
    pub validator: ValidatorName,
    /// The reason it gave.
    pub reason: String,
}

/// Validation result for a single field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "FieldResultJson", from = "FieldResultJson")]
pub struct FieldResult {
    /// The field this result belongs to.
    pub field: FieldName,
    /// `true` when the field is optional, or required and filled according
    /// to its kind's emptiness rule.
    pub satisfies_required: bool,
    /// `true` when a select field holds a non-empty value that is not one of
    /// its options. Always `false` for text fields.
    pub option_mismatch: bool,
    /// Failed validators, in the field's declared order.
    pub failures: Vec<ValidatorFailure>,
}

impl FieldResult {
    /// Whether the field passes every check.
    pub fn is_valid(&self) -> bool {
        self.satisfies_required && !self.option_mismatch && self.failures.is_empty()
    }

    /// Names of the validators that failed.
    pub fn failed_validators(&self) -> BTreeSet<&ValidatorName> {
        self.failures.iter().map(|f| &f.validator).collect()
    }
}

/// Aggregate validation result for a form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "FormResultJson", from = "FormResultJson")]
pub struct FormResult {
    /// The form this result belongs to.
    pub form: FormName,
    /// One result per field, in the form's declared field order.
    pub fields: Vec<FieldResult>,
}

impl FormResult {
    /// Whether every field of the form is valid.
    pub fn is_valid(&self) -> bool {
        self.fields.iter().all(FieldResult::is_valid)
    }

    /// Names of the invalid fields, in declared order.
    pub fn invalid_fields(&self) -> Vec<&FieldName> {
        self.fields
            .iter()
            .filter(|f| !f.is_valid())
            .map(|f| &f.field)
            .collect()
    }

    /// The result for one field.
    pub fn field(&self, name: &str) -> Option<&FieldResult> {
        self.fields.iter().find(|f| f.field.as_str() == name)
    }
}

#[derive(Serialize, Deserialize)]
struct FieldResultJson {
    field: FieldName,
    #[serde(skip_deserializing)]
    valid: bool,
    satisfies_required: bool,
    #[serde(default)]
    option_mismatch: bool,
    #[serde(default)]
    failures: Vec<ValidatorFailure>,
}

impl From<FieldResult> for FieldResultJson {
    fn from(r: FieldResult) -> Self {
        Self {
            valid: r.is_valid(),
            field: r.field,
            satisfies_required: r.satisfies_required,
            option_mismatch: r.option_mismatch,
            failures: r.failures,
        }
    }
}

impl From<FieldResultJson> for FieldResult {
    fn from(j: FieldResultJson) -> Self {
        Self {
            field: j.field,
            satisfies_required: j.satisfies_required,
            option_mismatch: j.option_mismatch,
            failures: j.failures,
        }
    }
}

#[derive(Serialize, Deserialize)]
struct FormResultJson {
    form: FormName,
    #[serde(skip_deserializing)]
    valid: bool,
    #[serde(skip_deserializing)]
    invalid_fields: Vec<FieldName>,
    fields: Vec<FieldResult>,
}

impl From<FormResult> for FormResultJson {
    fn from(r: FormResult) -> Self {
        Self {
            valid: r.is_valid(),
            invalid_fields: r.invalid_fields().into_iter().cloned().collect(),
            form: r.form,
            fields: r.fields,
        }
    }
}

impl From<FormResultJson> for FormResult {
    fn from(j: FormResultJson) -> Self {
        Self {
            form: j.form,
            fields: j.fields,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field_result(name: &str, satisfies_required: bool, failed: &[&str]) -> FieldResult {
        FieldResult {
            field: FieldName::new(name).unwrap(),
            satisfies_required,
            option_mismatch: false,
            failures: failed
                .iter()
                .map(|v| ValidatorFailure {
                    validator: ValidatorName::new(*v).unwrap(),
                    reason: format!("{v} failed"),
                })
                .collect(),
        }
    }

    #[test]
    fn test_field_validity_axes() {
        assert!(field_result("a", true, &[]).is_valid());
        assert!(!field_result("a", false, &[]).is_valid());
        assert!(!field_result("a", true, &["is-blank"]).is_valid());

        let mut mismatch = field_result("a", true, &[]);
        mismatch.option_mismatch = true;
        assert!(!mismatch.is_valid());
    }

    #[test]
    fn test_failed_validators_set() {
        let r = field_result("email", true, &["isnt-valid-email", "is-blank"]);
        let names: Vec<&str> = r.failed_validators().iter().map(|v| v.as_str()).collect();
        assert_eq!(names, ["is-blank", "isnt-valid-email"]);
    }

    #[test]
    fn test_form_aggregate() {
        let form = FormResult {
            form: FormName::new("contact-information").unwrap(),
            fields: vec![
                field_result("phone-number", true, &[]),
                field_result("email", true, &["isnt-valid-email"]),
                field_result("preferred-means-of-contact", false, &[]),
            ],
        };
        assert!(!form.is_valid());
        let invalid: Vec<&str> = form.invalid_fields().iter().map(|f| f.as_str()).collect();
        assert_eq!(invalid, ["email", "preferred-means-of-contact"]);
        assert!(form.field("phone-number").unwrap().is_valid());
        assert!(form.field("fax").is_none());
    }

    #[test]
    fn test_empty_form_is_valid() {
        let form = FormResult {
            form: FormName::new("empty").unwrap(),
            fields: Vec::new(),
        };
        assert!(form.is_valid());
        assert!(form.invalid_fields().is_empty());
    }

    #[test]
    fn test_outcome_serde_shape() {
        let json = serde_json::to_value(Outcome::fail("not an email")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"outcome": "fail", "reason": "not an email"})
        );
        let pass = serde_json::to_value(Outcome::Pass).unwrap();
        assert_eq!(pass, serde_json::json!({"outcome": "pass"}));
    }

    #[test]
    fn test_json_carries_validity() {
        let mut mismatch = field_result("preferred-means-of-contact", true, &[]);
        mismatch.option_mismatch = true;
        let form = FormResult {
            form: FormName::new("contact-information").unwrap(),
            fields: vec![field_result("phone-number", true, &[]), mismatch],
        };

        let json = serde_json::to_value(&form).unwrap();
        assert_eq!(json["valid"], false);
        assert_eq!(json["invalid_fields"], serde_json::json!(["preferred-means-of-contact"]));
        assert_eq!(json["fields"][0]["valid"], true);
        assert_eq!(json["fields"][1]["valid"], false);
        assert_eq!(json["fields"][1]["option_mismatch"], true);
    }

    #[test]
    fn test_json_aggregate_recomputed_on_input() {
        let json = serde_json::json!({
            "form": "personal-information",
            "valid": true,
            "invalid_fields": [],
            "fields": [{"field": "last-name", "valid": true, "satisfies_required": false}]
        });
        let form: FormResult = serde_json::from_value(json).unwrap();
        assert!(!form.is_valid());
        let invalid: Vec<&str> = form.invalid_fields().iter().map(|f| f.as_str()).collect();
        assert_eq!(invalid, ["last-name"]);
        assert!(form.fields[0].failures.is_empty());
    }

    #[test]
    fn test_field_result_json_roundtrip() {
        let r = field_result("email", true, &["isnt-valid-email"]);
        let json = serde_json::to_string(&r).unwrap();
        let back: FieldResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);
    }
}
