//! Integration test: dispatch the shipped contact-details schema against
//! the built-in validators, the way a rendering host would.

use std::collections::BTreeMap;
use std::path::PathBuf;

use formset_core::{FormName, ValidatorName};
use formset_schema::{load_path, Field, FormSet};
use formset_validate::{
    DispatchConfig, DispatchError, Dispatcher, FieldUpdate, FormResult, Outcome, SharedRegistry,
    ValidatorRegistry, ValueSnapshot,
};

/// Find the repository root.
fn repo_root() -> PathBuf {
    let mut dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    dir.pop(); // crates/
    dir.pop(); // repo root
    dir
}

fn contact_details() -> FormSet {
    load_path(repo_root().join("fixtures").join("contact-details.forms.yaml"))
        .expect("fixture should load")
}

fn snapshot(pairs: &[(&str, &str)]) -> ValueSnapshot {
    pairs.iter().copied().collect()
}

fn invalid(result: &FormResult) -> Vec<&str> {
    result.invalid_fields().iter().map(|f| f.as_str()).collect()
}

#[test]
fn test_builtins_cover_fixture() {
    let set = contact_details();
    let dispatcher = Dispatcher::new(&set, ValidatorRegistry::with_builtins());
    dispatcher.preflight().expect("built-ins cover every referenced validator");
}

#[test]
fn test_empty_personal_information() {
    let set = contact_details();
    let dispatcher = Dispatcher::new(&set, ValidatorRegistry::with_builtins());
    let result = dispatcher
        .validate_form("personal-information", &ValueSnapshot::new())
        .unwrap();

    assert!(!result.is_valid());
    assert_eq!(invalid(&result), ["last-name", "gender"]);

    let last_name = result.field("last-name").unwrap();
    assert!(!last_name.satisfies_required);
    let failed: Vec<&str> = last_name.failed_validators().iter().map(|v| v.as_str()).collect();
    assert_eq!(failed, ["is-blank"]);
    assert!(result.field("first-name").unwrap().is_valid());
}

#[test]
fn test_complete_personal_information() {
    let set = contact_details();
    let dispatcher = Dispatcher::new(&set, ValidatorRegistry::with_builtins());
    let values = snapshot(&[("first-name", "Ada"), ("last-name", "Lovelace"), ("gender", "female")]);
    assert!(dispatcher
        .validate_form("personal-information", &values)
        .unwrap()
        .is_valid());
}

#[test]
fn test_contact_information_reports_every_failure() {
    let set = contact_details();
    let dispatcher = Dispatcher::new(&set, ValidatorRegistry::with_builtins());
    let values = snapshot(&[
        ("phone-number", "call me"),
        ("email", "not-an-email"),
        ("preferred-means-of-contact", "phone"),
    ]);
    let result = dispatcher.validate_form("contact-information", &values).unwrap();
    assert_eq!(invalid(&result), ["phone-number", "email", "preferred-means-of-contact"]);

    let email = result.field("email").unwrap();
    assert!(email.satisfies_required);
    assert_eq!(email.failures[0].validator.as_str(), "isnt-valid-email");
    assert!(result.field("preferred-means-of-contact").unwrap().option_mismatch);
}

#[test]
fn test_contact_information_optional_and_blank_is_valid() {
    let set = contact_details();
    let dispatcher = Dispatcher::new(&set, ValidatorRegistry::with_builtins());
    let result = dispatcher
        .validate_form("contact-information", &ValueSnapshot::new())
        .unwrap();
    assert!(result.is_valid(), "{result:?}");
}

#[test]
fn test_update_stream() {
    let set = contact_details();
    let dispatcher = Dispatcher::new(&set, ValidatorRegistry::with_builtins());
    let mut values = ValueSnapshot::new();

    let steps = [
        ("email", "ada@", false),
        ("email", "ada@example.org", true),
        ("phone-number", "+44 20 7946 0958", true),
        ("preferred-means-of-contact", "phone, email", true),
    ];
    for (field, value, valid) in steps {
        let result = dispatcher
            .apply_update("contact-information", &mut values, FieldUpdate::new(field, value))
            .unwrap();
        assert_eq!(result.is_valid(), valid, "{field} = {value:?}");
    }
    assert!(dispatcher
        .validate_form("contact-information", &values)
        .unwrap()
        .is_valid());
}

#[test]
fn test_host_overrides_builtin() {
    let set = contact_details();
    let mut registry = ValidatorRegistry::with_builtins();
    registry.register(
        ValidatorName::new("isnt-valid-email").unwrap(),
        |value: &str, _: &Field| {
            if value.is_empty() || value.ends_with("@example.org") {
                Outcome::Pass
            } else {
                Outcome::fail("example.org addresses only")
            }
        },
    );
    let dispatcher = Dispatcher::new(&set, registry);
    let result = dispatcher
        .validate_field("contact-information", "email", "ada@example.com")
        .unwrap();
    assert_eq!(result.failures[0].reason, "example.org addresses only");
}

#[test]
fn test_missing_registration_is_a_fault_not_a_failure() {
    let set = contact_details();
    let shared = SharedRegistry::default();
    shared.register(
        ValidatorName::new("is-blank").unwrap(),
        formset_validate::builtins::is_blank,
    );
    let dispatcher = Dispatcher::new(&set, shared.snapshot());

    assert!(dispatcher
        .validate_form("personal-information", &ValueSnapshot::new())
        .is_ok());
    let err = dispatcher
        .validate_form("contact-information", &ValueSnapshot::new())
        .unwrap_err();
    assert!(matches!(err, DispatchError::UnregisteredValidator { .. }));
    assert!(err.to_string().contains("isnt-phone-number"));
}

#[test]
fn test_validate_all_strict() {
    let set = contact_details();
    let dispatcher = Dispatcher::with_config(
        &set,
        ValidatorRegistry::with_builtins(),
        DispatchConfig::strict(),
    );
    let mut values: BTreeMap<FormName, ValueSnapshot> = BTreeMap::new();
    values.insert(
        FormName::new("personal-information").unwrap(),
        snapshot(&[("last-name", "Lovelace"), ("gender", "female")]),
    );
    let results = dispatcher.validate_all(&values).unwrap();
    assert_eq!(results.len(), 2);
    assert!(results.iter().all(FormResult::is_valid));

    values.insert(
        FormName::new("contact-information").unwrap(),
        snapshot(&[("fax", "555")]),
    );
    assert!(matches!(
        dispatcher.validate_all(&values),
        Err(DispatchError::UnknownField { ref field, .. }) if field == "fax"
    ));
}

#[test]
fn test_result_json_for_rendering_layer() {
    let set = contact_details();
    let dispatcher = Dispatcher::new(&set, ValidatorRegistry::with_builtins());
    let values = snapshot(&[("email", "nope"), ("preferred-means-of-contact", "phone")]);
    let result = dispatcher.validate_form("contact-information", &values).unwrap();

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["form"], "contact-information");
    assert_eq!(json["valid"], false);
    assert_eq!(
        json["invalid_fields"],
        serde_json::json!(["email", "preferred-means-of-contact"])
    );
    assert_eq!(json["fields"][0]["valid"], true);
    assert_eq!(json["fields"][1]["field"], "email");
    assert_eq!(json["fields"][1]["valid"], false);
    assert_eq!(json["fields"][1]["failures"][0]["validator"], "isnt-valid-email");
    assert_eq!(json["fields"][2]["valid"], false);
    assert_eq!(json["fields"][2]["option_mismatch"], true);

    let back: FormResult = serde_json::from_value(json).unwrap();
    assert_eq!(back, result);
}

#[test]
fn test_valid_form_json_has_empty_invalid_fields() {
    let set = contact_details();
    let dispatcher = Dispatcher::new(&set, ValidatorRegistry::with_builtins());
    let values = snapshot(&[("last-name", "Lovelace"), ("gender", "female")]);
    let result = dispatcher.validate_form("personal-information", &values).unwrap();

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["valid"], true);
    assert_eq!(json["invalid_fields"], serde_json::json!([]));
}
