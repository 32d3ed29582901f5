//! # Built-in Validators
//!
//! Opt-in implementations of the three rules used by the contact-details
//! schema. Nothing registers them implicitly; call
//! [`ValidatorRegistry::with_builtins`] or [`register_builtins`].
//!
//! Each name describes the failure condition: `is-blank` fails when the
//! value *is* blank. The two format rules pass on a blank value, since
//! whether a value must be present is the field's `required` flag, not a
//! format concern.

use std::sync::LazyLock;

use formset_core::ValidatorName;
use formset_schema::Field;
use regex::Regex;

use crate::outcome::Outcome;
use crate::registry::ValidatorRegistry;

/// Fails when the value is empty after trimming.
pub const IS_BLANK: &str = "is-blank";
/// Fails when a non-blank value is not a phone number.
pub const ISNT_PHONE_NUMBER: &str = "isnt-phone-number";
/// Fails when a non-blank value is not an email address.
pub const ISNT_VALID_EMAIL: &str = "isnt-valid-email";

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)*\.[A-Za-z]{2,}$")
        .expect("email pattern is a valid regex")
});

static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\+?[0-9()][0-9 ().-]*[0-9]$").expect("phone pattern is a valid regex")
});

const PHONE_MIN_DIGITS: usize = 7;
const PHONE_MAX_DIGITS: usize = 15;

/// `is-blank`
pub fn is_blank(value: &str, _field: &Field) -> Outcome {
    if value.trim().is_empty() {
        Outcome::fail("must not be blank")
    } else {
        Outcome::Pass
    }
}

/// `isnt-phone-number`
///
/// Accepts an optional leading `+`, then digits separated by spaces,
/// dashes, dots or parentheses, with 7 to 15 digits in total (E.164 caps
/// a number at 15).
pub fn isnt_phone_number(value: &str, _field: &Field) -> Outcome {
    let value = value.trim();
    if value.is_empty() {
        return Outcome::Pass;
    }
    let digits = value.chars().filter(char::is_ascii_digit).count();
    if PHONE_RE.is_match(value) && (PHONE_MIN_DIGITS..=PHONE_MAX_DIGITS).contains(&digits) {
        Outcome::Pass
    } else {
        Outcome::fail("not a valid phone number")
    }
}

/// `isnt-valid-email`
pub fn isnt_valid_email(value: &str, _field: &Field) -> Outcome {
    let value = value.trim();
    if value.is_empty() || EMAIL_RE.is_match(value) {
        Outcome::Pass
    } else {
        Outcome::fail("not a valid email address")
    }
}

fn builtin_name(name: &'static str) -> ValidatorName {
    ValidatorName::new(name).expect("built-in validator names are valid identifiers")
}

/// Register the built-in validators, replacing any existing bindings of
/// the same names.
pub fn register_builtins(registry: &mut ValidatorRegistry) {
    registry.register(builtin_name(IS_BLANK), is_blank);
    registry.register(builtin_name(ISNT_PHONE_NUMBER), isnt_phone_number);
    registry.register(builtin_name(ISNT_VALID_EMAIL), isnt_valid_email);
}

impl ValidatorRegistry {
    /// A registry holding only the built-in validators.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        register_builtins(&mut registry);
        registry
    }
}
