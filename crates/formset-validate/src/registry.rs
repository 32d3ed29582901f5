//! # Validator Registry
//!
//! Maps [`ValidatorName`] to an executable [`Validator`]. Names are resolved
//! when a dispatch runs, not when a schema is loaded.
//!
//! Re-registering a name replaces the previous validator (last write wins).
//! Hosts rely on this to override a built-in such as `isnt-valid-email`
//! with their own rule.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use formset_core::{FormName, ValidatorName};
use formset_schema::{Field, FormSet};
use parking_lot::RwLock;

use crate::error::DispatchError;
use crate::outcome::Outcome;

/// A named validation rule.
///
/// Receives the current field value and the field's schema definition, and
/// returns [`Outcome::Pass`] or [`Outcome::Fail`] with a reason. Validators
/// must be pure: dispatch runs them concurrently and in any number.
///
/// Any `Fn(&str, &Field) -> Outcome + Send + Sync` is a validator. Closures
/// passed to [`ValidatorRegistry::register`] need annotated parameter types
/// (`|value: &str, _: &Field| ...`) so they are generic over lifetimes.
pub trait Validator: Send + Sync {
    /// Check `value` for `field`.
    fn check(&self, value: &str, field: &Field) -> Outcome;
}

impl<F> Validator for F
where
    F: Fn(&str, &Field) -> Outcome + Send + Sync,
{
    fn check(&self, value: &str, field: &Field) -> Outcome {
        self(value, field)
    }
}

/// Name → validator map.
///
/// Cloning is cheap: validators are shared behind `Arc`.
#[derive(Clone, Default)]
pub struct ValidatorRegistry {
    validators: HashMap<ValidatorName, Arc<dyn Validator>>,
}

impl fmt::Debug for ValidatorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatorRegistry")
            .field("names", &self.names())
            .finish()
    }
}

impl ValidatorRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name` to `validator`, returning the validator it replaced.
    pub fn register(
        &mut self,
        name: ValidatorName,
        validator: impl Validator + 'static,
    ) -> Option<Arc<dyn Validator>> {
        self.register_arc(name, Arc::new(validator))
    }

    /// Bind `name` to an already shared validator.
    pub fn register_arc(
        &mut self,
        name: ValidatorName,
        validator: Arc<dyn Validator>,
    ) -> Option<Arc<dyn Validator>> {
        let replaced = self.validators.insert(name.clone(), validator);
        if replaced.is_some() {
            tracing::warn!(validator = %name, "validator re-registered, previous binding replaced");
        } else {
            tracing::debug!(validator = %name, "validator registered");
        }
        replaced
    }

    /// Look up the validator bound to `name`.
    pub fn get(&self, name: &str) -> Option<&Arc<dyn Validator>> {
        self.validators.get(name)
    }

    /// Whether `name` is bound.
    pub fn contains(&self, name: &str) -> bool {
        self.validators.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&ValidatorName> {
        let mut names: Vec<_> = self.validators.keys().collect();
        names.sort();
        names
    }

    /// Number of registered validators.
    pub fn len(&self) -> usize {
        self.validators.len()
    }

    /// Whether nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }

    /// Resolve the validator a field's rule refers to.
    ///
    /// # Errors
    ///
    /// `DispatchError::UnregisteredValidator` if nothing is bound to `name`.
    /// This is a configuration fault, never treated as a pass.
    pub fn resolve(
        &self,
        form: &FormName,
        field: &Field,
        name: &ValidatorName,
    ) -> Result<&dyn Validator, DispatchError> {
        self.validators
            .get(name.as_str())
            .map(|v| v.as_ref())
            .ok_or_else(|| DispatchError::UnregisteredValidator {
                form: form.clone(),
                field: field.name().clone(),
                validator: name.clone(),
            })
    }

    /// Resolve every validator name the set references.
    ///
    /// Lets a host surface a missing registration at startup rather than on
    /// the first dispatch that reaches the field. Reports the first
    /// unresolved reference in declared order.
    pub fn check_coverage(&self, set: &FormSet) -> Result<(), DispatchError> {
        for form in set {
            for field in form.fields() {
                for name in field.validations() {
                    self.resolve(form.name(), field, name)?;
                }
            }
        }
        Ok(())
    }
}

/// A registry that may be re-registered while dispatchers are in use.
///
/// Writers take an exclusive lock; [`snapshot`](Self::snapshot) takes a
/// shared lock just long enough to clone the map. A dispatcher built from a
/// snapshot never observes a registration made after it was taken.
#[derive(Debug, Clone, Default)]
pub struct SharedRegistry {
    inner: Arc<RwLock<ValidatorRegistry>>,
}

impl SharedRegistry {
    /// Wrap an existing registry.
    pub fn new(registry: ValidatorRegistry) -> Self {
        Self {
            inner: Arc::new(RwLock::new(registry)),
        }
    }

    /// Bind `name` to `validator`, returning the validator it replaced.
    pub fn register(
        &self,
        name: ValidatorName,
        validator: impl Validator + 'static,
    ) -> Option<Arc<dyn Validator>> {
        self.inner.write().register(name, validator)
    }

    /// Clone the current registry.
    pub fn snapshot(&self) -> ValidatorRegistry {
        self.inner.read().clone()
    }

    /// Whether `name` is currently bound.
    pub fn contains(&self, name: &str) -> bool {
        self.inner.read().contains(name)
    }
}
