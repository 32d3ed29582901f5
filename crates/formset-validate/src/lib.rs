//! # formset-validate — Validator Registry & Dispatch
//!
//! Binds validator names to predicates and evaluates field values against a
//! [`FormSet`](formset_schema::FormSet).
//!
//! ## Two Error Classes
//!
//! - **Configuration faults** ([`DispatchError`]): unknown form, unknown
//!   field, or a validator name with no registration. These abort the
//!   dispatch run; they mean the form wiring is broken.
//! - **Validation failures** ([`FieldResult`], [`FormResult`]): required
//!   value missing, option not allowed, a validator failed. These are data,
//!   returned in `Ok`, and a single run reports all of them.
//!
//! ## Late Binding
//!
//! Schemas carry validator names only. The [`ValidatorRegistry`] resolves a
//! name when a dispatch runs, so hosts can add or override validators
//! (last registration wins) without touching the schema.
//!
//! ## Concurrency
//!
//! A `FormSet` is immutable and a [`Dispatcher`] never mutates its registry
//! while validating, so one dispatcher can serve any number of threads.
//! Hosts that re-register at runtime use [`SharedRegistry`] and take a
//! snapshot per dispatcher.

pub mod builtins;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod outcome;
pub mod registry;
pub mod snapshot;

pub use config::{DispatchConfig, UnknownValuePolicy};
pub use dispatch::Dispatcher;
pub use error::DispatchError;
pub use outcome::{FieldResult, FormResult, Outcome, ValidatorFailure};
pub use registry::{SharedRegistry, Validator, ValidatorRegistry};
pub use snapshot::{FieldUpdate, ValueSnapshot};
