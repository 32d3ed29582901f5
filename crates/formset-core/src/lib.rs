//! # formset-core — Foundational Types
//!
//! Leaf crate of the formset workspace. Defines the identifier newtypes
//! shared by the schema model and the validation dispatcher, plus the
//! canonical-bytes and digest primitives used to fingerprint a loaded
//! form schema.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for names.** `FormName`, `FieldName` and
//!    `ValidatorName` are distinct types with validated constructors. A
//!    validator name cannot be passed where a field name is expected.
//!
//! 2. **`CanonicalBytes` newtype.** All digest computation flows through
//!    `CanonicalBytes::new()` (RFC 8785 JSON canonicalization).
//!
//! 3. **`SchemaDigest::of()` accepts only `&CanonicalBytes`.**
//!
//! ## Crate Policy
//!
//! - No dependencies on other `formset-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod canonical;
pub mod digest;
pub mod error;
pub mod identity;

// Re-export primary types for ergonomic imports.
pub use canonical::CanonicalBytes;
pub use digest::SchemaDigest;
pub use error::{CanonicalizationError, IdentifierError};
pub use identity::{FieldName, FormName, ValidatorName};
