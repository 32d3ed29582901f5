//! Dispatch configuration.

use serde::{Deserialize, Serialize};

/// What to do with snapshot entries that name no field of the form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownValuePolicy {
    /// Skip them. The rendering layer may carry values for widgets that
    /// are not part of the schema.
    #[default]
    Ignore,
    /// Fail the run with [`DispatchError::UnknownField`](crate::DispatchError::UnknownField).
    Reject,
}

/// Options for a [`Dispatcher`](crate::Dispatcher).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DispatchConfig {
    /// Policy for snapshot entries that match no declared field.
    pub unknown_values: UnknownValuePolicy,
}

impl DispatchConfig {
    /// Reject snapshot entries that match no declared field.
    pub fn strict() -> Self {
        Self {
            unknown_values: UnknownValuePolicy::Reject,
        }
    }
}
