//! Evaluation outcomes.

use serde::{Deserialize, Serialize};

/// Whether a test should run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionOutcome {
    Enabled,
    Disabled,
}

/// Result of a single condition evaluation: the outcome plus a
/// human-readable reason for the host's report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub outcome: ConditionOutcome,
    pub reason: String,
}

impl EvaluationResult {
    /// Create an enabled result.
    pub fn enabled(reason: impl Into<String>) -> Self {
        Self {
            outcome: ConditionOutcome::Enabled,
            reason: reason.into(),
        }
    }

    /// Create a disabled result.
    pub fn disabled(reason: impl Into<String>) -> Self {
        Self {
            outcome: ConditionOutcome::Disabled,
            reason: reason.into(),
        }
    }

    pub fn is_disabled(&self) -> bool {
        self.outcome == ConditionOutcome::Disabled
    }

    /// "Enabled on API <v>".
    pub(crate) fn enabled_on_api(version: u32) -> Self {
        Self::enabled(format!("Enabled on API {version}"))
    }

    /// "Disabled on API <v>".
    pub(crate) fn disabled_on_api(version: u32) -> Self {
        Self::disabled(format!("Disabled on API {version}"))
    }
}
