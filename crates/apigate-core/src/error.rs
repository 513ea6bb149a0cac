//! Errors raised while evaluating API level conditions.

use thiserror::Error;

use crate::ports::PlatformVersionError;

/// Evaluation failures.
///
/// None of these is a normal outcome: a declaration that constrains
/// nothing is a mistake in the test source and must surface as such.
#[derive(Debug, Error)]
pub enum GateError {
    /// A declaration is present but sets neither `min` nor `max`.
    #[error("At least one value must be provided in @{annotation} (declared on {element})")]
    MissingBound {
        annotation: &'static str,
        element: String,
    },

    /// The platform version could not be determined.
    #[error("Platform version unavailable: {0}")]
    Platform(#[from] PlatformVersionError),
}

impl GateError {
    /// Whether this is a declaration mistake rather than an environment problem.
    pub const fn is_configuration(&self) -> bool {
        matches!(self, Self::MissingBound { .. })
    }
}

/// Result type for condition evaluation.
pub type GateResult<T> = Result<T, GateError>;
