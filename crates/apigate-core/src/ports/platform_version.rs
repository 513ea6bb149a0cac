//! Platform version port.
//!
//! Supplies the integer API level of the device or emulator the tests run
//! on. The core never caches or validates the value beyond parsing.

use thiserror::Error;

/// Errors that can occur while determining the platform version.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlatformVersionError {
    /// Failed to execute the command that reports the version.
    #[error("Command execution failed: {0}")]
    CommandFailed(String),

    /// The reported value is not a non-negative integer.
    #[error("Cannot parse platform version '{raw}': {reason}")]
    ParseFailed { raw: String, reason: String },

    /// No source of the platform version is available on this host.
    #[error("No platform version source available: {0}")]
    Unavailable(String),
}

/// Result type for platform version queries.
pub type PlatformVersionResult<T> = Result<T, PlatformVersionError>;

/// Port for reading the current platform API level.
///
/// # Example
///
/// ```
/// use apigate_core::ports::{FixedPlatformVersion, PlatformVersionPort};
///
/// let platform = FixedPlatformVersion::new(24);
/// assert_eq!(platform.current_version(), Ok(24));
/// ```
#[cfg_attr(test, mockall::automock)]
pub trait PlatformVersionPort: Send + Sync {
    /// Current API level.
    fn current_version(&self) -> PlatformVersionResult<u32>;
}

/// Platform version known up front (explicit override, tests).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedPlatformVersion(u32);

impl FixedPlatformVersion {
    pub const fn new(version: u32) -> Self {
        Self(version)
    }

    pub const fn version(self) -> u32 {
        self.0
    }
}

impl PlatformVersionPort for FixedPlatformVersion {
    fn current_version(&self) -> PlatformVersionResult<u32> {
        Ok(self.0)
    }
}

/// Parse the textual output of a version source (`"30\n"` -> `30`).
pub fn parse_platform_version(raw: &str) -> PlatformVersionResult<u32> {
    let trimmed = raw.trim();
    trimmed
        .parse::<u32>()
        .map_err(|e| PlatformVersionError::ParseFailed {
            raw: trimmed.to_string(),
            reason: e.to_string(),
        })
}
