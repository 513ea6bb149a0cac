//! CLI-specific error types and mappings.
//!
//! Maps core errors to exit codes and user-facing messages.

use apigate_core::{GateError, ManifestError, PlatformVersionError, SettingsError};
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Core domain error.
    #[error("{0}")]
    Core(String),

    /// IO error (file not found, permission denied, etc.).
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error: bad settings or a declaration that constrains nothing.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Platform version could not be determined.
    #[error("Platform error: {0}")]
    Platform(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow sysexits.h where one fits.
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Core(_) => 1,
            Self::Platform(_) => 69, // EX_UNAVAILABLE
            Self::Io(_) => 74,       // EX_IOERR
            Self::Config(_) => 78,   // EX_CONFIG
        }
    }
}

impl From<GateError> for CliError {
    fn from(err: GateError) -> Self {
        match err {
            GateError::MissingBound { .. } => Self::Config(err.to_string()),
            GateError::Platform(platform) => platform.into(),
        }
    }
}

impl From<PlatformVersionError> for CliError {
    fn from(err: PlatformVersionError) -> Self {
        Self::Platform(err.to_string())
    }
}

impl From<ManifestError> for CliError {
    fn from(err: ManifestError) -> Self {
        match err {
            ManifestError::Io { .. } => Self::Io(err.to_string()),
            ManifestError::Parse(_) => Self::Config(err.to_string()),
        }
    }
}

impl From<SettingsError> for CliError {
    fn from(err: SettingsError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::Core(format!("JSON error: {err}"))
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use apigate_core::{ApiBound, evaluate_disabled_on_api};

    #[test]
    fn test_missing_bound_is_config_error() {
        let err = evaluate_disabled_on_api(Some(&ApiBound::unbounded()), 24).unwrap_err();
        let cli: CliError = err.into();
        assert!(matches!(cli, CliError::Config(_)));
        assert_eq!(cli.exit_code(), 78);
    }

    #[test]
    fn test_platform_error_maps_to_unavailable() {
        let err = GateError::Platform(PlatformVersionError::Unavailable("no device".into()));
        let cli: CliError = err.into();
        assert_eq!(cli.exit_code(), 69);
        assert!(cli.to_string().contains("no device"));
    }

    #[test]
    fn test_exit_codes_leave_usage_code_to_clap() {
        let errors = [
            CliError::Core("json".into()),
            CliError::Io("gone".into()),
            CliError::Config("bad".into()),
            CliError::Platform("no device".into()),
        ];
        let codes: Vec<i32> = errors.iter().map(CliError::exit_code).collect();
        assert_eq!(codes, vec![1, 74, 78, 69]);
        assert!(!codes.contains(&2));
    }

    #[test]
    fn test_settings_error_is_config() {
        let cli: CliError = SettingsError::EmptyGetpropPath.into();
        assert_eq!(cli.exit_code(), 78);
    }
}
