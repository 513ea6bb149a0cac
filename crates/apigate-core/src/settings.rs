//! Probe settings and validation.
//!
//! Pure configuration types for locating the platform version. The
//! runtime crate consumes them; nothing here touches a process.

use serde::{Deserialize, Serialize};

/// Environment variable forcing the platform API level.
pub const API_LEVEL_ENV: &str = "APIGATE_API_LEVEL";

/// Environment variable naming the `getprop` binary to query.
pub const GETPROP_ENV: &str = "APIGATE_GETPROP";

/// Default `getprop` binary.
pub const DEFAULT_GETPROP: &str = "getprop";

/// System property holding the SDK level on Android.
pub const SDK_PROPERTY: &str = "ro.build.version.sdk";

/// Settings controlling how the platform version is obtained.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ProbeSettings {
    /// Use this API level instead of asking the platform.
    pub api_level_override: Option<u32>,

    /// `getprop` command, optionally with leading arguments
    /// (`adb shell getprop`).
    pub getprop_path: Option<String>,
}

impl ProbeSettings {
    /// Read settings from `APIGATE_API_LEVEL` and `APIGATE_GETPROP`.
    ///
    /// `cli_api_level` comes from the command line and beats the environment.
    pub fn from_env(cli_api_level: Option<u32>) -> Result<Self, SettingsError> {
        Self::from_lookup(|key| std::env::var(key).ok(), cli_api_level)
    }

    /// Build settings from an arbitrary variable source.
    ///
    /// `APIGATE_API_LEVEL` is not read at all when `cli_api_level` is set,
    /// so a malformed value cannot fail an overridden invocation.
    pub fn from_lookup<F>(lookup: F, cli_api_level: Option<u32>) -> Result<Self, SettingsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_level_override = match cli_api_level {
            Some(level) => Some(level),
            None => parse_api_level(lookup(API_LEVEL_ENV))?,
        };

        let settings = Self {
            api_level_override,
            getprop_path: lookup(GETPROP_ENV),
        };
        validate_settings(&settings)?;
        Ok(settings)
    }

    /// Replace the override when one is given on the command line.
    #[must_use]
    pub fn with_api_level_override(mut self, api_level: Option<u32>) -> Self {
        if let Some(level) = api_level {
            self.api_level_override = Some(level);
        }
        self
    }

    /// The `getprop` binary to run (with default fallback).
    pub fn effective_getprop(&self) -> &str {
        self.getprop_path.as_deref().unwrap_or(DEFAULT_GETPROP)
    }
}

fn parse_api_level(raw: Option<String>) -> Result<Option<u32>, SettingsError> {
    match raw {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse::<u32>()
            .map(Some)
            .map_err(|_| SettingsError::InvalidApiLevel(raw)),
        _ => Ok(None),
    }
}

/// Settings validation error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("APIGATE_API_LEVEL must be a non-negative integer, got '{0}'")]
    InvalidApiLevel(String),

    #[error("getprop path cannot be empty")]
    EmptyGetpropPath,
}

/// Validate settings values.
pub fn validate_settings(settings: &ProbeSettings) -> Result<(), SettingsError> {
    if settings
        .getprop_path
        .as_ref()
        .is_some_and(|p| p.trim().is_empty())
    {
        return Err(SettingsError::EmptyGetpropPath);
    }

    Ok(())
}
