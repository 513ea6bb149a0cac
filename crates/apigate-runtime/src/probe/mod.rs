//! Platform probe implementation for apigate-runtime.
//!
//! This module provides the `DefaultPlatformProbe` which implements
//! `PlatformVersionPort` from apigate-core. It resolves the API level from
//! an explicit override first and falls back to asking the device through
//! `getprop`.

mod commands;

use apigate_core::ports::{PlatformVersionError, PlatformVersionPort, PlatformVersionResult};
use apigate_core::settings::ProbeSettings;
use tracing::debug;

use commands::read_sdk_property;

/// Default implementation of `PlatformVersionPort`.
///
/// Constructed by the CLI from `ProbeSettings` and passed to handlers that
/// need the platform version.
///
/// # Example
///
/// ```
/// use apigate_core::ports::PlatformVersionPort;
/// use apigate_core::settings::ProbeSettings;
/// use apigate_runtime::DefaultPlatformProbe;
///
/// let settings = ProbeSettings::default().with_api_level_override(Some(29));
/// let probe = DefaultPlatformProbe::new(settings);
/// assert_eq!(probe.current_version(), Ok(29));
/// ```
#[derive(Debug, Clone, Default)]
pub struct DefaultPlatformProbe {
    settings: ProbeSettings,
}

impl DefaultPlatformProbe {
    /// Create a probe for the given settings.
    pub const fn new(settings: ProbeSettings) -> Self {
        Self { settings }
    }

    pub const fn settings(&self) -> &ProbeSettings {
        &self.settings
    }
}

impl PlatformVersionPort for DefaultPlatformProbe {
    fn current_version(&self) -> PlatformVersionResult<u32> {
        if let Some(level) = self.settings.api_level_override {
            debug!(level, "Using API level override");
            return Ok(level);
        }

        let getprop = self.settings.effective_getprop();
        let level = read_sdk_property(getprop).map_err(|err| match err {
            PlatformVersionError::CommandFailed(reason) => PlatformVersionError::Unavailable(
                format!("{reason}; set APIGATE_API_LEVEL or pass --api-level"),
            ),
            other => other,
        })?;
        debug!(level, getprop, "Read API level from device");
        Ok(level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_short_circuits_command() {
        let settings = ProbeSettings {
            api_level_override: Some(33),
            getprop_path: Some("/definitely/not/a/binary".to_string()),
        };
        let probe = DefaultPlatformProbe::new(settings);
        assert_eq!(probe.current_version(), Ok(33));
    }

    #[test]
    fn test_missing_getprop_is_unavailable() {
        let settings = ProbeSettings {
            api_level_override: None,
            getprop_path: Some("/definitely/not/a/binary".to_string()),
        };
        let probe = DefaultPlatformProbe::new(settings);

        let err = probe.current_version().unwrap_err();
        assert!(matches!(err, PlatformVersionError::Unavailable(_)));
        assert!(err.to_string().contains("APIGATE_API_LEVEL"));
    }
}
