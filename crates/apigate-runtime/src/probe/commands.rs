//! Command execution for reading the platform version.

use std::process::Command;

use apigate_core::ports::{PlatformVersionError, PlatformVersionResult, parse_platform_version};
use apigate_core::settings::SDK_PROPERTY;

/// Run `<getprop> ro.build.version.sdk` and parse the result.
///
/// `getprop` may carry leading arguments, e.g. `adb -s emulator-5554 shell getprop`
/// when the tests drive a device from the host.
pub fn read_sdk_property(getprop: &str) -> PlatformVersionResult<u32> {
    let mut parts = getprop.split_whitespace();
    let program = parts
        .next()
        .ok_or_else(|| PlatformVersionError::CommandFailed("empty getprop command".to_string()))?;

    let output = Command::new(program)
        .args(parts)
        .arg(SDK_PROPERTY)
        .output()
        .map_err(|e| PlatformVersionError::CommandFailed(format!("{getprop}: {e}")))?;

    if !output.status.success() {
        return Err(PlatformVersionError::CommandFailed(format!(
            "{getprop} exited with {}",
            output.status
        )));
    }

    parse_platform_version(&String::from_utf8_lossy(&output.stdout))
}
