//! Probe command handler.

use apigate_core::PlatformVersionPort;

use crate::error::CliError;

/// Execute the probe command: print the platform API level.
pub fn execute(platform: &dyn PlatformVersionPort) -> Result<(), CliError> {
    let version = platform.current_version()?;
    println!("{version}");
    Ok(())
}
