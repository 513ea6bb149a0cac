//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from the
//! platform. Implementations that execute processes live in
//! `apigate-runtime`.

pub mod platform_version;

pub use platform_version::{
    FixedPlatformVersion, PlatformVersionError, PlatformVersionPort, PlatformVersionResult,
    parse_platform_version,
};
