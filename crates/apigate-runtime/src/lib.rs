#![doc = include_str!(concat!(env!("OUT_DIR"), "/README_GENERATED.md"))]
#![deny(unsafe_code)]

pub mod probe;

// Re-export the platform probe implementation
pub use probe::DefaultPlatformProbe;
