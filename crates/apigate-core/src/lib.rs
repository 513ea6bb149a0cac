#![doc = include_str!(concat!(env!("OUT_DIR"), "/README_GENERATED.md"))]
#![deny(unused_crate_dependencies)]

pub mod conditions;
pub mod domain;
pub mod error;
pub mod gate;
pub mod manifest;
pub mod ports;
pub mod registry;
pub mod settings;

// Re-export commonly used types for convenience
pub use conditions::{DisabledOnApiCondition, EnabledOnApiCondition, ExecutionCondition};
pub use domain::{
    Annotations, ApiBound, ConditionOutcome, ElementKind, EvaluationResult, TestElement,
};
pub use error::GateError;
pub use gate::{ApiRule, evaluate_disabled_on_api, evaluate_enabled_on_api};
pub use manifest::{ClassSpec, Manifest, ManifestError, MethodSpec};
pub use ports::{
    FixedPlatformVersion, PlatformVersionError, PlatformVersionPort, PlatformVersionResult,
};
pub use registry::{ConditionRegistry, ElementReport, Verdict};
pub use settings::{
    API_LEVEL_ENV, GETPROP_ENV, ProbeSettings, SettingsError, validate_settings,
};

// Property tests live under tests/ and only need proptest there
#[cfg(test)]
use proptest as _;
