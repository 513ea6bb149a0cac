//! Main commands enum.

use std::path::PathBuf;

use apigate_core::ApiRule;
use clap::{Subcommand, ValueEnum};

/// Which API level rule an inline `eval` declaration uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum RuleArg {
    /// Disable when the platform is inside the range
    #[default]
    Disabled,
    /// Run only when the platform is inside the range
    Enabled,
}

impl From<RuleArg> for ApiRule {
    fn from(rule: RuleArg) -> Self {
        match rule {
            RuleArg::Disabled => Self::DisabledOnApi,
            RuleArg::Enabled => Self::EnabledOnApi,
        }
    }
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Evaluate a single inline API level declaration
    Eval {
        /// Lowest matching API level (inclusive)
        #[arg(long)]
        min: Option<u32>,
        /// Highest matching API level (inclusive)
        #[arg(long)]
        max: Option<u32>,
        /// Treat the declaration as present even with no bounds
        #[arg(long)]
        declared: bool,
        /// Rule the declaration expresses
        #[arg(long, value_enum, default_value_t = RuleArg::Disabled)]
        rule: RuleArg,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Evaluate every class and method in a JSON test manifest
    Check {
        /// Path to the manifest
        manifest: PathBuf,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the detected platform API level
    Probe,
}
