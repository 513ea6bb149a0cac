//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface for checking API level test conditions.
#[derive(Debug, Parser)]
#[command(name = "apigate")]
#[command(about = "Decide which tests run on the current platform API level")]
#[command(version)]
pub struct Cli {
    /// Use this API level instead of probing the platform
    #[arg(long = "api-level", global = true)]
    pub api_level: Option<u32>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
