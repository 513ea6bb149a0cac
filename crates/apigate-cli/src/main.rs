//! CLI entry point - the composition root.
//!
//! This is the ONLY place where the platform probe is constructed.
//! Command dispatch routes to handlers which delegate to apigate-core.

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use apigate_cli::handlers::{self, eval::EvalRequest};
use apigate_cli::{Cli, CliError, Commands};
use apigate_core::ProbeSettings;
use apigate_runtime::DefaultPlatformProbe;

fn init_tracing(verbose: bool) -> anyhow::Result<()> {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))
}

fn run(cli: Cli) -> Result<(), CliError> {
    // No command provided - show help
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let settings = ProbeSettings::from_env(cli.api_level)?;
    let probe = DefaultPlatformProbe::new(settings);

    match command {
        Commands::Eval {
            min,
            max,
            declared,
            rule,
            json,
        } => {
            let request = EvalRequest {
                rule: rule.into(),
                min,
                max,
                declared,
            };
            handlers::eval::execute(&probe, &request, json)
        }
        Commands::Check { manifest, json } => handlers::check::execute(&probe, &manifest, json),
        Commands::Probe => handlers::probe::execute(&probe),
    }
}

fn main() -> anyhow::Result<ExitCode> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    match run(cli) {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(err) => {
            eprintln!("apigate: {err}");
            let code = u8::try_from(err.exit_code()).unwrap_or(1);
            Ok(ExitCode::from(code))
        }
    }
}
