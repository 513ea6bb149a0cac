//! Check command handler.
//!
//! Loads a test manifest, runs every class and method through the default
//! condition registry, and prints one line per element.

use std::path::Path;

use apigate_core::{ConditionRegistry, ElementReport, Manifest, PlatformVersionPort};
use tracing::debug;

use crate::error::CliError;

/// Counts over a batch of element reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckSummary {
    pub run: usize,
    pub skipped: usize,
    pub configuration_errors: usize,
    pub other_errors: usize,
}

impl CheckSummary {
    pub fn from_reports(reports: &[ElementReport]) -> Self {
        reports.iter().fold(Self::default(), |mut acc, report| {
            match (&report.verdict, report.configuration_error) {
                (Some(verdict), _) if verdict.is_disabled() => acc.skipped += 1,
                (Some(_), _) => acc.run += 1,
                (None, true) => acc.configuration_errors += 1,
                (None, false) => acc.other_errors += 1,
            }
            acc
        })
    }
}

/// Evaluate every element in `manifest`.
pub fn evaluate(manifest: &Manifest, platform: &dyn PlatformVersionPort) -> Vec<ElementReport> {
    let elements = manifest.elements();
    debug!(count = elements.len(), "Evaluating manifest elements");
    ConditionRegistry::with_defaults().evaluate_all(&elements, platform)
}

fn format_report(report: &ElementReport) -> String {
    match (&report.verdict, &report.error) {
        (Some(verdict), _) => {
            let label = if verdict.is_disabled() { "SKIP " } else { "RUN  " };
            match &verdict.condition {
                Some(condition) => format!(
                    "{label} {}  {} [{condition}]",
                    report.element, verdict.result.reason
                ),
                None => format!("{label} {}", report.element),
            }
        }
        (None, error) => format!(
            "ERROR {}  {}",
            report.element,
            error.as_deref().unwrap_or("unknown error")
        ),
    }
}

/// Turn the summary into the command's exit status.
///
/// Declaration mistakes take precedence over platform failures.
fn summary_result(summary: CheckSummary, reports: &[ElementReport]) -> Result<(), CliError> {
    if summary.configuration_errors > 0 {
        return Err(CliError::Config(format!(
            "{} declaration(s) set neither min nor max",
            summary.configuration_errors
        )));
    }
    if summary.other_errors > 0 {
        let first = reports
            .iter()
            .find_map(|r| r.error.clone())
            .unwrap_or_default();
        return Err(CliError::Platform(first));
    }
    Ok(())
}

/// Execute the check command.
pub fn execute(
    platform: &dyn PlatformVersionPort,
    manifest_path: &Path,
    json: bool,
) -> Result<(), CliError> {
    let manifest = Manifest::load(manifest_path)?;
    let reports = evaluate(&manifest, platform);
    let summary = CheckSummary::from_reports(&reports);

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for report in &reports {
            println!("{}", format_report(report));
        }
        println!();
        println!(
            "{} run, {} skipped, {} error(s)",
            summary.run,
            summary.skipped,
            summary.configuration_errors + summary.other_errors
        );
    }

    summary_result(summary, &reports)
}
