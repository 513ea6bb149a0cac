//! Eval command handler.
//!
//! Evaluates one inline declaration, the way a host would for a single
//! annotated test.

use apigate_core::{
    ApiBound, ApiRule, EvaluationResult, PlatformVersionPort, evaluate_disabled_on_api,
    evaluate_enabled_on_api,
};

use crate::error::CliError;

/// Inline declaration taken from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvalRequest {
    pub rule: ApiRule,
    pub min: Option<u32>,
    pub max: Option<u32>,
    /// Declaration present even when `min` and `max` are both absent.
    pub declared: bool,
}

impl EvalRequest {
    /// The declaration, or `None` when nothing was declared.
    pub const fn declaration(&self) -> Option<ApiBound> {
        if self.declared || self.min.is_some() || self.max.is_some() {
            Some(ApiBound {
                min: self.min,
                max: self.max,
            })
        } else {
            None
        }
    }
}

/// Evaluate the request. The platform is queried only for a declaration.
pub fn evaluate(
    platform: &dyn PlatformVersionPort,
    request: &EvalRequest,
) -> Result<EvaluationResult, CliError> {
    let declaration = request.declaration();
    let current = match declaration {
        Some(_) => platform.current_version()?,
        None => 0,
    };

    let result = match request.rule {
        ApiRule::DisabledOnApi => evaluate_disabled_on_api(declaration.as_ref(), current)?,
        ApiRule::EnabledOnApi => evaluate_enabled_on_api(declaration.as_ref(), current)?,
    };
    Ok(result)
}

/// Execute the eval command.
pub fn execute(
    platform: &dyn PlatformVersionPort,
    request: &EvalRequest,
    json: bool,
) -> Result<(), CliError> {
    let result = evaluate(platform, request)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        let label = if result.is_disabled() { "SKIP" } else { "RUN" };
        println!("{label}: {}", result.reason);
    }
    Ok(())
}
