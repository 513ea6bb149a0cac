//! Execution conditions.
//!
//! A condition inspects one test element and decides whether it runs.
//! Conditions are registered explicitly with a
//! [`ConditionRegistry`](crate::registry::ConditionRegistry); nothing is
//! discovered at runtime.

mod disabled_on_api;
mod enabled_on_api;

pub use disabled_on_api::DisabledOnApiCondition;
pub use enabled_on_api::EnabledOnApiCondition;

use crate::domain::{Annotations, ApiBound, EvaluationResult, TestElement};
use crate::error::GateResult;
use crate::gate::{ApiRule, evaluate_declared, not_present};
use crate::ports::PlatformVersionPort;

/// Trait for execution conditions.
pub trait ExecutionCondition: Send + Sync {
    /// Name used in reports and logs.
    fn name(&self) -> &str;

    /// Decide whether `element` should run on `platform`.
    fn evaluate(
        &self,
        element: &TestElement,
        platform: &dyn PlatformVersionPort,
    ) -> GateResult<EvaluationResult>;
}

/// Resolve the nearest declaration for `rule` and run it through the gate.
///
/// The platform is only queried when a declaration exists.
fn evaluate_api_rule(
    rule: ApiRule,
    select: fn(&Annotations) -> Option<&ApiBound>,
    element: &TestElement,
    platform: &dyn PlatformVersionPort,
) -> GateResult<EvaluationResult> {
    let Some((owner, bound)) = element.find_annotation(select) else {
        return Ok(not_present(rule));
    };

    let current = platform.current_version()?;
    evaluate_declared(rule, Some(bound), current, &owner.to_string())
}
