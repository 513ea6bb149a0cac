//! Run tests only on a range of API levels.

use crate::domain::{EvaluationResult, TestElement};
use crate::error::GateResult;
use crate::gate::ApiRule;
use crate::ports::PlatformVersionPort;

use super::{ExecutionCondition, evaluate_api_rule};

/// Disables a test when the platform API level is outside the nearest
/// `enabled_on_api` range.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnabledOnApiCondition;

impl ExecutionCondition for EnabledOnApiCondition {
    fn name(&self) -> &str {
        "enabled_on_api"
    }

    fn evaluate(
        &self,
        element: &TestElement,
        platform: &dyn PlatformVersionPort,
    ) -> GateResult<EvaluationResult> {
        evaluate_api_rule(
            ApiRule::EnabledOnApi,
            |annotations| annotations.enabled_on_api.as_ref(),
            element,
            platform,
        )
    }
}
