//! Disable tests on a range of API levels.

use crate::domain::{EvaluationResult, TestElement};
use crate::error::GateResult;
use crate::gate::ApiRule;
use crate::ports::PlatformVersionPort;

use super::{ExecutionCondition, evaluate_api_rule};

/// Disables a test when the platform API level is inside the nearest
/// `disabled_on_api` range declared on it or its enclosing classes.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledOnApiCondition;

impl ExecutionCondition for DisabledOnApiCondition {
    fn name(&self) -> &str {
        "disabled_on_api"
    }

    fn evaluate(
        &self,
        element: &TestElement,
        platform: &dyn PlatformVersionPort,
    ) -> GateResult<EvaluationResult> {
        evaluate_api_rule(
            ApiRule::DisabledOnApi,
            |annotations| annotations.disabled_on_api.as_ref(),
            element,
            platform,
        )
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::domain::{Annotations, ApiBound, ConditionOutcome};
    use crate::error::GateError;
    use crate::ports::platform_version::MockPlatformVersionPort;
    use crate::ports::{FixedPlatformVersion, PlatformVersionError};

    fn method_with(class: Annotations, method: Annotations) -> TestElement {
        let class = Arc::new(TestElement::class("ApiTest", class));
        TestElement::method(&class, "runs", method)
    }

    fn disabled(bound: ApiBound) -> Annotations {
        Annotations::none().with_disabled_on_api(bound)
    }

    #[test]
    fn test_no_declaration_does_not_query_platform() {
        let mut platform = MockPlatformVersionPort::new();
        platform.expect_current_version().never();

        let element = method_with(Annotations::none(), Annotations::none());
        let result = DisabledOnApiCondition.evaluate(&element, &platform).unwrap();

        assert_eq!(result.outcome, ConditionOutcome::Enabled);
        assert_eq!(result.reason, "@DisabledOnApi is not present");
    }

    #[test]
    fn test_method_declaration_in_range_disables() {
        let element = method_with(Annotations::none(), disabled(ApiBound::between(21, 26)));
        let result = DisabledOnApiCondition
            .evaluate(&element, &FixedPlatformVersion::new(24))
            .unwrap();

        assert_eq!(result.outcome, ConditionOutcome::Disabled);
        assert_eq!(result.reason, "Disabled on API 24");
    }

    #[test]
    fn test_method_declaration_overrides_class() {
        // Class would disable on 24, method narrows it to 26+.
        let element = method_with(
            disabled(ApiBound::at_most(24)),
            disabled(ApiBound::at_least(26)),
        );
        let result = DisabledOnApiCondition
            .evaluate(&element, &FixedPlatformVersion::new(24))
            .unwrap();

        assert_eq!(result.outcome, ConditionOutcome::Enabled);
    }

    #[test]
    fn test_unbounded_declaration_names_owner() {
        let element = method_with(disabled(ApiBound::unbounded()), Annotations::none());
        let err = DisabledOnApiCondition
            .evaluate(&element, &FixedPlatformVersion::new(24))
            .unwrap_err();

        match err {
            GateError::MissingBound {
                annotation,
                element,
            } => {
                assert_eq!(annotation, "DisabledOnApi");
                assert_eq!(element, "class ApiTest");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_platform_failure_propagates() {
        let mut platform = MockPlatformVersionPort::new();
        platform
            .expect_current_version()
            .times(1)
            .returning(|| Err(PlatformVersionError::Unavailable("no device".into())));

        let element = method_with(Annotations::none(), disabled(ApiBound::at_least(21)));
        let err = DisabledOnApiCondition
            .evaluate(&element, &platform)
            .unwrap_err();

        assert!(matches!(err, GateError::Platform(_)));
        assert!(!err.is_configuration());
    }
}
