//! The version-range gate.
//!
//! Pure functions of a declared bound and the current platform version.
//! They hold no state and may be called from any number of threads.

use tracing::{debug, warn};

use crate::domain::{ApiBound, EvaluationResult};
use crate::error::{GateError, GateResult};

/// Which way a matched range steers the test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiRule {
    /// Matching range disables the test.
    DisabledOnApi,
    /// Matching range is the only place the test runs.
    EnabledOnApi,
}

impl ApiRule {
    /// Declaration name as it appears in reasons and errors.
    pub const fn annotation(self) -> &'static str {
        match self {
            Self::DisabledOnApi => "DisabledOnApi",
            Self::EnabledOnApi => "EnabledOnApi",
        }
    }

    const fn disables_when(self, matched: bool) -> bool {
        match self {
            Self::DisabledOnApi => matched,
            Self::EnabledOnApi => !matched,
        }
    }
}

/// Evaluate a "disable on these API levels" declaration.
///
/// - no declaration: enabled
/// - declaration with neither end set: [`GateError::MissingBound`]
/// - `current` inside the range: disabled
/// - otherwise: enabled
pub fn evaluate_disabled_on_api(
    declared: Option<&ApiBound>,
    current: u32,
) -> GateResult<EvaluationResult> {
    evaluate_declared(ApiRule::DisabledOnApi, declared, current, "an inline bound")
}

/// Evaluate an "enable only on these API levels" declaration.
///
/// Opposite polarity to [`evaluate_disabled_on_api`]: a match keeps the
/// test enabled, a miss disables it.
pub fn evaluate_enabled_on_api(
    declared: Option<&ApiBound>,
    current: u32,
) -> GateResult<EvaluationResult> {
    evaluate_declared(ApiRule::EnabledOnApi, declared, current, "an inline bound")
}

/// Enabled result used when no declaration applies.
pub(crate) fn not_present(rule: ApiRule) -> EvaluationResult {
    EvaluationResult::enabled(format!("@{} is not present", rule.annotation()))
}

/// Shared implementation; `element` names the declaration site in errors.
pub(crate) fn evaluate_declared(
    rule: ApiRule,
    declared: Option<&ApiBound>,
    current: u32,
    element: &str,
) -> GateResult<EvaluationResult> {
    let annotation = rule.annotation();
    let Some(bound) = declared else {
        return Ok(not_present(rule));
    };

    if !bound.is_declared() {
        return Err(GateError::MissingBound {
            annotation,
            element: element.to_string(),
        });
    }

    if bound.is_inverted() {
        warn!(%bound, element, "@{annotation} range is empty and can never match");
    }

    let matched = bound.matches(current);
    debug!(%bound, current, matched, element, "Evaluated @{annotation}");

    if rule.disables_when(matched) {
        Ok(EvaluationResult::disabled_on_api(current))
    } else {
        Ok(EvaluationResult::enabled_on_api(current))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ConditionOutcome;

    const PLATFORM: u32 = 24;

    fn disabled_on(bound: ApiBound) -> ConditionOutcome {
        evaluate_disabled_on_api(Some(&bound), PLATFORM)
            .unwrap()
            .outcome
    }

    #[test]
    fn test_absent_declaration_is_enabled() {
        let result = evaluate_disabled_on_api(None, PLATFORM).unwrap();
        assert_eq!(result.outcome, ConditionOutcome::Enabled);
        assert_eq!(result.reason, "@DisabledOnApi is not present");
    }

    #[test]
    fn test_min_equal_to_platform_disables() {
        assert_eq!(disabled_on(ApiBound::at_least(24)), ConditionOutcome::Disabled);
    }

    #[test]
    fn test_min_above_platform_enables() {
        assert_eq!(disabled_on(ApiBound::at_least(25)), ConditionOutcome::Enabled);
    }

    #[test]
    fn test_max_below_platform_enables() {
        assert_eq!(disabled_on(ApiBound::at_most(23)), ConditionOutcome::Enabled);
    }

    #[test]
    fn test_range_below_platform_enables() {
        assert_eq!(disabled_on(ApiBound::between(21, 23)), ConditionOutcome::Enabled);
    }

    #[test]
    fn test_range_containing_platform_disables() {
        let result = evaluate_disabled_on_api(Some(&ApiBound::between(21, 26)), PLATFORM).unwrap();
        assert_eq!(result.outcome, ConditionOutcome::Disabled);
        assert_eq!(result.reason, "Disabled on API 24");
    }

    #[test]
    fn test_unbounded_declaration_is_configuration_error() {
        let err = evaluate_disabled_on_api(Some(&ApiBound::unbounded()), PLATFORM).unwrap_err();
        assert!(err.is_configuration());
        assert!(
            err.to_string()
                .starts_with("At least one value must be provided in @DisabledOnApi")
        );
    }

    #[test]
    fn test_enabled_on_api_polarity() {
        let inside = evaluate_enabled_on_api(Some(&ApiBound::between(21, 26)), PLATFORM).unwrap();
        assert_eq!(inside.outcome, ConditionOutcome::Enabled);
        assert_eq!(inside.reason, "Enabled on API 24");

        let outside = evaluate_enabled_on_api(Some(&ApiBound::at_least(26)), PLATFORM).unwrap();
        assert_eq!(outside.outcome, ConditionOutcome::Disabled);

        let absent = evaluate_enabled_on_api(None, PLATFORM).unwrap();
        assert_eq!(absent.reason, "@EnabledOnApi is not present");
    }

    #[test]
    fn test_enabled_on_api_rejects_unbounded() {
        assert!(evaluate_enabled_on_api(Some(&ApiBound::unbounded()), PLATFORM).is_err());
    }

    #[test]
    fn test_inverted_range_never_disables() {
        assert_eq!(disabled_on(ApiBound::between(26, 21)), ConditionOutcome::Enabled);
    }

    #[test]
    fn test_error_names_declaring_element() {
        let err = evaluate_declared(
            ApiRule::DisabledOnApi,
            Some(&ApiBound::unbounded()),
            PLATFORM,
            "class ApiTest",
        )
        .unwrap_err();
        assert!(err.to_string().contains("declared on class ApiTest"));
    }
}
