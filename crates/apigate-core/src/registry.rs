//! Condition registry - aggregates and runs all registered conditions.

use serde::Serialize;
use tracing::debug;

use crate::conditions::{DisabledOnApiCondition, EnabledOnApiCondition, ExecutionCondition};
use crate::domain::{ConditionOutcome, EvaluationResult, TestElement};
use crate::error::GateResult;
use crate::ports::PlatformVersionPort;

/// Reason used when every condition left the test enabled.
pub const ENABLED_BY_DEFAULT: &str = "No condition disabled the test";

/// Combined decision for one element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    /// Name of the condition that disabled the test, if any.
    pub condition: Option<String>,
    pub result: EvaluationResult,
}

impl Verdict {
    pub fn is_disabled(&self) -> bool {
        self.result.is_disabled()
    }
}

/// Report line for one element of a batch evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ElementReport {
    pub element: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verdict: Option<Verdict>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Set when `error` is a declaration mistake.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub configuration_error: bool,
}

/// Holds the conditions a host runner consults before running a test.
///
/// The registry keeps no state between calls and can be shared across
/// threads.
pub struct ConditionRegistry {
    conditions: Vec<Box<dyn ExecutionCondition>>,
}

impl ConditionRegistry {
    /// Registry with no conditions; every element is enabled.
    pub fn empty() -> Self {
        Self {
            conditions: Vec::new(),
        }
    }

    /// Registry with the API level conditions registered.
    pub fn with_defaults() -> Self {
        let conditions: Vec<Box<dyn ExecutionCondition>> = vec![
            Box::new(DisabledOnApiCondition),
            Box::new(EnabledOnApiCondition),
        ];
        Self { conditions }
    }

    /// Add a condition; it runs after those already registered.
    pub fn register(&mut self, condition: impl ExecutionCondition + 'static) -> &mut Self {
        self.conditions.push(Box::new(condition));
        self
    }

    /// Names of the registered conditions, in evaluation order.
    pub fn names(&self) -> Vec<&str> {
        self.conditions.iter().map(|c| c.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// Run every condition against `element`.
    ///
    /// The first disabling result wins. An error from any condition
    /// aborts the evaluation.
    pub fn evaluate(
        &self,
        element: &TestElement,
        platform: &dyn PlatformVersionPort,
    ) -> GateResult<Verdict> {
        for condition in &self.conditions {
            let result = condition.evaluate(element, platform)?;
            if result.outcome == ConditionOutcome::Disabled {
                debug!(
                    element = %element,
                    condition = condition.name(),
                    reason = %result.reason,
                    "Test disabled"
                );
                return Ok(Verdict {
                    condition: Some(condition.name().to_string()),
                    result,
                });
            }
        }

        Ok(Verdict {
            condition: None,
            result: EvaluationResult::enabled(ENABLED_BY_DEFAULT),
        })
    }

    /// Evaluate a batch of elements, keeping errors per element.
    pub fn evaluate_all<'a, I>(
        &self,
        elements: I,
        platform: &dyn PlatformVersionPort,
    ) -> Vec<ElementReport>
    where
        I: IntoIterator<Item = &'a TestElement>,
    {
        elements
            .into_iter()
            .map(|element| match self.evaluate(element, platform) {
                Ok(verdict) => ElementReport {
                    element: element.display_path(),
                    verdict: Some(verdict),
                    error: None,
                    configuration_error: false,
                },
                Err(err) => ElementReport {
                    element: element.display_path(),
                    verdict: None,
                    configuration_error: err.is_configuration(),
                    error: Some(err.to_string()),
                },
            })
            .collect()
    }
}

impl Default for ConditionRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
