//! Declared API level ranges.
//!
//! A bound is an inclusive range `[min, max]` where either end may be
//! left open. "Not set" is modelled as `None`, never as a magic number,
//! so no real API level can collide with it.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Inclusive API level range attached to a test class or method.
///
/// A bound with neither end set is representable so that a bad
/// declaration can be parsed and then rejected at evaluation time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ApiBound {
    /// Lowest matching API level (inclusive).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<u32>,

    /// Highest matching API level (inclusive).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
}

impl ApiBound {
    /// Bound matching `min` and everything above it.
    #[must_use]
    pub const fn at_least(min: u32) -> Self {
        Self {
            min: Some(min),
            max: None,
        }
    }

    /// Bound matching `max` and everything below it.
    #[must_use]
    pub const fn at_most(max: u32) -> Self {
        Self {
            min: None,
            max: Some(max),
        }
    }

    /// Bound matching `min..=max`.
    #[must_use]
    pub const fn between(min: u32, max: u32) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    /// Bound with neither end set. Evaluating it is a configuration error.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self {
            min: None,
            max: None,
        }
    }

    pub const fn has_lower(&self) -> bool {
        self.min.is_some()
    }

    pub const fn has_upper(&self) -> bool {
        self.max.is_some()
    }

    /// At least one end is set.
    pub const fn is_declared(&self) -> bool {
        self.has_lower() || self.has_upper()
    }

    /// Both ends set with `min > max`. Such a bound never matches.
    pub const fn is_inverted(&self) -> bool {
        matches!((self.min, self.max), (Some(min), Some(max)) if min > max)
    }

    /// Whether `version` falls inside the range.
    ///
    /// An open end is satisfied automatically, so an undeclared bound
    /// matches everything; callers must reject it before asking.
    pub fn matches(&self, version: u32) -> bool {
        let lower_satisfied = self.min.is_none_or(|min| version >= min);
        let upper_satisfied = self.max.is_none_or(|max| version <= max);
        lower_satisfied && upper_satisfied
    }
}

impl fmt::Display for ApiBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.min, self.max) {
            (Some(min), Some(max)) => write!(f, "[{min}, {max}]"),
            (Some(min), None) => write!(f, "[{min}, ∞)"),
            (None, Some(max)) => write!(f, "(-∞, {max}]"),
            (None, None) => f.write_str("(unbounded)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lower_bound_is_inclusive() {
        let bound = ApiBound::at_least(24);
        assert!(bound.matches(24));
        assert!(bound.matches(33));
        assert!(!bound.matches(23));
    }

    #[test]
    fn test_upper_bound_is_inclusive() {
        let bound = ApiBound::at_most(23);
        assert!(bound.matches(23));
        assert!(bound.matches(0));
        assert!(!bound.matches(24));
    }

    #[test]
    fn test_inverted_bound_never_matches() {
        let bound = ApiBound::between(26, 21);
        assert!(bound.is_inverted());
        for version in 0..40 {
            assert!(!bound.matches(version));
        }
    }

    #[test]
    fn test_is_declared() {
        assert!(ApiBound::at_least(1).is_declared());
        assert!(ApiBound::at_most(1).is_declared());
        assert!(!ApiBound::unbounded().is_declared());
        assert_eq!(ApiBound::default(), ApiBound::unbounded());
    }

    #[test]
    fn test_display() {
        assert_eq!(ApiBound::between(21, 26).to_string(), "[21, 26]");
        assert_eq!(ApiBound::at_least(21).to_string(), "[21, ∞)");
        assert_eq!(ApiBound::at_most(23).to_string(), "(-∞, 23]");
        assert_eq!(ApiBound::unbounded().to_string(), "(unbounded)");
    }

    #[test]
    fn test_deserialize_missing_ends_as_unset() {
        let bound: ApiBound = serde_json::from_str(r#"{"min": 21}"#).unwrap();
        assert_eq!(bound, ApiBound::at_least(21));

        let empty: ApiBound = serde_json::from_str("{}").unwrap();
        assert!(!empty.is_declared());
    }

    #[test]
    fn test_deserialize_rejects_unknown_keys() {
        let result: Result<ApiBound, _> = serde_json::from_str(r#"{"minimum": 21}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_serialize_skips_unset_ends() {
        let json = serde_json::to_string(&ApiBound::at_most(23)).unwrap();
        assert_eq!(json, r#"{"max":23}"#);
    }
}
