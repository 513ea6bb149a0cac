//! Core domain types.
//!
//! These types describe declarations and outcomes only. They hold no
//! reference to the platform or to any host test framework.
//!
//! # Structure
//!
//! - `bound` - Declared API level ranges (`ApiBound`)
//! - `outcome` - Enabled/disabled results with a reason
//! - `element` - Test classes and methods with their declarations

mod bound;
mod element;
mod outcome;

pub use bound::ApiBound;
pub use element::{Annotations, ElementKind, TestElement};
pub use outcome::{ConditionOutcome, EvaluationResult};
