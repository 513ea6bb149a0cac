//! Test classes and methods as the host framework hands them over.
//!
//! Each element knows its parent: a method points at its declaring class,
//! a nested class at its enclosing class. Declaration lookup walks that
//! chain nearest-first, so a method-level declaration overrides the class
//! one, which in turn overrides the enclosing class.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::ApiBound;

/// Kind of test element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    Class,
    Method,
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Class => f.write_str("class"),
            Self::Method => f.write_str("method"),
        }
    }
}

/// API level declarations carried directly by one element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Annotations {
    /// Disable the test when the platform is inside this range.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled_on_api: Option<ApiBound>,

    /// Enable the test only when the platform is inside this range.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled_on_api: Option<ApiBound>,
}

impl Annotations {
    pub const fn none() -> Self {
        Self {
            disabled_on_api: None,
            enabled_on_api: None,
        }
    }

    #[must_use]
    pub fn with_disabled_on_api(mut self, bound: ApiBound) -> Self {
        self.disabled_on_api = Some(bound);
        self
    }

    #[must_use]
    pub fn with_enabled_on_api(mut self, bound: ApiBound) -> Self {
        self.enabled_on_api = Some(bound);
        self
    }
}

/// A test class or method together with its enclosing chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestElement {
    pub name: String,
    pub kind: ElementKind,
    pub annotations: Annotations,
    pub parent: Option<Arc<TestElement>>,
}

impl TestElement {
    /// Top-level test class.
    pub fn class(name: impl Into<String>, annotations: Annotations) -> Self {
        Self {
            name: name.into(),
            kind: ElementKind::Class,
            annotations,
            parent: None,
        }
    }

    /// Class nested inside `enclosing`.
    pub fn nested_class(
        enclosing: &Arc<Self>,
        name: impl Into<String>,
        annotations: Annotations,
    ) -> Self {
        Self {
            name: name.into(),
            kind: ElementKind::Class,
            annotations,
            parent: Some(Arc::clone(enclosing)),
        }
    }

    /// Test method declared by `class`.
    pub fn method(class: &Arc<Self>, name: impl Into<String>, annotations: Annotations) -> Self {
        Self {
            name: name.into(),
            kind: ElementKind::Method,
            annotations,
            parent: Some(Arc::clone(class)),
        }
    }

    /// Iterate this element and its ancestors, nearest first.
    pub fn ancestry(&self) -> impl Iterator<Item = &Self> {
        std::iter::successors(Some(self), |element| element.parent.as_deref())
    }

    /// Find the nearest declaration picked out by `select`.
    ///
    /// Returns the declaration and the element that carries it.
    pub fn find_annotation<T, F>(&self, select: F) -> Option<(&Self, &T)>
    where
        F: Fn(&Annotations) -> Option<&T>,
    {
        self.ancestry()
            .find_map(|element| select(&element.annotations).map(|found| (element, found)))
    }

    /// `Outer::Inner::method` style path for reports and diagnostics.
    pub fn display_path(&self) -> String {
        let mut names: Vec<&str> = self.ancestry().map(|e| e.name.as_str()).collect();
        names.reverse();
        names.join("::")
    }
}

impl fmt::Display for TestElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.display_path())
    }
}
