//! Declarative test inventory.
//!
//! A manifest lists test classes, their nested classes and methods, and the
//! API level declarations each carries. It stands in for annotation scanning:
//! the host (or the CLI) loads it and hands the flattened elements to a
//! [`ConditionRegistry`](crate::registry::ConditionRegistry).
//!
//! ```json
//! {
//!   "classes": [
//!     {
//!       "name": "CameraTest",
//!       "disabled_on_api": { "max": 23 },
//!       "methods": [{ "name": "capture", "enabled_on_api": { "min": 26 } }],
//!       "nested": []
//!     }
//!   ]
//! }
//! ```
//!
//! Bounds are not validated here. An empty bound is reported when the
//! element is evaluated, as a configuration error naming its owner.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{Annotations, ApiBound, TestElement};

/// Manifest loading errors.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("Failed to read manifest {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid manifest: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A test method declaration.
///
/// Unknown keys are rejected so a misspelled declaration cannot vanish.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MethodSpec {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled_on_api: Option<ApiBound>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled_on_api: Option<ApiBound>,
}

impl MethodSpec {
    pub fn annotations(&self) -> Annotations {
        Annotations {
            disabled_on_api: self.disabled_on_api,
            enabled_on_api: self.enabled_on_api,
        }
    }
}

/// A test class declaration with its methods and nested classes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClassSpec {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled_on_api: Option<ApiBound>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled_on_api: Option<ApiBound>,
    #[serde(default)]
    pub methods: Vec<MethodSpec>,
    #[serde(default)]
    pub nested: Vec<ClassSpec>,
}

impl ClassSpec {
    pub fn annotations(&self) -> Annotations {
        Annotations {
            disabled_on_api: self.disabled_on_api,
            enabled_on_api: self.enabled_on_api,
        }
    }
}

/// Root of a manifest document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    #[serde(default)]
    pub classes: Vec<ClassSpec>,
}

impl Manifest {
    pub fn from_json_str(json: &str) -> Result<Self, ManifestError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a manifest file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ManifestError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ManifestError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&content)
    }

    /// Flatten into elements, depth-first in declaration order.
    ///
    /// Each class is followed by its methods, then its nested classes.
    pub fn elements(&self) -> Vec<TestElement> {
        let mut out = Vec::new();
        for class in &self.classes {
            collect_class(class, None, &mut out);
        }
        out
    }
}

fn collect_class(
    spec: &ClassSpec,
    enclosing: Option<&Arc<TestElement>>,
    out: &mut Vec<TestElement>,
) {
    let class = Arc::new(match enclosing {
        Some(parent) => TestElement::nested_class(parent, &spec.name, spec.annotations()),
        None => TestElement::class(&spec.name, spec.annotations()),
    });

    out.push(class.as_ref().clone());
    out.extend(
        spec.methods
            .iter()
            .map(|m| TestElement::method(&class, &m.name, m.annotations())),
    );

    for nested in &spec.nested {
        collect_class(nested, Some(&class), out);
    }
}
