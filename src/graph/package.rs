//! Workspace package descriptors.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// A workspace package as consumed by edge extraction.
///
/// Built from the package's own manifest plus the directory it lives in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    /// Unique package name, possibly scoped (e.g. "@scope/name").
    pub name: String,
    /// Version this package currently publishes.
    pub version: String,
    /// Package root directory.
    pub folder: PathBuf,
    /// Runtime dependencies: name -> declared range.
    #[serde(default)]
    pub dependencies: Option<HashMap<String, String>>,
    /// Development dependencies: name -> declared range.
    #[serde(default)]
    pub dev_dependencies: Option<HashMap<String, String>>,
}

impl Package {
    /// Creates a package with no declared dependencies.
    ///
    /// # Example
    ///
    /// ```
    /// use workspace_edges::graph::Package;
    ///
    /// let pkg = Package::new("app", "1.0.0", "/ws/app")
    ///     .with_dependency("lib", "^1.0.0")
    ///     .with_dev_dependency("jest", "^29.0.0");
    /// assert_eq!(pkg.dependency_range("lib"), Some("^1.0.0"));
    /// assert!(pkg.has_dependencies());
    /// ```
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        folder: impl Into<PathBuf>,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            folder: folder.into(),
            dependencies: None,
            dev_dependencies: None,
        }
    }

    /// Adds a runtime dependency.
    pub fn with_dependency(mut self, name: impl Into<String>, range: impl Into<String>) -> Self {
        self.dependencies
            .get_or_insert_with(HashMap::new)
            .insert(name.into(), range.into());
        self
    }

    /// Adds a development dependency.
    pub fn with_dev_dependency(
        mut self,
        name: impl Into<String>,
        range: impl Into<String>,
    ) -> Self {
        self.dev_dependencies
            .get_or_insert_with(HashMap::new)
            .insert(name.into(), range.into());
        self
    }

    /// Declared runtime range for `name`, if any.
    pub fn dependency_range(&self, name: &str) -> Option<&str> {
        self.dependencies
            .as_ref()
            .and_then(|deps| deps.get(name))
            .map(String::as_str)
    }

    /// Declared development range for `name`, if any.
    pub fn dev_dependency_range(&self, name: &str) -> Option<&str> {
        self.dev_dependencies
            .as_ref()
            .and_then(|deps| deps.get(name))
            .map(String::as_str)
    }

    /// Returns true if either dependency map is present and non-empty.
    pub fn has_dependencies(&self) -> bool {
        self.dependencies.as_ref().is_some_and(|d| !d.is_empty())
            || self
                .dev_dependencies
                .as_ref()
                .is_some_and(|d| !d.is_empty())
    }
}
