//! Shared types for manifest parsing.
//!
//! This module defines the subset of a package.json document that
//! edge extraction cares about.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Represents the structure of a package.json file.
///
/// Only the fields needed to describe a workspace package are captured;
/// everything else in the document is ignored.
///
/// # Example
///
/// ```
/// use workspace_edges::parser::types::PackageJson;
///
/// let json = r#"{"name": "my-app", "version": "1.0.0"}"#;
/// let pkg: PackageJson = serde_json::from_str(json).unwrap();
/// assert_eq!(pkg.name, Some("my-app".to_string()));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PackageJson {
    /// The name of the package.
    pub name: Option<String>,

    /// The version of the package (semver format).
    pub version: Option<String>,

    /// A brief description of the package.
    pub description: Option<String>,

    /// Production dependencies required at runtime.
    pub dependencies: Option<HashMap<String, String>>,

    /// Development-only dependencies (testing, building, etc.).
    #[serde(rename = "devDependencies")]
    pub dev_dependencies: Option<HashMap<String, String>>,
}

impl PackageJson {
    /// Returns true if the package declares any runtime or dev dependency.
    pub fn has_dependencies(&self) -> bool {
        self.dependencies.as_ref().is_some_and(|d| !d.is_empty())
            || self
                .dev_dependencies
                .as_ref()
                .is_some_and(|d| !d.is_empty())
    }

    /// Returns the total count of declared dependencies.
    pub fn dependency_count(&self) -> usize {
        self.dependencies.as_ref().map_or(0, |d| d.len())
            + self.dev_dependencies.as_ref().map_or(0, |d| d.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_json_default() {
        let pkg = PackageJson::default();
        assert!(pkg.name.is_none());
        assert!(!pkg.has_dependencies());
        assert_eq!(pkg.dependency_count(), 0);
    }

    #[test]
    fn test_package_json_has_dependencies() {
        let mut pkg = PackageJson::default();
        assert!(!pkg.has_dependencies());

        let mut deps = HashMap::new();
        deps.insert("react".to_string(), "^18.0.0".to_string());
        pkg.dependencies = Some(deps);

        assert!(pkg.has_dependencies());
        assert_eq!(pkg.dependency_count(), 1);
    }

    #[test]
    fn test_empty_maps_are_not_dependencies() {
        let pkg = PackageJson {
            dependencies: Some(HashMap::new()),
            dev_dependencies: Some(HashMap::new()),
            ..Default::default()
        };
        assert!(!pkg.has_dependencies());
    }

    #[test]
    fn test_dev_dependencies_rename() {
        let json = r#"{"devDependencies": {"jest": "^29.0.0"}}"#;
        let pkg: PackageJson = serde_json::from_str(json).unwrap();
        assert_eq!(
            pkg.dev_dependencies.unwrap().get("jest").map(String::as_str),
            Some("^29.0.0")
        );
    }
}
