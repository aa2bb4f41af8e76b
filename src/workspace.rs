//! Loading workspace package descriptors from disk.

use std::path::{Path, PathBuf};

use crate::config::DEFAULT_MANIFEST_NAME;
use crate::error::{EdgeError, EdgeResult};
use crate::graph::Package;
use crate::parser::{self, PackageJson};

/// Loads the package rooted at `dir` from its `package.json`.
pub fn load_package(dir: &Path) -> EdgeResult<Package> {
    let path = dir.join(DEFAULT_MANIFEST_NAME);
    let manifest = parser::parse_file(&path)
        .and_then(|pkg| parser::validate(&pkg).map(|()| pkg))
        .map_err(|source| EdgeError::Parse {
            path: path.clone(),
            source,
        })?;
    Ok(into_package(manifest, dir.to_path_buf()))
}

/// Loads every package directory, preserving the given order.
pub fn load_packages<P: AsRef<Path>>(dirs: &[P]) -> EdgeResult<Vec<Package>> {
    dirs.iter().map(|dir| load_package(dir.as_ref())).collect()
}

fn into_package(manifest: PackageJson, folder: PathBuf) -> Package {
    Package {
        name: manifest.name.unwrap_or_default(),
        version: manifest.version.unwrap_or_default(),
        folder,
        dependencies: manifest.dependencies,
        dev_dependencies: manifest.dev_dependencies,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ParseError;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_package() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("package.json"),
            r#"{
                "name": "@acme/app",
                "version": "1.0.0",
                "dependencies": {"@acme/lib": "workspace:^"},
                "devDependencies": {"jest": "^29.0.0"}
            }"#,
        )
        .unwrap();

        let pkg = load_package(tmp.path()).unwrap();
        assert_eq!(pkg.name, "@acme/app");
        assert_eq!(pkg.version, "1.0.0");
        assert_eq!(pkg.folder, tmp.path());
        assert_eq!(pkg.dependency_range("@acme/lib"), Some("workspace:^"));
        assert_eq!(pkg.dev_dependency_range("jest"), Some("^29.0.0"));
    }

    #[test]
    fn test_load_package_without_version_fails() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("package.json"), r#"{"name": "app"}"#).unwrap();

        let err = load_package(tmp.path()).unwrap_err();
        assert!(matches!(
            err,
            EdgeError::Parse {
                source: ParseError::InvalidPackage(_),
                ..
            }
        ));
    }

    #[test]
    fn test_load_packages_preserves_order() {
        let tmp = TempDir::new().unwrap();
        let mut dirs = Vec::new();
        for name in ["zeta", "alpha"] {
            let dir = tmp.path().join(name);
            fs::create_dir(&dir).unwrap();
            fs::write(
                dir.join("package.json"),
                format!(r#"{{"name": "{}", "version": "1.0.0"}}"#, name),
            )
            .unwrap();
            dirs.push(dir);
        }

        let packages = load_packages(&dirs).unwrap();
        let names: Vec<&str> = packages.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["zeta", "alpha"]);
    }

    #[test]
    fn test_load_missing_manifest() {
        let tmp = TempDir::new().unwrap();
        let err = load_package(tmp.path()).unwrap_err();
        assert!(matches!(
            err,
            EdgeError::Parse {
                source: ParseError::IoError(_),
                ..
            }
        ));
    }
}
