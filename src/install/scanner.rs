//! Filesystem scanner for `node_modules` directories.
//!
//! Only one level is read, plus one more level inside `@scope`
//! directories. Entries are visited in file-name order so repeated scans
//! of an unchanged tree return identical results.

use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use super::{InstalledPackage, InstalledResolver};
use crate::config::EdgeConfig;
use crate::error::{EdgeError, EdgeResult};

/// The two manifest fields an installed copy must expose.
#[derive(Debug, Deserialize)]
struct InstalledManifest {
    name: Option<String>,
    version: Option<String>,
}

/// Reads installed packages from `<root>/<install_dir>`.
#[derive(Debug, Clone, Default)]
pub struct NodeModulesScanner {
    config: EdgeConfig,
}

impl NodeModulesScanner {
    /// Creates a scanner with the given settings.
    pub fn new(config: EdgeConfig) -> Self {
        Self { config }
    }

    /// Returns the install directory for a package root.
    pub fn install_root(&self, root: &Path) -> PathBuf {
        root.join(&self.config.install_dir)
    }

    /// Lists the immediate children of `dir`, sorted by file name.
    fn children(&self, dir: &Path) -> EdgeResult<Vec<DirEntry>> {
        WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
            .into_iter()
            .map(|entry| entry.map_err(|err| walk_error(err, dir)))
            .collect()
    }

    fn read_manifest(&self, package_dir: &Path) -> EdgeResult<(PathBuf, InstalledManifest)> {
        let path = package_dir.join(&self.config.manifest_name);
        let content = fs::read_to_string(&path).map_err(|source| EdgeError::Io {
            path: path.clone(),
            source,
        })?;
        match serde_json::from_str(&content) {
            Ok(manifest) => Ok((path, manifest)),
            Err(source) => Err(EdgeError::Manifest { path, source }),
        }
    }

    /// Reads an unscoped entry. The reported name comes from the manifest.
    fn read_package(&self, entry_name: &str, folder: PathBuf) -> EdgeResult<InstalledPackage> {
        let (path, manifest) = self.read_manifest(&folder)?;
        let version = manifest.version.ok_or(EdgeError::MissingField {
            path,
            field: "version",
        })?;
        let name = manifest.name.unwrap_or_else(|| entry_name.to_string());
        Ok(InstalledPackage::new(name, version, folder))
    }

    /// Reads a package inside a scope directory under its combined name.
    fn read_scoped_package(
        &self,
        scoped_name: String,
        folder: PathBuf,
    ) -> EdgeResult<InstalledPackage> {
        let (path, manifest) = self.read_manifest(&folder)?;
        let version = manifest.version.ok_or(EdgeError::MissingField {
            path,
            field: "version",
        })?;
        Ok(InstalledPackage::new(scoped_name, version, folder))
    }
}

impl InstalledResolver for NodeModulesScanner {
    fn resolve_installed(
        &self,
        root: &Path,
        names: &HashSet<String>,
    ) -> EdgeResult<Vec<InstalledPackage>> {
        let install_root = self.install_root(root);
        if !install_root.is_dir() {
            return Err(EdgeError::MissingInstallDir { path: install_root });
        }

        let mut seen: HashSet<String> = HashSet::new();
        let mut installed = Vec::new();

        for entry in self.children(&install_root)? {
            let Some(entry_name) = entry.file_name().to_str() else {
                continue;
            };

            if entry_name.starts_with('@') && entry.path().is_dir() {
                for child in self.children(entry.path())? {
                    let Some(child_name) = child.file_name().to_str() else {
                        continue;
                    };
                    let scoped_name = format!("{}/{}", entry_name, child_name);
                    if !names.contains(&scoped_name) || seen.contains(&scoped_name) {
                        continue;
                    }
                    let record =
                        self.read_scoped_package(scoped_name, child.path().to_path_buf())?;
                    tracing::trace!(name = %record.name, version = %record.version, "found scoped install");
                    seen.insert(record.name.clone());
                    installed.push(record);
                }
            } else if names.contains(entry_name) {
                let record = self.read_package(entry_name, entry.path().to_path_buf())?;
                if !seen.insert(record.name.clone()) {
                    continue;
                }
                tracing::trace!(name = %record.name, version = %record.version, "found install");
                installed.push(record);
            }
        }

        tracing::debug!(
            root = %install_root.display(),
            count = installed.len(),
            "scanned install directory"
        );
        Ok(installed)
    }
}

/// Scans `<root>/node_modules` with the default settings.
///
/// # Example
///
/// ```no_run
/// use std::collections::HashSet;
/// use std::path::Path;
/// use workspace_edges::install::scan_installed;
///
/// let names: HashSet<String> = ["lodash".to_string()].into_iter().collect();
/// let installed = scan_installed(Path::new("packages/app"), &names).unwrap();
/// for pkg in installed {
///     println!("{}@{}", pkg.name, pkg.version);
/// }
/// ```
pub fn scan_installed(root: &Path, names: &HashSet<String>) -> EdgeResult<Vec<InstalledPackage>> {
    NodeModulesScanner::default().resolve_installed(root, names)
}

fn walk_error(err: walkdir::Error, dir: &Path) -> EdgeError {
    let path = err
        .path()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| dir.to_path_buf());
    let source = err
        .into_io_error()
        .unwrap_or_else(|| io::Error::new(io::ErrorKind::Other, "filesystem loop"));
    EdgeError::Io { path, source }
}
