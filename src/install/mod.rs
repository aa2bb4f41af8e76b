//! Discovery of packages physically installed under a package root.
//!
//! Declared manifests do not show dependencies that a package manager
//! hoisted or deduped into a package's `node_modules`. This module reads
//! what is actually installed there, behind the [`InstalledResolver`]
//! trait so callers can substitute their own source of truth.

mod scanner;

pub use scanner::{scan_installed, NodeModulesScanner};

use serde::Serialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::error::EdgeResult;

/// A package found installed under a root's install directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstalledPackage {
    /// Package name as declared by the installed manifest.
    pub name: String,
    /// Installed version.
    pub version: String,
    /// Directory of the installed copy.
    pub folder: PathBuf,
}

impl InstalledPackage {
    /// Creates a new installed package record.
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        folder: impl Into<PathBuf>,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            folder: folder.into(),
        }
    }
}

/// Resolves which packages of interest are installed under a root.
pub trait InstalledResolver {
    /// Returns at most one record per installed name found in `names`.
    fn resolve_installed(
        &self,
        root: &Path,
        names: &HashSet<String>,
    ) -> EdgeResult<Vec<InstalledPackage>>;
}

impl<R: InstalledResolver + ?Sized> InstalledResolver for &R {
    fn resolve_installed(
        &self,
        root: &Path,
        names: &HashSet<String>,
    ) -> EdgeResult<Vec<InstalledPackage>> {
        (**self).resolve_installed(root, names)
    }
}
