//! Edge records produced by extraction.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// How an edge was discovered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeKind {
    /// Declared in `dependencies`.
    Production,
    /// Declared in `devDependencies`.
    Development,
    /// Found installed on disk without a direct declaration.
    Deduped,
}

impl EdgeKind {
    /// Returns a short label for the edge kind.
    pub fn label(&self) -> &'static str {
        match self {
            EdgeKind::Production => "prod",
            EdgeKind::Development => "dev",
            EdgeKind::Deduped => "deduped",
        }
    }
}

impl fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EdgeKind::Production => "production",
            EdgeKind::Development => "development",
            EdgeKind::Deduped => "deduped",
        };
        write!(f, "{}", s)
    }
}

/// "`target` currently depends on `source`."
///
/// Serializes with camelCase keys; `dev` is omitted for deduped edges
/// since the declaration type cannot be recovered from an installed copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Edge {
    /// Name of the depended-upon package.
    pub source: String,
    /// Directory of the depended-upon package (or its installed copy).
    pub source_folder: PathBuf,
    /// Name of the depending package.
    pub target: String,
    /// Directory of the depending package.
    pub target_folder: PathBuf,
    /// Declared range, or the installed version for deduped edges.
    pub curr_version: String,
    /// Version the source package currently produces.
    pub next_version: String,
    /// Whether the edge comes from `devDependencies`; `None` when deduped.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dev: Option<bool>,
}

impl Edge {
    /// Returns how this edge was discovered.
    pub fn kind(&self) -> EdgeKind {
        match self.dev {
            Some(false) => EdgeKind::Production,
            Some(true) => EdgeKind::Development,
            None => EdgeKind::Deduped,
        }
    }

    /// Returns true if the edge was found by scanning installs.
    pub fn is_deduped(&self) -> bool {
        self.dev.is_none()
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {}@{} (now {}, {})",
            self.target,
            self.source,
            self.next_version,
            self.curr_version,
            self.kind()
        )
    }
}
