//! Graph module for workspace dependency edges.
//!
//! Provides the [`Package`] descriptor, the [`Edge`] output record and the
//! [`EdgeExtractor`] that turns one into the other.
//!
//! # Example
//!
//! ```rust
//! use workspace_edges::config::EdgeConfig;
//! use workspace_edges::graph::{EdgeExtractor, Package};
//! use workspace_edges::install::{InstalledPackage, InstalledResolver};
//! use workspace_edges::EdgeResult;
//! use std::collections::HashSet;
//! use std::path::Path;
//!
//! struct NothingInstalled;
//!
//! impl InstalledResolver for NothingInstalled {
//!     fn resolve_installed(
//!         &self,
//!         _root: &Path,
//!         _names: &HashSet<String>,
//!     ) -> EdgeResult<Vec<InstalledPackage>> {
//!         Ok(Vec::new())
//!     }
//! }
//!
//! let packages = vec![
//!     Package::new("app", "1.0.0", "/ws/app").with_dependency("lib", "^1.0.0"),
//!     Package::new("lib", "1.2.0", "/ws/lib"),
//! ];
//! let edges = EdgeExtractor::new(NothingInstalled, EdgeConfig::default())
//!     .extract(&packages)
//!     .unwrap();
//!
//! assert_eq!(edges.len(), 1);
//! assert_eq!(edges[0].source, "lib");
//! assert_eq!(edges[0].target, "app");
//! assert_eq!(edges[0].dev, Some(false));
//! ```

mod edge;
mod extractor;
mod package;

pub use edge::{Edge, EdgeKind};
pub use extractor::{extract_edges, EdgeExtractor};
pub use package::Package;
