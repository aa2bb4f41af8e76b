//! Edge extraction over a set of workspace packages.
//!
//! Direct edges come from each package's declared `dependencies` and
//! `devDependencies`. Deduped edges come from packages that are installed
//! under a package's install directory without being declared there.

use std::collections::{HashMap, HashSet};

use super::edge::Edge;
use super::package::Package;
use crate::config::EdgeConfig;
use crate::error::{EdgeError, EdgeResult};
use crate::install::{InstalledPackage, InstalledResolver, NodeModulesScanner};

/// Computes dependency edges between workspace packages.
///
/// # Example
///
/// ```no_run
/// use workspace_edges::graph::{EdgeExtractor, Package};
///
/// let packages = vec![
///     Package::new("app", "1.0.0", "/ws/app").with_dependency("lib", "^1.0.0"),
///     Package::new("lib", "1.2.0", "/ws/lib"),
/// ];
/// let edges = EdgeExtractor::default().extract(&packages).unwrap();
/// assert_eq!(edges[0].source, "lib");
/// ```
#[derive(Debug, Clone)]
pub struct EdgeExtractor<R> {
    resolver: R,
    config: EdgeConfig,
}

impl Default for EdgeExtractor<NodeModulesScanner> {
    fn default() -> Self {
        Self::with_config(EdgeConfig::default())
    }
}

impl EdgeExtractor<NodeModulesScanner> {
    /// Creates an extractor that scans the filesystem with `config`.
    pub fn with_config(config: EdgeConfig) -> Self {
        Self {
            resolver: NodeModulesScanner::new(config.clone()),
            config,
        }
    }
}

impl<R: InstalledResolver> EdgeExtractor<R> {
    /// Creates an extractor backed by a custom resolver.
    pub fn new(resolver: R, config: EdgeConfig) -> Self {
        Self { resolver, config }
    }

    /// Extracts every edge for `packages`.
    ///
    /// Edges of one parent are contiguous, direct edges first. Parents
    /// follow input order. Any scan failure aborts the whole call.
    pub fn extract(&self, packages: &[Package]) -> EdgeResult<Vec<Edge>> {
        let index = index_packages(packages)?;
        let names: HashSet<String> = packages.iter().map(|p| p.name.clone()).collect();
        let mut edges = Vec::new();

        for (i, parent) in packages.iter().enumerate() {
            let mut matched: HashSet<&str> = HashSet::new();

            for (j, dependency) in packages.iter().enumerate() {
                if i == j {
                    continue;
                }
                if let Some(range) = parent.dependency_range(&dependency.name) {
                    edges.push(direct_edge(parent, dependency, range, false));
                    matched.insert(&dependency.name);
                }
                if let Some(range) = parent.dev_dependency_range(&dependency.name) {
                    edges.push(direct_edge(parent, dependency, range, true));
                    matched.insert(&dependency.name);
                }
            }

            if !parent.has_dependencies() {
                continue;
            }

            let direct = matched.len();
            let mut deduped = 0;
            for installed in self.resolver.resolve_installed(&parent.folder, &names)? {
                if matched.contains(installed.name.as_str()) {
                    continue;
                }
                let descriptor = index.get(installed.name.as_str()).ok_or_else(|| {
                    EdgeError::UnknownPackage {
                        name: installed.name.clone(),
                        parent: parent.name.clone(),
                    }
                })?;
                if self.config.skip_matching_installs && installed.version == descriptor.version {
                    tracing::trace!(
                        parent = %parent.name,
                        name = %installed.name,
                        "skipping install matching published version"
                    );
                    continue;
                }
                edges.push(deduped_edge(parent, descriptor, installed));
                deduped += 1;
            }

            tracing::debug!(parent = %parent.name, direct, deduped, "extracted edges");
        }

        Ok(edges)
    }
}

/// Extracts edges scanning `node_modules` with the default settings.
pub fn extract_edges(packages: &[Package]) -> EdgeResult<Vec<Edge>> {
    EdgeExtractor::default().extract(packages)
}

/// Builds the name lookup, rejecting duplicate names.
fn index_packages(packages: &[Package]) -> EdgeResult<HashMap<&str, &Package>> {
    let mut index = HashMap::with_capacity(packages.len());
    for package in packages {
        if index.insert(package.name.as_str(), package).is_some() {
            return Err(EdgeError::DuplicatePackage {
                name: package.name.clone(),
            });
        }
    }
    Ok(index)
}

fn direct_edge(parent: &Package, dependency: &Package, range: &str, dev: bool) -> Edge {
    Edge {
        source: dependency.name.clone(),
        source_folder: dependency.folder.clone(),
        target: parent.name.clone(),
        target_folder: parent.folder.clone(),
        curr_version: range.to_string(),
        next_version: dependency.version.clone(),
        dev: Some(dev),
    }
}

fn deduped_edge(parent: &Package, descriptor: &Package, installed: InstalledPackage) -> Edge {
    Edge {
        source: installed.name,
        source_folder: installed.folder,
        target: parent.name.clone(),
        target_folder: parent.folder.clone(),
        curr_version: installed.version,
        next_version: descriptor.version.clone(),
        dev: None,
    }
}
