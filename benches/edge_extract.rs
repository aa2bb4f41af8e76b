//! Benchmarks for edge extraction
//!
//! Measures the pairwise direct-edge pass and deduped-edge lookup on
//! synthetic workspaces, with installs served from memory.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::collections::HashSet;
use std::path::Path;
use workspace_edges::config::EdgeConfig;
use workspace_edges::graph::{EdgeExtractor, Package};
use workspace_edges::install::{InstalledPackage, InstalledResolver};
use workspace_edges::EdgeResult;

/// Reports every other workspace package as installed at version 0.0.1.
struct EverythingInstalled;

impl InstalledResolver for EverythingInstalled {
    fn resolve_installed(
        &self,
        root: &Path,
        names: &HashSet<String>,
    ) -> EdgeResult<Vec<InstalledPackage>> {
        let mut sorted: Vec<&String> = names.iter().collect();
        sorted.sort();
        Ok(sorted
            .into_iter()
            .step_by(2)
            .map(|name| {
                InstalledPackage::new(name.clone(), "0.0.1", root.join("node_modules").join(name))
            })
            .collect())
    }
}

/// Create a workspace where each package depends on the next `fan_out` packages
fn create_workspace(size: usize, fan_out: usize) -> Vec<Package> {
    (0..size)
        .map(|i| {
            let mut pkg = Package::new(format!("pkg-{}", i), "1.0.0", format!("/ws/pkg-{}", i));
            for j in (i + 1)..(i + 1 + fan_out).min(size) {
                pkg = pkg.with_dependency(format!("pkg-{}", j), "^1.0.0");
            }
            pkg
        })
        .collect()
}

fn bench_extract(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract_edges");
    let extractor = EdgeExtractor::new(EverythingInstalled, EdgeConfig::default());

    for size in [10, 100, 500] {
        let packages = create_workspace(size, 5);
        group.bench_with_input(BenchmarkId::from_parameter(size), &packages, |b, packages| {
            b.iter(|| extractor.extract(black_box(packages)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
