//! workspace-edges - dependency edges between the packages of a workspace
//!
//! Combines each package's declared `dependencies`/`devDependencies` with
//! what is actually installed under its `node_modules`, so that deduped
//! (hoisted) workspace dependencies show up as edges too.

pub mod config;
pub mod error;
pub mod export;
pub mod graph;
pub mod install;
pub mod parser;
pub mod workspace;

pub use error::{EdgeError, EdgeResult};
pub use graph::{extract_edges, Edge, EdgeExtractor, Package};
