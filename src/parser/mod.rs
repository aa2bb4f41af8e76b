//! Parser module for package manifests.
//!
//! Reads `package.json` documents for workspace packages and for the
//! installed copies found under `node_modules`.
//!
//! # Example
//!
//! ```
//! use workspace_edges::parser::{parse_str, validate};
//!
//! let pkg = parse_str(r#"{"name": "app", "version": "1.0.0"}"#).unwrap();
//! assert!(validate(&pkg).is_ok());
//! ```

pub mod package_json;
pub mod types;

pub use package_json::{parse_file, parse_str, validate, ParseError, ParseResult};

pub use types::PackageJson;
