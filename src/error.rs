//! Error type shared by the scanner, the extractor and the loader.

use std::path::PathBuf;

use crate::parser::ParseError;

/// Errors that abort an edge extraction.
///
/// There is no partial-results mode: any of these ends the call.
#[derive(Debug, thiserror::Error)]
pub enum EdgeError {
    /// The install directory does not exist under a scanned root.
    #[error("install directory not found: {}", path.display())]
    MissingInstallDir { path: PathBuf },

    /// A directory or manifest could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An installed manifest is not valid JSON.
    #[error("malformed manifest {}: {source}", path.display())]
    Manifest {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// An installed manifest lacks a required field.
    #[error("manifest {} has no `{field}` field", path.display())]
    MissingField { path: PathBuf, field: &'static str },

    /// An installed package has no matching workspace descriptor.
    #[error("package `{name}` installed under `{parent}` is not a known workspace package")]
    UnknownPackage { name: String, parent: String },

    /// Two descriptors share the same name.
    #[error("duplicate package name `{name}` in input")]
    DuplicatePackage { name: String },

    /// A workspace package manifest could not be loaded.
    #[error("failed to load {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },
}

/// Result type alias for edge extraction.
pub type EdgeResult<T> = Result<T, EdgeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_includes_path() {
        let err = EdgeError::MissingInstallDir {
            path: PathBuf::from("/ws/app/node_modules"),
        };
        assert_eq!(
            err.to_string(),
            "install directory not found: /ws/app/node_modules"
        );
    }

    #[test]
    fn test_unknown_package_display() {
        let err = EdgeError::UnknownPackage {
            name: "ghost".to_string(),
            parent: "app".to_string(),
        };
        assert!(err.to_string().contains("`ghost`"));
        assert!(err.to_string().contains("`app`"));
    }

    #[test]
    fn test_missing_field_display() {
        let err = EdgeError::MissingField {
            path: PathBuf::from("pkg/package.json"),
            field: "version",
        };
        assert_eq!(
            err.to_string(),
            "manifest pkg/package.json has no `version` field"
        );
    }
}
