//! Extraction settings.

/// Default name of the per-package install directory.
pub const DEFAULT_INSTALL_DIR: &str = "node_modules";

/// Default name of the manifest file inside each package directory.
pub const DEFAULT_MANIFEST_NAME: &str = "package.json";

/// Settings shared by the scanner and the extractor.
///
/// # Example
///
/// ```
/// use workspace_edges::config::EdgeConfig;
///
/// let config = EdgeConfig::default().with_skip_matching_installs(true);
/// assert_eq!(config.install_dir, "node_modules");
/// assert!(config.skip_matching_installs);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeConfig {
    /// Directory under each package root holding installed dependencies.
    pub install_dir: String,
    /// Manifest file name read from every installed package.
    pub manifest_name: String,
    /// Skip deduped edges whose installed version equals the version the
    /// workspace package produces. Off by default, so every installed
    /// copy is reported.
    pub skip_matching_installs: bool,
}

impl Default for EdgeConfig {
    fn default() -> Self {
        Self {
            install_dir: DEFAULT_INSTALL_DIR.to_string(),
            manifest_name: DEFAULT_MANIFEST_NAME.to_string(),
            skip_matching_installs: false,
        }
    }
}

impl EdgeConfig {
    /// Sets the install directory name.
    pub fn with_install_dir(mut self, install_dir: impl Into<String>) -> Self {
        self.install_dir = install_dir.into();
        self
    }

    /// Sets the manifest file name.
    pub fn with_manifest_name(mut self, manifest_name: impl Into<String>) -> Self {
        self.manifest_name = manifest_name.into();
        self
    }

    /// Enables or disables skipping same-version installs.
    pub fn with_skip_matching_installs(mut self, skip: bool) -> Self {
        self.skip_matching_installs = skip;
        self
    }
}
