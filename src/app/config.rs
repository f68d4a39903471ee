//! Scan configuration types and defaults
//!
//! Runtime configuration for one manifest build. The TOML-facing side lives
//! in [`crate::config`].

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::files;

/// Configuration for scanning an archive tree and writing its manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Archive root holding the `chapter_<N>` folders
    pub root: PathBuf,
    /// Map image extensions without the dot, matched case-insensitively
    pub image_extensions: Vec<String>,
    /// Emit a warning when folder placement disagrees with the version table
    pub cross_check_seasons: bool,
    /// Manifest file name, relative to the root
    pub output_file_name: String,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            image_extensions: files::IMAGE_EXTENSIONS
                .iter()
                .map(|ext| ext.to_string())
                .collect(),
            cross_check_seasons: false,
            output_file_name: files::MANIFEST_FILE_NAME.to_string(),
        }
    }
}

impl ScanConfig {
    /// Create a scan configuration for the given archive root
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Default::default()
        }
    }

    /// Enable or disable the version table cross-check
    pub fn with_cross_check(mut self, enabled: bool) -> Self {
        self.cross_check_seasons = enabled;
        self
    }

    /// Full path of the manifest file
    pub fn output_path(&self) -> PathBuf {
        self.root.join(&self.output_file_name)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Whether `ext` (no dot) is a configured map image extension
    pub fn is_image_extension(&self, ext: &str) -> bool {
        self.image_extensions
            .iter()
            .any(|candidate| candidate.eq_ignore_ascii_case(ext))
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.image_extensions.is_empty() {
            return Err("At least one image extension must be configured".to_string());
        }

        if let Some(bad) = self
            .image_extensions
            .iter()
            .find(|ext| ext.is_empty() || ext.contains('.'))
        {
            return Err(format!(
                "Image extension '{}' must be non-empty and given without a dot",
                bad
            ));
        }

        if self.output_file_name.is_empty()
            || self.output_file_name.contains(['/', '\\'])
        {
            return Err(format!(
                "Output file name '{}' must be a plain file name",
                self.output_file_name
            ));
        }

        Ok(())
    }
}
