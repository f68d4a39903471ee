//! Configuration management for the archive manifest builder
//!
//! Settings come from several sources, applied in order of increasing
//! precedence:
//! 1. Built-in defaults
//! 2. A TOML config file (explicit `--config`, `./archive-manifest.toml`, or
//!    the user config directory)
//! 3. Environment variables
//! 4. CLI arguments (applied by the command handlers)

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::app::ScanConfig;
use crate::constants::{config as locations, env, files, logging};
use crate::errors::{ConfigError, ConfigResult};

/// Unified application configuration for TOML serialization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Archive scanning settings
    pub scan: ScanConfigToml,
    /// Manifest output settings
    pub output: OutputConfigToml,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// TOML-friendly scan configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfigToml {
    /// Archive root (current directory if unset)
    pub root: Option<PathBuf>,
    /// Map image extensions, without the dot
    pub image_extensions: Vec<String>,
    /// Warn when folder placement disagrees with the version table
    pub cross_check_seasons: bool,
}

impl Default for ScanConfigToml {
    fn default() -> Self {
        Self {
            root: None,
            image_extensions: files::IMAGE_EXTENSIONS
                .iter()
                .map(|ext| ext.to_string())
                .collect(),
            cross_check_seasons: false,
        }
    }
}

/// TOML-friendly output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfigToml {
    /// Manifest file name written at the archive root
    pub file_name: String,
}

impl Default for OutputConfigToml {
    fn default() -> Self {
        Self {
            file_name: files::MANIFEST_FILE_NAME.to_string(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level used when no verbosity flag is given
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: logging::DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl LoggingConfig {
    /// Parse the configured level
    pub fn level(&self) -> ConfigResult<tracing::Level> {
        self.level
            .parse::<tracing::Level>()
            .map_err(|_| ConfigError::InvalidValue {
                field: "logging.level".to_string(),
                value: self.level.clone(),
                reason: "Expected one of trace, debug, info, warn, error".to_string(),
            })
    }
}

impl AppConfig {
    /// Load configuration from file and environment
    ///
    /// An explicit `config_file_override` must exist; the default locations
    /// are optional.
    pub fn load(config_file_override: Option<&Path>) -> ConfigResult<Self> {
        let config_path = match config_file_override {
            Some(path) if !path.exists() => {
                return Err(ConfigError::NotFound {
                    path: path.to_path_buf(),
                })
            }
            Some(path) => Some(path.to_path_buf()),
            None => Self::find_config_file(),
        };

        let mut config = match config_path {
            Some(path) => Self::load_from_file(&path)?,
            None => Self::default(),
        };

        config.apply_env_overrides(|key| std::env::var(key).ok());
        config.logging.level()?;

        Ok(config)
    }

    /// Apply environment variable overrides using `lookup`
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(root) = lookup(env::ROOT).filter(|value| !value.is_empty()) {
            debug!("Archive root overridden by {}: {}", env::ROOT, root);
            self.scan.root = Some(PathBuf::from(root));
        }
    }

    /// Convert TOML-friendly configuration to runtime configuration
    pub fn to_runtime_config(&self) -> ScanConfig {
        ScanConfig {
            root: self.scan.root.clone().unwrap_or_else(|| PathBuf::from(".")),
            image_extensions: self.scan.image_extensions.clone(),
            cross_check_seasons: self.scan.cross_check_seasons,
            output_file_name: self.output.file_name.clone(),
        }
    }

    /// Find configuration file in standard locations
    fn find_config_file() -> Option<PathBuf> {
        let mut search_paths = vec![PathBuf::from(locations::LOCAL_FILE_NAME)];
        if let Some(user_path) = Self::default_config_path() {
            search_paths.push(user_path);
        }

        for path in search_paths {
            if path.exists() {
                debug!("Found config file: {}", path.display());
                return Some(path);
            }
        }

        debug!("No config file found in standard locations");
        None
    }

    /// Default config file path for the current user
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| {
            dir.join(locations::APP_DIR_NAME)
                .join(locations::USER_FILE_NAME)
        })
    }

    /// Load configuration from a TOML file
    pub fn load_from_file(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config: AppConfig = toml::from_str(&content)?;

        info!("Loaded configuration from: {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_creation() {
        let config = AppConfig::default();
        assert_eq!(config.scan.root, None);
        assert_eq!(config.output.file_name, "manifest.json");
        assert_eq!(config.logging.level().unwrap(), tracing::Level::WARN);

        let runtime = config.to_runtime_config();
        assert_eq!(runtime, ScanConfig::default());
    }

    #[test]
    fn test_config_loading_nonexistent_file() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing.toml");
        let result = AppConfig::load(Some(&missing));
        assert!(matches!(result, Err(ConfigError::NotFound { .. })));
    }

    #[test]
    fn test_config_loading_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("archive-manifest.toml");
        std::fs::write(
            &config_path,
            r#"
[scan]
root = "/srv/archive"
cross_check_seasons = true

[logging]
level = "debug"
"#,
        )
        .unwrap();

        let config = AppConfig::load_from_file(&config_path).unwrap();
        assert_eq!(config.scan.root, Some(PathBuf::from("/srv/archive")));
        assert!(config.scan.cross_check_seasons);
        // Missing keys fall back to defaults
        assert_eq!(config.scan.image_extensions, vec!["jpg", "jpeg", "png"]);
        assert_eq!(config.output.file_name, "manifest.json");
        assert_eq!(config.logging.level().unwrap(), tracing::Level::DEBUG);
    }

    #[test]
    fn test_invalid_toml_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("bad.toml");
        std::fs::write(&config_path, "[scan\nroot = 1").unwrap();

        assert!(matches!(
            AppConfig::load_from_file(&config_path),
            Err(ConfigError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_invalid_log_level() {
        let config = AppConfig {
            logging: LoggingConfig {
                level: "loud".to_string(),
            },
            ..Default::default()
        };
        assert!(config.logging.level().is_err());
    }

    #[test]
    fn test_env_override() {
        let mut config = AppConfig::default();
        config.apply_env_overrides(|key| {
            (key == "ARCHIVE_MANIFEST_ROOT").then(|| "/from/env".to_string())
        });
        assert_eq!(config.scan.root, Some(PathBuf::from("/from/env")));

        let mut config = AppConfig::default();
        config.apply_env_overrides(|_| Some(String::new()));
        assert_eq!(config.scan.root, None);
    }
}
