//! Error types for the archive manifest builder
//!
//! Only fatal conditions live here. Naming anomalies found while scanning are
//! reported as [`ScanWarning`](crate::app::ScanWarning) values and never abort
//! a run.

use std::path::PathBuf;
use thiserror::Error;

/// Filesystem errors raised while walking the archive tree
#[derive(Error, Debug)]
pub enum ScanError {
    /// The configured root does not exist or is not a directory
    #[error("Archive root is not a directory: {path}")]
    RootNotFound { path: PathBuf },

    /// Listing a directory failed
    #[error("Failed to read directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Stat on a directory entry failed
    #[error("Failed to read metadata for {path}: {source}")]
    Metadata {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors replacing a file through a temporary sibling and a rename
#[derive(Error, Debug)]
pub enum WriteError {
    /// Writing the temporary file failed
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Renaming the temporary file over the final file failed
    #[error("Atomic file operation failed: could not rename {temp_path} to {final_path}")]
    AtomicOperationFailed {
        temp_path: PathBuf,
        final_path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Manifest serialization and output errors
#[derive(Error, Debug)]
pub enum ManifestError {
    /// JSON serialization failed
    #[error("JSON serialization error in manifest")]
    Json(#[from] serde_json::Error),

    /// Reading an existing manifest failed
    #[error("Failed to read manifest {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing the manifest failed
    #[error(transparent)]
    Write(#[from] WriteError),
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    /// Reading the configuration file failed
    #[error("Failed to read configuration file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration format
    #[error("Invalid configuration format")]
    InvalidFormat(#[from] toml::de::Error),

    /// Invalid configuration value
    #[error("Invalid configuration value for {field}: {value}. {reason}")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

/// POI location search errors
#[derive(Error, Debug)]
pub enum SearchError {
    /// Search root missing
    #[error("Search root is not a directory: {path}")]
    RootNotFound { path: PathBuf },

    /// Search text was empty after trimming
    #[error("Search text must not be empty")]
    EmptyQuery,
}

/// POI file editing errors
#[derive(Error, Debug)]
pub enum PoiError {
    /// The POI file does not exist
    #[error("POI file not found: {path}")]
    NotFound { path: PathBuf },

    /// Reading the POI file failed
    #[error("Failed to read POI file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid JSON
    #[error("Invalid JSON in POI file {path}: {source}")]
    InvalidJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The file is JSON but not an object
    #[error("POI file {path} must hold a JSON object")]
    NotAnObject { path: PathBuf },

    /// JSON serialization failed
    #[error("JSON serialization error in POI file")]
    Json(#[from] serde_json::Error),

    /// A location or category name was blank
    #[error("{kind} name must not be empty")]
    EmptyName { kind: &'static str },

    /// No location with this name
    #[error("Location not found: {name}")]
    LocationNotFound { name: String },

    /// A location with this name is already listed
    #[error("Location already listed: {name}")]
    LocationExists { name: String },

    /// No category with this name
    #[error("Category not found: {name}")]
    CategoryNotFound { name: String },

    /// The locations list is edited through the location commands only
    #[error("'{name}' is managed by the location commands")]
    ReservedCategory { name: String },

    /// Saving the POI file failed
    #[error(transparent)]
    Write(#[from] WriteError),
}

/// Top-level application error that can represent any error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Tree walking error
    #[error(transparent)]
    Scan(#[from] ScanError),

    /// Manifest output error
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Search error
    #[error(transparent)]
    Search(#[from] SearchError),

    /// POI editing error
    #[error(transparent)]
    Poi(#[from] PoiError),

    /// Generic application error with context
    #[error("Application error: {message}")]
    Generic { message: String },
}

impl AppError {
    /// Create a generic application error with a message
    pub fn generic(message: impl Into<String>) -> Self {
        Self::Generic {
            message: message.into(),
        }
    }

    /// Get error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            AppError::Scan(_) => "scan",
            AppError::Manifest(_) => "manifest",
            AppError::Config(_) => "config",
            AppError::Search(_) => "search",
            AppError::Poi(_) => "poi",
            AppError::Generic { .. } => "generic",
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, AppError>;

/// Scan result type alias
pub type ScanResult<T> = std::result::Result<T, ScanError>;

/// Manifest result type alias
pub type ManifestResult<T> = std::result::Result<T, ManifestError>;

/// Config result type alias
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Atomic write result type alias
pub type WriteResult<T> = std::result::Result<T, WriteError>;

/// POI editing result type alias
pub type PoiResult<T> = std::result::Result<T, PoiError>;

/// Search result type alias
pub type SearchResult<T> = std::result::Result<T, SearchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories() {
        let err = AppError::from(ScanError::RootNotFound {
            path: PathBuf::from("/nope"),
        });
        assert_eq!(err.category(), "scan");
        assert_eq!(err.to_string(), "Archive root is not a directory: /nope");

        assert_eq!(AppError::generic("boom").category(), "generic");
        assert_eq!(
            AppError::from(SearchError::EmptyQuery).category(),
            "search"
        );
        assert_eq!(
            AppError::from(PoiError::LocationNotFound {
                name: "Tilted Towers".to_string()
            })
            .category(),
            "poi"
        );
    }

    #[test]
    fn test_read_dir_error_names_path() {
        let err = ScanError::ReadDir {
            path: PathBuf::from("chapter_1"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("chapter_1"));
        assert!(err.to_string().contains("denied"));
    }
}
