//! Application constants for the archive manifest builder
//!
//! This module centralizes the fixed names and extensions the scanner relies
//! on, organized by functional domain.

/// Environment variable names
pub mod env {
    /// Overrides the archive root directory
    pub const ROOT: &str = "ARCHIVE_MANIFEST_ROOT";
}

/// Directory layout of an archive tree
pub mod layout {
    /// Prefix of chapter directories (`chapter_<N>`)
    pub const CHAPTER_PREFIX: &str = "chapter_";

    /// Prefix of season directories (`season_<N>`)
    pub const SEASON_PREFIX: &str = "season_";

    /// Top-level alias for the newest version, never indexed
    pub const LATEST_ALIAS: &str = "latest";
}

/// File naming and detection
pub mod files {
    /// Manifest file written at the archive root
    pub const MANIFEST_FILE_NAME: &str = "manifest.json";

    /// Temporary file suffix for atomic operations
    pub const TEMP_FILE_SUFFIX: &str = ".tmp";

    /// Map image extensions, compared case-insensitively
    pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

    /// POI data extension, compared case-insensitively
    pub const POI_EXTENSION: &str = "json";
}

/// Version token syntax
pub mod version {
    /// Separator between numeric version components
    pub const COMPONENT_SEPARATOR: char = '_';

    /// Separator used in display strings
    pub const DISPLAY_SEPARATOR: char = '.';

    /// Characters that start a descriptive suffix
    pub const SUFFIX_MARKERS: [char; 2] = ['-', '('];
}

/// POI document fields
pub mod poi {
    /// Array of location names inside a POI file
    pub const LOCATIONS_FIELD: &str = "locations";
}

/// Configuration file locations
pub mod config {
    /// Project-local configuration file name
    pub const LOCAL_FILE_NAME: &str = "archive-manifest.toml";

    /// Directory under the user config dir
    pub const APP_DIR_NAME: &str = "archive-manifest";

    /// Configuration file name inside the user config dir
    pub const USER_FILE_NAME: &str = "config.toml";
}

/// Logging constants
pub mod logging {
    /// Default log level
    pub const DEFAULT_LOG_LEVEL: &str = "warn";
}

pub use files::{MANIFEST_FILE_NAME, TEMP_FILE_SUFFIX};
pub use layout::{CHAPTER_PREFIX, LATEST_ALIAS, SEASON_PREFIX};
