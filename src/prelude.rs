//! Prelude module for the Archive Manifest library
//!
//! Re-exports the most commonly used items so typical usage needs a single
//! `use archive_manifest::prelude::*;`.
//!
//! # Usage
//!
//! ```rust,no_run
//! use archive_manifest::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let generator = ManifestGenerator::new(ScanConfig::with_root("."))?;
//!     let outcome = generator.scan()?;
//!     println!("{} versions", outcome.manifest.count);
//!     Ok(())
//! }
//! ```

// Core result types
pub use crate::errors::{AppError, Result};

pub use crate::app::{
    // Orchestration
    ManifestGenerator,
    ScanConfig,
    ScanOutcome,

    // Data types
    ChapterSeason,
    Manifest,
    PoiDocument,
    PoiEdit,
    ScanWarning,
    VersionRecord,

    // Parsing and lookup
    edit_poi_file,
    parse_version,
    resolve_chapter_season,
    version_to_display,
};
