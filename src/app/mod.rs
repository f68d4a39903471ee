//! Core application logic for the archive manifest builder
//!
//! The pipeline runs once per invocation:
//!
//! 1. [`walker`] enumerates `chapter_*/season_*/<version>` folders
//! 2. [`version`] parses each folder name into a rank and display string
//! 3. [`seasons`] maps ranks to chapter/season groupings
//! 4. [`consistency`] flags file names that do not match their folder
//! 5. [`manifest`] sorts the records and writes `manifest.json`
//!
//! [`generator`] wires the steps together. [`search`] queries the POI files
//! of the same tree and [`poi`] edits them.
//!
//! # Examples
//!
//! ```rust,no_run
//! use archive_manifest::app::{ManifestGenerator, ScanConfig};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let generator = ManifestGenerator::new(ScanConfig::with_root("./archive"))?;
//! let report = generator.run(false)?;
//!
//! for warning in &report.warnings {
//!     eprintln!("{}", warning);
//! }
//! println!("Latest: {:?}", report.manifest.latest);
//! # Ok(())
//! # }
//! ```

pub mod atomic;
pub mod config;
pub mod consistency;
pub mod generator;
pub mod manifest;
pub mod models;
pub mod poi;
pub mod search;
pub mod seasons;
pub mod version;
pub mod walker;

// Re-export main public API
pub use config::ScanConfig;
pub use consistency::{check_file_names, cross_check_season};
pub use generator::{GenerationReport, ManifestGenerator, ScanOutcome};
pub use manifest::{sort_records, write_manifest};
pub use models::{Manifest, ScanWarning, VersionRecord};
pub use poi::{edit_poi_file, parse_category_items, parse_category_value, PoiDocument, PoiEdit};
pub use search::{search_locations, LocationMatch};
pub use seasons::{resolve_chapter_season, ChapterSeason, ChapterSeasonRange, CHAPTER_SEASON_TABLE};
pub use version::{display_to_token, parse_version, version_to_display};
pub use walker::{DetectedFiles, TreeWalker, WalkOutcome};
