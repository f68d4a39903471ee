//! Data models for the archive manifest
//!
//! This module defines the records written to `manifest.json` and the
//! warnings collected while scanning.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::app::seasons::ChapterSeason;
use crate::app::version::display_rank;

/// One discovered version directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionRecord {
    /// Display form of the folder name (e.g. "13.20-(water-lvl-4)")
    pub version: String,
    /// Chapter number taken from the enclosing `chapter_<N>` folder
    pub chapter: u32,
    /// Season number taken from the enclosing `season_<N>` folder
    pub season: u32,
    /// `<chapter_dir>/<season_dir>/<version_dir>`, always `/`-separated
    pub path: String,
    pub has_map: bool,
    pub has_pois: bool,
    pub map_file: Option<String>,
    pub pois_file: Option<String>,
}

impl VersionRecord {
    /// Build a record from the folder it was found in and the files detected
    pub fn new(
        display: String,
        grouping: ChapterSeason,
        path: String,
        map_file: Option<String>,
        pois_file: Option<String>,
    ) -> Self {
        Self {
            version: display,
            chapter: grouping.chapter,
            season: grouping.season,
            path,
            has_map: map_file.is_some(),
            has_pois: pois_file.is_some(),
            map_file,
            pois_file,
        }
    }

    /// Numeric rank recomputed from the display string
    pub fn rank(&self) -> f64 {
        display_rank(&self.version)
    }

    /// Folder-derived grouping
    pub fn grouping(&self) -> ChapterSeason {
        ChapterSeason::new(self.chapter, self.season)
    }
}

/// The document written to `manifest.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    /// ISO-8601 UTC timestamp of generation
    pub generated: String,
    /// Display string of the highest-ranked version
    pub latest: Option<String>,
    pub count: usize,
    /// Records sorted by descending rank
    pub versions: Vec<VersionRecord>,
}

/// Naming anomaly found while scanning
///
/// Warnings are advisory: they are printed but never stored in the manifest
/// and never stop a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanWarning {
    /// Folder name could not be parsed; the folder contributes no record
    UnrecognizedFolder { path: String },
    /// Map image name does not match its version folder
    MismatchedMap {
        path: String,
        file: String,
        expected: String,
    },
    /// POI file name does not match its version folder
    MismatchedPois {
        path: String,
        file: String,
        expected: String,
    },
    /// Folder placement disagrees with the version table
    SeasonMismatch {
        path: String,
        version: String,
        folder: ChapterSeason,
        table: ChapterSeason,
    },
}

impl fmt::Display for ScanWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnrecognizedFolder { path } => {
                write!(f, "Skipping unrecognized folder: {}", path)
            }
            Self::MismatchedMap {
                path,
                file,
                expected,
            } => write!(
                f,
                "Mismatched map file: {}/{} (expected {}.*)",
                path, file, expected
            ),
            Self::MismatchedPois {
                path,
                file,
                expected,
            } => write!(
                f,
                "Mismatched POI file: {}/{} (expected {}.json)",
                path, file, expected
            ),
            Self::SeasonMismatch {
                path,
                version,
                folder,
                table,
            } => write!(
                f,
                "Season mismatch: {} is filed under {} but version {} belongs to {}",
                path, folder, version, table
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(map: Option<&str>, pois: Option<&str>) -> VersionRecord {
        VersionRecord::new(
            "33.00".to_string(),
            ChapterSeason::new(6, 1),
            "chapter_6/season_1/33_00".to_string(),
            map.map(str::to_string),
            pois.map(str::to_string),
        )
    }

    #[test]
    fn test_flags_follow_detected_files() {
        let r = record(Some("33_00.jpg"), None);
        assert!(r.has_map);
        assert!(!r.has_pois);
        assert_eq!(r.rank(), 33.0);
        assert_eq!(r.grouping(), ChapterSeason::new(6, 1));
    }

    #[test]
    fn test_record_serializes_camel_case_with_nulls() {
        let json = serde_json::to_value(record(None, None)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "version": "33.00",
                "chapter": 6,
                "season": 1,
                "path": "chapter_6/season_1/33_00",
                "hasMap": false,
                "hasPois": false,
                "mapFile": null,
                "poisFile": null
            })
        );
    }

    #[test]
    fn test_record_field_order() {
        let text = serde_json::to_string(&record(Some("33_00.png"), Some("33_00.json"))).unwrap();
        let order = [
            "\"version\"",
            "\"chapter\"",
            "\"season\"",
            "\"path\"",
            "\"hasMap\"",
            "\"hasPois\"",
            "\"mapFile\"",
            "\"poisFile\"",
        ];
        let positions: Vec<usize> = order.iter().map(|k| text.find(k).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_warning_messages() {
        let w = ScanWarning::UnrecognizedFolder {
            path: "chapter_1/season_1/abc".to_string(),
        };
        assert_eq!(
            w.to_string(),
            "Skipping unrecognized folder: chapter_1/season_1/abc"
        );

        let w = ScanWarning::MismatchedMap {
            path: "chapter_6/season_1/33_00".to_string(),
            file: "33_01.jpg".to_string(),
            expected: "33_00".to_string(),
        };
        assert_eq!(
            w.to_string(),
            "Mismatched map file: chapter_6/season_1/33_00/33_01.jpg (expected 33_00.*)"
        );

        let w = ScanWarning::MismatchedPois {
            path: "chapter_6/season_1/33_00".to_string(),
            file: "pois.json".to_string(),
            expected: "33_00".to_string(),
        };
        assert_eq!(
            w.to_string(),
            "Mismatched POI file: chapter_6/season_1/33_00/pois.json (expected 33_00.json)"
        );
    }
}
