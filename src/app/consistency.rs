//! File naming consistency checks
//!
//! A version folder is expected to hold `<folder>.<image ext>` and
//! `<folder>.json`. Files that deviate are still used; the checks here only
//! produce warnings.

use tracing::debug;

use crate::app::models::{ScanWarning, VersionRecord};
use crate::app::seasons::resolve_chapter_season;
use crate::app::version::parse_version;

/// Split a file name at its last `.`; returns (stem, extension)
///
/// Dotfiles such as `.png` yield an empty stem, matching how the scanner
/// treats them as image files.
pub fn split_extension(file_name: &str) -> Option<(&str, &str)> {
    file_name.rsplit_once('.')
}

/// File name minus its extension
pub fn file_stem(file_name: &str) -> &str {
    split_extension(file_name).map_or(file_name, |(stem, _)| stem)
}

/// Check the detected map and POI files against the folder name
///
/// `rel_path` is the folder's manifest path, `folder` its exact name
/// including any suffix.
pub fn check_file_names(
    rel_path: &str,
    folder: &str,
    map_file: Option<&str>,
    pois_file: Option<&str>,
) -> Vec<ScanWarning> {
    let mut warnings = Vec::new();

    if let Some(file) = map_file {
        if file_stem(file) != folder {
            warnings.push(ScanWarning::MismatchedMap {
                path: rel_path.to_string(),
                file: file.to_string(),
                expected: folder.to_string(),
            });
        }
    }

    if let Some(file) = pois_file {
        if file_stem(file) != folder {
            warnings.push(ScanWarning::MismatchedPois {
                path: rel_path.to_string(),
                file: file.to_string(),
                expected: folder.to_string(),
            });
        }
    }

    warnings
}

/// Compare a record's folder placement with the version table
///
/// Versions outside the table are not flagged.
pub fn cross_check_season(record: &VersionRecord, folder: &str) -> Option<ScanWarning> {
    let version = parse_version(folder)?;
    let table = resolve_chapter_season(version)?;
    let placed = record.grouping();

    if table == placed {
        return None;
    }

    debug!(
        "{} placed under {} but table says {}",
        record.path, placed, table
    );
    Some(ScanWarning::SeasonMismatch {
        path: record.path.clone(),
        version: record.version.clone(),
        folder: placed,
        table,
    })
}
