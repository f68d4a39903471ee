//! Archive tree walking
//!
//! Walks `<root>/chapter_<N>/season_<M>/<version>/` and turns every version
//! folder into a [`VersionRecord`]. Chapter and season numbers are taken from
//! the folder names, which are curated by hand and trusted over the version
//! table.
//!
//! Any filesystem error aborts the walk. Naming problems do not: they become
//! [`ScanWarning`]s and the walk carries on.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::app::config::ScanConfig;
use crate::app::consistency::{check_file_names, cross_check_season, split_extension};
use crate::app::models::{ScanWarning, VersionRecord};
use crate::app::seasons::ChapterSeason;
use crate::app::version::{parse_version, version_to_display};
use crate::constants::{files, layout};
use crate::errors::{ScanError, ScanResult};

/// Records and warnings gathered from one walk
#[derive(Debug, Clone, Default)]
pub struct WalkOutcome {
    /// Records in traversal order (unsorted)
    pub records: Vec<VersionRecord>,
    pub warnings: Vec<ScanWarning>,
}

/// Map image and POI file found in a version folder
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetectedFiles {
    pub map_file: Option<String>,
    pub pois_file: Option<String>,
}

/// Walker over a `chapter_*/season_*/<version>` tree
pub struct TreeWalker<'a> {
    config: &'a ScanConfig,
}

impl<'a> TreeWalker<'a> {
    pub fn new(config: &'a ScanConfig) -> Self {
        Self { config }
    }

    /// Walk the whole tree
    ///
    /// # Errors
    ///
    /// Returns `ScanError::RootNotFound` if the root is not a directory, and
    /// `ScanError::ReadDir`/`ScanError::Metadata` for any listing or stat
    /// failure below it.
    pub fn walk(&self) -> ScanResult<WalkOutcome> {
        let root = self.config.root();
        if !root.is_dir() {
            return Err(ScanError::RootNotFound {
                path: root.to_path_buf(),
            });
        }

        let mut outcome = WalkOutcome::default();

        for chapter_dir in list_names(root)? {
            if chapter_dir == layout::LATEST_ALIAS {
                debug!("Found '{}' alias at archive root, not indexing it", chapter_dir);
                continue;
            }
            let Some(chapter_tail) = chapter_dir.strip_prefix(layout::CHAPTER_PREFIX) else {
                continue;
            };
            let chapter_path = root.join(&chapter_dir);
            if !is_dir(&chapter_path)? {
                continue;
            }
            let Some(chapter) = leading_number(chapter_tail) else {
                outcome.warnings.push(ScanWarning::UnrecognizedFolder { path: chapter_dir });
                continue;
            };

            for season_dir in list_names(&chapter_path)? {
                let Some(season_tail) = season_dir.strip_prefix(layout::SEASON_PREFIX) else {
                    continue;
                };
                let season_path = chapter_path.join(&season_dir);
                if !is_dir(&season_path)? {
                    continue;
                }
                let Some(season) = leading_number(season_tail) else {
                    outcome.warnings.push(ScanWarning::UnrecognizedFolder {
                        path: format!("{}/{}", chapter_dir, season_dir),
                    });
                    continue;
                };

                let grouping = ChapterSeason::new(chapter, season);
                let prefix = format!("{}/{}", chapter_dir, season_dir);
                self.walk_season(&season_path, &prefix, grouping, &mut outcome)?;
            }
        }

        info!(
            "Walked {}: {} versions, {} warnings",
            root.display(),
            outcome.records.len(),
            outcome.warnings.len()
        );
        Ok(outcome)
    }

    fn walk_season(
        &self,
        season_path: &Path,
        prefix: &str,
        grouping: ChapterSeason,
        outcome: &mut WalkOutcome,
    ) -> ScanResult<()> {
        for version_dir in list_names(season_path)? {
            let version_path = season_path.join(&version_dir);
            if !is_dir(&version_path)? {
                continue;
            }

            let rel_path = format!("{}/{}", prefix, version_dir);
            if parse_version(&version_dir).is_none() {
                debug!("Unrecognized version folder: {}", rel_path);
                outcome
                    .warnings
                    .push(ScanWarning::UnrecognizedFolder { path: rel_path });
                continue;
            }

            let detected = self.detect_files(&version_path)?;
            outcome.warnings.extend(check_file_names(
                &rel_path,
                &version_dir,
                detected.map_file.as_deref(),
                detected.pois_file.as_deref(),
            ));

            let record = VersionRecord::new(
                version_to_display(&version_dir),
                grouping,
                rel_path,
                detected.map_file,
                detected.pois_file,
            );

            if self.config.cross_check_seasons {
                outcome
                    .warnings
                    .extend(cross_check_season(&record, &version_dir));
            }

            debug!(
                "Indexed {} (map: {}, pois: {})",
                record.path, record.has_map, record.has_pois
            );
            outcome.records.push(record);
        }

        Ok(())
    }

    /// Find the first map image and first POI file in a version folder
    pub fn detect_files(&self, version_path: &Path) -> ScanResult<DetectedFiles> {
        let mut detected = DetectedFiles::default();

        for name in list_names(version_path)? {
            if detected.map_file.is_some() && detected.pois_file.is_some() {
                break;
            }
            let Some((_, ext)) = split_extension(&name) else {
                continue;
            };
            let is_image = self.config.is_image_extension(ext);
            let is_pois = ext.eq_ignore_ascii_case(files::POI_EXTENSION);
            if !is_image && !is_pois {
                continue;
            }
            if !is_file(&version_path.join(&name))? {
                continue;
            }

            if is_image && detected.map_file.is_none() {
                detected.map_file = Some(name);
            } else if is_pois && detected.pois_file.is_none() {
                detected.pois_file = Some(name);
            }
        }

        Ok(detected)
    }
}

/// Entry names of a directory, sorted so traversal order is stable
///
/// Names that are not valid UTF-8 cannot appear in the manifest and are
/// skipped with a log line.
pub(crate) fn list_names(dir: &Path) -> ScanResult<Vec<String>> {
    let read_dir = |source| ScanError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut names = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_dir)? {
        let entry = entry.map_err(read_dir)?;
        match entry.file_name().into_string() {
            Ok(name) => names.push(name),
            Err(raw) => warn!("Skipping non UTF-8 entry {:?} in {}", raw, dir.display()),
        }
    }
    names.sort();
    Ok(names)
}

fn metadata(path: &Path) -> ScanResult<fs::Metadata> {
    fs::metadata(path).map_err(|source| ScanError::Metadata {
        path: PathBuf::from(path),
        source,
    })
}

fn is_dir(path: &Path) -> ScanResult<bool> {
    Ok(metadata(path)?.is_dir())
}

fn is_file(path: &Path) -> ScanResult<bool> {
    Ok(metadata(path)?.is_file())
}

/// Leading ASCII digits of `s` as a number (`"12abc"` -> 12)
fn leading_number(s: &str) -> Option<u32> {
    let end = s
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map_or(s.len(), |(idx, _)| idx);
    s[..end].parse().ok()
}
