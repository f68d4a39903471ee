//! Manifest assembly and output
//!
//! Records are sorted by descending version rank, wrapped with summary
//! metadata and written as pretty-printed JSON. The write goes through a
//! temporary sibling file and a rename so readers never see a half-written
//! manifest.

use std::fs;
use std::path::Path;

use chrono::{DateTime, SecondsFormat, Utc};
use tracing::info;

use crate::app::atomic::write_atomic;
use crate::app::models::{Manifest, VersionRecord};
use crate::errors::{ManifestError, ManifestResult};

/// Sort records by descending rank
///
/// Ranks are recomputed from each record's display string. Records whose
/// display string does not parse rank as `0` and end up last. The sort is
/// stable, so equal ranks keep their traversal order.
pub fn sort_records(records: &mut [VersionRecord]) {
    records.sort_by(|a, b| b.rank().total_cmp(&a.rank()));
}

/// Format a timestamp the way the manifest stores it
///
/// ```
/// use archive_manifest::app::manifest::format_timestamp;
/// use chrono::{TimeZone, Utc};
///
/// let at = Utc.with_ymd_and_hms(2024, 11, 2, 9, 30, 0).unwrap();
/// assert_eq!(format_timestamp(at), "2024-11-02T09:30:00.000Z");
/// ```
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

impl Manifest {
    /// Build a manifest from unsorted records
    pub fn assemble(mut records: Vec<VersionRecord>, generated: DateTime<Utc>) -> Self {
        sort_records(&mut records);
        let latest = records.first().map(|record| record.version.clone());

        Self {
            generated: format_timestamp(generated),
            latest,
            count: records.len(),
            versions: records,
        }
    }

    /// Pretty-printed JSON with 2-space indentation
    pub fn to_json(&self) -> ManifestResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Read a manifest back from disk
    pub fn load(path: &Path) -> ManifestResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| ManifestError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&content)?)
    }
}

/// Write the manifest atomically using temp file + rename
///
/// # Errors
///
/// Returns `ManifestError` if serialization, the temporary write, or the
/// rename fails. A failed rename removes the temporary file.
pub fn write_manifest(manifest: &Manifest, output_path: &Path) -> ManifestResult<()> {
    let json = manifest.to_json()?;
    write_atomic(output_path, &json)?;

    info!(
        "Wrote manifest with {} versions to {}",
        manifest.count,
        output_path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::seasons::ChapterSeason;
    use chrono::TimeZone;
    use tempfile::TempDir;

    fn record(version: &str) -> VersionRecord {
        VersionRecord::new(
            version.to_string(),
            ChapterSeason::new(1, 1),
            format!("chapter_1/season_1/{}", version.replace('.', "_")),
            None,
            None,
        )
    }

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 11, 2, 9, 30, 0).unwrap()
    }

    #[test]
    fn test_sort_descending_across_eras() {
        let manifest = Manifest::assemble(
            vec![
                record("1.6.0"),
                record("33.00"),
                record("13.20-(water-lvl-4)"),
                record("38.10"),
                record("10.40.0"),
            ],
            fixed_time(),
        );

        let order: Vec<&str> = manifest.versions.iter().map(|r| r.version.as_str()).collect();
        assert_eq!(
            order,
            vec!["38.10", "33.00", "13.20-(water-lvl-4)", "10.40.0", "1.6.0"]
        );
        assert_eq!(manifest.latest.as_deref(), Some("38.10"));
        assert_eq!(manifest.count, 5);
        assert_eq!(manifest.generated, "2024-11-02T09:30:00.000Z");
    }

    #[test]
    fn test_unparsable_ranks_sink_and_ties_are_stable() {
        let mut records = vec![
            record("weird"),
            record("27.00-stage-2"),
            record("2.0.0"),
            record("27.00"),
        ];
        sort_records(&mut records);
        let order: Vec<&str> = records.iter().map(|r| r.version.as_str()).collect();
        assert_eq!(order, vec!["27.00-stage-2", "27.00", "2.0.0", "weird"]);
    }

    #[test]
    fn test_empty_manifest() {
        let manifest = Manifest::assemble(Vec::new(), fixed_time());
        assert_eq!(manifest.latest, None);
        assert_eq!(manifest.count, 0);

        let json: serde_json::Value = serde_json::from_str(&manifest.to_json().unwrap()).unwrap();
        assert!(json["latest"].is_null());
        assert_eq!(json["versions"], serde_json::json!([]));
    }

    #[test]
    fn test_json_layout() {
        let manifest = Manifest::assemble(vec![record("1.0.0")], fixed_time());
        let json = manifest.to_json().unwrap();
        assert!(json.starts_with("{\n  \"generated\": \"2024-11-02T09:30:00.000Z\",\n  \"latest\": \"1.0.0\",\n  \"count\": 1,\n  \"versions\": ["));
        assert!(json.contains("\n      \"hasMap\": false,"));
    }

    #[test]
    fn test_write_replaces_existing_manifest() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("manifest.json");
        fs::write(&path, "stale").unwrap();

        let manifest = Manifest::assemble(vec![record("33.00")], fixed_time());
        write_manifest(&manifest, &path).unwrap();

        assert_eq!(Manifest::load(&path).unwrap(), manifest);
        assert!(!temp.path().join("manifest.json.tmp").exists());
    }
}
