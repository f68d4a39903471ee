//! Console output for command results
//!
//! Warnings go to stderr ahead of the summary; summaries go to stdout. This
//! output is for people, the manifest file is the machine-readable result.

use std::fmt::Write as _;
use std::path::Path;

use crate::app::{GenerationReport, LocationMatch, PoiDocument, ScanWarning};

/// Render the warning block, empty when there are no warnings
pub fn format_warnings(warnings: &[ScanWarning]) -> String {
    if warnings.is_empty() {
        return String::new();
    }

    let mut out = String::from("\n=== WARNINGS ===\n");
    for warning in warnings {
        let _ = writeln!(out, "  ⚠️  {}", warning);
    }
    out
}

/// Render the run summary
pub fn format_summary(report: &GenerationReport, planned_output: &Path) -> String {
    let manifest = &report.manifest;
    let latest = manifest.latest.as_deref().unwrap_or("null");

    let mut out = String::new();
    match &report.output_path {
        Some(path) => {
            let _ = writeln!(
                out,
                "✅ Generated {} with {} versions",
                file_label(path),
                manifest.count
            );
            let _ = writeln!(out, "   Latest: {}", latest);
            let _ = writeln!(out, "   Output: {}", path.display());
        }
        None => {
            let _ = writeln!(out, "🔍 Dry run: found {} versions", manifest.count);
            let _ = writeln!(out, "   Latest: {}", latest);
            let _ = writeln!(out, "   Would write: {}", planned_output.display());
        }
    }
    if !report.warnings.is_empty() {
        let _ = writeln!(out, "   ⚠️  {} warnings (see above)", report.warnings.len());
    }
    out
}

/// Render search matches grouped by chapter/season
pub fn format_search_results(query: &str, matches: &[LocationMatch]) -> String {
    if matches.is_empty() {
        return format!("No locations matching '{}'\n", query);
    }

    let total: usize = matches.iter().map(|m| m.versions.len()).sum();
    let mut out = format!("Found '{}' in {} versions:\n", query, total);
    for group in matches {
        let _ = writeln!(out, "  {}", group.chapter_season);
        for version in &group.versions {
            let _ = writeln!(out, "    - {}", version);
        }
    }
    out
}

/// Render a POI file's locations and categories
pub fn format_poi_document(path: &Path, doc: &PoiDocument) -> String {
    let locations = doc.locations();
    let mut out = format!("{}\n", path.display());

    let _ = writeln!(out, "  Locations ({}):", locations.len());
    for location in &locations {
        let _ = writeln!(out, "    • {}", location);
    }

    let categories = doc.category_names();
    if !categories.is_empty() {
        let _ = writeln!(out, "  Categories:");
        for name in categories {
            if let Some(value) = doc.category(name) {
                let _ = writeln!(out, "    • {}: {}", name, value);
            }
        }
    }
    out
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Manifest;
    use std::path::PathBuf;

    fn report(count: usize, warnings: Vec<ScanWarning>, output: Option<&str>) -> GenerationReport {
        GenerationReport {
            manifest: Manifest {
                generated: "2024-11-02T09:30:00.000Z".to_string(),
                latest: (count > 0).then(|| "33.00".to_string()),
                count,
                versions: Vec::new(),
            },
            warnings,
            output_path: output.map(PathBuf::from),
        }
    }

    #[test]
    fn test_no_warnings_no_block() {
        assert_eq!(format_warnings(&[]), "");
    }

    #[test]
    fn test_warning_block() {
        let block = format_warnings(&[ScanWarning::UnrecognizedFolder {
            path: "chapter_1/season_1/abc".to_string(),
        }]);
        assert!(block.starts_with("\n=== WARNINGS ===\n"));
        assert!(block.contains("Skipping unrecognized folder: chapter_1/season_1/abc"));
    }

    #[test]
    fn test_summary() {
        let warnings = vec![ScanWarning::UnrecognizedFolder {
            path: "x".to_string(),
        }];
        let text = format_summary(
            &report(3, warnings, Some("/srv/archive/manifest.json")),
            Path::new("/srv/archive/manifest.json"),
        );
        assert!(text.contains("Generated manifest.json with 3 versions"));
        assert!(text.contains("Latest: 33.00"));
        assert!(text.contains("Output: /srv/archive/manifest.json"));
        assert!(text.contains("1 warnings"));
    }

    #[test]
    fn test_dry_run_summary() {
        let text = format_summary(&report(0, Vec::new(), None), Path::new("manifest.json"));
        assert!(text.contains("Dry run: found 0 versions"));
        assert!(text.contains("Latest: null"));
        assert!(!text.contains("warnings"));
    }

    #[test]
    fn test_poi_document() {
        let doc = PoiDocument::parse(
            r#"{"locations": ["Lazy Links", "Tilted Towers"], "season": 1, "events": ["Bus"]}"#,
        )
        .unwrap();
        let text = format_poi_document(Path::new("33_00.json"), &doc);
        assert_eq!(
            text,
            "33_00.json\n  Locations (2):\n    • Lazy Links\n    • Tilted Towers\n  Categories:\n    • season: 1\n    • events: [\"Bus\"]\n"
        );
    }

    #[test]
    fn test_search_results() {
        let text = format_search_results(
            "tilted",
            &[LocationMatch {
                chapter_season: "chapter_1/season_1".to_string(),
                versions: vec!["1_0_0".to_string(), "1_6_0".to_string()],
            }],
        );
        assert!(text.starts_with("Found 'tilted' in 2 versions:"));
        assert!(text.contains("  chapter_1/season_1\n    - 1_0_0\n    - 1_6_0\n"));

        assert_eq!(format_search_results("x", &[]), "No locations matching 'x'\n");
    }
}
