//! Integration tests for manifest generation
//!
//! These tests build small archive trees on disk and check the manifest
//! written for them end to end.

use std::fs::{self, create_dir_all, File};
use std::path::Path;

use tempfile::TempDir;

use archive_manifest::app::version::{display_to_token, parse_version};
use archive_manifest::app::{Manifest, ManifestGenerator, ScanConfig, ScanWarning};

fn touch(root: &Path, rel: &str) {
    let path = root.join(rel);
    create_dir_all(path.parent().unwrap()).unwrap();
    File::create(path).unwrap();
}

fn mkdir(root: &Path, rel: &str) {
    create_dir_all(root.join(rel)).unwrap();
}

fn generate(root: &Path) -> (Manifest, Vec<ScanWarning>) {
    let generator = ManifestGenerator::new(ScanConfig::with_root(root)).unwrap();
    let report = generator.run(false).unwrap();
    let written = Manifest::load(&root.join("manifest.json")).unwrap();
    assert_eq!(written, report.manifest);
    (written, report.warnings)
}

#[test]
fn test_two_version_archive() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    touch(root, "chapter_1/season_1/1_0_0/1_0_0.jpg");
    touch(root, "chapter_1/season_1/1_0_0/1_0_0.json");
    mkdir(root, "chapter_1/season_2/2_0_0");

    let (manifest, warnings) = generate(root);

    assert!(warnings.is_empty());
    assert_eq!(manifest.count, 2);
    assert_eq!(manifest.latest.as_deref(), Some("2.0.0"));

    let newest = &manifest.versions[0];
    assert_eq!(newest.version, "2.0.0");
    assert_eq!(newest.chapter, 1);
    assert_eq!(newest.season, 2);
    assert_eq!(newest.path, "chapter_1/season_2/2_0_0");
    assert!(!newest.has_map);
    assert!(!newest.has_pois);
    assert_eq!(newest.map_file, None);
    assert_eq!(newest.pois_file, None);

    let oldest = &manifest.versions[1];
    assert_eq!(oldest.version, "1.0.0");
    assert_eq!(oldest.map_file.as_deref(), Some("1_0_0.jpg"));
    assert_eq!(oldest.pois_file.as_deref(), Some("1_0_0.json"));
    assert!(oldest.has_map && oldest.has_pois);
}

#[test]
fn test_mismatched_map_is_flagged_but_recorded() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    touch(root, "chapter_6/season_1/33_00/33_01.jpg");

    let (manifest, warnings) = generate(root);

    assert_eq!(warnings.len(), 1);
    let message = warnings[0].to_string();
    assert!(message.contains("chapter_6/season_1/33_00/33_01.jpg"));
    assert!(message.ends_with("(expected 33_00.*)"));

    assert_eq!(manifest.versions[0].map_file.as_deref(), Some("33_01.jpg"));
    assert!(manifest.versions[0].has_map);
}

#[test]
fn test_unrecognized_folder_is_skipped() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    touch(root, "chapter_1/season_1/abc/abc.jpg");

    let (manifest, warnings) = generate(root);

    assert_eq!(manifest.count, 0);
    assert!(manifest.versions.is_empty());
    assert_eq!(manifest.latest, None);
    assert_eq!(warnings.len(), 1);
    assert_eq!(
        warnings[0].to_string(),
        "Skipping unrecognized folder: chapter_1/season_1/abc"
    );
}

#[test]
fn test_latest_alias_and_stray_files_are_ignored() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    touch(root, "chapter_6/season_5/38_10/38_10.png");
    touch(root, "latest/38_10.png");
    mkdir(root, "latest/38_10");
    touch(root, "README.md");
    touch(root, "chapter_6/season_5/notes.txt");

    let (manifest, warnings) = generate(root);

    assert!(warnings.is_empty());
    assert_eq!(manifest.count, 1);
    assert_eq!(manifest.latest.as_deref(), Some("38.10"));
}

#[test]
fn test_mixed_eras_sort_newest_first() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    for rel in [
        "chapter_1/season_1/1_6_0",
        "chapter_1/season_1/1_10_0",
        "chapter_2/season_3/13_20-(water-lvl-4)",
        "chapter_2/season_3/13_20",
        "chapter_4/season_5/27_00-stage-2",
        "chapter_6/season_0/32-week-2",
        "chapter_6/season_1/33_00",
        "chapter_1/season_10/10_40_0",
    ] {
        mkdir(root, rel);
    }

    let (manifest, _) = generate(root);

    let order: Vec<&str> = manifest.versions.iter().map(|r| r.version.as_str()).collect();
    assert_eq!(
        order,
        vec![
            "33.00",
            "32-week-2",
            "27.00-stage-2",
            // Equal ranks keep traversal order, which is sorted by name
            "13.20",
            "13.20-(water-lvl-4)",
            "10.40.0",
            "1.10.0",
            "1.6.0",
        ]
    );

    // Every display string re-parses to the rank it was sorted by
    let ranks: Vec<f64> = manifest
        .versions
        .iter()
        .map(|r| parse_version(&display_to_token(&r.version)).unwrap())
        .collect();
    assert!(ranks.windows(2).all(|w| w[0] >= w[1]));
}

#[test]
fn test_manifest_json_shape() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    touch(root, "chapter_2/season_3/13_20-(water-lvl-4)/13_20-(water-lvl-4).PNG");

    generate(root);

    let text = fs::read_to_string(root.join("manifest.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(json["count"], 1);
    assert_eq!(json["latest"], "13.20-(water-lvl-4)");
    assert_eq!(
        json["versions"][0],
        serde_json::json!({
            "version": "13.20-(water-lvl-4)",
            "chapter": 2,
            "season": 3,
            "path": "chapter_2/season_3/13_20-(water-lvl-4)",
            "hasMap": true,
            "hasPois": false,
            "mapFile": "13_20-(water-lvl-4).PNG",
            "poisFile": null
        })
    );
    assert!(json["generated"].as_str().unwrap().ends_with('Z'));
    assert!(text.contains("\n  \"versions\": [\n    {\n      \"version\""));
}

#[test]
fn test_rerun_rebuilds_from_scratch() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    mkdir(root, "chapter_1/season_1/1_0_0");
    let (first, _) = generate(root);
    assert_eq!(first.count, 1);

    fs::remove_dir(root.join("chapter_1/season_1/1_0_0")).unwrap();
    mkdir(root, "chapter_1/season_2/2_0_0");
    let (second, _) = generate(root);
    assert_eq!(second.count, 1);
    assert_eq!(second.latest.as_deref(), Some("2.0.0"));
}

#[test]
fn test_missing_root_fails() {
    let temp = TempDir::new().unwrap();
    let generator =
        ManifestGenerator::new(ScanConfig::with_root(temp.path().join("missing"))).unwrap();
    let err = generator.run(false).unwrap_err();
    assert_eq!(err.category(), "scan");
}
