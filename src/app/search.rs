//! POI location search
//!
//! POI files carry a `"locations"` array of names. This searches every JSON
//! file under the archive root for a location containing some text and
//! reports which versions match, grouped by chapter/season folder.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::app::poi::PoiDocument;
use crate::app::walker::list_names;
use crate::constants::files;
use crate::errors::{SearchError, SearchResult};

/// Versions under one `<chapter_dir>/<season_dir>` that matched a search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationMatch {
    pub chapter_season: String,
    /// Sorted version folder names
    pub versions: Vec<String>,
}

/// Search all POI files under `root` for locations containing `needle`
///
/// Matching is case-insensitive. Files that cannot be read or parsed are
/// skipped, and symlinked directories are not descended into. Only files at least three levels below the root count, since
/// the chapter, season and version are taken from the first three path
/// components.
pub fn search_locations(root: &Path, needle: &str) -> SearchResult<Vec<LocationMatch>> {
    let needle = needle.trim().to_lowercase();
    if needle.is_empty() {
        return Err(SearchError::EmptyQuery);
    }
    if !root.is_dir() {
        return Err(SearchError::RootNotFound {
            path: root.to_path_buf(),
        });
    }

    let mut groups: BTreeMap<String, Vec<String>> = BTreeMap::new();
    let mut components = Vec::new();
    visit(root, &mut components, &needle, &mut groups);

    Ok(groups
        .into_iter()
        .map(|(chapter_season, mut versions)| {
            versions.sort();
            LocationMatch {
                chapter_season,
                versions,
            }
        })
        .collect())
}

fn visit(
    dir: &Path,
    components: &mut Vec<String>,
    needle: &str,
    groups: &mut BTreeMap<String, Vec<String>>,
) {
    let names = match list_names(dir) {
        Ok(names) => names,
        Err(e) => {
            debug!("Skipping unreadable directory: {}", e);
            return;
        }
    };

    for name in names {
        let path = dir.join(&name);
        // symlink_metadata so a link back to an ancestor cannot loop
        match fs::symlink_metadata(&path).map(|meta| meta.is_dir()) {
            Ok(true) => {
                components.push(name);
                visit(&path, components, needle, groups);
                components.pop();
            }
            Ok(false) if is_poi_file(&name) => {
                if components.len() < 3 || !file_matches(&path, needle) {
                    continue;
                }
                let key = format!("{}/{}", components[0], components[1]);
                groups.entry(key).or_default().push(components[2].clone());
            }
            Ok(false) => {}
            Err(e) => debug!("Skipping {}: {}", path.display(), e),
        }
    }
}

fn is_poi_file(name: &str) -> bool {
    name.ends_with(&format!(".{}", files::POI_EXTENSION))
}

fn file_matches(path: &Path, needle: &str) -> bool {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            debug!("Skipping unreadable POI file {}: {}", path.display(), e);
            return false;
        }
    };

    match PoiDocument::parse(&content) {
        Some(doc) => doc.mentions(needle),
        None => {
            debug!("Skipping invalid POI file {}", path.display());
            false
        }
    }
}
