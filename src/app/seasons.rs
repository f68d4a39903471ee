//! Chapter/season lookup by release version
//!
//! The table below is release history: each entry covers an inclusive range
//! of numeric versions (see [`parse_version`](super::version::parse_version)).
//! Entries are ascending and non-overlapping, so the first match is the only
//! match. Versions outside every range are "ungrouped".

use std::fmt;

use serde::{Deserialize, Serialize};

/// A (chapter, season) grouping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChapterSeason {
    pub chapter: u32,
    pub season: u32,
}

impl ChapterSeason {
    pub const fn new(chapter: u32, season: u32) -> Self {
        Self { chapter, season }
    }
}

impl fmt::Display for ChapterSeason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "chapter {} season {}", self.chapter, self.season)
    }
}

/// One row of the version table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChapterSeasonRange {
    pub min_version: f64,
    pub max_version: f64,
    pub chapter: u32,
    pub season: u32,
}

impl ChapterSeasonRange {
    const fn new(min_version: f64, max_version: f64, chapter: u32, season: u32) -> Self {
        Self {
            min_version,
            max_version,
            chapter,
            season,
        }
    }

    /// Whether `version` falls inside this range (both ends inclusive)
    pub fn contains(&self, version: f64) -> bool {
        version >= self.min_version && version <= self.max_version
    }

    pub fn grouping(&self) -> ChapterSeason {
        ChapterSeason::new(self.chapter, self.season)
    }
}

/// Version ranges per chapter and season, in release order
pub const CHAPTER_SEASON_TABLE: &[ChapterSeasonRange] = &[
    // Chapter 1
    ChapterSeasonRange::new(1.0, 1.11, 1, 1),
    ChapterSeasonRange::new(2.0, 2.5, 1, 2),
    ChapterSeasonRange::new(3.0, 3.6, 1, 3),
    ChapterSeasonRange::new(4.0, 4.5, 1, 4),
    ChapterSeasonRange::new(5.0, 5.41, 1, 5),
    ChapterSeasonRange::new(6.0, 6.31, 1, 6),
    ChapterSeasonRange::new(7.0, 7.40, 1, 7),
    ChapterSeasonRange::new(8.0, 8.51, 1, 8),
    ChapterSeasonRange::new(9.0, 9.41, 1, 9),
    ChapterSeasonRange::new(10.0, 10.40, 1, 10),
    // Chapter 2
    ChapterSeasonRange::new(11.0, 11.50, 2, 1),
    ChapterSeasonRange::new(12.0, 12.61, 2, 2),
    ChapterSeasonRange::new(13.0, 13.40, 2, 3),
    ChapterSeasonRange::new(14.0, 14.60, 2, 4),
    ChapterSeasonRange::new(15.0, 15.50, 2, 5),
    ChapterSeasonRange::new(16.0, 16.50, 2, 6),
    ChapterSeasonRange::new(17.0, 17.50, 2, 7),
    ChapterSeasonRange::new(18.0, 18.40, 2, 8),
    // Chapter 3
    ChapterSeasonRange::new(19.0, 19.40, 3, 1),
    ChapterSeasonRange::new(20.0, 20.40, 3, 2),
    ChapterSeasonRange::new(21.0, 21.51, 3, 3),
    ChapterSeasonRange::new(22.0, 22.40, 3, 4),
    // Chapter 4
    ChapterSeasonRange::new(23.0, 23.50, 4, 1),
    ChapterSeasonRange::new(24.0, 24.40, 4, 2),
    ChapterSeasonRange::new(25.0, 25.30, 4, 3),
    ChapterSeasonRange::new(26.0, 26.30, 4, 4),
    ChapterSeasonRange::new(27.0, 27.11, 4, 5),
    // Chapter 5
    ChapterSeasonRange::new(28.0, 28.30, 5, 1),
    ChapterSeasonRange::new(29.0, 29.40, 5, 2),
    ChapterSeasonRange::new(30.0, 30.30, 5, 3),
    ChapterSeasonRange::new(31.0, 31.40, 5, 4),
    // Chapter 6
    ChapterSeasonRange::new(32.0, 32.11, 6, 0), // OG
    ChapterSeasonRange::new(33.0, 33.40, 6, 1),
    ChapterSeasonRange::new(34.0, 34.40, 6, 2),
    ChapterSeasonRange::new(35.0, 35.40, 6, 3),
    ChapterSeasonRange::new(36.0, 37.99, 6, 4),
    ChapterSeasonRange::new(38.0, 38.99, 6, 5),
];

/// Look up the chapter/season a version belongs to
pub fn resolve_chapter_season(version: f64) -> Option<ChapterSeason> {
    CHAPTER_SEASON_TABLE
        .iter()
        .find(|range| range.contains(version))
        .map(ChapterSeasonRange::grouping)
}
