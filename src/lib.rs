//! Archive Manifest Library
//!
//! Indexes a tree of versioned map images laid out as
//! `chapter_<N>/season_<M>/<version>/` and writes a sorted `manifest.json`.
//! Version folder names from both naming eras (`1_6_0`, `33_00`) are parsed
//! into comparable ranks, and naming inconsistencies are reported as
//! warnings rather than errors.

pub mod app;
pub mod cli;
pub mod config;
pub mod constants;
pub mod errors;
pub mod prelude;

// Re-export commonly used types for convenience
pub use errors::{AppError, Result};

#[cfg(test)]
mod tests {
    use super::*;
    use constants::*;

    #[test]
    fn test_constants_accessible() {
        assert_eq!(MANIFEST_FILE_NAME, "manifest.json");
        assert_eq!(CHAPTER_PREFIX, "chapter_");
        assert_eq!(LATEST_ALIAS, "latest");
    }

    #[test]
    fn test_error_types() {
        let search_error = errors::SearchError::EmptyQuery;
        let app_error = AppError::Search(search_error);

        assert_eq!(app_error.category(), "search");
    }
}
