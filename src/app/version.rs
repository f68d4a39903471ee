//! Version token parsing
//!
//! Archive folders are named after the release they hold. Two naming eras
//! coexist on disk:
//!
//! - legacy three-part tokens such as `1_6_0` (major, minor, patch)
//! - current two-part tokens such as `33_00` (major, minor)
//!
//! Either may carry a descriptive suffix (`13_20-(water-lvl-4)`,
//! `27_00-stage-2`, `32-week-2`). The numeric form produced here orders
//! releases correctly across both eras; the display form is what ends up in
//! the manifest.

use crate::constants::version::{COMPONENT_SEPARATOR, DISPLAY_SEPARATOR, SUFFIX_MARKERS};

/// Strip a descriptive suffix from a version token
///
/// Everything from the first `-` or `(` onwards is removed, then a single
/// trailing `-` if one is left.
///
/// ```
/// use archive_manifest::app::version::strip_suffix;
///
/// assert_eq!(strip_suffix("13_20-(water-lvl-4)"), "13_20");
/// assert_eq!(strip_suffix("33_00"), "33_00");
/// ```
pub fn strip_suffix(token: &str) -> &str {
    let head = match token.find(SUFFIX_MARKERS) {
        Some(idx) => &token[..idx],
        None => token,
    };
    head.strip_suffix('-').unwrap_or(head)
}

/// Parse a version token into its numeric rank
///
/// Returns `None` when the token is not a recognizable version: a component
/// is not numeric, or there are more than three components.
///
/// | components | value |
/// |---|---|
/// | `major_minor_patch` | `major + minor/100 + patch/10000` |
/// | `major_minor` | `major + minor/100` |
/// | `major` | `major` |
pub fn parse_version(token: &str) -> Option<f64> {
    let cleaned = strip_suffix(token);

    let parts = cleaned
        .split(COMPONENT_SEPARATOR)
        .map(parse_component)
        .collect::<Option<Vec<f64>>>()?;

    match parts.as_slice() {
        [major, minor, patch] => Some(major + minor / 100.0 + patch / 10000.0),
        [major, minor] => Some(major + minor / 100.0),
        [major] => Some(*major),
        _ => None,
    }
}

fn parse_component(component: &str) -> Option<f64> {
    let component = component.trim();
    if component.is_empty() {
        // `1__0` and `13_-beta` are indexed with the gap read as zero
        return Some(0.0);
    }
    // "inf" and "NaN" parse as f64 but are not release numbers
    component.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Convert a version token to its display form
///
/// Every `_` becomes `.`; any suffix is kept verbatim.
///
/// ```
/// use archive_manifest::app::version::version_to_display;
///
/// assert_eq!(version_to_display("13_20-(water-lvl-4)"), "13.20-(water-lvl-4)");
/// ```
pub fn version_to_display(token: &str) -> String {
    token.replace(COMPONENT_SEPARATOR, &DISPLAY_SEPARATOR.to_string())
}

/// Reverse [`version_to_display`] so a display string can be re-parsed
pub fn display_to_token(display: &str) -> String {
    display.replace(DISPLAY_SEPARATOR, &COMPONENT_SEPARATOR.to_string())
}

/// Numeric rank of a display string, `0.0` when it cannot be parsed
///
/// Used for sorting, where unrecognized entries must sink instead of failing.
pub fn display_rank(display: &str) -> f64 {
    parse_version(&display_to_token(display)).unwrap_or(0.0)
}
