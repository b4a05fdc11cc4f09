//! Collapsing duplicate closing markers.

use crate::markers::SPECS_END;

/// Collapse a leading run of duplicate end markers in `after` to exactly one.
///
/// Guards against duplicate markers introduced by prior buggy merges or by
/// concurrent writers racing to reinsert the closing delimiter. Only an
/// uninterrupted run is collapsed; duplicates separated by other content are
/// outside the section and left alone. Input that does not begin with the
/// end marker is returned unchanged.
pub fn collapse_end_markers(after: &str) -> String {
    match after.strip_prefix(SPECS_END) {
        Some(mut tail) => {
            while let Some(rest) = tail.strip_prefix(SPECS_END) {
                tail = rest;
            }
            format!("{SPECS_END}{tail}")
        }
        None => after.to_string(),
    }
}
