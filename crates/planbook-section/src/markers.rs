//! Literal delimiters of the synchronized section.

/// Opening marker of the spec list region.
pub const SPECS_START: &str = "<!-- SPECS_START -->";

/// Closing marker of the spec list region.
pub const SPECS_END: &str = "<!-- SPECS_END -->";

/// Recovery boundary when the closing marker is missing: the next
/// second-level markdown heading. Deliberately this narrow literal match,
/// not a general heading pattern.
pub const HEADING_BOUNDARY: &str = "\n## ";

/// Prefix of one entry line inside the section body.
pub const BULLET: &str = "- ";
