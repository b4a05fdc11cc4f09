//! Marker-delimited section model for Planbook.
//!
//! A plan document carries exactly one synchronized list region, bounded by
//! the literal markers in [`markers`]. This crate knows how to find that
//! region (including recovering a boundary when the closing marker was
//! stripped or corrupted), how to collapse accidental duplicate closing
//! markers, and how to convert the region's body to and from an ordered list
//! of entries.
//!
//! # Key Types
//!
//! - [`Section`] — Immutable `(before, middle, after)` partition of a document
//! - [`locate`] — Find the section, with heading-based boundary recovery
//! - [`collapse_end_markers`] — Normalize a run of duplicate closing markers
//! - [`decode_entries`] / [`encode_entries`] — Bullet-list entry codec
//!
//! The markers are pure substring delimiters. They are not parsed as HTML;
//! there is no escaping and no nesting.

pub mod entries;
pub mod markers;
pub mod normalize;
pub mod section;

pub use entries::{decode_entries, encode_entries};
pub use markers::{BULLET, HEADING_BOUNDARY, SPECS_END, SPECS_START};
pub use normalize::collapse_end_markers;
pub use section::{locate, Section};
