//! Bullet-list entry codec for the section body.

use crate::markers::BULLET;

/// Decode the section body into its ordered entry list.
///
/// Lines are trimmed; only lines starting with the bullet prefix count, the
/// prefix is stripped once, and blank results are dropped. Duplicates are
/// preserved here — de-duplication is a merge-time decision made on semantic
/// equality, not a parsing concern.
pub fn decode_entries(middle: &str) -> Vec<String> {
    middle
        .lines()
        .map(str::trim)
        .filter_map(|line| line.strip_prefix(BULLET))
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Encode an ordered entry list back into section body text.
///
/// One bullet line per entry, joined by newlines; an empty list encodes as
/// the empty string.
pub fn encode_entries(entries: &[String]) -> String {
    entries
        .iter()
        .map(|entry| format!("{BULLET}{entry}"))
        .collect::<Vec<_>>()
        .join("\n")
}
