//! The retrying read-modify-write-verify cycle.

use serde::Serialize;
use tracing::{debug, warn};

use planbook_section::{collapse_end_markers, decode_entries, encode_entries, locate, SPECS_END};
use planbook_store::DocumentStore;

use crate::error::{MergeError, MergeResult};

/// Fixed number of optimistic attempts before reporting contention.
pub const MERGE_ATTEMPTS: u32 = 5;

/// Successful merge outcomes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MergeOutcome {
    /// The entry was already present on first read; the document was not
    /// written at all.
    AlreadyPresent,
    /// The entry was appended and confirmed present by the verification
    /// re-read, on the given attempt.
    Merged { attempts: u32 },
}

/// Append `entry` to the section of the document at `path`, retrying
/// optimistically under concurrent writers.
///
/// Each attempt re-derives all state from the document's current text; no
/// section or entry list is cached across attempts, which is what makes the
/// cycle safe when uncoordinated callers merge into the same document. A
/// successful return means the entry was present at this call's own
/// verification read.
pub fn merge_entry(
    store: &dyn DocumentStore,
    path: &str,
    entry: &str,
) -> MergeResult<MergeOutcome> {
    if entry.trim().is_empty() {
        return Err(MergeError::EmptyEntry);
    }

    for attempt in 1..=MERGE_ATTEMPTS {
        let current = store.read(path)?.ok_or_else(|| MergeError::NotFound {
            path: path.to_string(),
        })?;

        let section = locate(&current).ok_or_else(|| MergeError::MissingSection {
            path: path.to_string(),
        })?;

        let existing = decode_entries(&section.middle);
        if existing.iter().any(|e| e == entry) {
            debug!(path, entry, "entry already present");
            return Ok(MergeOutcome::AlreadyPresent);
        }

        let mut merged = existing;
        merged.push(entry.to_string());
        let body = encode_entries(&merged);

        // Re-establish exactly one closing marker, then keep only the tail
        // beyond it; the candidate supplies its own marker.
        let normalized = collapse_end_markers(&section.after);
        let tail = normalized.strip_prefix(SPECS_END).unwrap_or(&normalized);

        let candidate = format!("{}\n{}\n{}{}", section.before, body, SPECS_END, tail);

        let bytes = store.write(path, &candidate)?;
        if bytes == 0 {
            return Err(MergeError::WriteFailed {
                path: path.to_string(),
            });
        }

        let verify = store.read(path)?.ok_or_else(|| MergeError::NotFound {
            path: path.to_string(),
        })?;
        let verify_section = locate(&verify).ok_or_else(|| MergeError::MissingSection {
            path: path.to_string(),
        })?;
        if decode_entries(&verify_section.middle)
            .iter()
            .any(|e| e == entry)
        {
            debug!(path, entry, attempt, "entry merged and verified");
            return Ok(MergeOutcome::Merged { attempts: attempt });
        }

        warn!(path, entry, attempt, "entry lost to a concurrent write; retrying");
    }

    Err(MergeError::ConcurrentUpdates {
        path: path.to_string(),
        attempts: MERGE_ATTEMPTS,
    })
}
