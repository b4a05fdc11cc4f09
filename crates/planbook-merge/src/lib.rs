//! Optimistic merge engine for Planbook.
//!
//! Appends a unique entry to the marker-delimited section of a plan document
//! without any lock service. Correctness under concurrent writers comes from
//! re-reading, re-deriving intent from current state, and verifying after the
//! write, never from assuming exclusive access:
//!
//! 1. Read the document fresh and locate its section.
//! 2. Early-exit with success if the entry is already present (idempotence).
//! 3. Append, re-serialize, normalize the trailing delimiter, write the whole
//!    document back.
//! 4. Re-read and confirm the entry survived; a lost update drives a retry
//!    instead of a false success.
//!
//! The cycle is bounded to [`MERGE_ATTEMPTS`] attempts. Failures are explicit
//! [`MergeError`] values carrying a short machine-checkable
//! [`reason`](MergeError::reason) string; nothing is ever thrown past the
//! caller, and no partial document state is left behind because every write
//! is a full replacement derived from a freshly parsed read.

pub mod engine;
pub mod error;

pub use engine::{merge_entry, MergeOutcome, MERGE_ATTEMPTS};
pub use error::{MergeError, MergeResult};
