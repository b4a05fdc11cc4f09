use crate::error::StoreResult;

/// Whole-text document store.
///
/// All implementations must satisfy these invariants:
/// - `read` returns the document's full current text; nothing is cached
///   between calls.
/// - `write` is whole-resource replacement, never a partial patch, and
///   reports the number of bytes persisted.
/// - Writes from concurrent callers may interleave with last-write-wins
///   semantics; the store makes no ordering or atomicity promises beyond
///   what the backend naturally provides.
/// - All I/O errors are propagated, never silently ignored.
pub trait DocumentStore: Send + Sync {
    /// Read a document's full text by its path-like key.
    ///
    /// Returns `Ok(None)` if the document does not exist.
    /// Returns `Err` on I/O failure.
    fn read(&self, path: &str) -> StoreResult<Option<String>>;

    /// Replace a document's entire content, creating it if absent.
    ///
    /// Returns the number of bytes written. A return of `0` for non-empty
    /// content signals that the backend persisted nothing.
    fn write(&self, path: &str, content: &str) -> StoreResult<u64>;

    /// Check whether a document exists.
    fn exists(&self, path: &str) -> StoreResult<bool> {
        Ok(self.read(path)?.is_some())
    }
}
