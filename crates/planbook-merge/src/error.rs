use planbook_store::StoreError;

/// Errors from merge operations.
#[derive(Debug, thiserror::Error)]
pub enum MergeError {
    /// The document lacks the start marker; the structural precondition
    /// cannot self-heal, so this is never retried.
    #[error("missing section in {path}")]
    MissingSection { path: String },

    /// The document does not exist in the backing store.
    #[error("document not found: {path}")]
    NotFound { path: String },

    /// The backend reported that it persisted nothing; a storage-layer
    /// fault rather than a race, so this is never retried.
    #[error("write failed for {path}: backend persisted nothing")]
    WriteFailed { path: String },

    /// Every attempt completed without the entry verified present, implying
    /// repeated interference from other writers.
    #[error("concurrent updates on {path}: entry not verified after {attempts} attempts")]
    ConcurrentUpdates { path: String, attempts: u32 },

    /// Entries are non-empty by the data model.
    #[error("entry must not be empty")]
    EmptyEntry,

    /// I/O failure from the backing store.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl MergeError {
    /// Short machine-checkable reason string for this failure.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::MissingSection { .. } => "missing section",
            Self::NotFound { .. } => "not found",
            Self::WriteFailed { .. } => "write failed",
            Self::ConcurrentUpdates { .. } => "concurrent updates",
            Self::EmptyEntry => "empty entry",
            Self::Store(_) => "store error",
        }
    }
}

/// Result alias for merge operations.
pub type MergeResult<T> = Result<T, MergeError>;
