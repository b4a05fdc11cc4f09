/// Errors from document convention operations.
#[derive(Debug, thiserror::Error)]
pub enum DocsError {
    /// The plan name violates the naming rules.
    #[error("invalid plan name {name:?}: {reason}")]
    InvalidName { name: String, reason: String },

    /// The plan description violates the description rules.
    #[error("invalid description: {reason}")]
    InvalidDescription { reason: String },

    /// Too few implementation steps for a plan.
    #[error("not enough steps: {given} given, at least {required} required")]
    NotEnoughSteps { given: usize, required: usize },

    /// A resolved document path would leave the workspace.
    #[error("path {path:?} escapes the workspace root")]
    PathEscape { path: String },

    /// I/O error while scanning documents.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for document convention operations.
pub type DocsResult<T> = Result<T, DocsError>;
