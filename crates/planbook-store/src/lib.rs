//! Document storage for Planbook.
//!
//! This crate implements the backing-store boundary the merge engine depends
//! on: a resource identified by a path-like key, exposing whole-text read and
//! whole-text replacement. There is no partial patching and no locking beyond
//! what the backend naturally provides -- correctness under concurrent
//! writers is the merge engine's job, achieved by re-reading and verifying,
//! never by assuming exclusive access.
//!
//! # Storage Backends
//!
//! All backends implement the [`DocumentStore`] trait:
//!
//! - [`InMemoryDocumentStore`] -- `HashMap`-based store for tests and embedding
//! - [`FsDocumentStore`] -- plain files under a root directory
//!
//! # Design Rules
//!
//! 1. `read` returns the full current text, fresh on every call.
//! 2. `write` replaces the entire document and reports bytes written.
//! 3. The store never interprets document contents.
//! 4. All I/O errors are propagated, never silently ignored.

pub mod error;
pub mod fs;
pub mod memory;
pub mod traits;

// Re-export primary types at crate root for ergonomic imports.
pub use error::{StoreError, StoreResult};
pub use fs::FsDocumentStore;
pub use memory::InMemoryDocumentStore;
pub use traits::DocumentStore;
