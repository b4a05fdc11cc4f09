use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::traits::DocumentStore;

/// Filesystem-backed document store.
///
/// Documents are plain files under a root directory; keys are relative paths
/// like `docs/plans/auth.md`. `write` creates missing parent directories.
/// Keys that would resolve outside the root are rejected.
#[derive(Debug)]
pub struct FsDocumentStore {
    root: PathBuf,
}

impl FsDocumentStore {
    /// Create a store rooted at the given directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The store's root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a key to an absolute path under the root.
    ///
    /// Rejects absolute keys and keys containing `..` components, so no key
    /// can name a file outside the root.
    fn resolve(&self, path: &str) -> StoreResult<PathBuf> {
        let relative = Path::new(path);
        for component in relative.components() {
            match component {
                Component::Normal(_) | Component::CurDir => {}
                Component::ParentDir => {
                    return Err(StoreError::InvalidPath {
                        path: path.to_string(),
                        reason: "must not contain '..'".into(),
                    });
                }
                Component::RootDir | Component::Prefix(_) => {
                    return Err(StoreError::InvalidPath {
                        path: path.to_string(),
                        reason: "must be relative to the store root".into(),
                    });
                }
            }
        }
        Ok(self.root.join(relative))
    }
}

impl DocumentStore for FsDocumentStore {
    fn read(&self, path: &str) -> StoreResult<Option<String>> {
        let full = self.resolve(path)?;
        match fs::read_to_string(&full) {
            Ok(content) => {
                debug!(path, len = content.len(), "document read");
                Ok(Some(content))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, path: &str, content: &str) -> StoreResult<u64> {
        let full = self.resolve(path)?;
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&full, content)?;
        debug!(path, len = content.len(), "document written");
        Ok(content.len() as u64)
    }

    fn exists(&self, path: &str) -> StoreResult<bool> {
        Ok(self.resolve(path)?.is_file())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_and_read_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsDocumentStore::new(dir.path());

        let bytes = store.write("docs/plans/auth.md", "# Auth plan\n").unwrap();
        assert_eq!(bytes, 12);

        let read_back = store.read("docs/plans/auth.md").unwrap();
        assert_eq!(read_back.as_deref(), Some("# Auth plan\n"));
    }

    #[test]
    fn read_missing_returns_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsDocumentStore::new(dir.path());
        assert!(store.read("nope.md").unwrap().is_none());
    }

    #[test]
    fn write_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsDocumentStore::new(dir.path());

        store.write("a/b/c/deep.md", "deep").unwrap();
        assert!(dir.path().join("a/b/c/deep.md").is_file());
    }

    #[test]
    fn write_replaces_existing_content() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsDocumentStore::new(dir.path());

        store.write("note.md", "a much longer first version").unwrap();
        store.write("note.md", "short").unwrap();

        assert_eq!(store.read("note.md").unwrap().as_deref(), Some("short"));
    }

    #[test]
    fn exists_for_present_and_missing() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsDocumentStore::new(dir.path());

        assert!(!store.exists("x.md").unwrap());
        store.write("x.md", "x").unwrap();
        assert!(store.exists("x.md").unwrap());
    }

    #[test]
    fn reject_parent_traversal() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsDocumentStore::new(dir.path());

        let err = store.read("../outside.md").unwrap_err();
        assert!(matches!(err, StoreError::InvalidPath { .. }));

        let err = store.write("docs/../../outside.md", "x").unwrap_err();
        assert!(matches!(err, StoreError::InvalidPath { .. }));
    }

    #[test]
    fn reject_absolute_key() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsDocumentStore::new(dir.path());

        let err = store.read("/etc/hostname").unwrap_err();
        assert!(matches!(err, StoreError::InvalidPath { .. }));
    }
}
