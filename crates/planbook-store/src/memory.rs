use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::StoreResult;
use crate::traits::DocumentStore;

/// In-memory, HashMap-based document store.
///
/// Intended for tests and embedding. All documents are held in memory behind
/// a `RwLock` for safe concurrent access. Contents are cloned on read.
pub struct InMemoryDocumentStore {
    documents: RwLock<HashMap<String, String>>,
}

impl InMemoryDocumentStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            documents: RwLock::new(HashMap::new()),
        }
    }

    /// Create a store pre-seeded with a single document.
    pub fn with_document(path: &str, content: &str) -> Self {
        let store = Self::new();
        store
            .documents
            .write()
            .expect("lock poisoned")
            .insert(path.to_string(), content.to_string());
        store
    }

    /// Number of documents currently stored.
    pub fn len(&self) -> usize {
        self.documents.read().expect("lock poisoned").len()
    }

    /// Returns `true` if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.documents.read().expect("lock poisoned").is_empty()
    }

    /// Remove all documents from the store.
    pub fn clear(&self) {
        self.documents.write().expect("lock poisoned").clear();
    }
}

impl Default for InMemoryDocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentStore for InMemoryDocumentStore {
    fn read(&self, path: &str) -> StoreResult<Option<String>> {
        let map = self.documents.read().expect("lock poisoned");
        Ok(map.get(path).cloned())
    }

    fn write(&self, path: &str, content: &str) -> StoreResult<u64> {
        let mut map = self.documents.write().expect("lock poisoned");
        map.insert(path.to_string(), content.to_string());
        Ok(content.len() as u64)
    }

    fn exists(&self, path: &str) -> StoreResult<bool> {
        let map = self.documents.read().expect("lock poisoned");
        Ok(map.contains_key(path))
    }
}

impl std::fmt::Debug for InMemoryDocumentStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryDocumentStore")
            .field("document_count", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_and_read_document() {
        let store = InMemoryDocumentStore::new();
        let bytes = store.write("docs/plans/auth.md", "# Auth plan").unwrap();
        assert_eq!(bytes, 11);

        let read_back = store.read("docs/plans/auth.md").unwrap();
        assert_eq!(read_back.as_deref(), Some("# Auth plan"));
    }

    #[test]
    fn read_missing_document_returns_none() {
        let store = InMemoryDocumentStore::new();
        assert!(store.read("docs/plans/ghost.md").unwrap().is_none());
    }

    #[test]
    fn write_replaces_whole_document() {
        let store = InMemoryDocumentStore::new();
        store.write("note.md", "first version").unwrap();
        store.write("note.md", "second").unwrap();

        assert_eq!(store.read("note.md").unwrap().as_deref(), Some("second"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn exists_reflects_writes() {
        let store = InMemoryDocumentStore::new();
        assert!(!store.exists("a.md").unwrap());
        store.write("a.md", "x").unwrap();
        assert!(store.exists("a.md").unwrap());
    }

    #[test]
    fn with_document_seeds_content() {
        let store = InMemoryDocumentStore::with_document("seed.md", "hello");
        assert_eq!(store.read("seed.md").unwrap().as_deref(), Some("hello"));
    }

    #[test]
    fn clear_removes_all() {
        let store = InMemoryDocumentStore::new();
        store.write("a.md", "a").unwrap();
        store.write("b.md", "b").unwrap();
        assert_eq!(store.len(), 2);

        store.clear();
        assert!(store.is_empty());
    }

    #[test]
    fn concurrent_reads_are_safe() {
        use std::sync::Arc;
        use std::thread;

        let store = Arc::new(InMemoryDocumentStore::with_document(
            "shared.md",
            "shared data",
        ));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    let content = store.read("shared.md").unwrap();
                    assert_eq!(content.as_deref(), Some("shared data"));
                })
            })
            .collect();

        for h in handles {
            h.join().expect("thread should not panic");
        }
    }

    #[test]
    fn debug_format() {
        let store = InMemoryDocumentStore::new();
        store.write("x.md", "x").unwrap();
        let debug = format!("{store:?}");
        assert!(debug.contains("InMemoryDocumentStore"));
        assert!(debug.contains("document_count"));
    }
}
