//! The open-document map.

use super::Document;
use std::collections::HashMap;

/// Documents the client currently has open, keyed by URI.
///
/// URIs are opaque keys here; at most one document exists per URI. Queries
/// on a missing URI fail softly with `None`/`false`.
#[derive(Debug, Default)]
pub struct DocumentStore {
    documents: HashMap<String, Document>,
}

impl DocumentStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Track a newly opened document. Returns whether it was inserted; an
    /// already-open URI is left untouched.
    pub fn open(&mut self, uri: &str, text: impl Into<String>) -> bool {
        if self.documents.contains_key(uri) {
            return false;
        }
        self.documents.insert(uri.to_string(), Document::new(text));
        true
    }

    /// Drop a document. Returns whether anything was removed.
    pub fn close(&mut self, uri: &str) -> bool {
        self.documents.remove(uri).is_some()
    }

    /// Whether the URI is currently open.
    pub fn contains(&self, uri: &str) -> bool {
        self.documents.contains_key(uri)
    }

    /// Borrow an open document.
    pub fn get(&self, uri: &str) -> Option<&Document> {
        self.documents.get(uri)
    }

    /// Mutably borrow an open document.
    pub fn get_mut(&mut self, uri: &str) -> Option<&mut Document> {
        self.documents.get_mut(uri)
    }

    /// Number of open documents.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Whether no documents are open.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_is_idempotent_per_uri() {
        let mut store = DocumentStore::new();
        assert!(store.open("file:///a", "first"));
        assert!(!store.open("file:///a", "second"));
        // The original text wins
        assert_eq!(store.get("file:///a").map(Document::text), Some("first"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn close_reports_whether_anything_was_removed() {
        let mut store = DocumentStore::new();
        store.open("file:///a", "x");
        assert!(store.close("file:///a"));
        assert!(!store.close("file:///a"));
        assert!(store.is_empty());
    }

    #[test]
    fn missing_uris_fail_softly() {
        let mut store = DocumentStore::new();
        assert!(store.get("file:///nope").is_none());
        assert!(store.get_mut("file:///nope").is_none());
        assert!(!store.contains("file:///nope"));
    }
}
