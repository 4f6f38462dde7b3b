//! Text document synchronization
//!
//! Handles didOpen, didChange, didClose notifications by updating the
//! document store. Malformed parameters are dropped; sync notifications
//! never produce a response either way.

use super::Shared;
use lsp_types::TextDocumentContentChangeEvent;
use serde_json::Value;

impl Shared {
    /// Handle textDocument/didOpen notification
    pub(crate) fn handle_did_open(&self, params: &Value) {
        let Some(uri) = params.pointer("/textDocument/uri").and_then(Value::as_str) else {
            return;
        };
        let text = params.pointer("/textDocument/text").and_then(Value::as_str).unwrap_or_default();
        self.documents.lock().open(uri, text);
    }

    /// Handle textDocument/didChange notification
    pub(crate) fn handle_did_change(&self, params: &Value) {
        let Some(uri) = params.pointer("/textDocument/uri").and_then(Value::as_str) else {
            return;
        };
        let Some(changes) = params.get("contentChanges").and_then(Value::as_array) else {
            return;
        };

        let mut parsed = Vec::with_capacity(changes.len());
        for change in changes {
            match serde_json::from_value::<TextDocumentContentChangeEvent>(change.clone()) {
                Ok(change) => parsed.push(change),
                Err(e) => eprintln!("lspp: dropping bad content change for {uri}: {e}"),
            }
        }

        let mut documents = self.documents.lock();
        if let Some(document) = documents.get_mut(uri) {
            document.apply_changes(&parsed);
        }
    }

    /// Handle textDocument/didClose notification
    pub(crate) fn handle_did_close(&self, params: &Value) {
        if let Some(uri) = params.pointer("/textDocument/uri").and_then(Value::as_str) {
            self.documents.lock().close(uri);
        }
    }
}
