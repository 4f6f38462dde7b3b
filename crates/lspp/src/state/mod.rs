//! Document state management
//!
//! Tracks the text of documents the client has opened, applies incremental
//! edits, and answers position queries against the current buffer.

mod document;
mod store;

pub use document::{Document, is_word_delimiter};
pub use store::DocumentStore;
