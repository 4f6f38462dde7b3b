//! LSPP Runtime Crate
//!
//! This crate provides a reusable runtime for building Language Server
//! Protocol servers. It handles protocol communication, message framing,
//! document synchronization, lifecycle management, and dispatch to
//! user-registered handlers; the embedder supplies the byte streams and the
//! handlers that give requests meaning.
//!
//! # Architecture
//!
//! - [`lspp_protocol`] (re-exported as [`protocol`]) - JSON-RPC message
//!   types, method tables, and capability configuration
//! - [`lspp_transport`] (re-exported as [`transport`]) - Content-Length
//!   message framing
//! - [`state`] - Open-document store with incremental edit application
//! - [`registry`] - Typed handler registration erased to JSON-to-JSON
//! - [`runtime`] - The server: background listener thread, lifecycle state
//!   machine, capability-gated dispatch
//!
//! # Usage
//!
//! Register handlers, call [`LspServer::init`] with the input and output
//! streams, and join with [`LspServer::exit`]:
//!
//! ```no_run
//! use lspp::{LspServer, protocol::capabilities::flags};
//! use serde_json::Value;
//!
//! let mut server = LspServer::new();
//! server.register_callback("textDocument/hover", |_params: Value| -> Option<Value> {
//!     None
//! });
//! server.init(flags::HOVER_PROVIDER, std::io::stdin(), std::io::stdout());
//! std::process::exit(server.exit());
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod registry;
pub mod runtime;
pub mod state;
mod trace;

/// Protocol types re-export
pub use lspp_protocol as protocol;
/// Transport framing re-export
pub use lspp_transport as transport;

pub use lspp_protocol::{JsonRpcError, JsonRpcResponse, Message, MethodKind};
pub use registry::HandlerRegistry;
pub use runtime::LspServer;
pub use state::{Document, DocumentStore};
