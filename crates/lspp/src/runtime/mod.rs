//! The LSP server runtime.
//!
//! [`LspServer`] owns a background listener thread that reads framed
//! JSON-RPC messages, drives the lifecycle state machine, and writes
//! responses. The embedder registers handlers, calls [`LspServer::init`]
//! with the byte streams, and finally joins with [`LspServer::exit`].
//!
//! Concurrency model: the listener thread is the only reader of the input
//! and the only mutator of lifecycle and document state. The output stream
//! sits behind a mutex so [`LspServer::send`] and [`LspServer::notify`] can
//! emit whole frames from any thread. Shutdown is cooperative: `stop` raises
//! an atomic flag the listener checks between messages, and `exit` joins.

mod dispatch;
mod text_sync;

use crate::registry::HandlerRegistry;
use crate::state::DocumentStore;
use crate::trace;
use dispatch::LifecycleState;
use lspp_protocol::capabilities::ServerCapabilities;
use lspp_protocol::{JsonRpcResponse, Message};
use lspp_transport::{ReadOutcome, read_frame, write_frame};
use parking_lot::Mutex;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use std::io::{self, BufReader, Read, Write};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::JoinHandle;

/// State shared between the owning [`LspServer`] and its listener thread.
pub(crate) struct Shared {
    pub(crate) capabilities: ServerCapabilities,
    pub(crate) registry: HandlerRegistry,
    pub(crate) documents: Arc<Mutex<DocumentStore>>,
    pub(crate) lifecycle: Mutex<LifecycleState>,
    pub(crate) force_shutdown: AtomicBool,
    pub(crate) ok_to_exit: AtomicBool,
    output: Mutex<Box<dyn Write + Send>>,
}

impl Shared {
    /// Raise the shutdown flag. Non-blocking; the listener notices it
    /// between messages.
    pub(crate) fn stop(&self) {
        self.force_shutdown.store(true, Ordering::Release);
    }

    /// Write one response as a whole frame under the output lock.
    pub(crate) fn send(&self, response: &JsonRpcResponse, flush: bool) -> io::Result<()> {
        let body = response.to_body();
        trace::log(&format!("OUTBOUND: {body}"));
        let mut output = self.output.lock();
        write_frame(&mut *output, body.as_bytes(), flush)
    }

    /// Write a server-initiated notification as a whole frame.
    pub(crate) fn notify(&self, method: &str, params: Value) -> io::Result<()> {
        let notification = json!({
            "jsonrpc": "2.0",
            "method": method,
            "params": params
        });
        let body = notification.to_string();
        trace::log(&format!("OUTBOUND: {body}"));
        let mut output = self.output.lock();
        write_frame(&mut *output, body.as_bytes(), true)
    }
}

/// A Language Server Protocol runtime with a background listener thread.
///
/// Lifecycle: construct, register handlers, [`init`](Self::init) once with
/// the input/output streams, and [`exit`](Self::exit) to join. Dropping the
/// server stops and joins the listener.
pub struct LspServer {
    registry: Option<HandlerRegistry>,
    documents: Arc<Mutex<DocumentStore>>,
    shared: Option<Arc<Shared>>,
    listener: Option<JoinHandle<()>>,
}

impl LspServer {
    /// Create a server with no handlers registered.
    pub fn new() -> Self {
        Self {
            registry: Some(HandlerRegistry::new()),
            documents: Arc::new(Mutex::new(DocumentStore::new())),
            shared: None,
            listener: None,
        }
    }

    /// Handle to the open-document store, for handlers that need document
    /// content. Clone it into closures before calling [`init`](Self::init).
    pub fn documents(&self) -> Arc<Mutex<DocumentStore>> {
        Arc::clone(&self.documents)
    }

    /// Register a typed handler for a method name. Must happen before
    /// [`init`](Self::init); later registrations are refused.
    pub fn register_callback<P, R, F>(&mut self, method: &str, handler: F)
    where
        P: DeserializeOwned + 'static,
        R: Serialize + 'static,
        F: Fn(P) -> Option<R> + Send + Sync + 'static,
    {
        match self.registry.as_mut() {
            Some(registry) => registry.register(method, handler),
            None => eprintln!("lspp: handler registration after init ignored ({method})"),
        }
    }

    /// Register a typed handler by method kind.
    pub fn register_callback_kind<P, R, F>(
        &mut self,
        kind: lspp_protocol::MethodKind,
        handler: F,
    ) where
        P: DeserializeOwned + 'static,
        R: Serialize + 'static,
        F: Fn(P) -> Option<R> + Send + Sync + 'static,
    {
        self.register_callback(kind.as_str(), handler);
    }

    /// Start the listener thread over the given streams, advertising the
    /// given capability flags. Returns 0; calling it again while the
    /// listener is running is a no-op.
    pub fn init<R, W>(&mut self, capabilities: u64, input: R, output: W) -> i32
    where
        R: Read + Send + 'static,
        W: Write + Send + 'static,
    {
        if self.listener.is_some() {
            return 0;
        }

        let shared = Arc::new(Shared {
            capabilities: ServerCapabilities::new(capabilities),
            registry: self.registry.take().unwrap_or_default(),
            documents: Arc::clone(&self.documents),
            lifecycle: Mutex::new(LifecycleState::Uninitialized),
            force_shutdown: AtomicBool::new(false),
            ok_to_exit: AtomicBool::new(false),
            output: Mutex::new(Box::new(output)),
        });
        self.shared = Some(Arc::clone(&shared));

        self.listener = std::thread::Builder::new()
            .name("lspp-listener".to_string())
            .spawn(move || listener_main(&shared, Box::new(input)))
            .ok();
        0
    }

    /// Raise the shutdown flag. Safe to call from any thread; does not
    /// block and does not interrupt a handler already running.
    pub fn stop(&self) {
        if let Some(shared) = &self.shared {
            shared.stop();
        }
    }

    /// Join the listener. Returns 0 iff the server terminated through a
    /// protocol-correct `exit`, 1 otherwise.
    pub fn exit(&mut self) -> i32 {
        if let Some(listener) = self.listener.take() {
            let _ = listener.join();
        }
        match &self.shared {
            Some(shared) if shared.ok_to_exit.load(Ordering::Acquire) => 0,
            _ => 1,
        }
    }

    /// Write a response frame to the client, bypassing dispatch. Usable from
    /// any thread once the server is initialized.
    pub fn send(&self, response: &JsonRpcResponse, flush: bool) -> io::Result<()> {
        match &self.shared {
            Some(shared) => shared.send(response, flush),
            None => Err(io::Error::new(io::ErrorKind::NotConnected, "server not initialized")),
        }
    }

    /// Write a server-initiated notification frame to the client.
    pub fn notify(&self, method: &str, params: Value) -> io::Result<()> {
        match &self.shared {
            Some(shared) => shared.notify(method, params),
            None => Err(io::Error::new(io::ErrorKind::NotConnected, "server not initialized")),
        }
    }
}

impl Default for LspServer {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for LspServer {
    fn drop(&mut self) {
        // The listener references the shared state; it must be joined
        // before the embedder's streams go away.
        self.stop();
        self.exit();
    }
}

/// The listener loop: read, dispatch, respond, until shutdown or EOF.
fn listener_main(shared: &Arc<Shared>, input: Box<dyn Read + Send>) {
    let mut reader = BufReader::new(input);
    eprintln!("lspp: listener started");

    while !shared.force_shutdown.load(Ordering::Acquire) {
        match read_frame(&mut reader) {
            Ok(ReadOutcome::Frame(bytes)) => {
                let message = Message::from_bytes(bytes);
                trace::log(&format!("INBOUND: {}", message.text()));

                match message.id() {
                    None => shared.process_notification(&message),
                    Some(id) => {
                        let response = shared.process_request(&message, id);
                        if let Err(e) = shared.send(&response, true) {
                            eprintln!("lspp: write failed: {e}");
                            break;
                        }
                    }
                }
            }
            Ok(ReadOutcome::Malformed) => continue,
            Ok(ReadOutcome::EndOfInput) => {
                // EOF is a clean exit only after a prior shutdown request
                let after_shutdown =
                    *shared.lifecycle.lock() == LifecycleState::ShuttingDown;
                shared.ok_to_exit.store(after_shutdown, Ordering::Release);
                eprintln!("lspp: end of input, listener exiting");
                break;
            }
            Err(e) => {
                eprintln!("lspp: read failed: {e}");
                break;
            }
        }
    }
}
