//! Request and notification dispatch.
//!
//! The lifecycle is an explicit three-state machine; whether a later `exit`
//! is protocol-correct is computed at the moment `exit` is processed and
//! surfaced through the runtime's exit code.

use super::Shared;
use lspp_protocol::capabilities::capability_for_method;
use lspp_protocol::{
    JsonRpcResponse, Message, MethodKind, method_not_found, method_not_implemented,
    method_not_supported, server_not_initialized, shutting_down,
};
use serde_json::{Value, json};
use std::sync::atomic::Ordering;

/// Name reported in the initialize response's `serverInfo`.
const SERVER_NAME: &str = "LSPP";
/// Version reported in the initialize response's `serverInfo`.
const SERVER_VERSION: &str = "1.0";

/// Where the server is in the initialize/shutdown protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LifecycleState {
    /// No `initialize` request seen yet
    Uninitialized,
    /// `initialize` answered, serving normally
    Initialized,
    /// `shutdown` answered, only `exit` is acceptable
    ShuttingDown,
}

impl Shared {
    /// Answer one request. Every request gets exactly one response.
    pub(crate) fn process_request(&self, message: &Message, id: i64) -> JsonRpcResponse {
        let kind = message.method_kind();
        let state = *self.lifecycle.lock();

        // Before initialize, only 'initialize' is acceptable
        if state == LifecycleState::Uninitialized && kind != MethodKind::Initialize {
            return JsonRpcResponse::error(Some(id), server_not_initialized());
        }

        // After shutdown, only 'exit' is acceptable
        if state == LifecycleState::ShuttingDown && kind != MethodKind::Exit {
            return JsonRpcResponse::error(Some(id), shutting_down());
        }

        match kind {
            MethodKind::Initialize => {
                *self.lifecycle.lock() = LifecycleState::Initialized;
                JsonRpcResponse::success(Some(id), self.initialize_result())
            }
            MethodKind::Shutdown => {
                *self.lifecycle.lock() = LifecycleState::ShuttingDown;
                JsonRpcResponse::null(Some(id))
            }
            MethodKind::Exit => {
                // exit sent as a request: honor it like the notification,
                // acknowledging with a null result
                self.ok_to_exit.store(state == LifecycleState::ShuttingDown, Ordering::Release);
                self.stop();
                JsonRpcResponse::null(Some(id))
            }
            MethodKind::None => JsonRpcResponse::error(Some(id), method_not_found()),
            _ => {
                let flag = capability_for_method(kind);
                if flag != 0 && !self.capabilities.has(flag) {
                    return JsonRpcResponse::error(Some(id), method_not_supported());
                }
                match self.registry.invoke(message.method(), message.params()) {
                    Some(Ok(result)) => JsonRpcResponse::success(Some(id), result),
                    Some(Err(error)) => JsonRpcResponse::error(Some(id), error),
                    None => JsonRpcResponse::error(Some(id), method_not_implemented()),
                }
            }
        }
    }

    /// Handle one notification. Notifications never produce output.
    pub(crate) fn process_notification(&self, message: &Message) {
        match message.method_kind() {
            MethodKind::Exit => {
                // Exit is protocol-correct after shutdown, or before the
                // server was ever initialized
                let state = *self.lifecycle.lock();
                self.ok_to_exit.store(state != LifecycleState::Initialized, Ordering::Release);
                self.stop();
            }
            MethodKind::DidOpen => self.handle_did_open(&message.params()),
            MethodKind::DidChange => self.handle_did_change(&message.params()),
            MethodKind::DidClose => self.handle_did_close(&message.params()),
            _ => {
                // A registered notification handler runs for its side
                // effects; its result is discarded
                let _ = self.registry.invoke(message.method(), message.params());
            }
        }
    }

    fn initialize_result(&self) -> Value {
        json!({
            "capabilities": self.capabilities.to_json(),
            "serverInfo": { "name": SERVER_NAME, "version": SERVER_VERSION }
        })
    }
}
