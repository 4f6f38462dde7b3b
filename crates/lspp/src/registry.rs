//! Typed handler registration.
//!
//! The dispatcher works in JSON, handlers work in typed params and results.
//! Registration bridges the two: a typed closure is wrapped at registration
//! time into an erased `JSON -> JSON` callable that deserializes the params,
//! invokes the handler, and serializes the result. A handler that returns
//! `None` produces a JSON `null` result.

use lspp_protocol::methods;
use lspp_protocol::{JsonRpcError, MethodKind, internal_error, invalid_params};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashMap;

type ErasedHandler = Box<dyn Fn(Value) -> Result<Value, JsonRpcError> + Send + Sync>;

/// Handlers keyed by method name.
///
/// Registration happens before the listener starts; afterwards the registry
/// is only read, from the listener thread.
#[derive(Default)]
pub struct HandlerRegistry {
    handlers: HashMap<String, ErasedHandler>,
}

impl HandlerRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a typed handler for a method name.
    ///
    /// The lifecycle methods (`initialize`, `shutdown`, `exit`) are handled
    /// internally and cannot be overridden; registering them is refused.
    pub fn register<P, R, F>(&mut self, method: &str, handler: F)
    where
        P: DeserializeOwned + 'static,
        R: Serialize + 'static,
        F: Fn(P) -> Option<R> + Send + Sync + 'static,
    {
        if matches!(method, methods::INITIALIZE | methods::SHUTDOWN | methods::EXIT) {
            eprintln!("lspp: refusing handler registration for lifecycle method {method}");
            return;
        }
        self.handlers.insert(
            method.to_string(),
            Box::new(move |params| {
                let typed: P = serde_json::from_value(params)
                    .map_err(|e| invalid_params(format!("Invalid params: {e}")))?;
                match handler(typed) {
                    Some(result) => serde_json::to_value(result)
                        .map_err(|e| internal_error(format!("Result serialization failed: {e}"))),
                    None => Ok(Value::Null),
                }
            }),
        );
    }

    /// Register a typed handler by method kind.
    pub fn register_kind<P, R, F>(&mut self, kind: MethodKind, handler: F)
    where
        P: DeserializeOwned + 'static,
        R: Serialize + 'static,
        F: Fn(P) -> Option<R> + Send + Sync + 'static,
    {
        self.register(kind.as_str(), handler);
    }

    /// Invoke the handler for `method`, if one is registered.
    pub fn invoke(&self, method: &str, params: Value) -> Option<Result<Value, JsonRpcError>> {
        self.handlers.get(method).map(|handler| handler(params))
    }

    /// Whether a handler is registered for `method`.
    pub fn contains(&self, method: &str) -> bool {
        self.handlers.contains_key(method)
    }

    /// Number of registered handlers.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Whether no handlers are registered.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}
