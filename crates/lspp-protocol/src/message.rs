//! Parsed inbound message.
//!
//! A [`Message`] owns the raw frame body and a leniently parsed JSON view of
//! it. Construction never fails: a body that is not valid JSON yields a
//! message whose [`Message::method_kind`] is [`MethodKind::None`] and whose
//! [`Message::id`] is `None`, so the dispatcher can drop it or answer
//! "method not found" without the transport ever aborting.

use crate::methods::MethodKind;
use serde_json::Value;

/// One inbound JSON-RPC unit: raw payload bytes plus the parsed view.
#[derive(Debug)]
pub struct Message {
    raw: Vec<u8>,
    json: Option<Value>,
}

impl Message {
    /// Wrap a frame body. Parse failures are recorded, not propagated.
    pub fn from_bytes(raw: Vec<u8>) -> Self {
        let json = serde_json::from_slice(&raw).ok();
        Self { raw, json }
    }

    /// The raw payload bytes as received.
    pub fn raw(&self) -> &[u8] {
        &self.raw
    }

    /// The payload as text, for logging.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.raw).into_owned()
    }

    /// The parsed JSON payload, if the body parsed.
    pub fn json(&self) -> Option<&Value> {
        self.json.as_ref()
    }

    /// The `method` string, or `""` when absent or unparseable.
    pub fn method(&self) -> &str {
        self.json
            .as_ref()
            .and_then(|j| j.get("method"))
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    /// The method looked up in the fixed kind table.
    pub fn method_kind(&self) -> MethodKind {
        MethodKind::from_str(self.method())
    }

    /// The request id. `None` for notifications and for frames whose JSON
    /// did not parse; such frames must never be answered.
    pub fn id(&self) -> Option<i64> {
        self.json.as_ref().and_then(|j| j.get("id")).and_then(Value::as_i64)
    }

    /// The `params` object, or an empty object when absent.
    pub fn params(&self) -> Value {
        self.json
            .as_ref()
            .and_then(|j| j.get("params"))
            .cloned()
            .unwrap_or_else(|| Value::Object(serde_json::Map::new()))
    }

    /// `params.textDocument.uri` when present, else `""`.
    pub fn document_uri(&self) -> String {
        self.json
            .as_ref()
            .and_then(|j| j.pointer("/params/textDocument/uri"))
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    }
}
