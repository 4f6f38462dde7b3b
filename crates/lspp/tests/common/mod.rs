//! Common test utilities for runtime integration tests.
//!
//! Tests drive a real [`LspServer`] over in-memory streams: the payloads are
//! framed into one input buffer, the server consumes it to EOF (or an `exit`
//! notification), and `exit()` joins the listener deterministically. The
//! output is collected through a shared sink and split back into JSON
//! responses for assertions.

#![allow(dead_code)] // Shared helpers; not every test file uses all of them

use lspp::LspServer;
use serde_json::Value;
use std::io::Cursor;
use std::sync::{Arc, Mutex};

/// A cloneable writer backed by shared memory, so tests can keep a handle
/// to everything the server wrote.
#[derive(Clone, Default)]
pub struct SharedSink(Arc<Mutex<Vec<u8>>>);

impl SharedSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> Vec<u8> {
        self.0.lock().unwrap().clone()
    }
}

impl std::io::Write for SharedSink {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Frame one JSON payload with a Content-Length header.
pub fn frame(payload: &str) -> Vec<u8> {
    format!("Content-Length: {}\r\n\r\n{}", payload.len(), payload).into_bytes()
}

/// Everything a server run produced.
pub struct BatchOutcome {
    /// Parsed response bodies, in write order
    pub responses: Vec<Value>,
    /// What `exit()` returned
    pub exit_code: i32,
}

/// Feed pre-framed bytes to a configured server and wait for it to finish.
pub fn run_server_raw(mut server: LspServer, capabilities: u64, input: Vec<u8>) -> BatchOutcome {
    let sink = SharedSink::new();
    server.init(capabilities, Cursor::new(input), sink.clone());
    let exit_code = server.exit();
    BatchOutcome { responses: parse_frames(&sink.contents()), exit_code }
}

/// Feed a sequence of JSON payloads to a configured server.
pub fn run_server(server: LspServer, capabilities: u64, payloads: &[&str]) -> BatchOutcome {
    let mut input = Vec::new();
    for payload in payloads {
        input.extend_from_slice(&frame(payload));
    }
    run_server_raw(server, capabilities, input)
}

/// Feed a sequence of JSON payloads to a fresh server with no handlers.
pub fn run_batch(capabilities: u64, payloads: &[&str]) -> BatchOutcome {
    run_server(LspServer::new(), capabilities, payloads)
}

/// Split framed output back into parsed JSON bodies.
pub fn parse_frames(mut bytes: &[u8]) -> Vec<Value> {
    let mut responses = Vec::new();
    while let Some(sep) = find(bytes, b"\r\n\r\n") {
        let header = std::str::from_utf8(&bytes[..sep]).expect("header is not UTF-8");
        let length: usize = header
            .lines()
            .find_map(|line| line.strip_prefix("Content-Length: "))
            .expect("missing Content-Length header")
            .parse()
            .expect("bad Content-Length value");

        let body_start = sep + 4;
        let body = &bytes[body_start..body_start + length];
        responses.push(serde_json::from_slice(body).expect("response body is not JSON"));
        bytes = &bytes[body_start + length..];
    }
    assert!(bytes.is_empty(), "trailing bytes after last frame: {bytes:?}");
    responses
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|window| window == needle)
}
