//! Document synchronization through a full server: didOpen, incremental
//! didChange, didClose, observed through a hover handler that reads the
//! word under the cursor from the store.

mod common;

use common::run_server;
use lsp_types::TextDocumentPositionParams;
use lspp::LspServer;
use lspp::protocol::capabilities::flags;
use pretty_assertions::assert_eq;
use serde_json::json;

const INITIALIZE: &str = r#"{
    "jsonrpc": "2.0",
    "id": 1,
    "method": "initialize",
    "params": {}
}"#;

const EXIT: &str = r#"{
    "jsonrpc": "2.0",
    "method": "exit",
    "params": {}
}"#;

/// A server whose hover handler answers with the word under the cursor.
fn word_server() -> LspServer {
    let mut server = LspServer::new();
    let documents = server.documents();
    server.register_callback(
        "textDocument/hover",
        move |params: TextDocumentPositionParams| -> Option<String> {
            let documents = documents.lock();
            let document = documents.get(params.text_document.uri.as_str())?;
            Some(document.word_under_cursor(params.position).to_string())
        },
    );
    server
}

fn hover(id: i64, uri: &str, line: u32, character: u32) -> String {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "method": "textDocument/hover",
        "params": {
            "textDocument": {"uri": uri},
            "position": {"line": line, "character": character}
        }
    })
    .to_string()
}

fn did_open(uri: &str, text: &str) -> String {
    json!({
        "jsonrpc": "2.0",
        "method": "textDocument/didOpen",
        "params": {"textDocument": {"uri": uri, "text": text}}
    })
    .to_string()
}

#[test]
fn did_open_makes_content_visible_to_handlers() {
    let uri = "file:///mem/lorem.txt";
    let text = "Lorem ipsum dolor sit amet consectetur adipiscing elit\n \
        Consectetur adipiscing elit quisque faucibus ex sapien vitae\n";

    let outcome = run_server(
        word_server(),
        flags::HOVER_PROVIDER,
        &[INITIALIZE, &did_open(uri, text), &hover(2, uri, 0, 12), EXIT],
    );

    assert_eq!(outcome.responses[1]["id"], 2);
    assert_eq!(outcome.responses[1]["result"], "dolor");
}

#[test]
fn hover_on_unopened_document_returns_null() {
    let outcome = run_server(
        word_server(),
        flags::HOVER_PROVIDER,
        &[INITIALIZE, &hover(2, "file:///mem/nope.txt", 0, 0), EXIT],
    );

    assert!(outcome.responses[1]["result"].is_null());
}

#[test]
fn ranged_change_edits_the_open_buffer() {
    let uri = "file:///mem/a.txt";
    let change = json!({
        "jsonrpc": "2.0",
        "method": "textDocument/didChange",
        "params": {
            "textDocument": {"uri": uri},
            "contentChanges": [{
                "range": {
                    "start": {"line": 0, "character": 6},
                    "end": {"line": 0, "character": 11}
                },
                "text": "there"
            }]
        }
    })
    .to_string();

    let outcome = run_server(
        word_server(),
        flags::HOVER_PROVIDER,
        &[INITIALIZE, &did_open(uri, "hello world\n"), &change, &hover(2, uri, 0, 8), EXIT],
    );

    assert_eq!(outcome.responses[1]["result"], "there");
}

#[test]
fn changes_in_one_batch_are_cumulative() {
    let uri = "file:///mem/b.txt";
    // After the first replacement the buffer is "first two"; the second
    // change's range addresses that intermediate state, not the original.
    let change = json!({
        "jsonrpc": "2.0",
        "method": "textDocument/didChange",
        "params": {
            "textDocument": {"uri": uri},
            "contentChanges": [
                {
                    "range": {
                        "start": {"line": 0, "character": 0},
                        "end": {"line": 0, "character": 3}
                    },
                    "text": "first"
                },
                {
                    "range": {
                        "start": {"line": 0, "character": 6},
                        "end": {"line": 0, "character": 9}
                    },
                    "text": "second"
                }
            ]
        }
    })
    .to_string();

    let outcome = run_server(
        word_server(),
        flags::HOVER_PROVIDER,
        &[INITIALIZE, &did_open(uri, "one two\n"), &change, &hover(2, uri, 0, 6), EXIT],
    );

    assert_eq!(outcome.responses[1]["result"], "second");
}

#[test]
fn full_change_replaces_the_document() {
    let uri = "file:///mem/c.txt";
    let change = json!({
        "jsonrpc": "2.0",
        "method": "textDocument/didChange",
        "params": {
            "textDocument": {"uri": uri},
            "contentChanges": [{"text": "replacement text\n"}]
        }
    })
    .to_string();

    let outcome = run_server(
        word_server(),
        flags::HOVER_PROVIDER,
        &[INITIALIZE, &did_open(uri, "original\n"), &change, &hover(2, uri, 0, 0), EXIT],
    );

    assert_eq!(outcome.responses[1]["result"], "replacement");
}

#[test]
fn did_close_drops_the_document() {
    let uri = "file:///mem/d.txt";
    let close = json!({
        "jsonrpc": "2.0",
        "method": "textDocument/didClose",
        "params": {"textDocument": {"uri": uri}}
    })
    .to_string();

    let outcome = run_server(
        word_server(),
        flags::HOVER_PROVIDER,
        &[INITIALIZE, &did_open(uri, "still here\n"), &close, &hover(2, uri, 0, 0), EXIT],
    );

    assert!(outcome.responses[1]["result"].is_null());
}

#[test]
fn change_for_unopened_document_is_ignored() {
    let uri = "file:///mem/e.txt";
    let change = json!({
        "jsonrpc": "2.0",
        "method": "textDocument/didChange",
        "params": {
            "textDocument": {"uri": uri},
            "contentChanges": [{"text": "never stored"}]
        }
    })
    .to_string();

    let outcome = run_server(
        word_server(),
        flags::HOVER_PROVIDER,
        &[INITIALIZE, &change, &hover(2, uri, 0, 0), EXIT],
    );

    // The store never saw a didOpen, so the handler finds nothing
    assert!(outcome.responses[1]["result"].is_null());
    assert_eq!(outcome.exit_code, 1);
}
