//! A minimal hover server over stdio.
//!
//! Registers a single hover handler that looks up the word under the cursor
//! in the open-document store and echoes it back as plain text.

use lsp_types::{Hover, HoverContents, MarkupContent, MarkupKind, TextDocumentPositionParams};
use lspp::{LspServer, protocol::capabilities::flags};

fn main() {
    let mut server = LspServer::new();
    let documents = server.documents();

    server.register_callback(
        "textDocument/hover",
        move |params: TextDocumentPositionParams| -> Option<Hover> {
            let documents = documents.lock();
            let document = documents.get(params.text_document.uri.as_str())?;
            let word = document.word_under_cursor(params.position);
            Some(Hover {
                contents: HoverContents::Markup(MarkupContent {
                    kind: MarkupKind::PlainText,
                    value: format!("This is my custom response for: {word}"),
                }),
                range: None,
            })
        },
    );

    server.init(flags::HOVER_PROVIDER, std::io::stdin(), std::io::stdout());
    std::process::exit(server.exit());
}
