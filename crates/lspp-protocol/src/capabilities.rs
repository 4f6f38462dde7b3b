//! Advertised server capabilities.
//!
//! Capabilities are a 64-bit flag word: one bit per optional provider. The
//! embedder picks the bits at startup, the dispatcher gates request methods
//! on them, and the initialize response serializes each set bit as
//! `<name>Provider: true` alongside `positionEncoding` and
//! `textDocumentSync`.

use crate::methods::MethodKind;
use serde_json::{Value, json};

/// Provider flag bits, one per optional server feature.
pub mod flags {
    /// `completionProvider`
    pub const COMPLETION_PROVIDER: u64 = 0x0000_0001;
    /// `hoverProvider`
    pub const HOVER_PROVIDER: u64 = 0x0000_0002;
    /// `signatureHelpProvider`
    pub const SIGNATURE_HELP_PROVIDER: u64 = 0x0000_0004;
    /// `declarationProvider`
    pub const DECLARATION_PROVIDER: u64 = 0x0000_0008;
    /// `definitionProvider`
    pub const DEFINITION_PROVIDER: u64 = 0x0000_0010;
    /// `typeDefinitionProvider`
    pub const TYPE_DEFINITION_PROVIDER: u64 = 0x0000_0020;
    /// `implementationProvider`
    pub const IMPLEMENTATION_PROVIDER: u64 = 0x0000_0040;
    /// `referencesProvider`
    pub const REFERENCES_PROVIDER: u64 = 0x0000_0080;
    /// `documentHighlightProvider`
    pub const DOCUMENT_HIGHLIGHT_PROVIDER: u64 = 0x0000_0100;
    /// `documentSymbolProvider`
    pub const DOCUMENT_SYMBOL_PROVIDER: u64 = 0x0000_0200;
    /// `codeActionProvider`
    pub const CODE_ACTION_PROVIDER: u64 = 0x0000_0400;
    /// `codeLensProvider`
    pub const CODE_LENS_PROVIDER: u64 = 0x0000_0800;
    /// `documentLinkProvider`
    pub const DOCUMENT_LINK_PROVIDER: u64 = 0x0000_1000;
    /// `colorProvider`
    pub const COLOR_PROVIDER: u64 = 0x0000_2000;
    /// `documentFormattingProvider`
    pub const DOCUMENT_FORMATTING_PROVIDER: u64 = 0x0000_4000;
    /// `documentRangeFormattingProvider`
    pub const DOCUMENT_RANGE_FORMATTING_PROVIDER: u64 = 0x0000_8000;
    /// `documentOnTypeFormattingProvider`
    pub const DOCUMENT_ON_TYPE_FORMATTING_PROVIDER: u64 = 0x0001_0000;
    /// `renameProvider`
    pub const RENAME_PROVIDER: u64 = 0x0002_0000;
    /// `foldingRangeProvider`
    pub const FOLDING_RANGE_PROVIDER: u64 = 0x0004_0000;
    /// `executeCommandProvider`
    pub const EXECUTE_COMMAND_PROVIDER: u64 = 0x0008_0000;
    /// `selectionRangeProvider`
    pub const SELECTION_RANGE_PROVIDER: u64 = 0x0010_0000;
    /// `linkedEditingRangeProvider`
    pub const LINKED_EDITING_RANGE_PROVIDER: u64 = 0x0020_0000;
    /// `callHierarchyProvider`
    pub const CALL_HIERARCHY_PROVIDER: u64 = 0x0040_0000;
    /// `semanticTokensProvider`
    pub const SEMANTIC_TOKENS_PROVIDER: u64 = 0x0080_0000;
    /// `monikerProvider`
    pub const MONIKER_PROVIDER: u64 = 0x0100_0000;
    /// `typeHierarchyProvider`
    pub const TYPE_HIERARCHY_PROVIDER: u64 = 0x0200_0000;
    /// `inlineValueProvider`
    pub const INLINE_VALUE_PROVIDER: u64 = 0x0400_0000;
    /// `inlayHintProvider`
    pub const INLAY_HINT_PROVIDER: u64 = 0x0800_0000;
    /// `diagnosticProvider`
    pub const DIAGNOSTIC_PROVIDER: u64 = 0x1000_0000;
    /// `workspaceSymbolProvider`
    pub const WORKSPACE_SYMBOL_PROVIDER: u64 = 0x2000_0000;
}

/// Flag-to-JSON-key table, in bit order.
const PROVIDER_KEYS: &[(u64, &str)] = &[
    (flags::COMPLETION_PROVIDER, "completionProvider"),
    (flags::HOVER_PROVIDER, "hoverProvider"),
    (flags::SIGNATURE_HELP_PROVIDER, "signatureHelpProvider"),
    (flags::DECLARATION_PROVIDER, "declarationProvider"),
    (flags::DEFINITION_PROVIDER, "definitionProvider"),
    (flags::TYPE_DEFINITION_PROVIDER, "typeDefinitionProvider"),
    (flags::IMPLEMENTATION_PROVIDER, "implementationProvider"),
    (flags::REFERENCES_PROVIDER, "referencesProvider"),
    (flags::DOCUMENT_HIGHLIGHT_PROVIDER, "documentHighlightProvider"),
    (flags::DOCUMENT_SYMBOL_PROVIDER, "documentSymbolProvider"),
    (flags::CODE_ACTION_PROVIDER, "codeActionProvider"),
    (flags::CODE_LENS_PROVIDER, "codeLensProvider"),
    (flags::DOCUMENT_LINK_PROVIDER, "documentLinkProvider"),
    (flags::COLOR_PROVIDER, "colorProvider"),
    (flags::DOCUMENT_FORMATTING_PROVIDER, "documentFormattingProvider"),
    (flags::DOCUMENT_RANGE_FORMATTING_PROVIDER, "documentRangeFormattingProvider"),
    (flags::DOCUMENT_ON_TYPE_FORMATTING_PROVIDER, "documentOnTypeFormattingProvider"),
    (flags::RENAME_PROVIDER, "renameProvider"),
    (flags::FOLDING_RANGE_PROVIDER, "foldingRangeProvider"),
    (flags::EXECUTE_COMMAND_PROVIDER, "executeCommandProvider"),
    (flags::SELECTION_RANGE_PROVIDER, "selectionRangeProvider"),
    (flags::LINKED_EDITING_RANGE_PROVIDER, "linkedEditingRangeProvider"),
    (flags::CALL_HIERARCHY_PROVIDER, "callHierarchyProvider"),
    (flags::SEMANTIC_TOKENS_PROVIDER, "semanticTokensProvider"),
    (flags::MONIKER_PROVIDER, "monikerProvider"),
    (flags::TYPE_HIERARCHY_PROVIDER, "typeHierarchyProvider"),
    (flags::INLINE_VALUE_PROVIDER, "inlineValueProvider"),
    (flags::INLAY_HINT_PROVIDER, "inlayHintProvider"),
    (flags::DIAGNOSTIC_PROVIDER, "diagnosticProvider"),
    (flags::WORKSPACE_SYMBOL_PROVIDER, "workspaceSymbolProvider"),
];

/// How text documents are synced to the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextDocumentSyncKind {
    /// Documents are not synced
    None = 0,
    /// Documents are synced by sending the full content
    Full = 1,
    /// Documents are synced by sending incremental changes
    #[default]
    Incremental = 2,
}

/// The capabilities the server advertises during `initialize`.
#[derive(Debug, Clone)]
pub struct ServerCapabilities {
    /// Provider flag word (see [`flags`])
    pub advertised: u64,
    /// Position encoding negotiated with the client; `"utf-16"` by default
    /// and the only value this runtime advertises
    pub position_encoding: &'static str,
    /// Text document sync mode
    pub text_document_sync: TextDocumentSyncKind,
}

impl ServerCapabilities {
    /// Capability set with the given provider flags and default encoding/sync.
    pub fn new(advertised: u64) -> Self {
        Self {
            advertised,
            position_encoding: "utf-16",
            text_document_sync: TextDocumentSyncKind::Incremental,
        }
    }

    /// Whether every bit of `flag` is advertised.
    pub fn has(&self, flag: u64) -> bool {
        self.advertised & flag == flag && flag != 0
    }

    /// Serialize for the initialize response: `positionEncoding`,
    /// `textDocumentSync`, and one `<name>Provider: true` per set bit.
    pub fn to_json(&self) -> Value {
        let mut caps = json!({
            "positionEncoding": self.position_encoding,
            "textDocumentSync": self.text_document_sync as u8,
        });
        for &(flag, key) in PROVIDER_KEYS {
            if self.advertised & flag != 0 {
                caps[key] = json!(true);
            }
        }
        caps
    }
}

impl Default for ServerCapabilities {
    fn default() -> Self {
        Self::new(0)
    }
}

/// The capability flag a request method is gated on.
///
/// Lifecycle methods, text-sync notifications, and server-to-client
/// notifications return 0 (ungated).
pub fn capability_for_method(kind: MethodKind) -> u64 {
    match kind {
        MethodKind::Hover => flags::HOVER_PROVIDER,
        MethodKind::Definition => flags::DEFINITION_PROVIDER,
        MethodKind::Declaration => flags::DECLARATION_PROVIDER,
        MethodKind::TypeDefinition => flags::TYPE_DEFINITION_PROVIDER,
        MethodKind::Implementation => flags::IMPLEMENTATION_PROVIDER,
        MethodKind::References => flags::REFERENCES_PROVIDER,
        MethodKind::DocumentHighlight => flags::DOCUMENT_HIGHLIGHT_PROVIDER,
        MethodKind::DocumentSymbol => flags::DOCUMENT_SYMBOL_PROVIDER,
        MethodKind::CodeAction | MethodKind::CodeActionResolve => flags::CODE_ACTION_PROVIDER,
        MethodKind::CodeLens | MethodKind::CodeLensResolve | MethodKind::CodeLensRefresh => {
            flags::CODE_LENS_PROVIDER
        }
        MethodKind::DocumentLink | MethodKind::DocumentLinkResolve => flags::DOCUMENT_LINK_PROVIDER,
        MethodKind::DocumentColor | MethodKind::ColorPresentation => flags::COLOR_PROVIDER,
        MethodKind::Formatting => flags::DOCUMENT_FORMATTING_PROVIDER,
        MethodKind::RangeFormatting => flags::DOCUMENT_RANGE_FORMATTING_PROVIDER,
        MethodKind::OnTypeFormatting => flags::DOCUMENT_ON_TYPE_FORMATTING_PROVIDER,
        MethodKind::Rename | MethodKind::PrepareRename => flags::RENAME_PROVIDER,
        MethodKind::FoldingRange => flags::FOLDING_RANGE_PROVIDER,
        MethodKind::SelectionRange => flags::SELECTION_RANGE_PROVIDER,
        MethodKind::LinkedEditingRange => flags::LINKED_EDITING_RANGE_PROVIDER,
        MethodKind::SignatureHelp => flags::SIGNATURE_HELP_PROVIDER,
        MethodKind::Completion | MethodKind::CompletionItemResolve => flags::COMPLETION_PROVIDER,
        MethodKind::DocumentDiagnostic | MethodKind::WorkspaceDiagnostic => {
            flags::DIAGNOSTIC_PROVIDER
        }
        MethodKind::PrepareCallHierarchy
        | MethodKind::IncomingCalls
        | MethodKind::OutgoingCalls => flags::CALL_HIERARCHY_PROVIDER,
        MethodKind::PrepareTypeHierarchy
        | MethodKind::TypeHierarchySupertypes
        | MethodKind::TypeHierarchySubtypes => flags::TYPE_HIERARCHY_PROVIDER,
        MethodKind::SemanticTokensFull
        | MethodKind::SemanticTokensFullDelta
        | MethodKind::SemanticTokensRange
        | MethodKind::SemanticTokensRefresh => flags::SEMANTIC_TOKENS_PROVIDER,
        MethodKind::InlayHint | MethodKind::InlayHintResolve | MethodKind::InlayHintRefresh => {
            flags::INLAY_HINT_PROVIDER
        }
        MethodKind::InlineValue | MethodKind::InlineValueRefresh => flags::INLINE_VALUE_PROVIDER,
        MethodKind::Moniker => flags::MONIKER_PROVIDER,
        MethodKind::None
        | MethodKind::Initialize
        | MethodKind::Shutdown
        | MethodKind::Exit
        | MethodKind::DidOpen
        | MethodKind::DidChange
        | MethodKind::DidClose
        | MethodKind::PublishDiagnostics
        | MethodKind::DiagnosticRefresh => 0,
    }
}
