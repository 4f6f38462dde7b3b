//! LSP method name constants and the closed method enumeration.
//!
//! This module centralizes all LSP method identifiers recognized by the
//! runtime, to keep dispatch logic, capability gating, and handler
//! registration consistent. All constants follow the LSP 3.17 specification
//! naming conventions.
//!
//! [`MethodKind`] is the runtime's closed enumeration of those identifiers.
//! [`MethodKind::from_str`] and [`MethodKind::as_str`] form a bijection for
//! every kind except [`MethodKind::None`], which is the sink for unrecognized
//! strings.

// ============================================================================
// Lifecycle Methods
// ============================================================================

/// Initialize request - first request from client to server
pub const INITIALIZE: &str = "initialize";

/// Shutdown request - graceful server shutdown
pub const SHUTDOWN: &str = "shutdown";

/// Exit notification - terminate server process
pub const EXIT: &str = "exit";

// ============================================================================
// Text Document Synchronization
// ============================================================================

/// Document opened notification
pub const TEXT_DOCUMENT_DID_OPEN: &str = "textDocument/didOpen";

/// Document changed notification
pub const TEXT_DOCUMENT_DID_CHANGE: &str = "textDocument/didChange";

/// Document closed notification
pub const TEXT_DOCUMENT_DID_CLOSE: &str = "textDocument/didClose";

/// Publish diagnostics notification (server to client)
pub const TEXT_DOCUMENT_PUBLISH_DIAGNOSTICS: &str = "textDocument/publishDiagnostics";

// ============================================================================
// Language Features - Completion
// ============================================================================

/// Code completion request
pub const TEXT_DOCUMENT_COMPLETION: &str = "textDocument/completion";

/// Completion item resolve request
pub const COMPLETION_ITEM_RESOLVE: &str = "completionItem/resolve";

// ============================================================================
// Language Features - Navigation
// ============================================================================

/// Hover information request
pub const TEXT_DOCUMENT_HOVER: &str = "textDocument/hover";

/// Signature help request
pub const TEXT_DOCUMENT_SIGNATURE_HELP: &str = "textDocument/signatureHelp";

/// Go to definition request
pub const TEXT_DOCUMENT_DEFINITION: &str = "textDocument/definition";

/// Go to declaration request
pub const TEXT_DOCUMENT_DECLARATION: &str = "textDocument/declaration";

/// Go to type definition request
pub const TEXT_DOCUMENT_TYPE_DEFINITION: &str = "textDocument/typeDefinition";

/// Go to implementation request
pub const TEXT_DOCUMENT_IMPLEMENTATION: &str = "textDocument/implementation";

/// Find references request
pub const TEXT_DOCUMENT_REFERENCES: &str = "textDocument/references";

// ============================================================================
// Language Features - Document Symbols
// ============================================================================

/// Document symbols request
pub const TEXT_DOCUMENT_DOCUMENT_SYMBOL: &str = "textDocument/documentSymbol";

/// Document highlight request
pub const TEXT_DOCUMENT_DOCUMENT_HIGHLIGHT: &str = "textDocument/documentHighlight";

// ============================================================================
// Language Features - Code Actions
// ============================================================================

/// Code action request
pub const TEXT_DOCUMENT_CODE_ACTION: &str = "textDocument/codeAction";

/// Code action resolve request
pub const CODE_ACTION_RESOLVE: &str = "codeAction/resolve";

/// Code lens request
pub const TEXT_DOCUMENT_CODE_LENS: &str = "textDocument/codeLens";

/// Code lens resolve request
pub const CODE_LENS_RESOLVE: &str = "codeLens/resolve";

// ============================================================================
// Language Features - Formatting
// ============================================================================

/// Document formatting request
pub const TEXT_DOCUMENT_FORMATTING: &str = "textDocument/formatting";

/// Range formatting request
pub const TEXT_DOCUMENT_RANGE_FORMATTING: &str = "textDocument/rangeFormatting";

/// On-type formatting request
pub const TEXT_DOCUMENT_ON_TYPE_FORMATTING: &str = "textDocument/onTypeFormatting";

// ============================================================================
// Language Features - Refactoring
// ============================================================================

/// Prepare rename request
pub const TEXT_DOCUMENT_PREPARE_RENAME: &str = "textDocument/prepareRename";

/// Rename request
pub const TEXT_DOCUMENT_RENAME: &str = "textDocument/rename";

/// Linked editing range request
pub const TEXT_DOCUMENT_LINKED_EDITING_RANGE: &str = "textDocument/linkedEditingRange";

// ============================================================================
// Language Features - Semantic Tokens
// ============================================================================

/// Semantic tokens full document request
pub const TEXT_DOCUMENT_SEMANTIC_TOKENS_FULL: &str = "textDocument/semanticTokens/full";

/// Semantic tokens full document delta request
pub const TEXT_DOCUMENT_SEMANTIC_TOKENS_FULL_DELTA: &str = "textDocument/semanticTokens/full/delta";

/// Semantic tokens range request
pub const TEXT_DOCUMENT_SEMANTIC_TOKENS_RANGE: &str = "textDocument/semanticTokens/range";

// ============================================================================
// Language Features - Inlay Hints
// ============================================================================

/// Inlay hints request
pub const TEXT_DOCUMENT_INLAY_HINT: &str = "textDocument/inlayHint";

/// Inlay hint resolve request
pub const INLAY_HINT_RESOLVE: &str = "inlayHint/resolve";

// ============================================================================
// Language Features - Document Links
// ============================================================================

/// Document links request
pub const TEXT_DOCUMENT_DOCUMENT_LINK: &str = "textDocument/documentLink";

/// Document link resolve request
pub const DOCUMENT_LINK_RESOLVE: &str = "documentLink/resolve";

// ============================================================================
// Language Features - Folding
// ============================================================================

/// Folding range request
pub const TEXT_DOCUMENT_FOLDING_RANGE: &str = "textDocument/foldingRange";

/// Selection range request
pub const TEXT_DOCUMENT_SELECTION_RANGE: &str = "textDocument/selectionRange";

// ============================================================================
// Language Features - Type Hierarchy
// ============================================================================

/// Prepare type hierarchy request
pub const TEXT_DOCUMENT_PREPARE_TYPE_HIERARCHY: &str = "textDocument/prepareTypeHierarchy";

/// Type hierarchy supertypes request
pub const TYPE_HIERARCHY_SUPERTYPES: &str = "typeHierarchy/supertypes";

/// Type hierarchy subtypes request
pub const TYPE_HIERARCHY_SUBTYPES: &str = "typeHierarchy/subtypes";

// ============================================================================
// Language Features - Call Hierarchy
// ============================================================================

/// Prepare call hierarchy request
pub const TEXT_DOCUMENT_PREPARE_CALL_HIERARCHY: &str = "textDocument/prepareCallHierarchy";

/// Call hierarchy incoming calls request
pub const CALL_HIERARCHY_INCOMING_CALLS: &str = "callHierarchy/incomingCalls";

/// Call hierarchy outgoing calls request
pub const CALL_HIERARCHY_OUTGOING_CALLS: &str = "callHierarchy/outgoingCalls";

// ============================================================================
// Language Features - Diagnostics
// ============================================================================

/// Document diagnostic request
pub const TEXT_DOCUMENT_DIAGNOSTIC: &str = "textDocument/diagnostic";

/// Workspace diagnostic request
pub const WORKSPACE_DIAGNOSTIC: &str = "workspace/diagnostic";

// ============================================================================
// Language Features - Inline Values, Monikers, Colors
// ============================================================================

/// Inline value request (debugging)
pub const TEXT_DOCUMENT_INLINE_VALUE: &str = "textDocument/inlineValue";

/// Moniker request
pub const TEXT_DOCUMENT_MONIKER: &str = "textDocument/moniker";

/// Document color request
pub const TEXT_DOCUMENT_DOCUMENT_COLOR: &str = "textDocument/documentColor";

/// Color presentation request
pub const TEXT_DOCUMENT_COLOR_PRESENTATION: &str = "textDocument/colorPresentation";

// ============================================================================
// Workspace Features - Refresh Requests (server to client)
// ============================================================================

/// Code lens refresh request
pub const WORKSPACE_CODE_LENS_REFRESH: &str = "workspace/codeLens/refresh";

/// Semantic tokens refresh request
pub const WORKSPACE_SEMANTIC_TOKENS_REFRESH: &str = "workspace/semanticTokens/refresh";

/// Inlay hint refresh request
pub const WORKSPACE_INLAY_HINT_REFRESH: &str = "workspace/inlayHint/refresh";

/// Inline value refresh request
pub const WORKSPACE_INLINE_VALUE_REFRESH: &str = "workspace/inlineValue/refresh";

/// Diagnostic refresh request
pub const WORKSPACE_DIAGNOSTIC_REFRESH: &str = "workspace/diagnostic/refresh";

/// The closed enumeration of LSP methods the runtime recognizes by name.
///
/// Unrecognized method strings map to [`MethodKind::None`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MethodKind {
    /// Unrecognized or unparseable method
    None,
    /// `initialize`
    Initialize,
    /// `shutdown`
    Shutdown,
    /// `exit`
    Exit,
    /// `textDocument/didOpen`
    DidOpen,
    /// `textDocument/didChange`
    DidChange,
    /// `textDocument/didClose`
    DidClose,
    /// `textDocument/hover`
    Hover,
    /// `textDocument/definition`
    Definition,
    /// `textDocument/declaration`
    Declaration,
    /// `textDocument/typeDefinition`
    TypeDefinition,
    /// `textDocument/implementation`
    Implementation,
    /// `textDocument/references`
    References,
    /// `textDocument/prepareCallHierarchy`
    PrepareCallHierarchy,
    /// `callHierarchy/incomingCalls`
    IncomingCalls,
    /// `callHierarchy/outgoingCalls`
    OutgoingCalls,
    /// `textDocument/prepareTypeHierarchy`
    PrepareTypeHierarchy,
    /// `typeHierarchy/supertypes`
    TypeHierarchySupertypes,
    /// `typeHierarchy/subtypes`
    TypeHierarchySubtypes,
    /// `textDocument/documentHighlight`
    DocumentHighlight,
    /// `textDocument/documentLink`
    DocumentLink,
    /// `documentLink/resolve`
    DocumentLinkResolve,
    /// `textDocument/codeLens`
    CodeLens,
    /// `codeLens/resolve`
    CodeLensResolve,
    /// `textDocument/foldingRange`
    FoldingRange,
    /// `textDocument/selectionRange`
    SelectionRange,
    /// `textDocument/documentSymbol`
    DocumentSymbol,
    /// `textDocument/semanticTokens/full`
    SemanticTokensFull,
    /// `textDocument/semanticTokens/full/delta`
    SemanticTokensFullDelta,
    /// `textDocument/semanticTokens/range`
    SemanticTokensRange,
    /// `workspace/semanticTokens/refresh`
    SemanticTokensRefresh,
    /// `textDocument/inlayHint`
    InlayHint,
    /// `inlayHint/resolve`
    InlayHintResolve,
    /// `textDocument/inlineValue`
    InlineValue,
    /// `textDocument/moniker`
    Moniker,
    /// `textDocument/completion`
    Completion,
    /// `completionItem/resolve`
    CompletionItemResolve,
    /// `textDocument/diagnostic`
    DocumentDiagnostic,
    /// `workspace/diagnostic`
    WorkspaceDiagnostic,
    /// `textDocument/signatureHelp`
    SignatureHelp,
    /// `textDocument/codeAction`
    CodeAction,
    /// `codeAction/resolve`
    CodeActionResolve,
    /// `textDocument/documentColor`
    DocumentColor,
    /// `textDocument/colorPresentation`
    ColorPresentation,
    /// `textDocument/formatting`
    Formatting,
    /// `textDocument/rangeFormatting`
    RangeFormatting,
    /// `textDocument/onTypeFormatting`
    OnTypeFormatting,
    /// `textDocument/rename`
    Rename,
    /// `textDocument/prepareRename`
    PrepareRename,
    /// `textDocument/linkedEditingRange`
    LinkedEditingRange,
    /// `workspace/codeLens/refresh`
    CodeLensRefresh,
    /// `workspace/inlayHint/refresh`
    InlayHintRefresh,
    /// `workspace/inlineValue/refresh`
    InlineValueRefresh,
    /// `textDocument/publishDiagnostics`
    PublishDiagnostics,
    /// `workspace/diagnostic/refresh`
    DiagnosticRefresh,
}

impl MethodKind {
    /// Every recognized kind (everything except [`MethodKind::None`]).
    pub const ALL: &'static [MethodKind] = &[
        MethodKind::Initialize,
        MethodKind::Shutdown,
        MethodKind::Exit,
        MethodKind::DidOpen,
        MethodKind::DidChange,
        MethodKind::DidClose,
        MethodKind::Hover,
        MethodKind::Definition,
        MethodKind::Declaration,
        MethodKind::TypeDefinition,
        MethodKind::Implementation,
        MethodKind::References,
        MethodKind::PrepareCallHierarchy,
        MethodKind::IncomingCalls,
        MethodKind::OutgoingCalls,
        MethodKind::PrepareTypeHierarchy,
        MethodKind::TypeHierarchySupertypes,
        MethodKind::TypeHierarchySubtypes,
        MethodKind::DocumentHighlight,
        MethodKind::DocumentLink,
        MethodKind::DocumentLinkResolve,
        MethodKind::CodeLens,
        MethodKind::CodeLensResolve,
        MethodKind::FoldingRange,
        MethodKind::SelectionRange,
        MethodKind::DocumentSymbol,
        MethodKind::SemanticTokensFull,
        MethodKind::SemanticTokensFullDelta,
        MethodKind::SemanticTokensRange,
        MethodKind::SemanticTokensRefresh,
        MethodKind::InlayHint,
        MethodKind::InlayHintResolve,
        MethodKind::InlineValue,
        MethodKind::Moniker,
        MethodKind::Completion,
        MethodKind::CompletionItemResolve,
        MethodKind::DocumentDiagnostic,
        MethodKind::WorkspaceDiagnostic,
        MethodKind::SignatureHelp,
        MethodKind::CodeAction,
        MethodKind::CodeActionResolve,
        MethodKind::DocumentColor,
        MethodKind::ColorPresentation,
        MethodKind::Formatting,
        MethodKind::RangeFormatting,
        MethodKind::OnTypeFormatting,
        MethodKind::Rename,
        MethodKind::PrepareRename,
        MethodKind::LinkedEditingRange,
        MethodKind::CodeLensRefresh,
        MethodKind::InlayHintRefresh,
        MethodKind::InlineValueRefresh,
        MethodKind::PublishDiagnostics,
        MethodKind::DiagnosticRefresh,
    ];

    /// Canonical JSON-RPC method string for this kind.
    ///
    /// [`MethodKind::None`] has no canonical string and maps to `""`.
    pub fn as_str(self) -> &'static str {
        match self {
            MethodKind::None => "",
            MethodKind::Initialize => INITIALIZE,
            MethodKind::Shutdown => SHUTDOWN,
            MethodKind::Exit => EXIT,
            MethodKind::DidOpen => TEXT_DOCUMENT_DID_OPEN,
            MethodKind::DidChange => TEXT_DOCUMENT_DID_CHANGE,
            MethodKind::DidClose => TEXT_DOCUMENT_DID_CLOSE,
            MethodKind::Hover => TEXT_DOCUMENT_HOVER,
            MethodKind::Definition => TEXT_DOCUMENT_DEFINITION,
            MethodKind::Declaration => TEXT_DOCUMENT_DECLARATION,
            MethodKind::TypeDefinition => TEXT_DOCUMENT_TYPE_DEFINITION,
            MethodKind::Implementation => TEXT_DOCUMENT_IMPLEMENTATION,
            MethodKind::References => TEXT_DOCUMENT_REFERENCES,
            MethodKind::PrepareCallHierarchy => TEXT_DOCUMENT_PREPARE_CALL_HIERARCHY,
            MethodKind::IncomingCalls => CALL_HIERARCHY_INCOMING_CALLS,
            MethodKind::OutgoingCalls => CALL_HIERARCHY_OUTGOING_CALLS,
            MethodKind::PrepareTypeHierarchy => TEXT_DOCUMENT_PREPARE_TYPE_HIERARCHY,
            MethodKind::TypeHierarchySupertypes => TYPE_HIERARCHY_SUPERTYPES,
            MethodKind::TypeHierarchySubtypes => TYPE_HIERARCHY_SUBTYPES,
            MethodKind::DocumentHighlight => TEXT_DOCUMENT_DOCUMENT_HIGHLIGHT,
            MethodKind::DocumentLink => TEXT_DOCUMENT_DOCUMENT_LINK,
            MethodKind::DocumentLinkResolve => DOCUMENT_LINK_RESOLVE,
            MethodKind::CodeLens => TEXT_DOCUMENT_CODE_LENS,
            MethodKind::CodeLensResolve => CODE_LENS_RESOLVE,
            MethodKind::FoldingRange => TEXT_DOCUMENT_FOLDING_RANGE,
            MethodKind::SelectionRange => TEXT_DOCUMENT_SELECTION_RANGE,
            MethodKind::DocumentSymbol => TEXT_DOCUMENT_DOCUMENT_SYMBOL,
            MethodKind::SemanticTokensFull => TEXT_DOCUMENT_SEMANTIC_TOKENS_FULL,
            MethodKind::SemanticTokensFullDelta => TEXT_DOCUMENT_SEMANTIC_TOKENS_FULL_DELTA,
            MethodKind::SemanticTokensRange => TEXT_DOCUMENT_SEMANTIC_TOKENS_RANGE,
            MethodKind::SemanticTokensRefresh => WORKSPACE_SEMANTIC_TOKENS_REFRESH,
            MethodKind::InlayHint => TEXT_DOCUMENT_INLAY_HINT,
            MethodKind::InlayHintResolve => INLAY_HINT_RESOLVE,
            MethodKind::InlineValue => TEXT_DOCUMENT_INLINE_VALUE,
            MethodKind::Moniker => TEXT_DOCUMENT_MONIKER,
            MethodKind::Completion => TEXT_DOCUMENT_COMPLETION,
            MethodKind::CompletionItemResolve => COMPLETION_ITEM_RESOLVE,
            MethodKind::DocumentDiagnostic => TEXT_DOCUMENT_DIAGNOSTIC,
            MethodKind::WorkspaceDiagnostic => WORKSPACE_DIAGNOSTIC,
            MethodKind::SignatureHelp => TEXT_DOCUMENT_SIGNATURE_HELP,
            MethodKind::CodeAction => TEXT_DOCUMENT_CODE_ACTION,
            MethodKind::CodeActionResolve => CODE_ACTION_RESOLVE,
            MethodKind::DocumentColor => TEXT_DOCUMENT_DOCUMENT_COLOR,
            MethodKind::ColorPresentation => TEXT_DOCUMENT_COLOR_PRESENTATION,
            MethodKind::Formatting => TEXT_DOCUMENT_FORMATTING,
            MethodKind::RangeFormatting => TEXT_DOCUMENT_RANGE_FORMATTING,
            MethodKind::OnTypeFormatting => TEXT_DOCUMENT_ON_TYPE_FORMATTING,
            MethodKind::Rename => TEXT_DOCUMENT_RENAME,
            MethodKind::PrepareRename => TEXT_DOCUMENT_PREPARE_RENAME,
            MethodKind::LinkedEditingRange => TEXT_DOCUMENT_LINKED_EDITING_RANGE,
            MethodKind::CodeLensRefresh => WORKSPACE_CODE_LENS_REFRESH,
            MethodKind::InlayHintRefresh => WORKSPACE_INLAY_HINT_REFRESH,
            MethodKind::InlineValueRefresh => WORKSPACE_INLINE_VALUE_REFRESH,
            MethodKind::PublishDiagnostics => TEXT_DOCUMENT_PUBLISH_DIAGNOSTICS,
            MethodKind::DiagnosticRefresh => WORKSPACE_DIAGNOSTIC_REFRESH,
        }
    }

    /// Look up a method string in the fixed table.
    ///
    /// Returns [`MethodKind::None`] for anything unrecognized.
    pub fn from_str(method: &str) -> MethodKind {
        match method {
            INITIALIZE => MethodKind::Initialize,
            SHUTDOWN => MethodKind::Shutdown,
            EXIT => MethodKind::Exit,
            TEXT_DOCUMENT_DID_OPEN => MethodKind::DidOpen,
            TEXT_DOCUMENT_DID_CHANGE => MethodKind::DidChange,
            TEXT_DOCUMENT_DID_CLOSE => MethodKind::DidClose,
            TEXT_DOCUMENT_HOVER => MethodKind::Hover,
            TEXT_DOCUMENT_DEFINITION => MethodKind::Definition,
            TEXT_DOCUMENT_DECLARATION => MethodKind::Declaration,
            TEXT_DOCUMENT_TYPE_DEFINITION => MethodKind::TypeDefinition,
            TEXT_DOCUMENT_IMPLEMENTATION => MethodKind::Implementation,
            TEXT_DOCUMENT_REFERENCES => MethodKind::References,
            TEXT_DOCUMENT_PREPARE_CALL_HIERARCHY => MethodKind::PrepareCallHierarchy,
            CALL_HIERARCHY_INCOMING_CALLS => MethodKind::IncomingCalls,
            CALL_HIERARCHY_OUTGOING_CALLS => MethodKind::OutgoingCalls,
            TEXT_DOCUMENT_PREPARE_TYPE_HIERARCHY => MethodKind::PrepareTypeHierarchy,
            TYPE_HIERARCHY_SUPERTYPES => MethodKind::TypeHierarchySupertypes,
            TYPE_HIERARCHY_SUBTYPES => MethodKind::TypeHierarchySubtypes,
            TEXT_DOCUMENT_DOCUMENT_HIGHLIGHT => MethodKind::DocumentHighlight,
            TEXT_DOCUMENT_DOCUMENT_LINK => MethodKind::DocumentLink,
            DOCUMENT_LINK_RESOLVE => MethodKind::DocumentLinkResolve,
            TEXT_DOCUMENT_CODE_LENS => MethodKind::CodeLens,
            CODE_LENS_RESOLVE => MethodKind::CodeLensResolve,
            TEXT_DOCUMENT_FOLDING_RANGE => MethodKind::FoldingRange,
            TEXT_DOCUMENT_SELECTION_RANGE => MethodKind::SelectionRange,
            TEXT_DOCUMENT_DOCUMENT_SYMBOL => MethodKind::DocumentSymbol,
            TEXT_DOCUMENT_SEMANTIC_TOKENS_FULL => MethodKind::SemanticTokensFull,
            TEXT_DOCUMENT_SEMANTIC_TOKENS_FULL_DELTA => MethodKind::SemanticTokensFullDelta,
            TEXT_DOCUMENT_SEMANTIC_TOKENS_RANGE => MethodKind::SemanticTokensRange,
            WORKSPACE_SEMANTIC_TOKENS_REFRESH => MethodKind::SemanticTokensRefresh,
            TEXT_DOCUMENT_INLAY_HINT => MethodKind::InlayHint,
            INLAY_HINT_RESOLVE => MethodKind::InlayHintResolve,
            TEXT_DOCUMENT_INLINE_VALUE => MethodKind::InlineValue,
            TEXT_DOCUMENT_MONIKER => MethodKind::Moniker,
            TEXT_DOCUMENT_COMPLETION => MethodKind::Completion,
            COMPLETION_ITEM_RESOLVE => MethodKind::CompletionItemResolve,
            TEXT_DOCUMENT_DIAGNOSTIC => MethodKind::DocumentDiagnostic,
            WORKSPACE_DIAGNOSTIC => MethodKind::WorkspaceDiagnostic,
            TEXT_DOCUMENT_SIGNATURE_HELP => MethodKind::SignatureHelp,
            TEXT_DOCUMENT_CODE_ACTION => MethodKind::CodeAction,
            CODE_ACTION_RESOLVE => MethodKind::CodeActionResolve,
            TEXT_DOCUMENT_DOCUMENT_COLOR => MethodKind::DocumentColor,
            TEXT_DOCUMENT_COLOR_PRESENTATION => MethodKind::ColorPresentation,
            TEXT_DOCUMENT_FORMATTING => MethodKind::Formatting,
            TEXT_DOCUMENT_RANGE_FORMATTING => MethodKind::RangeFormatting,
            TEXT_DOCUMENT_ON_TYPE_FORMATTING => MethodKind::OnTypeFormatting,
            TEXT_DOCUMENT_RENAME => MethodKind::Rename,
            TEXT_DOCUMENT_PREPARE_RENAME => MethodKind::PrepareRename,
            TEXT_DOCUMENT_LINKED_EDITING_RANGE => MethodKind::LinkedEditingRange,
            WORKSPACE_CODE_LENS_REFRESH => MethodKind::CodeLensRefresh,
            WORKSPACE_INLAY_HINT_REFRESH => MethodKind::InlayHintRefresh,
            WORKSPACE_INLINE_VALUE_REFRESH => MethodKind::InlineValueRefresh,
            TEXT_DOCUMENT_PUBLISH_DIAGNOSTICS => MethodKind::PublishDiagnostics,
            WORKSPACE_DIAGNOSTIC_REFRESH => MethodKind::DiagnosticRefresh,
            _ => MethodKind::None,
        }
    }
}
