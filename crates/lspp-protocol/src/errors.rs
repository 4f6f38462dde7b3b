//! JSON-RPC error codes and response helpers.
//!
//! Codes follow JSON-RPC 2.0 and the LSP extensions the runtime emits.

use crate::jsonrpc::JsonRpcError;

/// Request received after shutdown (JSON-RPC InvalidRequest)
pub const INVALID_REQUEST: i32 = -32600;

/// Method unknown, unsupported, or unimplemented
pub const METHOD_NOT_FOUND: i32 = -32601;

/// Parameters failed to deserialize into the handler's typed params
pub const INVALID_PARAMS: i32 = -32602;

/// Internal JSON-RPC error
pub const INTERNAL_ERROR: i32 = -32603;

/// Request received before `initialize` (LSP ServerNotInitialized)
pub const SERVER_NOT_INITIALIZED: i32 = -32002;

/// Error for any request arriving before `initialize`.
pub fn server_not_initialized() -> JsonRpcError {
    JsonRpcError::new(SERVER_NOT_INITIALIZED, "Server not initialized")
}

/// Error for any request (other than `exit`) arriving after `shutdown`.
pub fn shutting_down() -> JsonRpcError {
    JsonRpcError::new(INVALID_REQUEST, "Server is shutting down")
}

/// Error for a method string the runtime does not recognize.
pub fn method_not_found() -> JsonRpcError {
    JsonRpcError::new(METHOD_NOT_FOUND, "Method not found")
}

/// Error for a recognized method whose capability is advertised but for
/// which no handler was registered.
pub fn method_not_implemented() -> JsonRpcError {
    JsonRpcError::new(METHOD_NOT_FOUND, "Method not implemented")
}

/// Error for a recognized method whose capability is not advertised.
pub fn method_not_supported() -> JsonRpcError {
    JsonRpcError::new(METHOD_NOT_FOUND, "Method not supported")
}

/// Error for params that failed to deserialize.
pub fn invalid_params(detail: impl Into<String>) -> JsonRpcError {
    JsonRpcError::new(INVALID_PARAMS, detail)
}

/// Error for an internal failure while producing a result.
pub fn internal_error(detail: impl Into<String>) -> JsonRpcError {
    JsonRpcError::new(INTERNAL_ERROR, detail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_match_the_protocol_tables() {
        assert_eq!(server_not_initialized().code, -32002);
        assert_eq!(shutting_down().code, -32600);
        assert_eq!(method_not_found().code, -32601);
        assert_eq!(method_not_implemented().code, -32601);
        assert_eq!(method_not_supported().code, -32601);
        assert_eq!(invalid_params("x").code, -32602);
    }
}
