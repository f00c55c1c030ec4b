//! MCP-specific error types

use crate::core::error::{DocError, StructuredError};
use crate::mcp::protocol::{
    DOC_NOT_FOUND, INTERNAL_ERROR, INVALID_PARAMS, INVALID_REQUEST, PARSE_ERROR, REFRESH_FAILED,
    ROOT_NOT_FOUND,
};
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum McpError {
    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Invalid params: {0}")]
    InvalidParams(String),

    #[error("Internal error: {0}")]
    InternalError(String),

    /// Documentation error with its structured form for `error.data`
    #[error("{message}")]
    Document {
        code: i32,
        message: String,
        detail: StructuredError,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl McpError {
    /// JSON-RPC error code and message for this error
    pub fn code_and_message(&self) -> (i32, String) {
        match self {
            McpError::ParseError(msg) => (PARSE_ERROR, msg.clone()),
            McpError::InvalidRequest(msg) => (INVALID_REQUEST, msg.clone()),
            McpError::InvalidParams(msg) => (INVALID_PARAMS, msg.clone()),
            McpError::InternalError(msg) => (INTERNAL_ERROR, msg.clone()),
            McpError::Document { code, message, .. } => (*code, message.clone()),
            McpError::Io(e) => (INTERNAL_ERROR, format!("I/O error: {e}")),
            McpError::Json(e) => (INTERNAL_ERROR, format!("JSON error: {e}")),
        }
    }

    /// Structured payload for the JSON-RPC `error.data` field
    pub fn data(&self) -> Option<Value> {
        match self {
            McpError::Document { detail, .. } => serde_json::to_value(detail).ok(),
            _ => None,
        }
    }
}

impl From<DocError> for McpError {
    fn from(err: DocError) -> Self {
        let (code, message) = match &err {
            DocError::NotFound { .. } | DocError::TopicNotFound { .. } => {
                let mut msg = err.message();
                let keys = err.available_keys();
                if !keys.is_empty() {
                    msg.push_str(&format!(". Available: {}", keys.join(", ")));
                }
                (DOC_NOT_FOUND, msg)
            }
            DocError::InvalidQuery(s) => (INVALID_PARAMS, format!("Invalid query: {s}")),
            DocError::UnrecognizedPath(p) => (INVALID_PARAMS, format!("Unrecognized resource: {p}")),
            DocError::ConfigError(s) => (INVALID_PARAMS, format!("Configuration error: {s}")),
            DocError::RootNotFound(p) => (
                ROOT_NOT_FOUND,
                format!("Documentation root not found: {}", p.display()),
            ),
            DocError::RefreshFailure(s) => (REFRESH_FAILED, format!("Refresh failed: {s}")),
            DocError::IoError(e) => (INTERNAL_ERROR, format!("I/O error: {e}")),
            DocError::SerdeError(e) => (INTERNAL_ERROR, format!("Serialization error: {e}")),
            DocError::TomlError(e) => (INTERNAL_ERROR, format!("Configuration parse error: {e}")),
        };

        McpError::Document {
            code,
            message,
            detail: err.to_structured(),
        }
    }
}
