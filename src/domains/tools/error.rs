//! Tool-specific error types.

use rmcp::{ErrorData as McpError, model::ErrorCode};
use thiserror::Error;

/// Errors that can occur during tool operations.
///
/// Each variant maps onto one JSON-RPC error code when it crosses the
/// protocol boundary.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool does not exist.
    #[error("Unknown tool: {0}")]
    MethodNotFound(String),

    /// Invalid arguments were provided to the tool.
    #[error("{0}")]
    InvalidParams(String),

    /// The tool ran and failed.
    #[error("{0}")]
    Internal(String),
}

impl ToolError {
    /// Create a new "unknown tool" error.
    pub fn method_not_found(name: impl Into<String>) -> Self {
        Self::MethodNotFound(name.into())
    }

    /// Create a new "invalid params" error.
    pub fn invalid_params(msg: impl Into<String>) -> Self {
        Self::InvalidParams(msg.into())
    }

    /// Create a new "internal" error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// The JSON-RPC error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::MethodNotFound(_) => ErrorCode::METHOD_NOT_FOUND,
            Self::InvalidParams(_) => ErrorCode::INVALID_PARAMS,
            Self::Internal(_) => ErrorCode::INTERNAL_ERROR,
        }
    }
}

impl From<ToolError> for McpError {
    fn from(err: ToolError) -> Self {
        McpError::new(err.code(), err.to_string(), None)
    }
}
