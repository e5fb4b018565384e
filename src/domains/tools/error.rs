//! Tool-specific error types.

use rmcp::ErrorData as McpError;
use thiserror::Error;

use crate::domains::dub::DubError;

/// Errors that abort a tool call at the protocol level.
///
/// Anything reaching this type is reported to the client as a JSON-RPC
/// error rather than an error-flagged tool result.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Invalid arguments were provided to the tool.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// The request cannot be served in the current workspace state.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The remote API call failed and the tool re-throws such failures.
    #[error("Error {action}: {source}")]
    Remote {
        action: &'static str,
        #[source]
        source: DubError,
    },
}

impl ToolError {
    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }

    /// Create a new "invalid request" error.
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::InvalidRequest(msg.into())
    }

    /// Wrap a remote failure for the given action ("updating link", ...).
    pub fn remote(action: &'static str, source: DubError) -> Self {
        Self::Remote { action, source }
    }
}

impl From<ToolError> for McpError {
    fn from(err: ToolError) -> Self {
        match err {
            ToolError::InvalidArguments(msg) => McpError::invalid_params(msg, None),
            ToolError::InvalidRequest(msg) => McpError::invalid_request(msg, None),
            ToolError::Remote { action, source } => {
                let data = source.status().map(|s| serde_json::json!({ "status": s }));
                McpError::internal_error(format!("Error {}: {}", action, source.describe()), data)
            }
        }
    }
}
