//! Error types and handling for the MCP server.
//!
//! This module defines a unified error type for server start-up and
//! lifecycle failures. Per-call failures are reported to clients through
//! the tool results or protocol errors instead.

use thiserror::Error;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the MCP server.
#[derive(Debug, Error)]
pub enum Error {
    /// Error originating from the Dub API client.
    #[error("Dub API error: {0}")]
    Dub(#[from] crate::domains::dub::DubError),

    /// Error from the transport layer.
    #[error("Transport error: {0}")]
    Transport(#[from] super::transport::TransportError),

    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
