//! Dub MCP Server Library
//!
//! This crate exposes the Dub link-shortening API as Model Context Protocol
//! (MCP) tools: `create_link`, `update_link`, `upsert_link`, `delete_link`
//! and `list_domains`.
//!
//! # Architecture
//!
//! - **core**: Configuration, error handling, the MCP server handler and transports
//! - **domains**: Business logic organized by bounded contexts
//!   - **dub**: Authenticated client for the Dub REST API
//!   - **tools**: MCP tools that translate calls into Dub API requests
//!
//! # Example
//!
//! ```rust,no_run
//! use dub_mcp_server::{core::McpServer, core::Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config)?;
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
