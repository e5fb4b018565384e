//! Tools domain module.
//!
//! This module exposes the Dub API as MCP tools. Tools are executable
//! functions that MCP clients call to create, update, upsert and delete
//! short links, and to look up workspace domains.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `router.rs` - ToolRouter builder binding every tool to the API client
//! - `registry.rs` - Static tool catalog (names and metadata)
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` (e.g., `links/my_tool.rs`)
//! 2. Define params, `execute()`, `to_tool()` and `create_route()`
//! 3. Export in `definitions/mod.rs`
//! 4. Add route in `router.rs` using `with_route()`
//! 5. List it in `registry.rs`

pub mod definitions;
mod error;
mod registry;
pub mod router;

pub use error::ToolError;
pub use registry::ToolRegistry;
pub use router::build_tool_router;
