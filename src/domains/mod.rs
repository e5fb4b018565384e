//! Domains module containing business logic organized by bounded contexts.
//!
//! - **dub**: typed client for the remote Dub API
//! - **tools**: MCP tools built on top of that client

pub mod dub;
pub mod tools;
