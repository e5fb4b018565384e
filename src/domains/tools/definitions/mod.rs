//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file for better maintainability.

pub mod common;
pub mod links;
pub mod workspace;

pub use links::{
    CreateLinkTool, DeleteLinkParams, DeleteLinkTool, ShortLinkParams, UpdateLinkParams,
    UpdateLinkTool, UpsertLinkTool,
};
pub use workspace::{ListDomainsParams, ListDomainsTool};
