//! Tool Registry - the catalog of available tools.
//!
//! Single source of truth for tool names, independent of any
//! API client instance.

use super::definitions::{
    CreateLinkTool, DeleteLinkTool, ListDomainsTool, UpdateLinkTool, UpsertLinkTool,
};

/// Tool registry - lists all available tools.
pub struct ToolRegistry;

impl ToolRegistry {
    /// Get all tool names.
    pub fn tool_names() -> Vec<&'static str> {
        vec![
            CreateLinkTool::NAME,
            UpdateLinkTool::NAME,
            UpsertLinkTool::NAME,
            DeleteLinkTool::NAME,
            ListDomainsTool::NAME,
        ]
    }
}
