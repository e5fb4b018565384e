//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating tool calls to the Dub tool definitions.
//!
//! ## Tool Architecture
//!
//! Tools are defined in `domains/tools/definitions/` with one file per tool.
//! Each tool defines:
//! - Parameters struct (deserialized and validated from the call arguments)
//! - `execute()` method (core logic against the Dub API client)
//! - `create_route()` method (binds the tool to the shared client)
//!
//! The ToolRouter is built in `domains/tools/router.rs`.

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler,
    handler::server::tool::{ToolCallContext, ToolRouter},
    model::*,
    service::RequestContext,
};
use std::sync::Arc;

use super::config::Config;
use super::error::Result as ServerResult;
use crate::domains::{dub::DubClient, tools::build_tool_router};

/// The main MCP server handler.
///
/// Holds the single API client for the process lifetime. Clones share the
/// client's connection pool; no per-request state is kept.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Authenticated Dub API client.
    client: DubClient,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    ///
    /// Fails when no API key is configured, before any transport is started.
    pub fn new(config: Config) -> ServerResult<Self> {
        let client = config.dub_client()?;
        Ok(Self::with_client(config, client))
    }

    /// Create a server around an already-built API client.
    pub fn with_client(config: Config, client: DubClient) -> Self {
        Self {
            tool_router: build_tool_router::<Self>(client.clone()),
            config: Arc::new(config),
            client,
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the Dub API client.
    pub fn client(&self) -> &DubClient {
        &self.client
    }

    /// List all routed tools.
    pub fn tools(&self) -> Vec<Tool> {
        self.tool_router.list_all()
    }
}

/// ServerHandler implementation routing tool calls through the ToolRouter.
///
/// Unknown tool names are rejected with method-not-found before dispatch.
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation {
                name: self.config.server.name.clone(),
                version: self.config.server.version.clone(),
                ..Implementation::from_build_env()
            },
            instructions: Some(
                "Manage dub.co short links: create, update, upsert and delete links, \
                 and list the workspace domains links can be created on."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        Ok(ListToolsResult {
            tools: self.tools(),
            next_cursor: None,
            meta: None,
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        if !self.tool_router.has_route(&request.name) {
            tracing::warn!(tool = %request.name, "Call to unknown tool");
            return Err(McpError::new(
                ErrorCode::METHOD_NOT_FOUND,
                format!("Unknown tool: {}", request.name),
                None,
            ));
        }

        let tcc = ToolCallContext::new(self, request, context);
        self.tool_router.call(tcc).await
    }
}
