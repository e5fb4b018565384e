//! Update link tool definition.
//!
//! Partially updates an existing link. Remote failures are re-thrown as
//! protocol errors instead of being embedded in the result.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{error, info, instrument};

use crate::domains::dub::{DubClient, LinkUpdate};
use crate::domains::tools::ToolError;

use super::super::common::{
    ValidateParams, link_summary, non_empty, parse_arguments, require, structured_result,
};

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the update link tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLinkParams {
    /// The ID of the link to update.
    pub link_id: String,

    /// The new destination URL.
    #[serde(default)]
    pub url: Option<String>,

    /// The new domain of the short link.
    #[serde(default)]
    pub domain: Option<String>,

    /// The new short link slug.
    #[serde(default)]
    pub key: Option<String>,
}

impl UpdateLinkParams {
    /// Only the supplied, non-empty fields.
    pub fn to_update(&self) -> LinkUpdate {
        LinkUpdate {
            url: non_empty(&self.url).map(str::to_string),
            domain: non_empty(&self.domain).map(str::to_string),
            key: non_empty(&self.key).map(str::to_string),
        }
    }
}

impl ValidateParams for UpdateLinkParams {
    fn validate(&self) -> Result<(), ToolError> {
        require("linkId", &self.link_id)?;
        if self.to_update().is_empty() {
            return Err(ToolError::invalid_arguments(
                "At least one of 'url', 'domain' or 'key' must be provided",
            ));
        }
        Ok(())
    }
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Update link tool - `PATCH /links/{linkId}`.
pub struct UpdateLinkTool;

impl UpdateLinkTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "update_link";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Update an existing short link. Only the fields provided \
         (url, domain, key) are changed.";

    #[instrument(skip_all, fields(link_id = %params.link_id))]
    pub async fn execute(
        params: &UpdateLinkParams,
        client: &DubClient,
    ) -> Result<CallToolResult, McpError> {
        info!("Update link tool called: '{}'", params.link_id);

        let update = params.to_update();
        match client.update_link(&params.link_id, &update).await {
            Ok(link) => {
                info!("Link {} updated ({})", link.id, link.short_link);
                Ok(structured_result(link_summary("updated", &link), &link))
            }
            Err(e) => {
                error!("Failed to update link '{}': {}", params.link_id, e);
                Err(ToolError::remote("updating link", e).into())
            }
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<UpdateLinkParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute bound to the given API client.
    pub fn create_route<S>(client: DubClient) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone();
            let client = client.clone();
            async move {
                let params: UpdateLinkParams = parse_arguments(args)?;
                Self::execute(&params, &client).await
            }
            .boxed()
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
