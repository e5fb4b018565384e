//! Delete link tool definition.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{error, info, instrument};

use crate::domains::dub::DubClient;
use crate::domains::tools::ToolError;

use super::super::common::{ValidateParams, parse_arguments, require, structured_result};

/// Parameters for the delete link tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteLinkParams {
    /// The ID of the link to delete.
    pub link_id: String,
}

impl ValidateParams for DeleteLinkParams {
    fn validate(&self) -> Result<(), ToolError> {
        require("linkId", &self.link_id)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DeleteResult {
    link_id: String,
    deleted: bool,
}

/// Delete link tool - `DELETE /links/{linkId}`.
pub struct DeleteLinkTool;

impl DeleteLinkTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "delete_link";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Delete a short link by its ID. This cannot be undone.";

    /// Delete the link. API failures are re-thrown as protocol errors.
    #[instrument(skip_all, fields(link_id = %params.link_id))]
    pub async fn execute(
        params: &DeleteLinkParams,
        client: &DubClient,
    ) -> Result<CallToolResult, McpError> {
        info!("Delete link tool called: '{}'", params.link_id);

        if let Err(e) = client.delete_link(&params.link_id).await {
            error!("Failed to delete link '{}': {}", params.link_id, e);
            return Err(ToolError::remote("deleting link", e).into());
        }

        info!("Successfully deleted link '{}'", params.link_id);
        let result = DeleteResult {
            link_id: params.link_id.clone(),
            deleted: true,
        };
        Ok(structured_result(
            format!("Short link with ID {} has been deleted.", params.link_id),
            &result,
        ))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<DeleteLinkParams>(),
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
                let params: DeleteLinkParams = parse_arguments(args)?;
                Self::execute(&params, &client).await
            }
            .boxed()
        })
    }
}
