//! List domains tool definition.
//!
//! Read-only lookup of the domains a link can be created on.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::domains::dub::{Domain, DubClient, select_primary};
use crate::domains::tools::ToolError;

use super::super::common::{
    ValidateParams, parse_arguments, remote_error_result, structured_result, success_result,
};

/// The tool takes no arguments.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ListDomainsParams {}

impl ValidateParams for ListDomainsParams {
    fn validate(&self) -> Result<(), ToolError> {
        Ok(())
    }
}

#[derive(Debug, Serialize)]
struct DomainList<'a> {
    domains: &'a [Domain],
}

/// List domains tool - `GET /domains`.
pub struct ListDomainsTool;

impl ListDomainsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "list_domains";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "List the domains of the dub.co workspace, marking the primary \
         domain that create_link and upsert_link use by default.";

    #[instrument(skip_all)]
    pub async fn execute(client: &DubClient) -> Result<CallToolResult, McpError> {
        info!("List domains tool called");

        let domains = match client.list_domains().await {
            Ok(domains) => domains,
            Err(e) => return Ok(remote_error_result("listing domains", &e)),
        };

        if domains.is_empty() {
            return Ok(success_result(
                "No domains found in the workspace.".to_string(),
            ));
        }

        Ok(structured_result(
            Self::summarize(&domains),
            &DomainList { domains: &domains },
        ))
    }

    /// One line per domain; the default domain is marked even when none is flagged primary.
    fn summarize(domains: &[Domain]) -> String {
        let default_slug = select_primary(domains).map(|d| d.slug.as_str());

        let mut lines = vec![format!("Found {} domain(s):", domains.len())];
        for domain in domains {
            let mut tags = Vec::new();
            if Some(domain.slug.as_str()) == default_slug {
                tags.push(if domain.primary { "primary" } else { "default" });
            }
            if !domain.verified {
                tags.push("unverified");
            }
            if domain.archived {
                tags.push("archived");
            }

            if tags.is_empty() {
                lines.push(format!("- {}", domain.slug));
            } else {
                lines.push(format!("- {} ({})", domain.slug, tags.join(", ")));
            }
        }
        lines.join("\n")
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<ListDomainsParams>(),
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
                let _params: ListDomainsParams = parse_arguments(args)?;
                Self::execute(&client).await
            }
            .boxed()
        })
    }
}
