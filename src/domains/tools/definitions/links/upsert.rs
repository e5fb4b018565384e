//! Upsert link tool definition.
//!
//! Creates a link, or returns the existing one when a link with the same
//! URL already exists in the workspace.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use tracing::{info, instrument};

use crate::domains::dub::DubClient;

use super::super::common::parse_arguments;
use super::write::{ShortLinkParams, WriteMode, execute_write};

/// Upsert link tool - `PUT /links/upsert`.
pub struct UpsertLinkTool;

impl UpsertLinkTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "upsert_link";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Create a new short link or return the existing one if a link \
         with the same URL already exists in the workspace. Accepts the same arguments as create_link.";

    #[instrument(skip_all, fields(url = %params.url))]
    pub async fn execute(
        params: &ShortLinkParams,
        client: &DubClient,
    ) -> Result<CallToolResult, McpError> {
        info!("Upsert link tool called: '{}'", params.url);
        execute_write(WriteMode::Upsert, params, client).await
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<ShortLinkParams>(),
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
                let params: ShortLinkParams = parse_arguments(args)?;
                Self::execute(&params, &client).await
            }
            .boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definitions::common::test_support::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn params() -> ShortLinkParams {
        ShortLinkParams {
            url: "https://example.com".to_string(),
            key: Some("abc".to_string()),
            external_id: None,
            domain: Some("dub.sh".to_string()),
        }
    }

    #[tokio::test]
    async fn test_repeated_upsert_sends_identical_bodies() {
        let server = MockServer::start().await;
        mount_domains(&server, default_domains()).await;
        Mock::given(method("PUT"))
            .and(path("/links/upsert"))
            .and(body_json(json!({
                "url": "https://example.com",
                "domain": "dub.sh",
                "key": "abc"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(link_json("abc")))
            .expect(2)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let first = UpsertLinkTool::execute(&params(), &client).await.unwrap();
        let second = UpsertLinkTool::execute(&params(), &client).await.unwrap();

        assert_eq!(first.structured_content, second.structured_content);
        assert!(text_of(&first).starts_with("Short link upserted: https://dub.sh/abc"));

        let requests = server.received_requests().await.unwrap();
        let bodies: Vec<_> = requests
            .iter()
            .filter(|r| r.method.as_str() == "PUT")
            .map(|r| r.body.clone())
            .collect();
        assert_eq!(bodies.len(), 2);
        assert_eq!(bodies[0], bodies[1]);
    }

    #[tokio::test]
    async fn test_upsert_unknown_domain_skips_write() {
        let server = MockServer::start().await;
        mount_domains(&server, default_domains()).await;
        Mock::given(method("PUT"))
            .and(path("/links/upsert"))
            .respond_with(ResponseTemplate::new(200).set_body_json(link_json("abc")))
            .expect(0)
            .mount(&server)
            .await;

        let p = ShortLinkParams {
            domain: Some("missing.link".to_string()),
            ..params()
        };
        let result = UpsertLinkTool::execute(&p, &client_for(&server)).await.unwrap();
        assert_eq!(result.is_error, Some(false));
        assert!(text_of(&result).contains("missing.link"));
    }

    #[tokio::test]
    async fn test_upsert_remote_error_is_embedded() {
        let server = MockServer::start().await;
        mount_domains(&server, default_domains()).await;
        Mock::given(method("PUT"))
            .and(path("/links/upsert"))
            .respond_with(ResponseTemplate::new(422).set_body_json(json!({
                "message": "Invalid destination URL"
            })))
            .mount(&server)
            .await;

        let result = UpsertLinkTool::execute(&params(), &client_for(&server))
            .await
            .unwrap();
        assert_eq!(result.is_error, Some(true));
        assert_eq!(
            text_of(&result),
            "Error upserting link: 422 - Invalid destination URL"
        );
    }
}
