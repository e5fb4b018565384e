//! Create link tool definition.
//!
//! Creates a new short link on an explicit or the primary domain.

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

/// Create link tool - `POST /links`.
pub struct CreateLinkTool;

impl CreateLinkTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "create_link";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Create a new short link on dub.co, with an optional custom key, \
         external ID and domain. Uses the workspace's primary domain when no domain is given.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(url = %params.url))]
    pub async fn execute(
        params: &ShortLinkParams,
        client: &DubClient,
    ) -> Result<CallToolResult, McpError> {
        info!("Create link tool called: '{}'", params.url);
        execute_write(WriteMode::Create, params, client).await
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

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definitions::common::test_support::*;
    use rmcp::model::ErrorCode;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn params(domain: Option<&str>) -> ShortLinkParams {
        ShortLinkParams {
            url: "https://example.com".to_string(),
            key: None,
            external_id: None,
            domain: domain.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn test_create_uses_primary_domain() {
        let server = MockServer::start().await;
        mount_domains(&server, default_domains()).await;
        Mock::given(method("POST"))
            .and(path("/links"))
            .and(body_json(json!({"url": "https://example.com", "domain": "dub.sh"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(link_json("abc")))
            .expect(1)
            .mount(&server)
            .await;

        let result = CreateLinkTool::execute(&params(None), &client_for(&server))
            .await
            .unwrap();

        assert_eq!(result.is_error, Some(false));
        let text = text_of(&result);
        assert!(text.contains("https://dub.sh/abc"));
        assert!(text.contains("https://example.com"));
        assert!(text.contains("link_abc"));

        let structured = result.structured_content.expect("structured content");
        assert_eq!(structured["shortLink"], "https://dub.sh/abc");
    }

    #[tokio::test]
    async fn test_create_with_explicit_domain() {
        let server = MockServer::start().await;
        mount_domains(&server, default_domains()).await;
        Mock::given(method("POST"))
            .and(path("/links"))
            .and(body_json(json!({
                "url": "https://example.com",
                "domain": "go.acme.com",
                "key": "launch",
                "externalId": "cmp_1"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(link_json("launch")))
            .expect(1)
            .mount(&server)
            .await;

        let p = ShortLinkParams {
            key: Some("launch".to_string()),
            external_id: Some("cmp_1".to_string()),
            ..params(Some("go.acme.com"))
        };
        let result = CreateLinkTool::execute(&p, &client_for(&server)).await.unwrap();
        assert_eq!(result.is_error, Some(false));
    }

    #[tokio::test]
    async fn test_create_unknown_domain_skips_creation() {
        let server = MockServer::start().await;
        mount_domains(&server, default_domains()).await;
        Mock::given(method("POST"))
            .and(path("/links"))
            .respond_with(ResponseTemplate::new(200).set_body_json(link_json("abc")))
            .expect(0)
            .mount(&server)
            .await;

        let result = CreateLinkTool::execute(&params(Some("nonexistent")), &client_for(&server))
            .await
            .unwrap();

        assert_ne!(result.is_error, Some(true));
        assert!(text_of(&result).contains("nonexistent"));
    }

    #[tokio::test]
    async fn test_create_remote_error_is_embedded() {
        let server = MockServer::start().await;
        mount_domains(&server, default_domains()).await;
        Mock::given(method("POST"))
            .and(path("/links"))
            .respond_with(ResponseTemplate::new(409).set_body_json(json!({
                "error": {"code": "conflict", "message": "Duplicate key: abc"}
            })))
            .mount(&server)
            .await;

        let result = CreateLinkTool::execute(&params(None), &client_for(&server))
            .await
            .unwrap();

        assert_eq!(result.is_error, Some(true));
        assert_eq!(
            text_of(&result),
            "Error creating link: 409 - Duplicate key: abc"
        );
    }

    #[tokio::test]
    async fn test_create_domain_lookup_failure_is_embedded() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/domains"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let result = CreateLinkTool::execute(&params(None), &client_for(&server))
            .await
            .unwrap();

        assert_eq!(result.is_error, Some(true));
        assert!(text_of(&result).contains("500 - Request failed with status code 500"));
    }

    #[tokio::test]
    async fn test_create_without_domains_is_invalid_request() {
        let server = MockServer::start().await;
        mount_domains(&server, json!([])).await;

        let err = CreateLinkTool::execute(&params(None), &client_for(&server))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::INVALID_REQUEST);
    }

    #[test]
    fn test_missing_url_is_invalid_params() {
        let err = parse_arguments::<ShortLinkParams>(args(json!({ "key": "abc" }))).unwrap_err();
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
    }

    #[test]
    fn test_tool_schema_requires_url() {
        let tool = CreateLinkTool::to_tool();
        let required = tool.input_schema.get("required").expect("required list");
        assert_eq!(required, &json!(["url"]));
        let properties = tool.input_schema["properties"].as_object().unwrap();
        assert!(properties.contains_key("externalId"));
    }
}
