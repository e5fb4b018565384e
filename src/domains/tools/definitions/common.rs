//! Common utilities shared across the Dub tools.
//!
//! Argument parsing, result builders, and the error-shaping rule applied
//! to remote failures that are reported inside a tool result.

use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, Content, JsonObject},
};
use serde::{Serialize, de::DeserializeOwned};
use tracing::warn;

use crate::domains::dub::{DubError, Link};
use crate::domains::tools::ToolError;

/// Per-tool argument checks that run after deserialization.
pub trait ValidateParams {
    fn validate(&self) -> Result<(), ToolError>;
}

/// Parse the untyped argument object into a tool's parameter struct.
///
/// Missing or mistyped fields and failed validation both surface as
/// invalid-params errors before any handler logic runs.
pub fn parse_arguments<T>(arguments: Option<JsonObject>) -> Result<T, McpError>
where
    T: DeserializeOwned + ValidateParams,
{
    let args = arguments.unwrap_or_default();
    let params: T = serde_json::from_value(serde_json::Value::Object(args))
        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
    params.validate()?;
    Ok(params)
}

/// Treat empty strings the same as absent values.
pub fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}

/// Fail with invalid-params when a required string is blank.
pub fn require(field: &str, value: &str) -> Result<(), ToolError> {
    if value.trim().is_empty() {
        return Err(ToolError::invalid_arguments(format!(
            "'{}' must not be empty",
            field
        )));
    }
    Ok(())
}

/// Render a remote failure as `Error <action>: <status> - <message>`.
pub fn format_remote_error(action: &str, err: &DubError) -> String {
    format!("Error {}: {}", action, err.describe())
}

/// Error-flagged result for a remote failure that is not re-thrown.
pub fn remote_error_result(action: &str, err: &DubError) -> CallToolResult {
    let message = format_remote_error(action, err);
    warn!("{}", message);
    CallToolResult::error(vec![Content::text(message)])
}

/// Success result with a text summary plus structured content.
pub fn structured_result<T: Serialize>(summary: String, data: &T) -> CallToolResult {
    CallToolResult {
        content: vec![Content::text(summary)],
        structured_content: serde_json::to_value(data).ok(),
        is_error: Some(false),
        meta: None,
    }
}

/// Create a success result with text content.
pub fn success_result(content: String) -> CallToolResult {
    CallToolResult::success(vec![Content::text(content)])
}

/// Summary text for a link returned by the API.
pub fn link_summary(verb: &str, link: &Link) -> String {
    format!(
        "Short link {}: {}\n\nDestination: {}\nID: {}",
        verb, link.short_link, link.url, link.id
    )
}

#[cfg(test)]
pub(crate) mod test_support {
    //! Helpers for exercising tools against a mock Dub API.

    use rmcp::model::{CallToolResult, RawContent};
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::domains::dub::DubClient;

    pub fn client_for(server: &MockServer) -> DubClient {
        DubClient::new("test-key", server.uri()).unwrap()
    }

    pub fn text_of(result: &CallToolResult) -> &str {
        match &result.content[0].raw {
            RawContent::Text(text) => &text.text,
            _ => panic!("Expected text content"),
        }
    }

    pub fn args(value: serde_json::Value) -> Option<rmcp::model::JsonObject> {
        value.as_object().cloned()
    }

    pub fn link_json(key: &str) -> serde_json::Value {
        json!({
            "id": format!("link_{}", key),
            "domain": "dub.sh",
            "key": key,
            "url": "https://example.com",
            "shortLink": format!("https://dub.sh/{}", key)
        })
    }

    pub async fn mount_domains(server: &MockServer, domains: serde_json::Value) {
        Mock::given(method("GET"))
            .and(path("/domains"))
            .respond_with(ResponseTemplate::new(200).set_body_json(domains))
            .mount(server)
            .await;
    }

    pub fn default_domains() -> serde_json::Value {
        json!([
            {"id": "d1", "slug": "go.acme.com", "verified": true},
            {"id": "d2", "slug": "dub.sh", "verified": true, "primary": true}
        ])
    }
}
