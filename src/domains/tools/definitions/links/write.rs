//! Shared flow for tools that write a link on a resolved domain.
//!
//! `create_link` and `upsert_link` take the same arguments, resolve the
//! target domain the same way, and shape results and errors identically.
//! Only the endpoint and wording differ.

use rmcp::{ErrorData as McpError, model::CallToolResult};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, warn};

use crate::domains::dub::{DomainLookupError, DubClient, DubError, Link, LinkRequest};
use crate::domains::tools::ToolError;

use super::super::common::{
    ValidateParams, link_summary, non_empty, remote_error_result, require, structured_result,
    success_result,
};

/// Parameters for `create_link` and `upsert_link`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ShortLinkParams {
    /// The destination URL of the short link.
    pub url: String,

    /// The short link slug. Randomly generated if not provided.
    #[serde(default)]
    pub key: Option<String>,

    /// Your own identifier for the link, unique across the workspace.
    #[serde(default)]
    pub external_id: Option<String>,

    /// The domain of the short link. Defaults to the workspace's primary domain.
    #[serde(default)]
    pub domain: Option<String>,
}

impl ValidateParams for ShortLinkParams {
    fn validate(&self) -> Result<(), ToolError> {
        require("url", &self.url)
    }
}

impl ShortLinkParams {
    /// Build the request body for the resolved domain slug.
    pub fn to_request(&self, domain: String) -> LinkRequest {
        LinkRequest {
            url: self.url.clone(),
            domain,
            key: non_empty(&self.key).map(str::to_string),
            external_id: non_empty(&self.external_id).map(str::to_string),
        }
    }
}

/// Which write endpoint to call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    Create,
    Upsert,
}

impl WriteMode {
    fn action(self) -> &'static str {
        match self {
            Self::Create => "creating link",
            Self::Upsert => "upserting link",
        }
    }

    fn verb(self) -> &'static str {
        match self {
            Self::Create => "created",
            Self::Upsert => "upserted",
        }
    }

    async fn send(self, client: &DubClient, body: &LinkRequest) -> Result<Link, DubError> {
        match self {
            Self::Create => client.create_link(body).await,
            Self::Upsert => client.upsert_link(body).await,
        }
    }
}

/// Outcome of resolving the domain a link should be written to.
enum Resolved {
    Slug(String),
    /// Stop here and hand this result back without writing.
    Done(CallToolResult),
}

/// Resolve the domain, then write the link.
///
/// An explicit domain that does not exist yields an informational result
/// and no link is written, even though the message announces a fallback
/// to the primary domain.
pub async fn execute_write(
    mode: WriteMode,
    params: &ShortLinkParams,
    client: &DubClient,
) -> Result<CallToolResult, McpError> {
    let domain = match resolve_domain(mode, params, client).await? {
        Resolved::Slug(slug) => slug,
        Resolved::Done(result) => return Ok(result),
    };

    let body = params.to_request(domain);
    match mode.send(client, &body).await {
        Ok(link) => {
            info!("Link {} {} ({})", link.id, mode.verb(), link.short_link);
            Ok(structured_result(link_summary(mode.verb(), &link), &link))
        }
        Err(e) => Ok(remote_error_result(mode.action(), &e)),
    }
}

async fn resolve_domain(
    mode: WriteMode,
    params: &ShortLinkParams,
    client: &DubClient,
) -> Result<Resolved, McpError> {
    if let Some(slug) = non_empty(&params.domain) {
        return match client.domain_by_slug(slug).await {
            Ok(Some(domain)) => Ok(Resolved::Slug(domain.slug)),
            Ok(None) => {
                warn!("Domain '{}' not found, link not written", slug);
                Ok(Resolved::Done(success_result(format!(
                    "Domain '{}' not found. Using primary domain instead.",
                    slug
                ))))
            }
            Err(e) => Ok(Resolved::Done(remote_error_result(mode.action(), &e))),
        };
    }

    match client.primary_domain().await {
        Ok(domain) => Ok(Resolved::Slug(domain.slug)),
        Err(DomainLookupError::NoDomains) => Err(ToolError::invalid_request(
            "No domains found in the workspace. Add a domain before creating links.",
        )
        .into()),
        Err(DomainLookupError::Remote(e)) => {
            Ok(Resolved::Done(remote_error_result(mode.action(), &e)))
        }
    }
}
