//! HTTP client for the Dub REST API.

use std::sync::Arc;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use tracing::{debug, error};
use url::Url;

use super::error::{DubError, DubResult, extract_message};
use super::types::{Domain, Link, LinkRequest, LinkUpdate};

/// Default API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.dub.co";

/// Dub API client.
///
/// Every request carries the bearer credential given at construction time.
/// Clones share one connection pool.
///
/// # Example
///
/// ```no_run
/// use dub_mcp_server::domains::dub::DubClient;
///
/// # async fn example() -> dub_mcp_server::domains::dub::DubResult<()> {
/// let client = DubClient::new("dub_xxx", "https://api.dub.co")?;
/// let domains = client.list_domains().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct DubClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http: reqwest::Client,
    base_url: Url,
}

impl std::fmt::Debug for DubClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DubClient")
            .field("base_url", &self.inner.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl DubClient {
    /// Create a client for `base_url` authenticated with `api_key`.
    ///
    /// Fails if the key is blank or the URL does not parse.
    pub fn new(api_key: impl Into<String>, base_url: impl AsRef<str>) -> DubResult<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(DubError::config("API key is required"));
        }

        let base_url = Url::parse(base_url.as_ref())?;
        if base_url.cannot_be_a_base() {
            return Err(DubError::config(format!(
                "Base URL cannot carry a path: {}",
                base_url
            )));
        }

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", api_key))
            .map_err(|_| DubError::config("API key contains invalid header characters"))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(format!("dub-mcp-server/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            inner: Arc::new(ClientInner { http, base_url }),
        })
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    // ─────────────────────────────────────────────────────────────────────────
    // API operations
    // ─────────────────────────────────────────────────────────────────────────

    /// `GET /domains` - every domain in the workspace, in API order.
    pub async fn list_domains(&self) -> DubResult<Vec<Domain>> {
        let url = self.endpoint(&["domains"])?;
        self.send(self.inner.http.get(url)).await.inspect_err(|e| {
            error!("Failed to fetch domains: {}", e);
        })
    }

    /// `POST /links`
    pub async fn create_link(&self, body: &LinkRequest) -> DubResult<Link> {
        let url = self.endpoint(&["links"])?;
        self.send(self.inner.http.post(url).json(body)).await
    }

    /// `PUT /links/upsert`
    pub async fn upsert_link(&self, body: &LinkRequest) -> DubResult<Link> {
        let url = self.endpoint(&["links", "upsert"])?;
        self.send(self.inner.http.put(url).json(body)).await
    }

    /// `PATCH /links/{id}`
    pub async fn update_link(&self, link_id: &str, update: &LinkUpdate) -> DubResult<Link> {
        let url = self.endpoint(&["links", link_id])?;
        self.send(self.inner.http.patch(url).json(update)).await
    }

    /// `DELETE /links/{id}`. The response body is ignored.
    pub async fn delete_link(&self, link_id: &str) -> DubResult<()> {
        let url = self.endpoint(&["links", link_id])?;
        debug!("DELETE {}", url);
        let response = self.inner.http.delete(url).send().await?;
        if !response.status().is_success() {
            return Err(Self::extract_error(response).await);
        }
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Internal HTTP helpers
    // ─────────────────────────────────────────────────────────────────────────

    /// Append percent-encoded path segments to the base URL.
    fn endpoint(&self, segments: &[&str]) -> DubResult<Url> {
        let mut url = self.inner.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| DubError::config("Base URL cannot carry a path"))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn send<T: DeserializeOwned>(&self, request: reqwest::RequestBuilder) -> DubResult<T> {
        let response = request.send().await?;
        debug!("{} {}", response.status(), response.url());

        if response.status().is_success() {
            Ok(response.json().await?)
        } else {
            Err(Self::extract_error(response).await)
        }
    }

    async fn extract_error(response: reqwest::Response) -> DubError {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        DubError::Api {
            status,
            message: extract_message(status, &body),
        }
    }
}
