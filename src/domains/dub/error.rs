//! Dub API error types.

use thiserror::Error;

/// Result type for Dub API operations.
pub type DubResult<T> = std::result::Result<T, DubError>;

/// Errors returned by the Dub API client.
#[derive(Debug, Error)]
pub enum DubError {
    /// The request never produced an HTTP response, or its body could not be read.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The configured base URL or a derived endpoint URL is invalid.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The API answered with a non-success status.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Best-effort message extracted from the response body.
        message: String,
    },

    /// Invalid client configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl DubError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// HTTP status carried by the failure, if the API responded at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Human-readable message without the status prefix.
    pub fn message(&self) -> String {
        match self {
            Self::Api { message, .. } => message.clone(),
            Self::Http(e) => e.to_string(),
            Self::InvalidUrl(e) => e.to_string(),
            Self::Config(msg) => msg.clone(),
        }
    }

    /// Render as `<status> - <message>`, or just the message when no status is known.
    pub fn describe(&self) -> String {
        match self.status() {
            Some(status) => format!("{} - {}", status, self.message()),
            None => self.message(),
        }
    }
}

/// Pull the most specific message out of an error response body.
///
/// Dub nests errors as `{"error": {"code", "message"}}`; plain
/// `{"error": "..."}` and `{"message": "..."}` bodies are accepted too.
pub(crate) fn extract_message(status: u16, body: &str) -> String {
    let parsed: Option<serde_json::Value> = serde_json::from_str(body).ok();

    parsed
        .as_ref()
        .and_then(|v| {
            let error = v.get("error");
            error
                .and_then(|e| e.as_str())
                .or_else(|| error.and_then(|e| e.get("message")).and_then(|m| m.as_str()))
                .or_else(|| v.get("message").and_then(|m| m.as_str()))
        })
        .filter(|m| !m.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| format!("Request failed with status code {}", status))
}
