//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables (and a `.env` file) or defaults.

use super::error::{Error, Result};
use super::transport::TransportConfig;
use crate::domains::dub::{DEFAULT_BASE_URL, DubClient};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Environment variable holding the Dub API key.
pub const API_KEY_ENV: &str = "DUB_API_KEY";

/// Environment variable overriding the Dub API base URL.
pub const BASE_URL_ENV: &str = "DUB_API_BASE_URL";

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Remote API endpoint configuration.
    pub api: ApiConfig,

    /// External API credentials configuration.
    pub credentials: CredentialsConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// Dub API endpoint configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL all API paths are resolved against.
    pub base_url: String,
}

/// Configuration for external API credentials.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct CredentialsConfig {
    /// Dub workspace API key, sent as a bearer token.
    /// Create one at: https://app.dub.co/settings/tokens
    pub dub_api_key: Option<String>,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for CredentialsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsConfig")
            .field(
                "dub_api_key",
                &self.dub_api_key.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "dub-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
            api: ApiConfig::default(),
            credentials: CredentialsConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Server settings use the `MCP_` prefix (`MCP_SERVER_NAME`,
    /// `MCP_LOG_LEVEL`, `MCP_TRANSPORT`); the API settings use `DUB_API_KEY`
    /// and `DUB_API_BASE_URL`. A missing key is not an error here: it is
    /// reported when the API client is built.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        // Load transport configuration from environment
        config.transport = TransportConfig::from_env();

        if let Ok(base_url) = std::env::var(BASE_URL_ENV) {
            info!("Using Dub API base URL from environment: {}", base_url);
            config.api.base_url = base_url;
        }

        match std::env::var(API_KEY_ENV) {
            Ok(api_key) if !api_key.trim().is_empty() => {
                config.credentials.dub_api_key = Some(api_key);
            }
            _ => warn!("{} is not set", API_KEY_ENV),
        }

        config
    }

    /// Build the Dub API client from this configuration.
    ///
    /// Fails when no API key is configured.
    pub fn dub_client(&self) -> Result<DubClient> {
        let api_key = self.credentials.dub_api_key.as_deref().ok_or_else(|| {
            Error::config(format!("{} environment variable is required", API_KEY_ENV))
        })?;

        Ok(DubClient::new(api_key, &self.api.base_url)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_credentials_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var(API_KEY_ENV, "dub_test_12345");
        }
        let config = Config::from_env();
        assert_eq!(
            config.credentials.dub_api_key.as_deref(),
            Some("dub_test_12345")
        );
        unsafe {
            std::env::remove_var(API_KEY_ENV);
        }
    }

    #[test]
    fn test_base_url_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var(BASE_URL_ENV, "http://localhost:8888");
        }
        let config = Config::from_env();
        assert_eq!(config.api.base_url, "http://localhost:8888");
        unsafe {
            std::env::remove_var(BASE_URL_ENV);
        }
    }

    #[test]
    fn test_blank_key_is_ignored() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var(API_KEY_ENV, "   ");
        }
        let config = Config::from_env();
        assert!(config.credentials.dub_api_key.is_none());
        unsafe {
            std::env::remove_var(API_KEY_ENV);
        }
    }

    #[test]
    fn test_dub_client_requires_key() {
        let config = Config::default();
        let err = config.dub_client().unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains(API_KEY_ENV));
    }

    #[test]
    fn test_dub_client_with_key() {
        let mut config = Config::default();
        config.credentials.dub_api_key = Some("dub_key".to_string());
        let client = config.dub_client().unwrap();
        assert_eq!(client.base_url().as_str(), "https://api.dub.co/");
    }

    #[test]
    fn test_credentials_redacted_in_debug() {
        let creds = CredentialsConfig {
            dub_api_key: Some("super_secret_key".to_string()),
        };
        let debug_str = format!("{:?}", creds);
        assert!(debug_str.contains("REDACTED"));
        assert!(!debug_str.contains("super_secret_key"));
    }

    #[test]
    fn test_default_has_no_credentials() {
        let config = Config::default();
        assert!(config.credentials.dub_api_key.is_none());
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
    }
}
