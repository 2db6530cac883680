//! HTTP client for the Forge rendering service.

pub mod health;
pub mod render;

use std::time::Duration;

use crate::error::Result;

/// Default connection-establishment timeout.
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(120);

/// HTTP client for a Forge rendering server.
///
/// Holds only the base URL and a pooled `reqwest::Client`; safe to share
/// across tasks issuing independent requests.
#[derive(Debug, Clone)]
pub struct ForgeClient {
    client: reqwest::Client,
    base_url: String,
}

impl ForgeClient {
    /// Create a new client with the given base URL and the default connect
    /// timeout. Trailing slashes on the URL are stripped.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_connect_timeout(base_url, DEFAULT_CONNECT_TIMEOUT)
    }

    /// Create a new client with an explicit connect timeout.
    ///
    /// The timeout covers connection establishment only; rendering time is
    /// budgeted server-side via the request's `timeout` option.
    pub fn with_connect_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let client = reqwest::Client::builder().connect_timeout(timeout).build()?;
        Ok(Self { client, base_url })
    }

    /// Create from environment (FORGE_URL or default).
    pub fn from_env() -> Result<Self> {
        let base_url =
            std::env::var("FORGE_URL").unwrap_or_else(|_| "http://localhost:8080".to_string());
        Self::new(base_url)
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a URL for an endpoint.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}
