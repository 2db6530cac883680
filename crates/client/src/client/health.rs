//! Health check operation.

use reqwest::StatusCode;

use super::ForgeClient;

impl ForgeClient {
    /// Check whether the server is healthy.
    ///
    /// True only on HTTP 200. Every failure, including connection faults,
    /// collapses to false; this call never errors.
    pub async fn health(&self) -> bool {
        match self.client.get(self.url("/health")).send().await {
            Ok(response) => response.status() == StatusCode::OK,
            Err(error) => {
                tracing::debug!(%error, "health check failed");
                false
            }
        }
    }
}
