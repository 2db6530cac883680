//! Render operation.

use forge_core::RenderRequest;
use reqwest::StatusCode;

use super::ForgeClient;
use crate::error::{ClientError, Result};

impl ForgeClient {
    /// Send a render request and return the raw rendered bytes.
    ///
    /// Exactly HTTP 200 counts as success; any other status is classified
    /// as a server failure with the body's `error` field as the message.
    /// The full response body is buffered before returning.
    pub async fn render(&self, request: &RenderRequest) -> Result<Vec<u8>> {
        let url = self.url("/render");
        tracing::debug!(%url, "sending render request");

        let response = self.client.post(url).json(request).send().await?;
        let status = response.status();
        tracing::debug!(status = status.as_u16(), "render response received");

        if status == StatusCode::OK {
            let bytes = response.bytes().await?;
            return Ok(bytes.to_vec());
        }

        let message = match response.bytes().await {
            Ok(body) => extract_error_message(&body)
                .unwrap_or_else(|| format!("HTTP {}", status.as_u16())),
            Err(_) => format!("HTTP {}", status.as_u16()),
        };
        Err(ClientError::Server {
            status: status.as_u16(),
            message,
        })
    }
}

/// Best-effort extraction of the `error` field from a JSON error body.
fn extract_error_message(body: &[u8]) -> Option<String> {
    let value: serde_json::Value = serde_json::from_slice(body).ok()?;
    value.get("error")?.as_str().map(str::to_string)
}
