//! Client error types.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors surfaced by an exchange with the Forge server.
///
/// Exactly two kinds: the request never completed, or the server answered
/// with a non-200 status. Nothing is retried or swallowed at this layer.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The request could not be sent or no complete response was received
    /// (includes timeouts).
    #[error("connection error: {0}")]
    Connection(#[from] reqwest::Error),

    /// The server reported a failure. `message` is the body's `error` field
    /// when present, or a generic `HTTP <code>` fallback.
    #[error("server error ({status}): {message}")]
    Server { status: u16, message: String },
}

impl ClientError {
    /// Status code for server-reported failures.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Server { status, .. } => Some(*status),
            ClientError::Connection(_) => None,
        }
    }
}
