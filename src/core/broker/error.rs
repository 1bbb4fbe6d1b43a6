//! Errors raised while talking to the broker management API.

use thiserror::Error;

/// Failure of a single call to the management API.
///
/// These are never retried. The message is surfaced to the caller as-is.
#[derive(Debug, Error)]
pub enum BrokerError {
    /// The request could not be sent or the response could not be read
    /// (connection refused, DNS failure, timeout, ...).
    #[error("Request to broker failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The broker answered with a non-success status.
    #[error("Broker returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body was not valid JSON.
    #[error("Invalid JSON in broker response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The request could not be encoded.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl BrokerError {
    /// Create a status error from a response status and body.
    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self::Status {
            status,
            body: body.into(),
        }
    }

    /// Create an invalid request error.
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::InvalidRequest(msg.into())
    }
}
