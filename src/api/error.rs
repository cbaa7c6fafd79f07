//! API error types for the draw-results endpoint

use thiserror::Error;

/// Errors raised while fetching or decoding draw results
///
/// Every variant is fatal for the session; the driver propagates them to `main`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request could not be built, sent, or its body read
    #[error("request to {url} failed: {message}")]
    Transport {
        /// Endpoint the request was sent to
        url: String,
        /// Underlying transport message
        message: String,
    },

    /// The server answered with a non-success HTTP status
    #[error("request to {url} returned HTTP {status}")]
    Status {
        /// Endpoint the request was sent to
        url: String,
        /// HTTP status code
        status: u16,
    },

    /// The response body did not have the expected shape
    #[error("malformed draw results: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// Create a transport error
    #[must_use]
    pub fn transport(url: impl Into<String>, message: impl ToString) -> Self {
        Self::Transport {
            url: url.into(),
            message: message.to_string(),
        }
    }

    /// Create a status error
    #[must_use]
    pub fn status(url: impl Into<String>, status: u16) -> Self {
        Self::Status {
            url: url.into(),
            status,
        }
    }

    /// HTTP status code carried by this error, if any
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport { .. } | Self::Decode(_) => None,
        }
    }
}
