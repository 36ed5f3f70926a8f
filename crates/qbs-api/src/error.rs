//! Error types for the question bank API client.

use thiserror::Error;

/// Result alias used throughout the API client.
pub type Result<T> = std::result::Result<T, ApiError>;

/// Errors that can occur while talking to the question bank API.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ApiError {
    /// Request never produced a usable response (DNS, TLS, connect, timeout).
    #[error("network error: {0}")]
    Network(String),

    /// Server answered with a non-success status.
    #[error("server error ({status}): {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, truncated for display.
        body: String,
    },

    /// Response body did not match the expected shape.
    #[error("response decode error: {0}")]
    Decode(String),

    /// The configured base URL is not usable.
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
}

impl ApiError {
    /// Returns a user-friendly message suitable for display in the UI.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Network(_) => {
                "Could not reach the question bank. Check your connection and try again."
                    .to_string()
            }
            Self::Status { status, .. } => {
                format!("The question bank returned an error (HTTP {status}).")
            }
            Self::Decode(_) => "The question bank sent an unexpected response.".to_string(),
            Self::InvalidBaseUrl(url) => format!("The configured API address is invalid: {url}"),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}
