//! Error types for the catalogue service clients.

use thiserror::Error;

/// Errors that can occur talking to the resource or search services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ApiError {
    /// The requested resource does not exist (HTTP 404).
    #[error("resource not found: {0}")]
    NotFound(String),

    /// The server answered with a non-success status.
    #[error("server returned status {status}: {message}")]
    Status { status: u16, message: String },

    /// The request never completed (connection, DNS, timeout).
    #[error("network error: {0}")]
    Network(String),

    /// The response body could not be decoded.
    #[error("response decode error: {0}")]
    Decode(String),
}

impl ApiError {
    /// Returns a user-friendly message suitable for display in the UI.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::NotFound(_) => "The requested catalogue does not exist.".to_string(),
            Self::Status { status, .. } => {
                format!("The catalogue server reported an error (status {status}).")
            }
            Self::Network(_) => {
                "Could not reach the catalogue server. Please check your connection.".to_string()
            }
            Self::Decode(_) => "The catalogue server returned an unexpected response.".to_string(),
        }
    }

    /// Whether this error means the resource itself is gone, as opposed to
    /// the service being unreachable.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
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

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ApiError>;
