//! Critique errors

use thiserror::Error;

/// Errors that can occur while producing a critique
#[derive(Debug, Error)]
pub enum CritiqueError {
    /// Failed to connect to the model provider
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the model provider failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Provider returned a non-success status; carries its message
    #[error("Analysis failed: {0}")]
    ServerError(String),

    /// Provider reply was not in the expected wire shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Reply text could not be resolved to a structured critique
    #[error("Could not parse critique reply: {0}")]
    Parse(String),

    /// Timeout during the model call
    #[error("Analysis timeout after {0}ms")]
    Timeout(u64),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl From<reqwest::Error> for CritiqueError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(30000)
        } else if err.is_connect() {
            Self::ConnectionFailed(err.to_string())
        } else {
            Self::RequestFailed(err.to_string())
        }
    }
}
