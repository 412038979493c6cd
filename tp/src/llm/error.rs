//! Backend error types

use thiserror::Error;

/// Errors that can occur while talking to the generative backend
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("Credential rejected: {0}")]
    Auth(String),

    #[error("API error {status}: {message}")]
    ApiError { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl LlmError {
    /// Check if the backend explicitly rejected the credential
    ///
    /// Callers branch on this to show a credential-specific message instead
    /// of a generic failure.
    pub fn is_auth(&self) -> bool {
        matches!(self, LlmError::Auth(_))
    }
}
