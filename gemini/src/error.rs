//! Error types for the Gemini client.

use thiserror::Error;

use assist_assistant::ModelError;
use assist_embeddings::EmbeddingError;

/// Result type alias for Gemini operations.
pub type Result<T> = std::result::Result<T, GeminiError>;

/// Errors returned by the Gemini client.
#[derive(Error, Debug)]
pub enum GeminiError {
    /// No API key configured.
    #[error("Gemini API key not set")]
    NotConfigured,

    /// The API answered with a non-success status.
    #[error("Gemini API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Rate limit exceeded.
    #[error("rate limit exceeded, retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u64 },

    /// The response was well-formed JSON but not usable.
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// HTTP error.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
}

impl From<GeminiError> for EmbeddingError {
    fn from(err: GeminiError) -> Self {
        match err {
            GeminiError::NotConfigured => Self::ProviderNotConfigured,
            GeminiError::Api { .. } => Self::ApiRequest(err.to_string()),
            GeminiError::RateLimited { retry_after_secs } => Self::RateLimited { retry_after_secs },
            GeminiError::InvalidResponse(message) => Self::InvalidResponse(message),
            GeminiError::Serialization(err) => Self::Serialization(err),
            GeminiError::Http(err) => Self::Http(err),
        }
    }
}

impl From<GeminiError> for ModelError {
    fn from(err: GeminiError) -> Self {
        match err {
            GeminiError::NotConfigured => Self::NotConfigured,
            GeminiError::RateLimited { retry_after_secs } => Self::RateLimited { retry_after_secs },
            GeminiError::InvalidResponse(message) => Self::InvalidResponse(message),
            GeminiError::Serialization(_) => Self::InvalidResponse(err.to_string()),
            GeminiError::Api { .. } | GeminiError::Http(_) => Self::Api(err.to_string()),
        }
    }
}
