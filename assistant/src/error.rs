//! Error types for the assistant.

use std::path::PathBuf;

use thiserror::Error;

use assist_retrieval::RetrievalError;

/// Result type alias for assistant operations.
pub type Result<T> = std::result::Result<T, AssistantError>;

/// Errors reported by a chat or image model implementation.
#[derive(Error, Debug)]
pub enum ModelError {
    /// No credential configured.
    #[error("model not configured: API key not set")]
    NotConfigured,

    /// The service rejected or failed the request.
    #[error("API request failed: {0}")]
    Api(String),

    /// Rate limit exceeded.
    #[error("rate limit exceeded, retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u64 },

    /// The response could not be interpreted.
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

/// Errors that can occur in the assistant.
#[derive(Error, Debug)]
pub enum AssistantError {
    /// Missing credential or missing collaborator.
    #[error("configuration error: {0}")]
    Config(String),

    /// The prompt history has no turn to send.
    #[error("prompt history is empty")]
    EmptyPrompt,

    /// Workspace retrieval failed.
    #[error("retrieval error: {0}")]
    Retrieval(#[from] RetrievalError),

    /// The chat or image model failed.
    #[error("model error: {0}")]
    Model(#[from] ModelError),

    /// Reading the image file failed.
    #[error("failed to read image {path}: {source}")]
    Image {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No MIME type was given and none could be guessed from the path.
    #[error("cannot determine MIME type of {0}")]
    UnknownMimeType(PathBuf),
}

impl AssistantError {
    /// Whether the request failed because the assistant is not configured.
    pub fn is_configuration(&self) -> bool {
        match self {
            Self::Config(_) => true,
            Self::Retrieval(err) => err.is_configuration(),
            Self::Model(err) => matches!(err, ModelError::NotConfigured),
            _ => false,
        }
    }
}
