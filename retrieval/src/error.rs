//! Error types for the retrieval engine.

use thiserror::Error;

use assist_embeddings::EmbeddingError;

/// Result type alias for retrieval operations.
pub type Result<T> = std::result::Result<T, RetrievalError>;

/// Errors that can occur in the retrieval engine.
#[derive(Error, Debug)]
pub enum RetrievalError {
    /// Embedding error, either from the remote service or a shape check.
    #[error("embedding error: {0}")]
    Embedding(#[from] EmbeddingError),

    /// Workspace enumeration or read error.
    #[error("workspace error: {0}")]
    Workspace(#[from] assist_workspace::WorkspaceError),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

impl RetrievalError {
    /// Whether the retrieval failed because no credential is configured.
    pub fn is_configuration(&self) -> bool {
        match self {
            Self::Config(_) => true,
            Self::Embedding(err) => err.is_configuration(),
            Self::Workspace(_) => false,
        }
    }
}
