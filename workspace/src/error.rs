//! Error types for workspace access.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for workspace operations.
pub type Result<T> = std::result::Result<T, WorkspaceError>;

/// Errors that can occur while enumerating or reading workspace files.
#[derive(Error, Debug)]
pub enum WorkspaceError {
    /// The glob pattern could not be parsed.
    #[error("invalid glob pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    /// The workspace root does not exist or is not a directory.
    #[error("workspace root not found: {0}")]
    RootNotFound(PathBuf),

    /// Reading a file failed.
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Walking the directory tree failed.
    #[error("walk error: {0}")]
    Walk(#[from] walkdir::Error),

    /// The blocking enumeration task panicked or was cancelled.
    #[error("enumeration task failed: {0}")]
    Join(#[from] tokio::task::JoinError),

    /// A collaborator-specific failure.
    #[error("{0}")]
    Other(String),
}
