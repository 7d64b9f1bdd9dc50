//! # Workspace
//!
//! Access to the files of the project the user is working in.
//!
//! Retrieval never touches the filesystem directly: it goes through the
//! [`Workspace`] trait so that an editor host, an in-memory fixture or the
//! bundled [`LocalWorkspace`] can supply documents.

pub mod config;
pub mod document;
pub mod error;
pub mod local;

use std::path::{Path, PathBuf};

use async_trait::async_trait;

pub use config::WorkspaceConfig;
pub use document::Document;
pub use error::{Result, WorkspaceError};
pub use local::LocalWorkspace;

/// Enumerates and reads workspace files.
#[async_trait]
pub trait Workspace: Send + Sync {
    /// Find files whose workspace-relative path matches a glob pattern.
    async fn find_files(&self, pattern: &str) -> Result<Vec<PathBuf>>;

    /// Read the full text of a file returned by [`Workspace::find_files`].
    async fn read_text(&self, path: &Path) -> Result<String>;

    /// Read a file into a [`Document`].
    async fn read_document(&self, path: PathBuf) -> Result<Document> {
        let content = self.read_text(&path).await?;
        Ok(Document::new(path, content))
    }
}
