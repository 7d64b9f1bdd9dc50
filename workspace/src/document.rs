use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A workspace file and its full text, read fresh for each retrieval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Path handle as returned by the workspace.
    pub path: PathBuf,

    /// Full text content.
    pub content: String,
}

impl Document {
    /// Create a new document.
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Final path segment, used as the display label.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.to_string_lossy().into_owned())
    }
}
