//! Filesystem-backed workspace.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use glob::{MatchOptions, Pattern};
use tokio::fs;
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::Workspace;
use crate::config::WorkspaceConfig;
use crate::error::{Result, WorkspaceError};

/// `*` and `?` stay within one path segment; `**` crosses directories.
const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// A workspace rooted at a directory on the local filesystem.
#[derive(Debug, Clone)]
pub struct LocalWorkspace {
    config: WorkspaceConfig,
}

impl LocalWorkspace {
    /// Create a workspace from a configuration.
    pub fn new(config: WorkspaceConfig) -> Result<Self> {
        if !config.root.is_dir() {
            return Err(WorkspaceError::RootNotFound(config.root));
        }
        Ok(Self { config })
    }

    /// Create a workspace rooted at `root` with default excludes.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        Self::new(WorkspaceConfig::new(root))
    }

    /// Root directory of this workspace.
    pub fn root(&self) -> &Path {
        &self.config.root
    }

    fn scan(config: &WorkspaceConfig, pattern: &Pattern) -> Result<Vec<PathBuf>> {
        let walker = WalkDir::new(&config.root)
            .follow_links(config.follow_symlinks)
            .max_depth(config.max_depth.unwrap_or(usize::MAX))
            .sort_by_file_name();

        let mut matches = Vec::new();
        for entry in walker {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();
            let Ok(relative) = path.strip_prefix(&config.root) else {
                continue;
            };
            if config.should_exclude(relative) {
                continue;
            }

            if pattern.matches_path_with(relative, MATCH_OPTIONS) {
                matches.push(path.to_path_buf());
            }
        }

        Ok(matches)
    }
}

#[async_trait]
impl Workspace for LocalWorkspace {
    async fn find_files(&self, pattern: &str) -> Result<Vec<PathBuf>> {
        let compiled = Pattern::new(pattern).map_err(|source| WorkspaceError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;

        let config = self.config.clone();
        let files = tokio::task::spawn_blocking(move || Self::scan(&config, &compiled)).await??;

        info!(
            "Found {} files matching {pattern} under {}",
            files.len(),
            self.config.root.display()
        );
        Ok(files)
    }

    async fn read_text(&self, path: &Path) -> Result<String> {
        let full_path = if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.config.root.join(path)
        };

        debug!("Reading {}", full_path.display());
        fs::read_to_string(&full_path)
            .await
            .map_err(|source| WorkspaceError::Read {
                path: full_path,
                source,
            })
    }
}
