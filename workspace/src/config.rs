//! Configuration for local workspace enumeration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Configuration for a workspace rooted on the local filesystem.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkspaceConfig {
    /// Path to the workspace root.
    pub root: PathBuf,

    /// Patterns to exclude (glob patterns, matched against the full path).
    #[serde(default = "WorkspaceConfig::default_excludes")]
    pub exclude_patterns: Vec<String>,

    /// Maximum depth to recurse (None = unlimited).
    #[serde(default)]
    pub max_depth: Option<usize>,

    /// Whether to follow symbolic links.
    #[serde(default)]
    pub follow_symlinks: bool,
}

impl WorkspaceConfig {
    /// Create a new workspace config.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            exclude_patterns: Self::default_excludes(),
            max_depth: None,
            follow_symlinks: false,
        }
    }

    /// Add an exclude pattern.
    pub fn exclude(mut self, pattern: impl Into<String>) -> Self {
        self.exclude_patterns.push(pattern.into());
        self
    }

    /// Set the maximum depth.
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Enable following symbolic links.
    pub fn follow_symlinks(mut self) -> Self {
        self.follow_symlinks = true;
        self
    }

    /// Get default exclude patterns.
    fn default_excludes() -> Vec<String> {
        vec![
            // Version control
            "**/.git/**".to_string(),
            "**/.hg/**".to_string(),
            // Tool caches and dependencies
            "**/.dart_tool/**".to_string(),
            "**/node_modules/**".to_string(),
            "**/target/**".to_string(),
            "**/Pods/**".to_string(),
            // Build artifacts
            "**/build/**".to_string(),
            // IDE/Editor
            "**/.idea/**".to_string(),
            "**/*.swp".to_string(),
            // System files
            "**/.DS_Store".to_string(),
        ]
    }

    /// Check if a path should be excluded.
    ///
    /// Patterns are matched against the path relative to `root`, so the
    /// directories above the workspace never exclude anything.
    pub fn should_exclude(&self, path: &Path) -> bool {
        let relative = path.strip_prefix(&self.root).unwrap_or(path);
        let path_str = relative.to_string_lossy();

        self.exclude_patterns.iter().any(|pattern| {
            glob::Pattern::new(pattern)
                .map(|glob| glob.matches(&path_str))
                .unwrap_or(false)
        })
    }
}
