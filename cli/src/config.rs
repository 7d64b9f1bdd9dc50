//! Configuration file loading.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use assist_gemini::GeminiConfig;
use assist_retrieval::RetrievalConfig;
use assist_workspace::WorkspaceConfig;

/// Everything read from `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistConfig {
    /// Gemini API settings.
    pub gemini: GeminiConfig,

    /// Retrieval settings for `@workspace` prompts.
    pub retrieval: RetrievalConfig,

    /// Workspace enumeration settings.
    pub workspace: WorkspaceSettings,
}

/// Workspace settings that do not depend on which directory is opened.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkspaceSettings {
    /// Glob patterns excluded in addition to the built-in ones.
    pub exclude: Vec<String>,

    /// Maximum directory depth to scan.
    pub max_depth: Option<usize>,

    /// Whether to follow symbolic links.
    pub follow_symlinks: bool,
}

impl WorkspaceSettings {
    /// Build the workspace configuration for `root`.
    pub fn for_root(&self, root: impl Into<PathBuf>) -> WorkspaceConfig {
        let mut config = self
            .exclude
            .iter()
            .fold(WorkspaceConfig::new(root), |config, pattern| {
                config.exclude(pattern.clone())
            });
        config.max_depth = self.max_depth;
        config.follow_symlinks = self.follow_symlinks;
        config
    }
}

impl AssistConfig {
    /// Default location: `<config dir>/assist/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("assist").join("config.toml"))
    }

    /// Load the configuration.
    ///
    /// An explicit `path` must exist. The default path is optional and falls
    /// back to built-in defaults. `GEMINI_API_KEY` overrides the file's key.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                _ => {
                    debug!("No config file found, using defaults");
                    Self::default()
                }
            },
        };

        Ok(config.with_env_overrides())
    }

    /// Parse a TOML configuration file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config = toml::from_str(&text)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    fn with_env_overrides(mut self) -> Self {
        self.gemini = self.gemini.with_env_api_key();
        self
    }
}
