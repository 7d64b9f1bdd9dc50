//! Configuration for the Gemini client.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Environment variable consulted for the API key.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Configuration for the Gemini client.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeminiConfig {
    /// API key. Never serialized back out.
    #[serde(skip_serializing)]
    pub api_key: Option<String>,

    /// API base URL, without a trailing slash.
    pub base_url: String,

    /// Model used for chat completion.
    pub chat_model: String,

    /// Model used for image description.
    pub vision_model: String,

    /// Model used for embeddings.
    pub embedding_model: String,

    /// Sampling temperature for chat completion.
    pub temperature: f32,

    /// Nucleus sampling threshold for chat completion.
    pub top_p: f32,

    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl GeminiConfig {
    /// Set the API key.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Use the API key from the environment, if set and non-empty.
    pub fn with_env_api_key(mut self) -> Self {
        if let Some(key) = std::env::var(API_KEY_ENV).ok().filter(|k| !k.is_empty()) {
            self.api_key = Some(key);
        }
        self
    }

    /// The API key, if one is configured and non-empty.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|key| !key.trim().is_empty())
    }
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            chat_model: "gemini-pro".to_string(),
            vision_model: "gemini-pro-vision".to_string(),
            embedding_model: "embedding-001".to_string(),
            temperature: 0.0,
            top_p: 0.2,
            timeout_secs: 120,
        }
    }
}

impl fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("chat_model", &self.chat_model)
            .field("vision_model", &self.vision_model)
            .field("embedding_model", &self.embedding_model)
            .field("temperature", &self.temperature)
            .field("top_p", &self.top_p)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}
