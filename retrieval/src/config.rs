//! Configuration for the retrieval engine.

use serde::{Deserialize, Serialize};

use assist_embeddings::DEFAULT_BATCH_SIZE;

/// Configuration for the retrieval engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Glob selecting candidate files, relative to the workspace root.
    pub file_pattern: String,

    /// Language tag used on the code fence of each excerpt.
    pub language: String,

    /// Maximum number of excerpts returned.
    pub max_results: usize,

    /// Maximum number of documents per batch embedding request.
    pub batch_size: usize,
}

impl RetrievalConfig {
    /// Set the candidate file pattern.
    pub fn with_file_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.file_pattern = pattern.into();
        self
    }

    /// Set the code fence language tag.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Set the maximum number of excerpts.
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    /// Set the batch size.
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            file_pattern: "lib/**/*.dart".to_string(),
            language: "dart".to_string(),
            max_results: 5,
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let config = RetrievalConfig::default();

        assert_eq!(config.file_pattern, "lib/**/*.dart");
        assert_eq!(config.language, "dart");
        assert_eq!(config.max_results, 5);
        assert_eq!(config.batch_size, 100);
    }

    #[test]
    fn test_partial_deserialize() {
        let config: RetrievalConfig =
            serde_json::from_str(r#"{"file_pattern": "src/**/*.rs", "language": "rust"}"#)
                .unwrap();

        assert_eq!(
            config,
            RetrievalConfig::default()
                .with_file_pattern("src/**/*.rs")
                .with_language("rust")
        );
    }
}
