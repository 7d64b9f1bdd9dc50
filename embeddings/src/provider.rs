//! Embedding providers.
//!
//! The [`EmbeddingProvider`] trait is the only seam between retrieval and the
//! remote embedding service. Implementations must preserve request order in
//! [`EmbeddingProvider::embed_batch`].

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::Embedding;
use crate::error::Result;

/// What an embedding will be used for.
///
/// Retrieval models embed documents and queries asymmetrically, so every
/// request carries the side of the comparison it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskType {
    /// A corpus item that will be searched over.
    RetrievalDocument,
    /// A search query compared against documents.
    RetrievalQuery,
}

impl TaskType {
    /// Content role attached to the text of this request.
    pub fn role(self) -> &'static str {
        match self {
            Self::RetrievalDocument => "document",
            Self::RetrievalQuery => "query",
        }
    }
}

/// Request for generating embeddings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbeddingRequest {
    /// Text to embed.
    pub text: String,

    /// Retrieval side of this text.
    pub task_type: TaskType,

    /// Model to use (provider-specific).
    pub model: Option<String>,
}

impl EmbeddingRequest {
    /// Create a new embedding request.
    pub fn new(text: impl Into<String>, task_type: TaskType) -> Self {
        Self {
            text: text.into(),
            task_type,
            model: None,
        }
    }

    /// A document-side request.
    pub fn document(text: impl Into<String>) -> Self {
        Self::new(text, TaskType::RetrievalDocument)
    }

    /// A query-side request.
    pub fn query(text: impl Into<String>) -> Self {
        Self::new(text, TaskType::RetrievalQuery)
    }

    /// Set the model to use.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Content role for this request (`document` or `query`).
    pub fn role(&self) -> &'static str {
        self.task_type.role()
    }
}

/// Response from embedding generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbeddingResponse {
    /// The generated embedding.
    pub embedding: Embedding,

    /// Model used to generate the embedding.
    pub model: String,

    /// Dimension of the embedding.
    pub dimension: usize,
}

impl EmbeddingResponse {
    /// Wrap a raw vector, recording its dimension.
    pub fn new(embedding: Embedding, model: impl Into<String>) -> Self {
        let dimension = embedding.len();
        Self {
            embedding,
            model: model.into(),
            dimension,
        }
    }
}

/// Trait for embedding providers.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Get the name of this provider.
    fn name(&self) -> &str;

    /// Get the default model for this provider.
    fn default_model(&self) -> &str;

    /// Generate an embedding for the given text.
    async fn embed(&self, request: EmbeddingRequest) -> Result<EmbeddingResponse>;

    /// Generate embeddings for multiple texts.
    ///
    /// The returned vector has one entry per request, in request order.
    async fn embed_batch(&self, requests: Vec<EmbeddingRequest>) -> Result<Vec<EmbeddingResponse>> {
        // Default implementation: process sequentially
        let mut results = Vec::with_capacity(requests.len());
        for request in requests {
            results.push(self.embed(request).await?);
        }
        Ok(results)
    }

    /// Check if the provider is available (API key set, etc.).
    fn is_available(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_embedding_request() {
        let request = EmbeddingRequest::document("fn main() {}").with_model("embedding-001");

        assert_eq!(request.text, "fn main() {}");
        assert_eq!(request.task_type, TaskType::RetrievalDocument);
        assert_eq!(request.model, Some("embedding-001".to_string()));
        assert_eq!(request.role(), "document");
    }

    #[test]
    fn test_task_type_wire_names() {
        assert_eq!(
            serde_json::to_string(&TaskType::RetrievalDocument).unwrap(),
            "\"RETRIEVAL_DOCUMENT\""
        );
        assert_eq!(
            serde_json::to_string(&TaskType::RetrievalQuery).unwrap(),
            "\"RETRIEVAL_QUERY\""
        );
        assert_eq!(EmbeddingRequest::query("q").role(), "query");
    }

    struct LengthProvider;

    #[async_trait]
    impl EmbeddingProvider for LengthProvider {
        fn name(&self) -> &str {
            "length"
        }

        fn default_model(&self) -> &str {
            "length-1"
        }

        async fn embed(&self, request: EmbeddingRequest) -> Result<EmbeddingResponse> {
            Ok(EmbeddingResponse::new(
                vec![request.text.len() as f32],
                self.default_model(),
            ))
        }

        fn is_available(&self) -> bool {
            true
        }
    }

    #[tokio::test]
    async fn test_default_batch_preserves_order() {
        let requests = vec![
            EmbeddingRequest::document("a"),
            EmbeddingRequest::document("abc"),
            EmbeddingRequest::document("ab"),
        ];

        let responses = LengthProvider.embed_batch(requests).await.unwrap();
        let values: Vec<f32> = responses.iter().map(|r| r.embedding[0]).collect();

        assert_eq!(values, vec![1.0, 3.0, 2.0]);
        assert_eq!(responses[0].dimension, 1);
    }
}
