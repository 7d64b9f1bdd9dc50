//! Retrieval engine implementation.

use std::sync::Arc;

use futures::future::try_join_all;
use serde::Serialize;
use tracing::{debug, info};

use assist_embeddings::{EmbeddingProvider, EmbeddingRequest, embed_in_batches, rank_by_distance};
use assist_workspace::{Document, Workspace};

use crate::config::RetrievalConfig;
use crate::error::{Result, RetrievalError};
use crate::format::format_excerpts;

/// A document paired with its distance to the query embedding.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredDocument {
    /// The ranked document.
    pub document: Document,

    /// Euclidean distance to the query; smaller is more relevant.
    pub distance: f32,
}

/// Ranks workspace documents against a query by embedding distance.
///
/// The engine owns no index. Each call enumerates the workspace, embeds every
/// candidate in bounded batches, embeds the query and keeps the closest
/// documents.
pub struct RetrievalEngine {
    /// Configuration.
    config: RetrievalConfig,

    /// Embedding capability of the model service.
    embedder: Arc<dyn EmbeddingProvider>,

    /// Source of candidate documents.
    workspace: Arc<dyn Workspace>,
}

impl RetrievalEngine {
    /// Create a new retrieval engine.
    pub fn new(
        config: RetrievalConfig,
        embedder: Arc<dyn EmbeddingProvider>,
        workspace: Arc<dyn Workspace>,
    ) -> Self {
        Self {
            config,
            embedder,
            workspace,
        }
    }

    /// Get the engine configuration.
    pub fn config(&self) -> &RetrievalConfig {
        &self.config
    }

    /// Retrieve the documents most relevant to `query` as a formatted block.
    ///
    /// Returns an empty string when the workspace has no candidate files; in
    /// that case no embedding request is made at all.
    pub async fn retrieve_relevant(&self, query: &str) -> Result<String> {
        let top = self.retrieve_documents(query).await?;
        Ok(format_excerpts(&top, &self.config.language))
    }

    /// Retrieve up to `max_results` ranked documents for `query`.
    pub async fn retrieve_documents(&self, query: &str) -> Result<Vec<ScoredDocument>> {
        self.ensure_available()?;

        let paths = self.workspace.find_files(&self.config.file_pattern).await?;
        debug!("Candidate files: {paths:?}");

        let documents = try_join_all(
            paths
                .into_iter()
                .map(|path| self.workspace.read_document(path)),
        )
        .await?;
        info!("Read {} candidate documents", documents.len());

        let mut ranked = self.rank_documents(query, documents).await?;
        ranked.truncate(self.config.max_results);

        info!("Selected {} documents for query", ranked.len());
        Ok(ranked)
    }

    /// Rank already-loaded documents against `query`, closest first.
    ///
    /// Every document is returned; callers truncate as needed.
    pub async fn rank_documents(
        &self,
        query: &str,
        documents: Vec<Document>,
    ) -> Result<Vec<ScoredDocument>> {
        self.ensure_available()?;

        if documents.is_empty() {
            debug!("No documents to rank, skipping embedding calls");
            return Ok(Vec::new());
        }

        let batch_size = self.config.batch_size.max(1);
        info!(
            "Embedding {} documents in {} batches",
            documents.len(),
            documents.len().div_ceil(batch_size)
        );

        let texts: Vec<String> = documents.iter().map(|d| d.content.clone()).collect();
        let embeddings = embed_in_batches(self.embedder.as_ref(), &texts, batch_size).await?;

        let query_embedding = self
            .embedder
            .embed(EmbeddingRequest::query(query))
            .await?
            .embedding;

        let distances = rank_by_distance(&query_embedding, &embeddings)?;
        debug!("Computed {} distances", distances.len());

        let mut slots: Vec<Option<Document>> = documents.into_iter().map(Some).collect();
        let ranked = distances
            .into_iter()
            .filter_map(|result| {
                slots[result.index].take().map(|document| ScoredDocument {
                    document,
                    distance: result.distance,
                })
            })
            .collect();

        Ok(ranked)
    }

    fn ensure_available(&self) -> Result<()> {
        if self.embedder.is_available() {
            Ok(())
        } else {
            Err(RetrievalError::Config(format!(
                "{} API key not set, add `api_key` to the config file or set GEMINI_API_KEY",
                self.embedder.name()
            )))
        }
    }
}
