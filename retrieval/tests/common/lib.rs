//! Deterministic fakes for the retrieval collaborators.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use assist_embeddings::{
    Embedding, EmbeddingError, EmbeddingProvider, EmbeddingRequest, EmbeddingResponse,
};
use assist_workspace::{Workspace, WorkspaceError};
use async_trait::async_trait;

/// Every request an embedder has received, grouped by call.
#[derive(Debug, Default, Clone)]
pub struct EmbedCalls {
    /// One entry per `embed_batch` call.
    pub batches: Vec<Vec<EmbeddingRequest>>,
    /// One entry per `embed` call.
    pub single: Vec<EmbeddingRequest>,
}

/// Embedding provider backed by a fixed text-to-vector table.
///
/// Texts missing from the table embed as `[len, 0.0]`.
pub struct FakeEmbedder {
    vectors: HashMap<String, Embedding>,
    available: bool,
    fail_batch: Option<usize>,
    fail_query: bool,
    calls: Mutex<EmbedCalls>,
}

impl FakeEmbedder {
    pub fn new() -> Self {
        Self {
            vectors: HashMap::new(),
            available: true,
            fail_batch: None,
            fail_query: false,
            calls: Mutex::new(EmbedCalls::default()),
        }
    }

    pub fn with_vector(mut self, text: impl Into<String>, vector: Embedding) -> Self {
        self.vectors.insert(text.into(), vector);
        self
    }

    /// Report no credential.
    pub fn unavailable(mut self) -> Self {
        self.available = false;
        self
    }

    /// Fail the `n`th (zero-based) batch call with an API error.
    pub fn failing_batch(mut self, n: usize) -> Self {
        self.fail_batch = Some(n);
        self
    }

    /// Fail the query embedding call with an API error.
    pub fn failing_query(mut self) -> Self {
        self.fail_query = true;
        self
    }

    pub fn calls(&self) -> EmbedCalls {
        self.calls.lock().unwrap().clone()
    }

    fn vector_for(&self, text: &str) -> Embedding {
        self.vectors
            .get(text)
            .cloned()
            .unwrap_or_else(|| vec![text.len() as f32, 0.0])
    }
}

impl Default for FakeEmbedder {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmbeddingProvider for FakeEmbedder {
    fn name(&self) -> &str {
        "fake"
    }

    fn default_model(&self) -> &str {
        "fake-embedding"
    }

    async fn embed(&self, request: EmbeddingRequest) -> assist_embeddings::Result<EmbeddingResponse> {
        if !self.available {
            return Err(EmbeddingError::ProviderNotConfigured);
        }
        self.calls.lock().unwrap().single.push(request.clone());
        if self.fail_query {
            return Err(EmbeddingError::ApiRequest("query embedding failed".to_string()));
        }
        Ok(EmbeddingResponse::new(
            self.vector_for(&request.text),
            self.default_model(),
        ))
    }

    async fn embed_batch(
        &self,
        requests: Vec<EmbeddingRequest>,
    ) -> assist_embeddings::Result<Vec<EmbeddingResponse>> {
        if !self.available {
            return Err(EmbeddingError::ProviderNotConfigured);
        }
        let call_index = {
            let mut calls = self.calls.lock().unwrap();
            calls.batches.push(requests.clone());
            calls.batches.len() - 1
        };
        if self.fail_batch == Some(call_index) {
            return Err(EmbeddingError::ApiRequest(format!(
                "batch {call_index} failed"
            )));
        }
        Ok(requests
            .iter()
            .map(|r| EmbeddingResponse::new(self.vector_for(&r.text), self.default_model()))
            .collect())
    }

    fn is_available(&self) -> bool {
        self.available
    }
}

/// Workspace holding files in memory, in insertion order.
#[derive(Default)]
pub struct MemoryWorkspace {
    files: Vec<(PathBuf, String)>,
    find_calls: AtomicUsize,
    read_calls: AtomicUsize,
}

impl MemoryWorkspace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.files.push((path.into(), content.into()));
        self
    }

    pub fn find_calls(&self) -> usize {
        self.find_calls.load(Ordering::SeqCst)
    }

    pub fn read_calls(&self) -> usize {
        self.read_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Workspace for MemoryWorkspace {
    async fn find_files(&self, pattern: &str) -> assist_workspace::Result<Vec<PathBuf>> {
        self.find_calls.fetch_add(1, Ordering::SeqCst);
        let pattern =
            glob::Pattern::new(pattern).map_err(|source| WorkspaceError::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            })?;
        Ok(self
            .files
            .iter()
            .filter(|(path, _)| pattern.matches_path(path))
            .map(|(path, _)| path.clone())
            .collect())
    }

    async fn read_text(&self, path: &Path) -> assist_workspace::Result<String> {
        self.read_calls.fetch_add(1, Ordering::SeqCst);
        self.files
            .iter()
            .find(|(p, _)| p == path)
            .map(|(_, content)| content.clone())
            .ok_or_else(|| WorkspaceError::Other(format!("no such file: {}", path.display())))
    }
}
