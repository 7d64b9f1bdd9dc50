//! # Embeddings
//!
//! Provider-agnostic embedding primitives used by workspace retrieval.
//!
//! ## Features
//!
//! - **Provider trait**: a narrow `embed` / `embed_batch` capability that the
//!   remote model client implements and tests can fake
//! - **Batching**: split document lists into bounded requests while keeping
//!   positional correspondence with the input
//! - **Distance ranking**: Euclidean distance with explicit dimension checks
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Embeddings                                   │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  EmbeddingRequest ──► EmbeddingProvider ──► Embedding           │
//! │        │                     │                  │               │
//! │        ▼                     ▼                  ▼               │
//! │    TaskType            embed_in_batches   rank_by_distance      │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

pub mod batch;
pub mod error;
pub mod provider;
pub mod similarity;

pub use batch::{DEFAULT_BATCH_SIZE, embed_in_batches};
pub use error::{EmbeddingError, Result};
pub use provider::{EmbeddingProvider, EmbeddingRequest, EmbeddingResponse, TaskType};
pub use similarity::{DistanceResult, euclidean_distance, rank_by_distance};

/// A dense vector embedding.
pub type Embedding = Vec<f32>;
