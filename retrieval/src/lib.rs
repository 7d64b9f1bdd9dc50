//! # Retrieval Engine
//!
//! Finds the workspace files most relevant to a natural-language query and
//! renders them as a context block that can be prepended to a prompt.
//!
//! ## Pipeline
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Retrieval Engine                             │
//! ├─────────────────────────────────────────────────────────────────┤
//! │                                                                 │
//! │  ┌──────────────┐   ┌──────────────┐   ┌──────────────┐         │
//! │  │  Workspace   │──►│   Batched    │──►│    Query     │         │
//! │  │  find + read │   │  embeddings  │   │  embedding   │         │
//! │  └──────────────┘   └──────────────┘   └──────────────┘         │
//! │                                               │                 │
//! │                                               ▼                 │
//! │                     ┌──────────────┐   ┌──────────────┐         │
//! │                     │   Excerpt    │◄──│  L2 ranking  │         │
//! │                     │  formatting  │   │  (top N)     │         │
//! │                     └──────────────┘   └──────────────┘         │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing is cached: every call re-reads the workspace and re-embeds every
//! document.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use assist_retrieval::{RetrievalConfig, RetrievalEngine};
//!
//! let engine = RetrievalEngine::new(RetrievalConfig::default(), embedder, workspace);
//! let context = engine.retrieve_relevant("how is routing set up?").await?;
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod format;

pub use config::RetrievalConfig;
pub use engine::{RetrievalEngine, ScoredDocument};
pub use error::{Result, RetrievalError};
pub use format::format_excerpts;

// Re-export from dependencies for convenience
pub use assist_embeddings::{EmbeddingProvider, TaskType};
pub use assist_workspace::{Document, Workspace};
