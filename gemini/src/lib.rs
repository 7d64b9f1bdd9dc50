//! # Gemini
//!
//! Client for the Gemini Generative Language REST API.
//!
//! A single [`GeminiClient`] provides every remote capability the assistant
//! needs:
//!
//! - [`assist_embeddings::EmbeddingProvider`] via `embedContent` and
//!   `batchEmbedContents`
//! - [`assist_assistant::ChatModel`] and [`assist_assistant::ImageModel`] via
//!   `generateContent`
//!
//! Requests are sent once; there is no retry or backoff.

pub mod client;
pub mod config;
pub mod error;
pub mod types;

pub use client::GeminiClient;
pub use config::GeminiConfig;
pub use error::{GeminiError, Result};
