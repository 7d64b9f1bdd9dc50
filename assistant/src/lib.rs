//! # Assistant
//!
//! Turns editor requests into model calls:
//!
//! - **Chat completion** over a prompt history, optionally enriched with the
//!   workspace files most relevant to the last turn (`@workspace`)
//! - **Image description** from a local image file and a prompt
//!
//! The model service is reached only through the [`ChatModel`] and
//! [`ImageModel`] traits, and workspace retrieval through
//! [`assist_retrieval::RetrievalEngine`].

pub mod assistant;
pub mod error;
pub mod model;
pub mod prompt;

pub use assistant::Assistant;
pub use error::{AssistantError, ModelError, Result};
pub use model::{ChatMessage, ChatModel, ChatRole, ImageModel, ImagePart};
pub use prompt::{WORKSPACE_INSTRUCTION, workspace_prompt};
