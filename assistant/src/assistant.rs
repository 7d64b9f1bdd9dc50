//! The assistant facade used by editor integrations.

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info};

use assist_retrieval::RetrievalEngine;

use crate::error::{AssistantError, Result};
use crate::model::{ChatMessage, ChatModel, ImageModel, ImagePart};
use crate::prompt::workspace_prompt;

/// Answers prompts with a chat model, optionally grounded in workspace files.
pub struct Assistant {
    /// Chat completion backend.
    chat: Arc<dyn ChatModel>,

    /// Image description backend.
    vision: Arc<dyn ImageModel>,

    /// Workspace retrieval, when a workspace is open.
    retrieval: Option<RetrievalEngine>,
}

impl Assistant {
    /// Create an assistant without workspace retrieval.
    pub fn new(chat: Arc<dyn ChatModel>, vision: Arc<dyn ImageModel>) -> Self {
        Self {
            chat,
            vision,
            retrieval: None,
        }
    }

    /// Attach a retrieval engine for `@workspace` prompts.
    pub fn with_retrieval(mut self, retrieval: RetrievalEngine) -> Self {
        self.retrieval = Some(retrieval);
        self
    }

    /// Get the retrieval engine, if any.
    pub fn retrieval(&self) -> Option<&RetrievalEngine> {
        self.retrieval.as_ref()
    }

    /// Complete a chat.
    ///
    /// The last message of `history` is the turn to answer; earlier messages
    /// are sent as context. With `include_workspace`, the last turn is
    /// prefixed with the workspace files most relevant to it.
    pub async fn complete(
        &self,
        mut history: Vec<ChatMessage>,
        include_workspace: bool,
    ) -> Result<String> {
        if !self.chat.is_available() {
            return Err(missing_key(self.chat.name()));
        }

        let last = history.pop().ok_or(AssistantError::EmptyPrompt)?;
        let message = if include_workspace {
            let retrieval = self.retrieval.as_ref().ok_or_else(|| {
                AssistantError::Config("no workspace is open for @workspace prompts".to_string())
            })?;
            let context = retrieval.retrieve_relevant(&last.text).await?;
            workspace_prompt(&context, &last.text)
        } else {
            last.text
        };

        debug!("Prompt: {message}");
        info!(
            "Sending chat turn with {} history messages to {}",
            history.len(),
            self.chat.name()
        );

        Ok(self.chat.chat(&history, &message).await?)
    }

    /// Describe an image file.
    ///
    /// `mime_type` is guessed from the file extension when not given.
    pub async fn describe_image(
        &self,
        prompt: &str,
        image_path: &Path,
        mime_type: Option<&str>,
    ) -> Result<String> {
        if !self.vision.is_available() {
            return Err(missing_key(self.vision.name()));
        }

        let mime_type = match mime_type {
            Some(mime) => mime.to_string(),
            None => mime_guess::from_path(image_path)
                .first()
                .map(|mime| mime.essence_str().to_string())
                .ok_or_else(|| AssistantError::UnknownMimeType(image_path.to_path_buf()))?,
        };

        let image = ImagePart::from_file(image_path, mime_type)
            .await
            .map_err(|source| AssistantError::Image {
                path: image_path.to_path_buf(),
                source,
            })?;

        info!(
            "Describing {} ({}) with {}",
            image_path.display(),
            image.mime_type,
            self.vision.name()
        );
        Ok(self.vision.describe_image(prompt, image).await?)
    }
}

fn missing_key(backend: &str) -> AssistantError {
    AssistantError::Config(format!(
        "{backend} API key not set, add `api_key` to the config file or set GEMINI_API_KEY"
    ))
}
