//! Chat and image model capabilities.

use std::path::Path;

use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Author of a chat turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Model,
}

/// One turn of a chat history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
}

impl ChatMessage {
    pub fn new(role: ChatRole, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
        }
    }

    /// A user turn.
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(ChatRole::User, text)
    }

    /// A model turn.
    pub fn model(text: impl Into<String>) -> Self {
        Self::new(ChatRole::Model, text)
    }
}

/// Image bytes, base64 encoded, with their MIME type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImagePart {
    pub mime_type: String,
    pub data: String,
}

impl ImagePart {
    /// Encode raw image bytes.
    pub fn from_bytes(bytes: &[u8], mime_type: impl Into<String>) -> Self {
        Self {
            mime_type: mime_type.into(),
            data: STANDARD.encode(bytes),
        }
    }

    /// Read and encode an image file.
    pub async fn from_file(path: &Path, mime_type: impl Into<String>) -> std::io::Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        Ok(Self::from_bytes(&bytes, mime_type))
    }
}

/// Multi-turn text completion.
#[async_trait]
pub trait ChatModel: Send + Sync {
    /// Get the name of this model backend.
    fn name(&self) -> &str;

    /// Send `message` as the next user turn after `history` and return the
    /// model's reply.
    async fn chat(&self, history: &[ChatMessage], message: &str) -> Result<String, ModelError>;

    /// Check if the model is usable (API key set, etc.).
    fn is_available(&self) -> bool;
}

/// Text generation from a prompt and an image.
#[async_trait]
pub trait ImageModel: Send + Sync {
    /// Get the name of this model backend.
    fn name(&self) -> &str;

    /// Describe `image` as instructed by `prompt`.
    async fn describe_image(&self, prompt: &str, image: ImagePart) -> Result<String, ModelError>;

    /// Check if the model is usable (API key set, etc.).
    fn is_available(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_image_part_encodes_base64() {
        let part = ImagePart::from_bytes(b"\x89PNG", "image/png");

        assert_eq!(part.data, "iVBORw==");
        assert_eq!(part.mime_type, "image/png");
    }

    #[test]
    fn test_chat_role_wire_names() {
        let message = ChatMessage::model("hi");
        assert_eq!(
            serde_json::to_string(&message).unwrap(),
            r#"{"role":"model","text":"hi"}"#
        );
    }

    #[tokio::test]
    async fn test_image_part_from_file() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("pixel.bin");
        std::fs::write(&path, [0u8, 1, 2]).unwrap();

        let part = ImagePart::from_file(&path, "image/png").await.unwrap();
        assert_eq!(part.data, "AAEC");
    }
}
