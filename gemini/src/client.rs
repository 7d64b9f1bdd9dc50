//! HTTP client for the Generative Language API.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use assist_assistant::{ChatMessage, ChatModel, ImageModel, ImagePart, ModelError};
use assist_embeddings::{EmbeddingError, EmbeddingProvider, EmbeddingRequest, EmbeddingResponse};

use crate::config::GeminiConfig;
use crate::error::{GeminiError, Result};
use crate::types::{
    BatchEmbedContentsRequest, BatchEmbedContentsResponse, Content, EmbedContentRequest,
    EmbedContentResponse, ErrorResponse, GenerateContentRequest, GenerateContentResponse,
    GenerationConfig, Part,
};

/// Client for the Gemini API.
pub struct GeminiClient {
    /// Configuration, including the API key.
    config: GeminiConfig,

    /// HTTP client.
    client: reqwest::Client,
}

impl GeminiClient {
    /// Create a new client.
    pub fn new(config: GeminiConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { config, client })
    }

    /// Get the client configuration.
    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    fn api_key(&self) -> Result<&str> {
        self.config.api_key().ok_or(GeminiError::NotConfigured)
    }

    /// POST `body` to `models/{model}:{method}` and decode the reply.
    async fn post<B, R>(&self, model: &str, method: &str, body: &B) -> Result<R>
    where
        B: Serialize + Sync,
        R: DeserializeOwned,
    {
        let api_key = self.api_key()?;
        let url = format!(
            "{}/models/{model}:{method}",
            self.config.base_url.trim_end_matches('/')
        );

        debug!("POST {url}");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse().ok())
                .unwrap_or(60);

            return Err(GeminiError::RateLimited {
                retry_after_secs: retry_after,
            });
        }

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            let message = match serde_json::from_str::<ErrorResponse>(&error_text) {
                Ok(body) => match body.error.status {
                    Some(code) => format!("{code} - {}", body.error.message),
                    None => body.error.message,
                },
                Err(_) => error_text,
            };
            return Err(GeminiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    fn embed_request(&self, request: EmbeddingRequest) -> (String, EmbedContentRequest) {
        let model = request
            .model
            .unwrap_or_else(|| self.config.embedding_model.clone());
        let body = EmbedContentRequest {
            model: format!("models/{model}"),
            content: Content::new(request.task_type.role(), vec![Part::text(request.text)]),
            task_type: request.task_type,
        };
        (model, body)
    }

    /// Call `generateContent` and extract the reply text.
    pub async fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<String> {
        let response: GenerateContentResponse =
            self.post(model, "generateContent", request).await?;

        response
            .text()
            .ok_or_else(|| GeminiError::InvalidResponse(response.missing_text_reason()))
    }
}

#[async_trait]
impl EmbeddingProvider for GeminiClient {
    fn name(&self) -> &str {
        "gemini"
    }

    fn default_model(&self) -> &str {
        &self.config.embedding_model
    }

    async fn embed(
        &self,
        request: EmbeddingRequest,
    ) -> assist_embeddings::Result<EmbeddingResponse> {
        let (model, body) = self.embed_request(request);

        debug!("Generating {:?} embedding with model: {model}", body.task_type);

        let response: EmbedContentResponse = self.post(&model, "embedContent", &body).await?;
        Ok(EmbeddingResponse::new(response.embedding.values, model))
    }

    async fn embed_batch(
        &self,
        requests: Vec<EmbeddingRequest>,
    ) -> assist_embeddings::Result<Vec<EmbeddingResponse>> {
        if requests.is_empty() {
            return Ok(Vec::new());
        }

        let expected = requests.len();
        let mut model = self.config.embedding_model.clone();
        let mut bodies = Vec::with_capacity(expected);
        for request in requests {
            let (request_model, body) = self.embed_request(request);
            model = request_model;
            bodies.push(body);
        }

        debug!("Generating batch embeddings for {expected} texts with model: {model}");

        let body = BatchEmbedContentsRequest { requests: bodies };
        let response: BatchEmbedContentsResponse =
            self.post(&model, "batchEmbedContents", &body).await?;

        if response.embeddings.len() != expected {
            return Err(EmbeddingError::InvalidResponse(format!(
                "requested {expected} embeddings, got {}",
                response.embeddings.len()
            )));
        }

        let responses: Vec<EmbeddingResponse> = response
            .embeddings
            .into_iter()
            .map(|e| EmbeddingResponse::new(e.values, model.clone()))
            .collect();

        info!("Generated {} batch embeddings", responses.len());
        Ok(responses)
    }

    fn is_available(&self) -> bool {
        self.config.api_key().is_some()
    }
}

#[async_trait]
impl ChatModel for GeminiClient {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn chat(
        &self,
        history: &[ChatMessage],
        message: &str,
    ) -> std::result::Result<String, ModelError> {
        let mut contents: Vec<Content> = history.iter().map(Content::from).collect();
        contents.push(Content::new("user", vec![Part::text(message)]));

        let request = GenerateContentRequest {
            contents,
            generation_config: Some(GenerationConfig {
                temperature: Some(self.config.temperature),
                top_p: Some(self.config.top_p),
            }),
        };

        info!(
            "Sending chat with {} history turns to {}",
            history.len(),
            self.config.chat_model
        );
        Ok(self
            .generate_content(&self.config.chat_model, &request)
            .await?)
    }

    fn is_available(&self) -> bool {
        self.config.api_key().is_some()
    }
}

#[async_trait]
impl ImageModel for GeminiClient {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn describe_image(
        &self,
        prompt: &str,
        image: ImagePart,
    ) -> std::result::Result<String, ModelError> {
        let request = GenerateContentRequest {
            contents: vec![Content::new(
                "user",
                vec![Part::text(prompt), Part::inline(image)],
            )],
            generation_config: None,
        };

        Ok(self
            .generate_content(&self.config.vision_model, &request)
            .await?)
    }

    fn is_available(&self) -> bool {
        self.config.api_key().is_some()
    }
}
