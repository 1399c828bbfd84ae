//! The `OpenRouter` image generation client.

use async_trait::async_trait;
use imgncli_core::{GenerationOutcome, ImageGenerator};
use tracing::{debug, warn};

use crate::config::OpenRouterConfig;
use crate::error::{ClientError, ClientResult};
use crate::http::{HttpBackend, HttpRequest, ReqwestBackend};
use crate::models::{ChatRequest, ChatResponse};
use crate::parsing::extract_base64_payload;

/// A successfully extracted image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedImage {
    /// Base64 payload of the data URI.
    pub image_base64: String,
    /// Accompanying text, empty when absent.
    pub text_content: String,
}

/// Client for the chat-completions endpoint, generic over its transport.
pub struct OpenRouterClient<B: HttpBackend = ReqwestBackend> {
    config: OpenRouterConfig,
    backend: B,
}

/// Client with the production reqwest transport.
pub type DefaultOpenRouterClient = OpenRouterClient<ReqwestBackend>;

impl OpenRouterClient<ReqwestBackend> {
    pub fn new(config: OpenRouterConfig) -> ClientResult<Self> {
        let backend = ReqwestBackend::new(&config)?;
        Ok(Self { config, backend })
    }
}

impl<B: HttpBackend> OpenRouterClient<B> {
    pub const fn with_backend(config: OpenRouterConfig, backend: B) -> Self {
        Self { config, backend }
    }

    pub const fn backend(&self) -> &B {
        &self.backend
    }

    /// Ask `model_id` for an image of `prompt`.
    ///
    /// An empty `api_key` fails before any request is made.
    pub async fn request_image(
        &self,
        prompt: &str,
        api_key: &str,
        model_id: &str,
    ) -> ClientResult<GeneratedImage> {
        if api_key.trim().is_empty() {
            return Err(ClientError::MissingApiKey);
        }

        let request = self.build_request(prompt, api_key, model_id)?;
        debug!(url = %request.url, model = model_id, "Sending generation request");

        let response = self.backend.post_json(request).await?;
        if !response.is_success() {
            return Err(ClientError::Api {
                status: response.status,
                body: response.body,
            });
        }

        let parsed: ChatResponse = serde_json::from_str(&response.body)
            .map_err(|e| ClientError::Network(e.to_string()))?;
        let message = parsed.into_first_message().ok_or(ClientError::NoImage)?;

        let url = message.first_image_url().ok_or(ClientError::NoImage)?;
        let payload = extract_base64_payload(url).ok_or(ClientError::InvalidImageFormat)?;

        Ok(GeneratedImage {
            image_base64: payload.to_string(),
            text_content: message.text(),
        })
    }

    fn build_request(&self, prompt: &str, api_key: &str, model_id: &str) -> ClientResult<HttpRequest> {
        let body = serde_json::to_value(ChatRequest::image_prompt(model_id, prompt))
            .map_err(|e| ClientError::Network(e.to_string()))?;
        Ok(HttpRequest {
            url: self.config.endpoint.clone(),
            headers: vec![
                ("Authorization", format!("Bearer {}", api_key.trim())),
                ("HTTP-Referer", self.config.referer.clone()),
                ("X-Title", self.config.title.clone()),
            ],
            body,
        })
    }
}

#[async_trait]
impl<B: HttpBackend> ImageGenerator for OpenRouterClient<B> {
    async fn generate(&self, prompt: &str, api_key: &str, model_id: &str) -> GenerationOutcome {
        match self.request_image(prompt, api_key, model_id).await {
            Ok(image) => GenerationOutcome::Success {
                image_base64: image.image_base64,
                text_content: image.text_content,
            },
            Err(e) => {
                warn!(kind = ?e.kind(), error = %e, "Image generation failed");
                GenerationOutcome::failure(e.kind(), e.to_string())
            }
        }
    }
}
