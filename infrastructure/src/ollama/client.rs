//! Thin HTTP client for the Ollama REST API

use super::error::{OllamaError, Result};
use super::protocol::{
    ChatRequest, ChatResponse, EmbedRequest, EmbedResponse, ErrorResponse, GenerationOptions,
};
use memchat_domain::Message;
use reqwest::StatusCode;
use tracing::debug;

/// Shared client for one Ollama endpoint
#[derive(Debug, Clone)]
pub struct OllamaClient {
    http: reqwest::Client,
    base_url: String,
}

impl OllamaClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_http(reqwest::Client::new(), base_url)
    }

    /// Reuse an existing connection pool
    pub fn with_http(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Generate one complete reply (`stream: false`)
    pub async fn chat(
        &self,
        model: &str,
        messages: &[Message],
        options: GenerationOptions,
    ) -> Result<String> {
        let request = ChatRequest {
            model,
            messages,
            stream: false,
            options,
        };
        debug!(model, messages = messages.len(), "POST /api/chat");

        let response = self
            .http
            .post(format!("{}/api/chat", self.base_url))
            .json(&request)
            .send()
            .await?;
        let response = Self::check(response, model).await?;
        let body: ChatResponse = response.json().await?;
        Ok(body.message.content)
    }

    /// Embed each input, preserving order
    pub async fn embed(&self, model: &str, input: &[String]) -> Result<Vec<Vec<f32>>> {
        debug!(model, inputs = input.len(), "POST /api/embed");

        let response = self
            .http
            .post(format!("{}/api/embed", self.base_url))
            .json(&EmbedRequest { model, input })
            .send()
            .await?;
        let response = Self::check(response, model).await?;
        let body: EmbedResponse = response.json().await?;

        if body.embeddings.len() != input.len() {
            return Err(OllamaError::InvalidResponse(format!(
                "expected {} embeddings, got {}",
                input.len(),
                body.embeddings.len()
            )));
        }
        Ok(body.embeddings)
    }

    async fn check(response: reqwest::Response, model: &str) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorResponse>(&text)
            .map(|e| e.error)
            .unwrap_or(text);

        if status == StatusCode::NOT_FOUND && message.contains("not found") {
            return Err(OllamaError::ModelNotFound(model.to_string()));
        }
        Err(OllamaError::Status {
            status: status.as_u16(),
            message,
        })
    }
}
