//! Ollama REST wire types

use memchat_domain::{LlmSettings, Message};
use serde::{Deserialize, Serialize};

/// Body of `POST /api/chat`
#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
    pub model: &'a str,
    pub messages: &'a [Message],
    pub stream: bool,
    pub options: GenerationOptions,
}

/// Sampling options understood by Ollama
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GenerationOptions {
    pub temperature: f32,
    /// Maximum tokens to generate
    pub num_predict: u32,
    pub top_p: f32,
}

impl From<&LlmSettings> for GenerationOptions {
    fn from(settings: &LlmSettings) -> Self {
        Self {
            temperature: settings.temperature,
            num_predict: settings.max_tokens,
            top_p: settings.top_p,
        }
    }
}

/// Non-streaming reply of `POST /api/chat`
#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    pub message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
pub struct ChatResponseMessage {
    pub content: String,
}

/// Body of `POST /api/embed`
#[derive(Debug, Serialize)]
pub struct EmbedRequest<'a> {
    pub model: &'a str,
    pub input: &'a [String],
}

/// Reply of `POST /api/embed`, one vector per input
#[derive(Debug, Deserialize)]
pub struct EmbedResponse {
    pub embeddings: Vec<Vec<f32>>,
}

/// Error body returned with non-2xx statuses
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
