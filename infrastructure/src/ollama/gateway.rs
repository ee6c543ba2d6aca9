//! Ollama LLM Gateway implementation

use super::client::OllamaClient;
use super::protocol::GenerationOptions;
use async_trait::async_trait;
use memchat_application::{GatewayError, LlmGateway};
use memchat_domain::{LlmSettings, Message};
use tracing::{info, warn};

/// LLM Gateway implementation backed by an Ollama chat model
pub struct OllamaLlmGateway {
    client: OllamaClient,
    model: String,
    options: GenerationOptions,
}

impl OllamaLlmGateway {
    pub fn new(client: OllamaClient, settings: &LlmSettings) -> Self {
        info!(
            model = %settings.model,
            base_url = client.base_url(),
            "OllamaLlmGateway initialized"
        );
        Self {
            client,
            model: settings.model.clone(),
            options: GenerationOptions::from(settings),
        }
    }
}

#[async_trait]
impl LlmGateway for OllamaLlmGateway {
    fn model(&self) -> &str {
        &self.model
    }

    async fn generate_response(&self, messages: &[Message]) -> Result<String, GatewayError> {
        self.client
            .chat(&self.model, messages, self.options)
            .await
            .map_err(|e| {
                warn!(model = %self.model, "generation failed: {}", e);
                GatewayError::from(e)
            })
    }
}
