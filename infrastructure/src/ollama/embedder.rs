//! Ollama embedding adapter

use super::client::OllamaClient;
use crate::memory::Embedder;
use async_trait::async_trait;
use memchat_application::MemoryError;
use memchat_domain::EmbedderSettings;

/// [`Embedder`] backed by an Ollama embedding model
pub struct OllamaEmbedder {
    client: OllamaClient,
    model: String,
}

impl OllamaEmbedder {
    pub fn new(client: OllamaClient, settings: &EmbedderSettings) -> Self {
        Self {
            client,
            model: settings.model.clone(),
        }
    }
}

#[async_trait]
impl Embedder for OllamaEmbedder {
    fn model(&self) -> &str {
        &self.model
    }

    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, MemoryError> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }
        Ok(self.client.embed(&self.model, texts).await?)
    }
}
