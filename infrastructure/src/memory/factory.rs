//! Builds the memory façade from a [`MemoryConfig`]

use super::embedder::Embedder;
use super::in_memory::InMemoryMemoryStore;
use super::pgvector::PgVectorMemoryStore;
use crate::ollama::client::OllamaClient;
use crate::ollama::embedder::OllamaEmbedder;
use crate::ollama::gateway::OllamaLlmGateway;
use memchat_application::{LlmGateway, Memory, MemoryError, MemoryStore};
use memchat_domain::{EmbedderConfig, LlmConfig, MemoryConfig, VectorStoreConfig};
use std::sync::Arc;
use tracing::info;

/// Build the façade once per process: embedder, store and language model
pub async fn build_memory(config: &MemoryConfig) -> Result<Memory, MemoryError> {
    let http = reqwest::Client::new();
    let embedder = build_embedder(&config.embedder, &http)?;
    let store = build_store(&config.vector_store, embedder).await?;
    let llm = build_llm(&config.llm, &http)?;
    info!(
        store = %config.vector_store.provider,
        llm = llm.model(),
        "memory initialized"
    );
    Ok(Memory::new(store, llm))
}

pub fn build_embedder(
    config: &EmbedderConfig,
    http: &reqwest::Client,
) -> Result<Arc<dyn Embedder>, MemoryError> {
    match config.provider.to_lowercase().as_str() {
        "ollama" => {
            let client = OllamaClient::with_http(http.clone(), &config.config.ollama_base_url);
            Ok(Arc::new(OllamaEmbedder::new(client, &config.config)))
        }
        other => Err(MemoryError::UnsupportedProvider(format!("embedder '{other}'"))),
    }
}

pub async fn build_store(
    config: &VectorStoreConfig,
    embedder: Arc<dyn Embedder>,
) -> Result<Arc<dyn MemoryStore>, MemoryError> {
    let settings = &config.config;
    match config.provider.to_lowercase().as_str() {
        "supabase" | "pgvector" => {
            if settings.connection_string.trim().is_empty() {
                return Err(MemoryError::InvalidConfig(
                    "connection_string is empty".to_string(),
                ));
            }
            Ok(Arc::new(
                PgVectorMemoryStore::connect(settings, embedder).await?,
            ))
        }
        "memory" => Ok(Arc::new(InMemoryMemoryStore::new(
            embedder,
            settings.embedding_model_dims,
        ))),
        other => Err(MemoryError::UnsupportedProvider(format!(
            "vector store '{other}'"
        ))),
    }
}

pub fn build_llm(
    config: &LlmConfig,
    http: &reqwest::Client,
) -> Result<Arc<dyn LlmGateway>, MemoryError> {
    match config.provider.to_lowercase().as_str() {
        "ollama" => {
            let client = OllamaClient::with_http(http.clone(), &config.config.ollama_base_url);
            Ok(Arc::new(OllamaLlmGateway::new(client, &config.config)))
        }
        other => Err(MemoryError::UnsupportedProvider(format!("llm '{other}'"))),
    }
}
