//! Provider configuration handed to the memory façade.
//!
//! The nesting and field names mirror the configuration contract of the
//! memory service: `{vector_store, llm, embedder}`, each with a `provider`
//! name and a provider-specific `config` block.

use serde::{Deserialize, Serialize};

/// Default Ollama endpoint
pub const DEFAULT_OLLAMA_BASE_URL: &str = "http://localhost:11434";

/// Top-level memory configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MemoryConfig {
    pub vector_store: VectorStoreConfig,
    pub llm: LlmConfig,
    pub embedder: EmbedderConfig,
}

/// Vector store selection (`supabase`, `pgvector` or `memory`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VectorStoreConfig {
    pub provider: String,
    pub config: VectorStoreSettings,
}

impl Default for VectorStoreConfig {
    fn default() -> Self {
        Self {
            provider: "supabase".to_string(),
            config: VectorStoreSettings::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VectorStoreSettings {
    /// Postgres connection string (from `DATABASE_URL`)
    pub connection_string: String,
    pub collection_name: String,
    pub embedding_model_dims: usize,
}

impl Default for VectorStoreSettings {
    fn default() -> Self {
        Self {
            connection_string: String::new(),
            collection_name: "memories".to_string(),
            embedding_model_dims: 768,
        }
    }
}

/// Language model selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    pub provider: String,
    pub config: LlmSettings,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: "ollama".to_string(),
            config: LlmSettings::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmSettings {
    pub model: String,
    pub ollama_base_url: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub top_p: f32,
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            model: "llama3.2:latest".to_string(),
            ollama_base_url: DEFAULT_OLLAMA_BASE_URL.to_string(),
            temperature: 0.1,
            max_tokens: 2000,
            top_p: 0.1,
        }
    }
}

/// Embedding model selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbedderConfig {
    pub provider: String,
    pub config: EmbedderSettings,
}

impl Default for EmbedderConfig {
    fn default() -> Self {
        Self {
            provider: "ollama".to_string(),
            config: EmbedderSettings::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbedderSettings {
    pub model: String,
    pub ollama_base_url: String,
}

impl Default for EmbedderSettings {
    fn default() -> Self {
        Self {
            model: "nomic-embed-text".to_string(),
            ollama_base_url: DEFAULT_OLLAMA_BASE_URL.to_string(),
        }
    }
}
