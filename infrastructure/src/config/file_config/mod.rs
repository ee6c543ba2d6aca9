//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! The memory sections (`[vector_store]`, `[llm]`, `[embedder]`) reuse the
//! domain provider types so a config file reads like the memory contract.

mod auth;
mod chat;

pub use auth::FileAuthConfig;
pub use chat::FileChatConfig;

use memchat_domain::{EmbedderConfig, LlmConfig, MemoryConfig, VectorStoreConfig};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Providers backed by a Postgres connection
const POSTGRES_PROVIDERS: &[&str] = &["supabase", "pgvector"];

/// Configuration errors detected at startup
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),

    #[error("DATABASE_URL is not set (required by the '{provider}' vector store)")]
    MissingDatabaseUrl { provider: String },

    #[error("SUPABASE_URL and SUPABASE_KEY must both be set")]
    MissingSupabaseCredentials,

    #[error("Failed to render configuration: {0}")]
    Render(#[from] toml::ser::Error),
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Vector store backing the memories
    pub vector_store: VectorStoreConfig,
    /// Language model used for replies
    pub llm: LlmConfig,
    /// Embedding model used for memory search
    pub embedder: EmbedderConfig,
    /// Chat loop settings
    pub chat: FileChatConfig,
    /// Hosted auth settings (interactive app only)
    pub auth: FileAuthConfig,
}

impl FileConfig {
    /// The configuration handed to the memory façade
    pub fn memory_config(&self) -> MemoryConfig {
        MemoryConfig {
            vector_store: self.vector_store.clone(),
            llm: self.llm.clone(),
            embedder: self.embedder.clone(),
        }
    }

    /// Check what every subcommand needs: a database for Postgres stores
    pub fn validate(&self) -> Result<(), ConfigError> {
        let provider = self.vector_store.provider.to_lowercase();
        if POSTGRES_PROVIDERS.contains(&provider.as_str())
            && self.vector_store.config.connection_string.trim().is_empty()
        {
            return Err(ConfigError::MissingDatabaseUrl { provider });
        }
        Ok(())
    }

    /// Check the auth credentials needed by the interactive app
    pub fn validate_auth(&self) -> Result<&FileAuthConfig, ConfigError> {
        if !self.auth.is_complete() {
            return Err(ConfigError::MissingSupabaseCredentials);
        }
        Ok(&self.auth)
    }

    /// Effective configuration as TOML, with the auth key masked
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        let mut shown = self.clone();
        if !shown.auth.supabase_key.is_empty() {
            shown.auth.supabase_key = "********".to_string();
        }
        Ok(toml::to_string_pretty(&shown)?)
    }
}
