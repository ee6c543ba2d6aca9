//! Infrastructure layer for memchat
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod memory;
pub mod ollama;
pub mod supabase;

// Re-export commonly used types
pub use config::{ConfigError, ConfigLoader, FileAuthConfig, FileChatConfig, FileConfig};
pub use memory::{Embedder, InMemoryMemoryStore, PgVectorMemoryStore, build_memory};
pub use ollama::{
    client::OllamaClient,
    embedder::OllamaEmbedder,
    error::{OllamaError, Result},
    gateway::OllamaLlmGateway,
};
pub use supabase::{SupabaseAuthProvider, SupabaseError};
