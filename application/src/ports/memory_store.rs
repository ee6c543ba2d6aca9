//! Memory store port
//!
//! A memory store embeds, persists and retrieves memories. Every operation
//! is scoped to one [`UserId`].

use async_trait::async_trait;
use memchat_domain::{MemoryEntry, Message, UserId};
use thiserror::Error;

/// Errors raised by memory stores
#[derive(Error, Debug)]
pub enum MemoryError {
    #[error("Embedding failed: {0}")]
    Embedding(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Embedding has {actual} dimensions, collection expects {expected}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Invalid memory configuration: {0}")]
    InvalidConfig(String),

    #[error("Unsupported provider: {0}")]
    UnsupportedProvider(String),
}

#[async_trait]
pub trait MemoryStore: Send + Sync {
    /// Memories of `user_id` most relevant to `query`, best match first
    async fn search(
        &self,
        query: &str,
        user_id: &UserId,
        limit: usize,
    ) -> Result<Vec<MemoryEntry>, MemoryError>;

    /// Persist a conversation turn for `user_id`, returning the stored entries
    async fn add(
        &self,
        messages: &[Message],
        user_id: &UserId,
    ) -> Result<Vec<MemoryEntry>, MemoryError>;

    /// Delete every memory of `user_id`
    async fn clear(&self, user_id: &UserId) -> Result<(), MemoryError>;
}
