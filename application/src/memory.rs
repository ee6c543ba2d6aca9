//! Memory façade
//!
//! One long-lived handle bundling the memory store and the language model,
//! built once from configuration and shared by every chat turn.

use crate::ports::llm_gateway::LlmGateway;
use crate::ports::memory_store::{MemoryError, MemoryStore};
use memchat_domain::{MemoryEntry, Message, UserId};
use std::sync::Arc;
use tracing::debug;

/// Façade over a [`MemoryStore`] and its [`LlmGateway`]
#[derive(Clone)]
pub struct Memory {
    store: Arc<dyn MemoryStore>,
    llm: Arc<dyn LlmGateway>,
}

impl Memory {
    pub fn new(store: Arc<dyn MemoryStore>, llm: Arc<dyn LlmGateway>) -> Self {
        Self { store, llm }
    }

    pub async fn search(
        &self,
        query: &str,
        user_id: &UserId,
        limit: usize,
    ) -> Result<Vec<MemoryEntry>, MemoryError> {
        let results = self.store.search(query, user_id, limit).await?;
        debug!(user_id = %user_id, limit, found = results.len(), "memory search");
        Ok(results)
    }

    pub async fn add(
        &self,
        messages: &[Message],
        user_id: &UserId,
    ) -> Result<Vec<MemoryEntry>, MemoryError> {
        let stored = self.store.add(messages, user_id).await?;
        debug!(user_id = %user_id, stored = stored.len(), "memory add");
        Ok(stored)
    }

    pub async fn clear(&self, user_id: &UserId) -> Result<(), MemoryError> {
        self.store.clear(user_id).await?;
        debug!(user_id = %user_id, "memory cleared");
        Ok(())
    }

    /// The language model configured alongside the store
    pub fn llm(&self) -> &dyn LlmGateway {
        self.llm.as_ref()
    }
}
