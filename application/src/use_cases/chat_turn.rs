//! Chat turn use case.
//!
//! One turn of memory-grounded chat:
//! 1. Search the user's memories for the message
//! 2. Build the system prompt from the results
//! 3. Generate a reply from `[system, user]`
//! 4. Persist `[system, user, assistant]` for the user
//!
//! There is no local recovery: any failure of search, generation or
//! persistence is returned to the caller.

use crate::config::ChatParams;
use crate::memory::Memory;
use crate::ports::llm_gateway::GatewayError;
use crate::ports::memory_store::MemoryError;
use crate::ports::progress::{NoProgress, TurnProgressNotifier};
use memchat_domain::util::log_preview;
use memchat_domain::{MemoryEntry, MemoryPromptTemplate, Message, UserId};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during a chat turn
#[derive(Error, Debug)]
pub enum ChatTurnError {
    #[error("Memory error: {0}")]
    Memory(#[from] MemoryError),

    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),
}

/// Input for the [`ChatTurnUseCase`]
#[derive(Debug, Clone)]
pub struct ChatTurnInput {
    pub message: String,
    pub user_id: UserId,
}

impl ChatTurnInput {
    pub fn new(message: impl Into<String>, user_id: UserId) -> Self {
        Self {
            message: message.into(),
            user_id,
        }
    }
}

/// Result of a completed turn
#[derive(Debug, Clone)]
pub struct ChatTurnOutput {
    /// The assistant reply
    pub response: String,
    /// Memories that were embedded into the system prompt
    pub memories: Vec<MemoryEntry>,
    /// The messages handed to the memory store
    pub messages: Vec<Message>,
}

/// Use case for a single chat turn
#[derive(Clone)]
pub struct ChatTurnUseCase {
    memory: Arc<Memory>,
    params: ChatParams,
}

impl ChatTurnUseCase {
    pub fn new(memory: Arc<Memory>) -> Self {
        Self {
            memory,
            params: ChatParams::default(),
        }
    }

    pub fn with_params(mut self, params: ChatParams) -> Self {
        self.params = params;
        self
    }

    /// Execute the turn without progress reporting
    pub async fn execute(&self, input: ChatTurnInput) -> Result<ChatTurnOutput, ChatTurnError> {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the turn, bracketing it with thinking callbacks
    pub async fn execute_with_progress(
        &self,
        input: ChatTurnInput,
        progress: &dyn TurnProgressNotifier,
    ) -> Result<ChatTurnOutput, ChatTurnError> {
        progress.on_thinking_start();
        let result = self.run(input).await;
        progress.on_thinking_end();
        result
    }

    async fn run(&self, input: ChatTurnInput) -> Result<ChatTurnOutput, ChatTurnError> {
        info!(
            user_id = %input.user_id,
            "Chat turn: {}",
            log_preview(&input.message, 100)
        );

        let memories = self
            .memory
            .search(&input.message, &input.user_id, self.params.memory_limit)
            .await?;

        let system_prompt = MemoryPromptTemplate::system(&memories);
        let mut messages = vec![
            Message::system(system_prompt),
            Message::user(input.message.clone()),
        ];

        debug!(
            model = self.memory.llm().model(),
            memories = memories.len(),
            "generating response"
        );
        let response = self.memory.llm().generate_response(&messages).await?;

        messages.push(Message::assistant(response.clone()));
        self.memory.add(&messages, &input.user_id).await?;

        Ok(ChatTurnOutput {
            response,
            memories,
            messages,
        })
    }
}
