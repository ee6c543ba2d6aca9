//! Domain layer for memchat
//!
//! This crate contains the core entities and value objects of a chat
//! assistant that remembers earlier turns per user. It has no dependencies
//! on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Turn**: one user message plus the assistant reply, persisted to memory
//! - **Memory entry**: a stored utterance scoped to a single user
//! - **Session state**: the authenticated user and the displayed chat history

pub mod auth;
pub mod conversation;
pub mod core;
pub mod memory;
pub mod prompt;
pub mod providers;
pub mod session;
pub mod util;

// Re-export commonly used types
pub use auth::entities::{AuthResponse, AuthSession, AuthUser};
pub use conversation::message::{Message, Role};
pub use core::error::DomainError;
pub use memory::entry::{DEFAULT_USER_ID, MemoryEntry, UserId};
pub use prompt::template::MemoryPromptTemplate;
pub use providers::{
    EmbedderConfig, EmbedderSettings, LlmConfig, LlmSettings, MemoryConfig, VectorStoreConfig,
    VectorStoreSettings,
};
pub use session::{
    notice::{Notice, NoticeLevel},
    state::SessionState,
};
