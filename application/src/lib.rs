//! Application layer for memchat
//!
//! This crate contains use cases, port definitions, the memory façade and
//! application configuration. It depends only on the domain layer.

pub mod config;
pub mod memory;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::ChatParams;
pub use memory::Memory;
pub use ports::{
    auth_provider::{AuthError, AuthProvider},
    llm_gateway::{GatewayError, LlmGateway},
    memory_store::{MemoryError, MemoryStore},
    progress::{NoProgress, TurnProgressNotifier},
};
pub use use_cases::authenticate::AuthUseCase;
pub use use_cases::chat_turn::{ChatTurnError, ChatTurnInput, ChatTurnOutput, ChatTurnUseCase};
pub use use_cases::session_controller::{SessionAction, SessionController, SessionError};
