//! LLM Gateway port
//!
//! Defines the interface for communicating with the language model runtime.

use async_trait::async_trait;
use memchat_domain::Message;
use thiserror::Error;

/// Errors that can occur during LLM gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Gateway for LLM communication
///
/// This port defines how the application layer talks to a language model.
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Model name used for generation
    fn model(&self) -> &str;

    /// Generate a complete reply for the given message sequence.
    ///
    /// One blocking request: no streaming, no retry.
    async fn generate_response(&self, messages: &[Message]) -> Result<String, GatewayError>;
}
