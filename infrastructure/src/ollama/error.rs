//! Error types for the Ollama adapter

use memchat_application::{GatewayError, MemoryError};
use thiserror::Error;

/// Result type alias for Ollama operations
pub type Result<T> = std::result::Result<T, OllamaError>;

/// Errors that can occur when talking to the Ollama runtime
#[derive(Error, Debug)]
pub enum OllamaError {
    #[error("Failed to reach Ollama: {0}")]
    Connection(String),

    #[error("Model not found: {0}")]
    ModelNotFound(String),

    #[error("Ollama returned HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for OllamaError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            OllamaError::InvalidResponse(e.to_string())
        } else {
            OllamaError::Connection(e.to_string())
        }
    }
}

impl From<OllamaError> for GatewayError {
    fn from(e: OllamaError) -> Self {
        match e {
            OllamaError::Connection(msg) => GatewayError::ConnectionError(msg),
            OllamaError::ModelNotFound(model) => GatewayError::ModelNotAvailable(model),
            OllamaError::Status { .. } => GatewayError::RequestFailed(e.to_string()),
            OllamaError::InvalidResponse(msg) => GatewayError::InvalidResponse(msg),
        }
    }
}

impl From<OllamaError> for MemoryError {
    fn from(e: OllamaError) -> Self {
        MemoryError::Embedding(e.to_string())
    }
}
