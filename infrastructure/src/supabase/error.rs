//! Error types for the Supabase adapter

use memchat_application::AuthError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SupabaseError {
    #[error("Failed to reach Supabase: {0}")]
    Http(#[from] reqwest::Error),

    /// The service refused the request; `message` is its own explanation
    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("Unexpected response: {0}")]
    InvalidResponse(String),
}

impl From<SupabaseError> for AuthError {
    fn from(e: SupabaseError) -> Self {
        match e {
            SupabaseError::Http(e) => AuthError::ConnectionError(e.to_string()),
            SupabaseError::Api { message, .. } => AuthError::Rejected(message),
            SupabaseError::InvalidResponse(msg) => AuthError::InvalidResponse(msg),
        }
    }
}
