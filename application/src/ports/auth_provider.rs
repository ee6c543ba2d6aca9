//! Authentication provider port
//!
//! Wraps a hosted auth service. The provider keeps the current auth session
//! itself, so `sign_out` needs no arguments.

use async_trait::async_trait;
use memchat_domain::AuthResponse;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("{0}")]
    Rejected(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Register a new account; `full_name` is stored as user metadata
    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        full_name: &str,
    ) -> Result<AuthResponse, AuthError>;

    async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AuthResponse, AuthError>;

    /// End the current auth session; a no-op when nobody is signed in
    async fn sign_out(&self) -> Result<(), AuthError>;
}
