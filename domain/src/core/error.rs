//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("User id cannot be empty")]
    EmptyUserId,

    #[error("Not authenticated")]
    NotAuthenticated,
}
