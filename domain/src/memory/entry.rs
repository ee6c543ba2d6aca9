//! Memory entries and the user identifier that scopes them

use crate::conversation::message::Role;
use crate::core::error::DomainError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// User id used by the terminal chat when nobody is signed in.
pub const DEFAULT_USER_ID: &str = "local_user";

/// Identifier scoping memory operations to one user's data (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Result<Self, DomainError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(DomainError::EmptyUserId);
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self(DEFAULT_USER_ID.to_string())
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A stored memory, as returned by a memory search (Entity)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryEntry {
    pub id: String,
    /// The remembered text
    pub memory: String,
    pub user_id: UserId,
    /// Role of the message the memory was taken from
    pub role: Option<Role>,
    /// Relevance to the query (higher is closer); absent outside searches
    pub score: Option<f32>,
    pub created_at: DateTime<Utc>,
}

impl MemoryEntry {
    pub fn new(id: impl Into<String>, memory: impl Into<String>, user_id: UserId) -> Self {
        Self {
            id: id.into(),
            memory: memory.into(),
            user_id,
            role: None,
            score: None,
            created_at: Utc::now(),
        }
    }

    pub fn with_role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }

    pub fn with_score(mut self, score: f32) -> Self {
        self.score = Some(score);
        self
    }
}
