//! Stored form of a memory and its JSON metadata
//!
//! Every store keeps the same metadata object next to the vector:
//! `{"data": text, "user_id": id, "role": role, "created_at": rfc3339}`.

use chrono::{DateTime, Utc};
use memchat_application::MemoryError;
use memchat_domain::{MemoryEntry, Message, Role, UserId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Metadata persisted with each vector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryMetadata {
    pub data: String,
    pub user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    pub created_at: DateTime<Utc>,
}

/// A memory ready to be embedded and stored
#[derive(Debug, Clone, PartialEq)]
pub struct MemoryRecord {
    pub id: String,
    pub metadata: MemoryMetadata,
}

impl MemoryRecord {
    /// One record per non-system message of a turn
    pub fn from_turn(messages: &[Message], user_id: &UserId) -> Vec<Self> {
        let now = Utc::now();
        messages
            .iter()
            .filter(|m| m.role != Role::System)
            .map(|m| Self {
                id: Uuid::new_v4().to_string(),
                metadata: MemoryMetadata {
                    data: m.content.clone(),
                    user_id: user_id.as_str().to_string(),
                    role: Some(m.role),
                    created_at: now,
                },
            })
            .collect()
    }

    pub fn metadata_json(&self) -> Result<serde_json::Value, MemoryError> {
        serde_json::to_value(&self.metadata).map_err(|e| MemoryError::Storage(e.to_string()))
    }

    pub fn to_entry(&self) -> Result<MemoryEntry, MemoryError> {
        to_entry(&self.id, &self.metadata, None)
    }
}

/// Rebuild an entry from a stored row
pub fn entry_from_row(
    id: &str,
    metadata: serde_json::Value,
    score: Option<f32>,
) -> Result<MemoryEntry, MemoryError> {
    let metadata: MemoryMetadata = serde_json::from_value(metadata)
        .map_err(|e| MemoryError::Storage(format!("malformed metadata for {id}: {e}")))?;
    to_entry(id, &metadata, score)
}

fn to_entry(
    id: &str,
    metadata: &MemoryMetadata,
    score: Option<f32>,
) -> Result<MemoryEntry, MemoryError> {
    let user_id = UserId::new(metadata.user_id.clone())
        .map_err(|e| MemoryError::Storage(format!("memory {id}: {e}")))?;
    Ok(MemoryEntry {
        id: id.to_string(),
        memory: metadata.data.clone(),
        user_id,
        role: metadata.role,
        score,
        created_at: metadata.created_at,
    })
}
