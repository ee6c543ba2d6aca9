//! In-process memory store
//!
//! Keeps vectors in a `Vec` and ranks them by cosine similarity. Nothing
//! survives the process; meant for running without Postgres.

use super::embedder::{Embedder, check_dims};
use super::record::MemoryRecord;
use async_trait::async_trait;
use memchat_application::{MemoryError, MemoryStore};
use memchat_domain::{MemoryEntry, Message, UserId};
use std::sync::{Arc, RwLock};
use tracing::debug;

struct StoredVector {
    record: MemoryRecord,
    vector: Vec<f32>,
}

pub struct InMemoryMemoryStore {
    embedder: Arc<dyn Embedder>,
    dims: usize,
    rows: RwLock<Vec<StoredVector>>,
}

impl InMemoryMemoryStore {
    pub fn new(embedder: Arc<dyn Embedder>, dims: usize) -> Self {
        Self {
            embedder,
            dims,
            rows: RwLock::new(Vec::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.read().map(|rows| rows.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn poisoned() -> MemoryError {
        MemoryError::Storage("memory store lock poisoned".to_string())
    }
}

/// Cosine similarity in `[-1, 1]`; zero when either vector is zero
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b = b.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}

#[async_trait]
impl MemoryStore for InMemoryMemoryStore {
    async fn search(
        &self,
        query: &str,
        user_id: &UserId,
        limit: usize,
    ) -> Result<Vec<MemoryEntry>, MemoryError> {
        let query_vector = self.embedder.embed(query).await?;
        check_dims(&query_vector, self.dims)?;

        let rows = self.rows.read().map_err(|_| Self::poisoned())?;
        let mut scored: Vec<(f32, &MemoryRecord)> = rows
            .iter()
            .filter(|row| row.record.metadata.user_id == user_id.as_str())
            .map(|row| (cosine_similarity(&query_vector, &row.vector), &row.record))
            .collect();
        scored.sort_by(|a, b| b.0.total_cmp(&a.0));

        scored
            .into_iter()
            .take(limit)
            .map(|(score, record)| record.to_entry().map(|e| e.with_score(score)))
            .collect()
    }

    async fn add(
        &self,
        messages: &[Message],
        user_id: &UserId,
    ) -> Result<Vec<MemoryEntry>, MemoryError> {
        let records = MemoryRecord::from_turn(messages, user_id);
        let texts: Vec<String> = records.iter().map(|r| r.metadata.data.clone()).collect();
        let vectors = self.embedder.embed_batch(&texts).await?;
        for vector in &vectors {
            check_dims(vector, self.dims)?;
        }

        let entries = records
            .iter()
            .map(MemoryRecord::to_entry)
            .collect::<Result<Vec<_>, _>>()?;

        let mut rows = self.rows.write().map_err(|_| Self::poisoned())?;
        rows.extend(
            records
                .into_iter()
                .zip(vectors)
                .map(|(record, vector)| StoredVector { record, vector }),
        );
        debug!(user_id = %user_id, total = rows.len(), "stored memories in process");
        Ok(entries)
    }

    async fn clear(&self, user_id: &UserId) -> Result<(), MemoryError> {
        let mut rows = self.rows.write().map_err(|_| Self::poisoned())?;
        rows.retain(|row| row.record.metadata.user_id != user_id.as_str());
        Ok(())
    }
}
