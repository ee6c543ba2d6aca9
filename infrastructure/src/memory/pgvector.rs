//! Postgres + pgvector memory store
//!
//! Used for both the `supabase` and `pgvector` providers. Memories live in
//! `vecs.<collection>`:
//!
//! ```sql
//! CREATE TABLE vecs.memories (
//!     id       text PRIMARY KEY,
//!     vec      vector(768) NOT NULL,
//!     metadata jsonb NOT NULL
//! );
//! ```
//!
//! Searches rank by cosine distance (`<=>`) and report `1 - distance`.

use super::embedder::{Embedder, check_dims};
use super::record::{MemoryRecord, entry_from_row};
use async_trait::async_trait;
use memchat_application::{MemoryError, MemoryStore};
use memchat_domain::{MemoryEntry, Message, UserId, VectorStoreSettings};
use pgvector::Vector;
use sqlx::postgres::{PgPool, PgPoolOptions};
use sqlx::Row;
use std::sync::Arc;
use tracing::{debug, info};

const SCHEMA: &str = "vecs";
const MAX_CONNECTIONS: u32 = 5;

pub struct PgVectorMemoryStore {
    pool: PgPool,
    embedder: Arc<dyn Embedder>,
    table: String,
    dims: usize,
}

/// Collection names are spliced into SQL, so only plain identifiers pass
pub fn validate_collection_name(name: &str) -> Result<(), MemoryError> {
    let mut chars = name.chars();
    let valid_start = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
    if !valid_start || !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(MemoryError::InvalidConfig(format!(
            "collection name '{name}' must match [A-Za-z_][A-Za-z0-9_]*"
        )));
    }
    Ok(())
}

fn storage(e: sqlx::Error) -> MemoryError {
    MemoryError::Storage(e.to_string())
}

/// SQL statements for one collection table
struct Statements {
    create: [String; 3],
    search: String,
    insert: String,
    clear: String,
}

impl Statements {
    fn new(table: &str, dims: usize) -> Self {
        Self {
            create: [
                "CREATE EXTENSION IF NOT EXISTS vector".to_string(),
                format!("CREATE SCHEMA IF NOT EXISTS {SCHEMA}"),
                format!(
                    "CREATE TABLE IF NOT EXISTS {table} (\
                     id text PRIMARY KEY, \
                     vec vector({dims}) NOT NULL, \
                     metadata jsonb NOT NULL DEFAULT '{{}}'::jsonb)"
                ),
            ],
            search: format!(
                "SELECT id, metadata, (vec <=> $1) AS distance FROM {table} \
                 WHERE metadata->>'user_id' = $2 \
                 ORDER BY vec <=> $1 LIMIT $3"
            ),
            insert: format!(
                "INSERT INTO {table} (id, vec, metadata) VALUES ($1, $2, $3) \
                 ON CONFLICT (id) DO UPDATE SET vec = EXCLUDED.vec, metadata = EXCLUDED.metadata"
            ),
            clear: format!("DELETE FROM {table} WHERE metadata->>'user_id' = $1"),
        }
    }
}

impl PgVectorMemoryStore {
    /// Connect and create the collection table if it is missing
    pub async fn connect(
        settings: &VectorStoreSettings,
        embedder: Arc<dyn Embedder>,
    ) -> Result<Self, MemoryError> {
        validate_collection_name(&settings.collection_name)?;
        let pool = PgPoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect(&settings.connection_string)
            .await
            .map_err(storage)?;

        let store = Self {
            pool,
            embedder,
            table: format!("{SCHEMA}.{}", settings.collection_name),
            dims: settings.embedding_model_dims,
        };
        store.ensure_schema().await?;
        info!(table = %store.table, dims = store.dims, "pgvector memory store ready");
        Ok(store)
    }

    fn statements(&self) -> Statements {
        Statements::new(&self.table, self.dims)
    }

    async fn ensure_schema(&self) -> Result<(), MemoryError> {
        for sql in self.statements().create {
            sqlx::query(&sql)
                .execute(&self.pool)
                .await
                .map_err(storage)?;
        }
        Ok(())
    }
}

#[async_trait]
impl MemoryStore for PgVectorMemoryStore {
    async fn search(
        &self,
        query: &str,
        user_id: &UserId,
        limit: usize,
    ) -> Result<Vec<MemoryEntry>, MemoryError> {
        let embedding = self.embedder.embed(query).await?;
        check_dims(&embedding, self.dims)?;

        let rows = sqlx::query(&self.statements().search)
            .bind(Vector::from(embedding))
            .bind(user_id.as_str())
            .bind(i64::try_from(limit).unwrap_or(i64::MAX))
            .fetch_all(&self.pool)
            .await
            .map_err(storage)?;
        debug!(table = %self.table, found = rows.len(), "vector search");

        rows.iter()
            .map(|row| {
                let id: String = row.try_get("id").map_err(storage)?;
                let metadata: serde_json::Value = row.try_get("metadata").map_err(storage)?;
                let distance: f64 = row.try_get("distance").map_err(storage)?;
                entry_from_row(&id, metadata, Some((1.0 - distance) as f32))
            })
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

        let insert = self.statements().insert;
        let mut tx = self.pool.begin().await.map_err(storage)?;
        let mut entries = Vec::with_capacity(records.len());
        for (record, vector) in records.iter().zip(vectors) {
            check_dims(&vector, self.dims)?;
            sqlx::query(&insert)
                .bind(&record.id)
                .bind(Vector::from(vector))
                .bind(record.metadata_json()?)
                .execute(&mut *tx)
                .await
                .map_err(storage)?;
            entries.push(record.to_entry()?);
        }
        tx.commit().await.map_err(storage)?;

        debug!(table = %self.table, stored = entries.len(), "stored memories");
        Ok(entries)
    }

    async fn clear(&self, user_id: &UserId) -> Result<(), MemoryError> {
        let result = sqlx::query(&self.statements().clear)
            .bind(user_id.as_str())
            .execute(&self.pool)
            .await
            .map_err(storage)?;
        info!(table = %self.table, deleted = result.rows_affected(), "cleared memories");
        Ok(())
    }
}
