//! Text embedding seam used by the memory stores

use async_trait::async_trait;
use memchat_application::MemoryError;

#[async_trait]
pub trait Embedder: Send + Sync {
    /// Embedding model name
    fn model(&self) -> &str;

    /// Embed every text, preserving order
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, MemoryError>;

    async fn embed(&self, text: &str) -> Result<Vec<f32>, MemoryError> {
        self.embed_batch(&[text.to_string()])
            .await?
            .pop()
            .ok_or_else(|| MemoryError::Embedding("embedder returned no vector".to_string()))
    }
}

/// Fail unless `vector` has exactly `expected` components
pub fn check_dims(vector: &[f32], expected: usize) -> Result<(), MemoryError> {
    if vector.len() != expected {
        return Err(MemoryError::DimensionMismatch {
            expected,
            actual: vector.len(),
        });
    }
    Ok(())
}
