//! Vector index trait and types

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::Result;

/// An embedded chunk ready to be written to the index
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbeddedChunk {
    pub id: String,
    pub text: String,
    /// Filename or other origin tag, when known
    pub source: Option<String>,
    pub embedding: Vec<f32>,
}

/// A chunk returned from a similarity query
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievedChunk {
    pub text: String,
    pub source: Option<String>,
    pub score: f32,
    /// Stored vector, present only when requested at query time
    pub embedding: Option<Vec<f32>>,
}

/// Trait for remote vector indexes (e.g. Qdrant)
///
/// An implementation is bound to one named collection for its lifetime.
#[async_trait]
pub trait VectorIndex: Send + Sync {
    /// Whether the bound collection currently exists
    async fn exists(&self) -> Result<bool>;

    /// Delete the bound collection
    async fn delete(&self) -> Result<()>;

    /// Create the bound collection with the given vector dimensionality
    async fn create(&self, dimension: u64) -> Result<()>;

    /// Destructively replace the bound collection: delete-if-exists, then
    /// create fresh with the given dimensionality.
    async fn recreate(&self, dimension: u64) -> Result<()> {
        if self.exists().await? {
            self.delete().await?;
        }
        self.create(dimension).await
    }

    /// Write a batch of embedded chunks
    async fn upsert(&self, chunks: Vec<EmbeddedChunk>) -> Result<()>;

    /// Nearest-neighbor query by embedding, best match first
    async fn query(
        &self,
        embedding: Vec<f32>,
        limit: u64,
        with_embeddings: bool,
    ) -> Result<Vec<RetrievedChunk>>;

    /// Name of the bound collection
    fn name(&self) -> &str;
}
