//! Qdrant vector index implementation

use std::collections::HashMap;

use async_trait::async_trait;
use qdrant_client::qdrant::value::Kind;
use qdrant_client::qdrant::vectors_output::VectorsOptions;
use qdrant_client::qdrant::{
    CreateCollectionBuilder, Distance, PointStruct, SearchPointsBuilder, UpsertPointsBuilder,
    Value, VectorParamsBuilder, VectorsOutput,
};
use qdrant_client::{Payload, Qdrant};

use loglens_core::{EmbeddedChunk, Error, Result, RetrievedChunk, VectorIndex};

use crate::config::QdrantConfig;

/// Vector index backed by a Qdrant collection
pub struct QdrantIndex {
    client: Qdrant,
    collection_name: String,
}

impl QdrantIndex {
    /// Create an index handle bound to the configured collection
    pub fn new(config: QdrantConfig) -> Result<Self> {
        let client = Qdrant::from_url(&config.url)
            .build()
            .map_err(|e| Error::VectorIndex(e.to_string()))?;

        Ok(Self {
            client,
            collection_name: config.collection_name,
        })
    }

    /// Create an index handle from environment variables
    pub fn from_env() -> Result<Self> {
        let config = QdrantConfig::from_env()?;
        Self::new(config)
    }

    fn string_value(payload: &HashMap<String, Value>, key: &str) -> Option<String> {
        match payload.get(key) {
            Some(Value {
                kind: Some(Kind::StringValue(s)),
            }) => Some(s.clone()),
            _ => None,
        }
    }

    fn vector_data(vectors: Option<VectorsOutput>) -> Option<Vec<f32>> {
        match vectors?.vectors_options? {
            VectorsOptions::Vector(v) => Some(v.data),
            _ => None,
        }
    }
}

#[async_trait]
impl VectorIndex for QdrantIndex {
    async fn exists(&self) -> Result<bool> {
        self.client
            .collection_exists(&self.collection_name)
            .await
            .map_err(|e| Error::VectorIndex(e.to_string()))
    }

    async fn delete(&self) -> Result<()> {
        self.client
            .delete_collection(&self.collection_name)
            .await
            .map_err(|e| Error::VectorIndex(e.to_string()))?;
        Ok(())
    }

    async fn create(&self, dimension: u64) -> Result<()> {
        self.client
            .create_collection(
                CreateCollectionBuilder::new(&self.collection_name)
                    .vectors_config(VectorParamsBuilder::new(dimension, Distance::Cosine)),
            )
            .await
            .map_err(|e| Error::VectorIndex(e.to_string()))?;
        Ok(())
    }

    async fn upsert(&self, chunks: Vec<EmbeddedChunk>) -> Result<()> {
        if chunks.is_empty() {
            return Ok(());
        }

        let points: Vec<PointStruct> = chunks
            .into_iter()
            .map(|chunk| {
                let mut payload = Payload::new();
                payload.insert("content", chunk.text);
                if let Some(source) = chunk.source {
                    payload.insert("source", source);
                }
                PointStruct::new(chunk.id, chunk.embedding, payload)
            })
            .collect();

        self.client
            .upsert_points(UpsertPointsBuilder::new(&self.collection_name, points).wait(true))
            .await
            .map_err(|e| Error::VectorIndex(e.to_string()))?;

        Ok(())
    }

    async fn query(
        &self,
        embedding: Vec<f32>,
        limit: u64,
        with_embeddings: bool,
    ) -> Result<Vec<RetrievedChunk>> {
        let request = SearchPointsBuilder::new(&self.collection_name, embedding, limit)
            .with_payload(true)
            .with_vectors(with_embeddings);

        let response = self
            .client
            .search_points(request)
            .await
            .map_err(|e| Error::VectorIndex(e.to_string()))?;

        let chunks = response
            .result
            .into_iter()
            .map(|point| RetrievedChunk {
                text: Self::string_value(&point.payload, "content").unwrap_or_default(),
                source: Self::string_value(&point.payload, "source"),
                score: point.score,
                embedding: Self::vector_data(point.vectors),
            })
            .collect();

        Ok(chunks)
    }

    fn name(&self) -> &str {
        &self.collection_name
    }
}
