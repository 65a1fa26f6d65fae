//! Ingest / ask / summarize pipeline

use std::collections::BTreeSet;
use std::sync::Arc;

use uuid::Uuid;

use loglens_core::{
    DocumentSource, EmbeddedChunk, Error, LlmProvider, Result, SplitterConfig, TextSplitter,
    VectorIndex,
};

use crate::prompts;
use crate::retrieval::mmr_rerank;

/// How chunks are retrieved for a question
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RetrievalStrategy {
    /// Plain nearest-neighbor retrieval
    Similarity,
    /// Fetch `fetch_k` candidates, then re-rank for diversity
    Mmr { lambda: f32, fetch_k: u64 },
}

/// Tunable pipeline constants.
///
/// These varied across deployments, so they are configuration rather than
/// fixed behavior.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Maximum chunk length in characters at ingest time
    pub chunk_size: usize,
    /// Overlap between consecutive ingest chunks
    pub chunk_overlap: usize,
    /// Chunks written per upsert call
    pub upsert_batch_size: usize,
    /// Chunks retrieved per question
    pub top_k: u64,
    /// Retrieval strategy for questions
    pub strategy: RetrievalStrategy,
    /// Map-stage cap for the two-stage summarization flow
    pub summary_chunk_cap: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            chunk_size: 100,
            chunk_overlap: 0,
            upsert_batch_size: 95,
            top_k: 10,
            strategy: RetrievalStrategy::Similarity,
            summary_chunk_cap: 5,
        }
    }
}

/// Result of answering one question
#[derive(Debug, Clone)]
pub struct Answer {
    /// Generated answer text
    pub answer: String,
    /// Deduplicated, lexicographically sorted source tags of retrieved chunks
    pub sources: Vec<String>,
    /// Retrieved chunk texts in retrieval order, not deduplicated
    pub contexts: Vec<String>,
}

/// RAG pipeline bound to one provider and one vector index for its lifetime.
///
/// All remote calls are sequential and blocking; failures propagate to the
/// caller unmodified, with no retries.
pub struct Pipeline {
    provider: Arc<dyn LlmProvider>,
    index: Arc<dyn VectorIndex>,
    config: PipelineConfig,
}

impl Pipeline {
    /// Create a pipeline with default configuration
    pub fn new(provider: Arc<dyn LlmProvider>, index: Arc<dyn VectorIndex>) -> Self {
        Self::with_config(provider, index, PipelineConfig::default())
    }

    /// Create a pipeline with explicit configuration
    pub fn with_config(
        provider: Arc<dyn LlmProvider>,
        index: Arc<dyn VectorIndex>,
        config: PipelineConfig,
    ) -> Self {
        Self {
            provider,
            index,
            config,
        }
    }

    /// Name of the bound index
    pub fn index_name(&self) -> &str {
        self.index.name()
    }

    /// Ingest a document into the bound index.
    ///
    /// Destructively replaces the index: a pre-existing same-named collection
    /// is deleted before the fresh one is created, so re-ingestion never
    /// appends to stale data. Returns the number of chunks produced; an empty
    /// document returns 0 without touching the remote index.
    pub async fn ingest(&self, source: &DocumentSource) -> Result<usize> {
        let text = source.load().await?;

        let splitter = TextSplitter::new(SplitterConfig {
            chunk_size: self.config.chunk_size,
            chunk_overlap: self.config.chunk_overlap,
            ..SplitterConfig::default()
        });
        let chunks = splitter.split(&text);

        if chunks.is_empty() {
            return Ok(0);
        }

        self.index
            .recreate(self.provider.embedding_dimension())
            .await?;

        let tag = source.tag();
        for batch in chunks.chunks(self.config.upsert_batch_size) {
            let embeddings = self.provider.embed(batch).await?;

            let embedded: Vec<EmbeddedChunk> = batch
                .iter()
                .zip(embeddings)
                .map(|(text, embedding)| EmbeddedChunk {
                    id: Uuid::new_v4().to_string(),
                    text: text.clone(),
                    source: tag.clone(),
                    embedding,
                })
                .collect();

            self.index.upsert(embedded).await?;
        }

        Ok(chunks.len())
    }

    /// Answer a question against the ingested log.
    ///
    /// Returns `None` for an empty or blank question without making any
    /// remote call.
    pub async fn ask(&self, question: &str) -> Result<Option<Answer>> {
        if question.trim().is_empty() {
            return Ok(None);
        }

        let query_embedding = self
            .provider
            .embed(&[question.to_string()])
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| {
                Error::LlmProvider("provider returned no embedding for the question".to_string())
            })?;

        let retrieved = match self.config.strategy {
            RetrievalStrategy::Similarity => {
                self.index
                    .query(query_embedding, self.config.top_k, false)
                    .await?
            }
            RetrievalStrategy::Mmr { lambda, fetch_k } => {
                let candidates = self
                    .index
                    .query(query_embedding.clone(), fetch_k, true)
                    .await?;
                mmr_rerank(
                    &query_embedding,
                    candidates,
                    lambda,
                    self.config.top_k as usize,
                )
            }
        };

        let contexts: Vec<String> = retrieved.iter().map(|c| c.text.clone()).collect();

        let sources: Vec<String> = retrieved
            .iter()
            .filter_map(|c| c.source.clone())
            .filter(|s| !s.is_empty())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let prompt = prompts::analysis_prompt(&contexts.join("\n\n"), question);
        let answer = self.provider.generate(&prompt).await?;

        Ok(Some(Answer {
            answer,
            sources,
            contexts,
        }))
    }

    /// Summarize a log in two stages: independently summarize the first few
    /// large chunks, then combine the partial summaries into one.
    ///
    /// Returns `None` for empty input without making any remote call.
    pub async fn summarize(&self, log: &str) -> Result<Option<String>> {
        if log.trim().is_empty() {
            return Ok(None);
        }

        let splitter = TextSplitter::new(SplitterConfig::for_summaries());
        let chunks = splitter.split(log);

        let mut partials = Vec::new();
        for chunk in chunks.iter().take(self.config.summary_chunk_cap) {
            let partial = self
                .provider
                .generate(&prompts::chunk_summary_prompt(chunk))
                .await?;
            partials.push(partial);
        }

        let summary = self
            .provider
            .generate(&prompts::final_summary_prompt(&partials.join("\n")))
            .await?;

        Ok(Some(summary))
    }
}
