//! RAG pipeline for LogLens
//!
//! This crate wires a chosen LLM/embedding provider and a vector index into
//! the chunk-and-retrieve pipeline: ingest a log, ask questions about it,
//! or summarize it in two stages.

mod pipeline;
mod prompts;
mod retrieval;

#[cfg(test)]
mod tests;

pub use pipeline::{Answer, Pipeline, PipelineConfig, RetrievalStrategy};
pub use prompts::{analysis_prompt, chunk_summary_prompt, final_summary_prompt};
pub use retrieval::mmr_rerank;

// Re-export core types for convenience
pub use loglens_core::{
    DocumentSource, EmbeddedChunk, Error, LlmProvider, Result, RetrievedChunk, VectorIndex,
};
