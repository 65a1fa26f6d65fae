//! Qdrant integration for LogLens
//!
//! This crate provides the Qdrant implementation of the VectorIndex trait.

mod config;
mod index;

pub use config::QdrantConfig;
pub use index::QdrantIndex;

// Re-export core types for convenience
pub use loglens_core::{EmbeddedChunk, Error, Result, RetrievedChunk, VectorIndex};
