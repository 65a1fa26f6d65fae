//! Core traits and types for LogLens
//!
//! This crate defines the fundamental traits and types used across the LogLens
//! workspace. It provides capability-facing interfaces for LLM/embedding
//! providers and vector indexes, plus the upload validator, the text splitter,
//! and document loading, making the system test-friendly and extensible.

pub mod chunk;
pub mod document;
pub mod error;
pub mod llm;
pub mod index;
pub mod provider;
pub mod validator;

pub use chunk::{SplitterConfig, TextSplitter};
pub use document::DocumentSource;
pub use error::{Error, Result};
pub use llm::{GenerationConfig, LlmProvider};
pub use index::{EmbeddedChunk, RetrievedChunk, VectorIndex};
pub use provider::ProviderKind;
pub use validator::FileValidator;
