//! OpenAI integration for LogLens
//!
//! This crate provides the OpenAI implementation of the LlmProvider trait.
//! It also works against OpenAI-compatible endpoints via `OPENAI_BASE_URL`.

mod client;
mod config;


pub use client::OpenAiClient;
pub use config::OpenAiConfig;

// Re-export core types for convenience
pub use loglens_core::{Error, GenerationConfig, LlmProvider, Result};
