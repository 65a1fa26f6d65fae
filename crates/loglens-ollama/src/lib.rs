//! Ollama integration for LogLens
//!
//! This crate provides the Ollama implementation of the LlmProvider trait.

mod client;
mod config;


pub use client::OllamaClient;
pub use config::OllamaConfig;

// Re-export core types for convenience
pub use loglens_core::{Error, GenerationConfig, LlmProvider, Result};
