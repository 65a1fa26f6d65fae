//! Ollama configuration

use std::env;

use loglens_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Configuration for the Ollama client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OllamaConfig {
    pub base_url: String,
    pub llm_model: String,
    pub embedding_model: String,
    pub embedding_dimension: u64,
}

impl OllamaConfig {
    /// Create configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let base_url =
            env::var("OLLAMA_BASE_URL").unwrap_or_else(|_| "http://localhost:11434".to_string());

        let llm_model = env::var("LLM_MODEL").unwrap_or_else(|_| "llama3.2:latest".to_string());

        let embedding_model =
            env::var("EMBEDDING_MODEL").unwrap_or_else(|_| "mxbai-embed-large:335m".to_string());

        let embedding_dimension = match env::var("EMBEDDING_DIMENSION") {
            Ok(raw) => raw.parse().map_err(|_| {
                Error::Configuration(format!("EMBEDDING_DIMENSION is not a number: {}", raw))
            })?,
            Err(_) => 1024,
        };

        Ok(Self {
            base_url,
            llm_model,
            embedding_model,
            embedding_dimension,
        })
    }

    /// Create configuration with explicit values
    pub fn new(llm_model: String, embedding_model: String, embedding_dimension: u64) -> Self {
        Self {
            base_url: "http://localhost:11434".to_string(),
            llm_model,
            embedding_model,
            embedding_dimension,
        }
    }
}
