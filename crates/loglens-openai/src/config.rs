//! OpenAI configuration

use std::env;

use loglens_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Configuration for the OpenAI client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAiConfig {
    pub api_key: String,
    pub base_url: String,
    pub llm_model: String,
    pub embedding_model: String,
    pub embedding_dimension: u64,
}

impl OpenAiConfig {
    /// Create configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let api_key = env::var("OPENAI_API_KEY").map_err(|_| {
            Error::Configuration("OPENAI_API_KEY environment variable not found".to_string())
        })?;

        let base_url =
            env::var("OPENAI_BASE_URL").unwrap_or_else(|_| "https://api.openai.com".to_string());

        let llm_model = env::var("LLM_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string());

        let embedding_model =
            env::var("EMBEDDING_MODEL").unwrap_or_else(|_| "text-embedding-3-small".to_string());

        let embedding_dimension = match env::var("EMBEDDING_DIMENSION") {
            Ok(raw) => raw.parse().map_err(|_| {
                Error::Configuration(format!("EMBEDDING_DIMENSION is not a number: {}", raw))
            })?,
            Err(_) => 1536,
        };

        Ok(Self {
            api_key,
            base_url,
            llm_model,
            embedding_model,
            embedding_dimension,
        })
    }

    /// Create configuration with explicit values
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            base_url: "https://api.openai.com".to_string(),
            llm_model: "gpt-4o-mini".to_string(),
            embedding_model: "text-embedding-3-small".to_string(),
            embedding_dimension: 1536,
        }
    }
}
