//! LLM/embedding provider trait and types

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::Result;

/// Parameters for a single text generation call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Model identifier to generate with
    pub model_id: String,
    /// Maximum number of tokens to generate
    pub max_tokens: u32,
    /// Sampling temperature
    pub temperature: f32,
    /// Deadline for the whole request
    #[serde(skip, default = "default_timeout")]
    pub timeout: Duration,
}

fn default_timeout() -> Duration {
    Duration::from_secs(120)
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            model_id: String::new(),
            max_tokens: 512,
            temperature: 0.0,
            timeout: default_timeout(),
        }
    }
}

/// Trait for LLM/embedding providers (e.g. Ollama, OpenAI)
///
/// One implementation per provider. A provider exposes exactly two remote
/// capabilities: embedding a batch of texts and generating text for a prompt.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Verify connectivity/credentials before first use
    async fn connect(&mut self) -> Result<()>;

    /// Embed a batch of texts, one vector per input in order
    async fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>>;

    /// Generate text for a prompt with the provider's default settings
    async fn generate(&self, prompt: &str) -> Result<String>;

    /// Generate text with explicit parameters
    async fn generate_with_config(
        &self,
        prompt: &str,
        config: &GenerationConfig,
    ) -> Result<String>;

    /// Dimensionality of the vectors produced by [`LlmProvider::embed`]
    fn embedding_dimension(&self) -> u64;

    /// Identifier of the active generation model
    fn model_id(&self) -> &str;
}
