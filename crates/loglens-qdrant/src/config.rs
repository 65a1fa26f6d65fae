//! Qdrant configuration

use std::env;

use loglens_core::Result;
use serde::{Deserialize, Serialize};

/// Configuration for the Qdrant index
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QdrantConfig {
    pub url: String,
    pub collection_name: String,
}

impl QdrantConfig {
    /// Create configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let url = env::var("QDRANT_URL").unwrap_or_else(|_| "http://localhost:6334".to_string());

        let collection_name =
            env::var("INDEX_NAME").unwrap_or_else(|_| "loglens-logs".to_string());

        Ok(Self {
            url,
            collection_name,
        })
    }

    /// Create configuration with explicit values
    pub fn new(url: String, collection_name: String) -> Self {
        Self {
            url,
            collection_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_yaml_snapshot;

    #[test]
    fn test_config_snapshot() {
        let config = QdrantConfig::new(
            "http://localhost:6334".to_string(),
            "loglens-logs".to_string(),
        );

        assert_yaml_snapshot!(config, @r###"
        ---
        url: "http://localhost:6334"
        collection_name: loglens-logs
        "###);
    }
}
