//! Error types shared across the workspace

use thiserror::Error;

/// Errors surfaced by LogLens components
#[derive(Debug, Error)]
pub enum Error {
    /// Missing or malformed configuration
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Authentication against a remote provider failed
    #[error("Authentication error: {0}")]
    Authentication(String),

    /// Transport-level failure talking to a remote service
    #[error("Network error: {0}")]
    Network(String),

    /// Request or response body could not be (de)serialized
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// The LLM/embedding provider returned an error
    #[error("LLM provider error: {0}")]
    LlmProvider(String),

    /// The vector index service returned an error
    #[error("Vector index error: {0}")]
    VectorIndex(String),

    /// A remote call exceeded its deadline
    #[error("Timeout: {0}")]
    Timeout(String),

    /// Local file I/O failure
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type used throughout the workspace
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Configuration("INDEX_NAME not set".to_string());
        assert_eq!(err.to_string(), "Configuration error: INDEX_NAME not set");

        let err = Error::VectorIndex("collection missing".to_string());
        assert_eq!(err.to_string(), "Vector index error: collection missing");
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
