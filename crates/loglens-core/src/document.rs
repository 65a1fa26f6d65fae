//! Document sources and text loading

use std::path::PathBuf;

use crate::Result;

/// Where a document's text comes from
#[derive(Debug, Clone)]
pub enum DocumentSource {
    /// A file on the local filesystem
    Path(PathBuf),
    /// Raw in-memory text with an optional source tag
    Text {
        text: String,
        source: Option<String>,
    },
}

impl DocumentSource {
    /// Create a source from a filesystem path
    pub fn path(path: impl Into<PathBuf>) -> Self {
        Self::Path(path.into())
    }

    /// Create a source from raw text
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text {
            text: text.into(),
            source: None,
        }
    }

    /// The source tag attached to chunks produced from this document
    pub fn tag(&self) -> Option<String> {
        match self {
            Self::Path(path) => Some(path.to_string_lossy().into_owned()),
            Self::Text { source, .. } => source.clone(),
        }
    }

    /// Load the full document text.
    ///
    /// Files are decoded as UTF-8; on decode failure every byte is mapped
    /// through Latin-1 so ingestion never fails on a mixed-encoding log.
    pub async fn load(&self) -> Result<String> {
        match self {
            Self::Path(path) => {
                let bytes = tokio::fs::read(path).await?;
                Ok(decode_text(bytes))
            }
            Self::Text { text, .. } => Ok(text.clone()),
        }
    }
}

fn decode_text(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        // Latin-1 maps each byte to the code point of the same value.
        Err(err) => err.into_bytes().iter().map(|&b| b as char).collect(),
    }
}
