//! Provider selection

use serde::{Deserialize, Serialize};

/// Supported LLM/embedding providers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProviderKind {
    /// Local Ollama server
    Ollama,
    /// OpenAI (or an OpenAI-compatible endpoint)
    OpenAi,
}

impl ProviderKind {
    /// Get the display name for this provider
    pub fn display_name(&self) -> &'static str {
        match self {
            ProviderKind::Ollama => "Ollama",
            ProviderKind::OpenAi => "OpenAI",
        }
    }

    /// Get all supported providers
    pub fn all() -> Vec<ProviderKind> {
        vec![ProviderKind::Ollama, ProviderKind::OpenAi]
    }

    /// Parse from a configuration string
    pub fn parse(s: &str) -> Option<ProviderKind> {
        match s.to_lowercase().as_str() {
            "ollama" => Some(ProviderKind::Ollama),
            "openai" | "open-ai" | "gpt" => Some(ProviderKind::OpenAi),
            _ => None,
        }
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(ProviderKind::parse("ollama"), Some(ProviderKind::Ollama));
        assert_eq!(ProviderKind::parse("openai"), Some(ProviderKind::OpenAi));
        assert_eq!(ProviderKind::parse("gpt"), Some(ProviderKind::OpenAi));
        assert_eq!(ProviderKind::parse("bedrock"), None);
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!(ProviderKind::parse("OLLAMA"), Some(ProviderKind::Ollama));
        assert_eq!(ProviderKind::parse("OpenAI"), Some(ProviderKind::OpenAi));
    }

    #[test]
    fn test_display() {
        assert_eq!(ProviderKind::Ollama.to_string(), "Ollama");
        assert_eq!(ProviderKind::OpenAi.to_string(), "OpenAI");
    }

    #[test]
    fn test_all() {
        let all = ProviderKind::all();
        assert_eq!(all.len(), 2);
        assert!(all.contains(&ProviderKind::Ollama));
        assert!(all.contains(&ProviderKind::OpenAi));
    }
}
