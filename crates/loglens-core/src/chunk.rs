//! Recursive max-length text splitter
//!
//! Splits a document into bounded-length chunks, preferring natural
//! boundaries (paragraph, line, word) before falling back to a hard
//! character cut. Lengths are measured in characters, not bytes.

/// Configuration for the text splitter
#[derive(Debug, Clone)]
pub struct SplitterConfig {
    /// Maximum chunk length in characters
    pub chunk_size: usize,
    /// Overlap in characters between consecutive hard-cut chunks
    pub chunk_overlap: usize,
    /// Boundary separators tried in order, most preferred first
    pub separators: Vec<String>,
}

impl Default for SplitterConfig {
    fn default() -> Self {
        Self {
            chunk_size: 100,
            chunk_overlap: 0,
            separators: vec!["\n\n".to_string(), "\n".to_string(), " ".to_string()],
        }
    }
}

impl SplitterConfig {
    /// Splitter configuration for the two-stage summarization flow
    pub fn for_summaries() -> Self {
        Self {
            chunk_size: 1000,
            chunk_overlap: 10,
            ..Self::default()
        }
    }
}

/// Recursive character-based text splitter
pub struct TextSplitter {
    config: SplitterConfig,
}

impl TextSplitter {
    /// Create a splitter with the given configuration
    pub fn new(config: SplitterConfig) -> Self {
        Self { config }
    }

    /// Split text into chunks of at most `chunk_size` characters.
    ///
    /// Empty or whitespace-only input yields no chunks.
    pub fn split(&self, text: &str) -> Vec<String> {
        if text.trim().is_empty() {
            return Vec::new();
        }

        self.split_with(text, &self.config.separators)
            .into_iter()
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .collect()
    }

    fn split_with(&self, text: &str, separators: &[String]) -> Vec<String> {
        if char_len(text) <= self.config.chunk_size {
            return vec![text.to_string()];
        }

        let Some((separator, rest)) = separators.split_first() else {
            return self.hard_cut(text);
        };

        if !text.contains(separator.as_str()) {
            return self.split_with(text, rest);
        }

        let sep_len = char_len(separator);
        let mut chunks = Vec::new();
        let mut buffer: Vec<&str> = Vec::new();
        let mut buffer_len = 0usize;

        for piece in text.split(separator.as_str()) {
            let piece_len = char_len(piece);

            if piece_len > self.config.chunk_size {
                if !buffer.is_empty() {
                    chunks.push(buffer.join(separator.as_str()));
                    buffer.clear();
                    buffer_len = 0;
                }
                // Piece too large for this boundary; descend to the next one.
                chunks.extend(self.split_with(piece, rest));
                continue;
            }

            let joined_len = if buffer.is_empty() {
                piece_len
            } else {
                buffer_len + sep_len + piece_len
            };

            if joined_len > self.config.chunk_size && !buffer.is_empty() {
                chunks.push(buffer.join(separator.as_str()));
                buffer.clear();
                buffer_len = piece_len;
            } else {
                buffer_len = joined_len;
            }
            buffer.push(piece);
        }

        if !buffer.is_empty() {
            chunks.push(buffer.join(separator.as_str()));
        }

        chunks
    }

    fn hard_cut(&self, text: &str) -> Vec<String> {
        let chars: Vec<char> = text.chars().collect();
        let step = self
            .config
            .chunk_size
            .saturating_sub(self.config.chunk_overlap)
            .max(1);

        let mut chunks = Vec::new();
        let mut start = 0;
        while start < chars.len() {
            let end = (start + self.config.chunk_size).min(chars.len());
            chunks.push(chars[start..end].iter().collect());
            if end >= chars.len() {
                break;
            }
            start += step;
        }
        chunks
    }
}

fn char_len(text: &str) -> usize {
    text.chars().count()
}
