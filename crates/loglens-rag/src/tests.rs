//! Behavior tests for the pipeline against in-memory fakes

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use loglens_core::{
    DocumentSource, EmbeddedChunk, GenerationConfig, LlmProvider, Result, RetrievedChunk,
    VectorIndex,
};

use crate::{Pipeline, PipelineConfig, RetrievalStrategy};

struct MockProvider {
    answer: String,
    prompts: Mutex<Vec<String>>,
    embed_batches: Mutex<Vec<usize>>,
}

impl MockProvider {
    fn new() -> Self {
        Self {
            answer: "mock answer".to_string(),
            prompts: Mutex::new(Vec::new()),
            embed_batches: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl LlmProvider for MockProvider {
    async fn connect(&mut self) -> Result<()> {
        Ok(())
    }

    async fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        self.embed_batches.lock().unwrap().push(texts.len());
        Ok(texts.iter().map(|t| vec![t.len() as f32]).collect())
    }

    async fn generate(&self, prompt: &str) -> Result<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        Ok(self.answer.clone())
    }

    async fn generate_with_config(
        &self,
        prompt: &str,
        _config: &GenerationConfig,
    ) -> Result<String> {
        self.generate(prompt).await
    }

    fn embedding_dimension(&self) -> u64 {
        1
    }

    fn model_id(&self) -> &str {
        "mock-llm"
    }
}

#[derive(Default)]
struct MockIndex {
    exists: AtomicBool,
    delete_calls: AtomicUsize,
    create_calls: AtomicUsize,
    upserts: Mutex<Vec<Vec<EmbeddedChunk>>>,
    queries: Mutex<Vec<(u64, bool)>>,
    results: Vec<RetrievedChunk>,
}

impl MockIndex {
    fn with_results(results: Vec<RetrievedChunk>) -> Self {
        Self {
            results,
            ..Self::default()
        }
    }
}

#[async_trait]
impl VectorIndex for MockIndex {
    async fn exists(&self) -> Result<bool> {
        Ok(self.exists.load(Ordering::SeqCst))
    }

    async fn delete(&self) -> Result<()> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        self.exists.store(false, Ordering::SeqCst);
        Ok(())
    }

    async fn create(&self, _dimension: u64) -> Result<()> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        self.exists.store(true, Ordering::SeqCst);
        Ok(())
    }

    async fn upsert(&self, chunks: Vec<EmbeddedChunk>) -> Result<()> {
        self.upserts.lock().unwrap().push(chunks);
        Ok(())
    }

    async fn query(
        &self,
        _embedding: Vec<f32>,
        limit: u64,
        with_embeddings: bool,
    ) -> Result<Vec<RetrievedChunk>> {
        self.queries.lock().unwrap().push((limit, with_embeddings));
        Ok(self.results.clone())
    }

    fn name(&self) -> &str {
        "mock-index"
    }
}

fn retrieved(text: &str, source: Option<&str>) -> RetrievedChunk {
    RetrievedChunk {
        text: text.to_string(),
        source: source.map(|s| s.to_string()),
        score: 0.5,
        embedding: None,
    }
}

fn pipeline_with(
    index: MockIndex,
    config: PipelineConfig,
) -> (Pipeline, Arc<MockProvider>, Arc<MockIndex>) {
    let provider = Arc::new(MockProvider::new());
    let index = Arc::new(index);
    let pipeline = Pipeline::with_config(provider.clone(), index.clone(), config);
    (pipeline, provider, index)
}

#[tokio::test]
async fn test_ingest_empty_document_returns_zero_without_remote_calls() {
    let (pipeline, provider, index) = pipeline_with(MockIndex::default(), PipelineConfig::default());

    let count = pipeline
        .ingest(&DocumentSource::text("   \n\n  "))
        .await
        .unwrap();

    assert_eq!(count, 0);
    assert_eq!(index.create_calls.load(Ordering::SeqCst), 0);
    assert!(index.upserts.lock().unwrap().is_empty());
    assert!(provider.embed_batches.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_ingest_chunks_batches_and_tags_source() {
    let config = PipelineConfig {
        chunk_size: 8,
        upsert_batch_size: 2,
        ..PipelineConfig::default()
    };
    let (pipeline, provider, index) = pipeline_with(MockIndex::default(), config);

    let source = DocumentSource::Text {
        text: "alpha\nbeta\ngamma\ndelta\nepsilon".to_string(),
        source: Some("app.log".to_string()),
    };

    let count = pipeline.ingest(&source).await.unwrap();
    assert_eq!(count, 5);

    // Fresh index, five chunks written two at a time.
    assert_eq!(index.create_calls.load(Ordering::SeqCst), 1);
    let upserts = index.upserts.lock().unwrap();
    let sizes: Vec<usize> = upserts.iter().map(|b| b.len()).collect();
    assert_eq!(sizes, vec![2, 2, 1]);
    assert_eq!(*provider.embed_batches.lock().unwrap(), vec![2, 2, 1]);

    for chunk in upserts.iter().flatten() {
        assert_eq!(chunk.source.as_deref(), Some("app.log"));
        assert_eq!(chunk.embedding.len(), 1);
    }
}

#[tokio::test]
async fn test_reingest_deletes_existing_index_first() {
    let index = MockIndex::default();
    index.exists.store(true, Ordering::SeqCst);
    let (pipeline, _provider, index) = pipeline_with(index, PipelineConfig::default());

    pipeline
        .ingest(&DocumentSource::text("ERROR something broke"))
        .await
        .unwrap();

    assert_eq!(index.delete_calls.load(Ordering::SeqCst), 1);
    assert_eq!(index.create_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_ask_blank_question_returns_none_without_remote_calls() {
    let (pipeline, provider, index) = pipeline_with(MockIndex::default(), PipelineConfig::default());

    assert!(pipeline.ask("").await.unwrap().is_none());
    assert!(pipeline.ask("   ").await.unwrap().is_none());

    assert!(index.queries.lock().unwrap().is_empty());
    assert!(provider.embed_batches.lock().unwrap().is_empty());
    assert!(provider.prompts.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_ask_deduplicates_and_sorts_sources() {
    let index = MockIndex::with_results(vec![
        retrieved("chunk one", Some("b.log")),
        retrieved("chunk two", Some("a.log")),
        retrieved("chunk three", Some("a.log")),
    ]);
    let (pipeline, _provider, _index) = pipeline_with(index, PipelineConfig::default());

    let answer = pipeline.ask("what failed?").await.unwrap().unwrap();

    assert_eq!(answer.sources, vec!["a.log", "b.log"]);
    assert_eq!(
        answer.contexts,
        vec!["chunk one", "chunk two", "chunk three"]
    );
    assert_eq!(answer.answer, "mock answer");
}

#[tokio::test]
async fn test_ask_without_source_tags_yields_empty_sources() {
    let index = MockIndex::with_results(vec![
        retrieved("chunk one", None),
        retrieved("chunk two", None),
    ]);
    let (pipeline, _provider, _index) = pipeline_with(index, PipelineConfig::default());

    let answer = pipeline.ask("anything?").await.unwrap().unwrap();

    assert!(answer.sources.is_empty());
    assert_eq!(answer.contexts, vec!["chunk one", "chunk two"]);
}

#[tokio::test]
async fn test_ask_prompt_carries_context_and_question() {
    let index = MockIndex::with_results(vec![retrieved("ERROR db timeout", Some("db.log"))]);
    let (pipeline, provider, _index) = pipeline_with(index, PipelineConfig::default());

    pipeline.ask("why did the db fail?").await.unwrap();

    let prompts = provider.prompts.lock().unwrap();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains("ERROR db timeout"));
    assert!(prompts[0].contains("why did the db fail?"));
}

#[tokio::test]
async fn test_ask_similarity_queries_top_k_without_vectors() {
    let index = MockIndex::with_results(vec![retrieved("chunk", None)]);
    let config = PipelineConfig {
        top_k: 7,
        ..PipelineConfig::default()
    };
    let (pipeline, _provider, index) = pipeline_with(index, config);

    pipeline.ask("question").await.unwrap();

    assert_eq!(*index.queries.lock().unwrap(), vec![(7, false)]);
}

#[tokio::test]
async fn test_ask_mmr_fetches_candidates_with_vectors_and_caps_at_top_k() {
    let index = MockIndex::with_results(vec![
        RetrievedChunk {
            text: "a".to_string(),
            source: None,
            score: 0.9,
            embedding: Some(vec![1.0]),
        },
        RetrievedChunk {
            text: "b".to_string(),
            source: None,
            score: 0.8,
            embedding: Some(vec![0.9]),
        },
        RetrievedChunk {
            text: "c".to_string(),
            source: None,
            score: 0.7,
            embedding: Some(vec![0.8]),
        },
    ]);
    let config = PipelineConfig {
        top_k: 2,
        strategy: RetrievalStrategy::Mmr {
            lambda: 1.0,
            fetch_k: 20,
        },
        ..PipelineConfig::default()
    };
    let (pipeline, _provider, index) = pipeline_with(index, config);

    let answer = pipeline.ask("question").await.unwrap().unwrap();

    assert_eq!(*index.queries.lock().unwrap(), vec![(20, true)]);
    assert_eq!(answer.contexts.len(), 2);
}

#[tokio::test]
async fn test_summarize_empty_returns_none() {
    let (pipeline, provider, _index) = pipeline_with(MockIndex::default(), PipelineConfig::default());

    assert!(pipeline.summarize("").await.unwrap().is_none());
    assert!(provider.prompts.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_summarize_caps_map_stage_then_reduces() {
    let (pipeline, provider, _index) = pipeline_with(MockIndex::default(), PipelineConfig::default());

    // Far more than five 1000-char chunks.
    let log = "0123456789".repeat(1000);
    let summary = pipeline.summarize(&log).await.unwrap();

    assert_eq!(summary.as_deref(), Some("mock answer"));
    // Five per-chunk summaries plus the final combine call.
    assert_eq!(provider.prompts.lock().unwrap().len(), 6);
}

#[tokio::test]
async fn test_ingest_from_file_tags_chunks_with_path() {
    use std::io::Write;

    let mut file = tempfile::NamedTempFile::with_suffix(".log").unwrap();
    writeln!(file, "INFO service started\nWARN retry scheduled").unwrap();

    let (pipeline, _provider, index) = pipeline_with(MockIndex::default(), PipelineConfig::default());

    let count = pipeline
        .ingest(&DocumentSource::path(file.path()))
        .await
        .unwrap();
    assert!(count > 0);

    let upserts = index.upserts.lock().unwrap();
    let tag = upserts[0][0].source.clone().unwrap();
    assert!(tag.ends_with(".log"));
}
