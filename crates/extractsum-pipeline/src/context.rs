//! Shared, read-only state for every document of a run.

use std::sync::Arc;

use extractsum_core::{ExtractSumConfig, Lexicon};
use extractsum_embeddings::EmbeddingStore;
use extractsum_storage::ArtifactStore;

/// Everything a stage needs besides the document itself.
///
/// Cheap to share across rayon workers: the lexicon and embedding store
/// sit behind `Arc`s and the embedding table is loaded at most once.
#[derive(Debug, Clone)]
pub struct PipelineContext {
    pub config: ExtractSumConfig,
    pub lexicon: Arc<Lexicon>,
    pub embeddings: Arc<EmbeddingStore>,
    pub store: ArtifactStore,
}

impl PipelineContext {
    pub fn new(config: ExtractSumConfig) -> Self {
        let embeddings = Arc::new(EmbeddingStore::new(config.embeddings.path.clone()));
        Self::with_embeddings(config, embeddings)
    }

    /// Reuse an embedding store that is already shared (or preloaded).
    pub fn with_embeddings(config: ExtractSumConfig, embeddings: Arc<EmbeddingStore>) -> Self {
        let store = ArtifactStore::new(config.output.effective_dir());
        Self {
            config,
            lexicon: Arc::new(Lexicon::standard()),
            embeddings,
            store,
        }
    }
}
