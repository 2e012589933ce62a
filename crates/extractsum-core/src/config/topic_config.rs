//! Topic model configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Configuration for both NMF topic models.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TopicConfig {
    /// Requested topic count. Default: 30.
    pub topics: Option<usize>,
    /// Maximum iterations for the lexical model. Default: 3000.
    pub lexical_max_iter: Option<usize>,
    /// Maximum iterations for the embedding-augmented model. Default: 1000.
    pub embedding_max_iter: Option<usize>,
    /// Stopping tolerance on relative error improvement. Default: 1e-4.
    pub tolerance: Option<f64>,
    /// Random seed for initialization. Default: 0.
    pub seed: Option<u64>,
    /// Feature labels reported per topic. Default: 10.
    pub top_words: Option<usize>,
}

impl TopicConfig {
    pub fn effective_topics(&self) -> usize {
        self.topics.unwrap_or(constants::DEFAULT_TOPIC_COUNT)
    }

    pub fn effective_lexical_max_iter(&self) -> usize {
        self.lexical_max_iter
            .unwrap_or(constants::DEFAULT_LEXICAL_MAX_ITER)
    }

    pub fn effective_embedding_max_iter(&self) -> usize {
        self.embedding_max_iter
            .unwrap_or(constants::DEFAULT_EMBEDDING_MAX_ITER)
    }

    pub fn effective_tolerance(&self) -> f64 {
        self.tolerance.unwrap_or(constants::DEFAULT_NMF_TOLERANCE)
    }

    pub fn effective_seed(&self) -> u64 {
        self.seed.unwrap_or(constants::DEFAULT_SEED)
    }

    pub fn effective_top_words(&self) -> usize {
        self.top_words.unwrap_or(constants::DEFAULT_TOP_WORDS)
    }
}
