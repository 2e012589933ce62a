//! Topic model artifacts.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TopicModelKind {
    /// A = TF-IDF.
    Lexical,
    /// A = [averaged embeddings | TF-IDF].
    EmbeddingAugmented,
}

impl TopicModelKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::Lexical => "lexical",
            Self::EmbeddingAugmented => "embedding",
        }
    }
}

impl fmt::Display for TopicModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The sentence a row of A and W was built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicRow {
    pub index: usize,
    pub cleaned: String,
}

/// Factorization output for one model variant of one document.
///
/// Matrices are stored row-major as nested vectors so the persisted
/// tables stay rectangular and readable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicModel {
    pub kind: TopicModelKind,
    /// One entry per row of A and W, in sentence order.
    pub rows: Vec<TopicRow>,
    /// Column labels of A and H.
    pub features: Vec<String>,
    /// Shift added to A to make it non-negative (0 when none was needed).
    pub shift: f64,
    pub a: Vec<Vec<f64>>,
    pub w: Vec<Vec<f64>>,
    pub h: Vec<Vec<f64>>,
    /// Frobenius reconstruction error after each iteration.
    pub error_trace: Vec<f64>,
    pub iterations: usize,
}

impl TopicModel {
    /// K, the number of topics actually fitted.
    pub fn topic_count(&self) -> usize {
        self.h.len()
    }

    pub fn sentence_count(&self) -> usize {
        self.w.len()
    }
}

/// Highest-weighted feature labels per topic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicWords {
    pub kind: TopicModelKind,
    pub topics: Vec<Vec<String>>,
}
