//! Embedding table configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EmbeddingConfig {
    /// Path to a whitespace-delimited word-vector file (GloVe text format).
    pub path: Option<PathBuf>,
}
