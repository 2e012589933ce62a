//! Embedding table errors.

use super::error_code::{self, ExtractSumErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum EmbeddingError {
    #[error("no embedding file configured; pass --embeddings or set embeddings.path")]
    NotConfigured,

    #[error("cannot read embedding file {path}: {reason}")]
    Unreadable { path: String, reason: String },

    #[error("malformed embedding line {line} in {path}: {reason}")]
    MalformedLine {
        path: String,
        line: usize,
        reason: String,
    },

    #[error("embedding file {path} contains no vectors")]
    Empty { path: String },
}

impl ExtractSumErrorCode for EmbeddingError {
    fn error_code(&self) -> &'static str {
        error_code::EMBEDDING_ERROR
    }
}
