//! Artifact storage errors.

use super::error_code::{self, ExtractSumErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("artifact not found: {path}")]
    NotFound { path: String },

    #[error("I/O error on {path}: {reason}")]
    Io { path: String, reason: String },

    #[error("cannot (de)serialize {path}: {reason}")]
    Serialization { path: String, reason: String },
}

impl ExtractSumErrorCode for StorageError {
    fn error_code(&self) -> &'static str {
        error_code::STORAGE_ERROR
    }
}
