//! Stage-boundary error aggregating every subsystem error via `From`.

use super::error_code::ExtractSumErrorCode;
use super::{ConfigError, DataError, EmbeddingError, EvalError, InputError, StorageError};

/// Errors that can end a pipeline stage.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Input error: {0}")]
    Input(#[from] InputError),

    #[error("Data error: {0}")]
    Data(#[from] DataError),

    #[error("Embedding error: {0}")]
    Embedding(#[from] EmbeddingError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Evaluation error: {0}")]
    Eval(#[from] EvalError),
}

impl ExtractSumErrorCode for PipelineError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Input(e) => e.error_code(),
            Self::Data(e) => e.error_code(),
            Self::Embedding(e) => e.error_code(),
            Self::Storage(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Eval(e) => e.error_code(),
        }
    }
}

pub type ExtractSumResult<T> = Result<T, PipelineError>;
