//! ROUGE evaluation errors.

use super::error_code::{self, ExtractSumErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum EvalError {
    #[error("reference directory not found: {path}")]
    ReferenceDirNotFound { path: String },

    #[error("no reference files in {path}")]
    NoReferences { path: String },

    #[error("cannot read {path}: {reason}")]
    Unreadable { path: String, reason: String },
}

impl ExtractSumErrorCode for EvalError {
    fn error_code(&self) -> &'static str {
        error_code::EVAL_ERROR
    }
}
