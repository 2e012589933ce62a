//! Input errors: the caller handed us something we cannot start from.

use super::error_code::{self, ExtractSumErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("document not found: {path}")]
    DocumentNotFound { path: String },

    #[error("cannot read document {path}: {reason}")]
    Unreadable { path: String, reason: String },

    #[error("document {path} has no content to process")]
    EmptyContent { path: String },

    #[error("document {path} produced no sentences with at least {min_tokens} tokens")]
    NoSentences { path: String, min_tokens: usize },

    #[error("missing artifact '{artifact}' for document '{doc}'; run the '{run_first}' stage first")]
    MissingPrerequisite {
        doc: String,
        artifact: String,
        run_first: String,
    },

    #[error("document {path} shares the namespace '{doc}' with {first} in the same batch")]
    DuplicateNamespace {
        path: String,
        doc: String,
        first: String,
    },

    #[error("unknown stage '{0}'")]
    UnknownStage(String),
}

impl ExtractSumErrorCode for InputError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingPrerequisite { .. } => error_code::MISSING_PREREQUISITE,
            _ => error_code::INPUT_ERROR,
        }
    }
}
