//! Data-shape errors between co-indexed artifacts.

use super::error_code::{self, ExtractSumErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("row count mismatch: '{artifact}' has {actual} rows, sentence table has {expected}")]
    RowCountMismatch {
        artifact: String,
        expected: usize,
        actual: usize,
    },

    #[error("'{artifact}' row {position} is not aligned with sentence {expected_index}: {detail}")]
    Misaligned {
        artifact: String,
        position: usize,
        expected_index: usize,
        detail: String,
    },

    #[error("empty factorization input for {model}: {rows} rows x {cols} columns")]
    EmptyMatrix {
        model: String,
        rows: usize,
        cols: usize,
    },

    #[error("topic weights undefined for {model}: W sums to zero")]
    ZeroWeightSum { model: String },

    #[error("dimension mismatch in {context}: expected {expected}, got {actual}")]
    DimensionMismatch {
        context: String,
        expected: usize,
        actual: usize,
    },

    #[error("factorization failed for {model}: {reason}")]
    FactorizationFailed { model: String, reason: String },
}

impl ExtractSumErrorCode for DataError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::RowCountMismatch { .. } | Self::Misaligned { .. } => {
                error_code::ALIGNMENT_ERROR
            }
            _ => error_code::DATA_ERROR,
        }
    }
}
