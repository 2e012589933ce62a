//! Stable error codes surfaced to callers (CLI output, batch reports).

/// Every subsystem error maps to one stable code.
pub trait ExtractSumErrorCode {
    fn error_code(&self) -> &'static str;
}

pub const INPUT_ERROR: &str = "INPUT_ERROR";
pub const MISSING_PREREQUISITE: &str = "MISSING_PREREQUISITE";
pub const DATA_ERROR: &str = "DATA_ERROR";
pub const ALIGNMENT_ERROR: &str = "ALIGNMENT_ERROR";
pub const EMBEDDING_ERROR: &str = "EMBEDDING_ERROR";
pub const STORAGE_ERROR: &str = "STORAGE_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const EVAL_ERROR: &str = "EVAL_ERROR";
