//! Error handling for ExtractSum.
//! One error enum per subsystem, `thiserror` only. `PipelineError` aggregates
//! them at stage boundaries.

pub mod config_error;
pub mod data_error;
pub mod embedding_error;
pub mod error_code;
pub mod eval_error;
pub mod input_error;
pub mod pipeline_error;
pub mod storage_error;

pub use config_error::ConfigError;
pub use data_error::DataError;
pub use embedding_error::EmbeddingError;
pub use error_code::ExtractSumErrorCode;
pub use eval_error::EvalError;
pub use input_error::InputError;
pub use pipeline_error::{ExtractSumResult, PipelineError};
pub use storage_error::StorageError;
