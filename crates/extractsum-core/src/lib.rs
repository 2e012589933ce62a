//! # extractsum-core
//!
//! Foundation crate for the ExtractSum pipeline.
//! Defines the sentence and score records that flow between stages, the
//! error taxonomy, layered configuration, the rhetorical lexicon, and
//! tracing setup. Every other crate in the workspace depends on this.

pub mod alignment;
pub mod config;
pub mod constants;
pub mod errors;
pub mod lexicon;
pub mod models;
pub mod tracing;

// Re-export the most commonly used types at the crate root.
pub use config::ExtractSumConfig;
pub use errors::{ExtractSumResult, PipelineError};
pub use lexicon::Lexicon;
pub use models::{Feature, SentenceRecord};
