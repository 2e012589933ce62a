//! # extractsum-pipeline
//!
//! Wires the segmenter, topic models, scorers and ranker into one
//! per-document chain. Documents can be summarized in one call, advanced
//! one named stage at a time against the artifact store, or processed in
//! batches that record failures and keep going.

pub mod batch;
pub mod context;
pub mod document;
pub mod runner;
pub mod stage;
pub mod summarizer;

pub use batch::{run_batch, BatchFailure, BatchReport, BatchSuccess};
pub use context::PipelineContext;
pub use document::{read_document, DocumentInput};
pub use runner::{run_document, run_stage, StageReport};
pub use stage::Stage;
pub use summarizer::{DocumentOutput, Summarizer};
