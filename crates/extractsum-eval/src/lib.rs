//! # extractsum-eval
//!
//! ROUGE F-measures between reference and generated summaries, and a
//! directory-level harness that scores every per-variant summary folder.

pub mod evaluate;
pub mod rouge;

pub use evaluate::{evaluate_dir, EvaluationRecord, EvaluationReport, VariantEvaluation};
pub use rouge::{rouge, tokenize, RougeScores};
