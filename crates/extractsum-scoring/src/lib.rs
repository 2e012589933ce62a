//! # extractsum-scoring
//!
//! Every scorer takes the sentence table (plus whatever model or resource
//! it needs) and returns one record per sentence, in sentence order.
//! The ranking module combines those columns into the summary variants.

pub mod content;
pub mod features;
pub mod grs;
pub mod ranking;
pub mod rhetorical;
pub mod surface;

pub use content::content_scores;
pub use features::aggregate_features;
pub use grs::{global_relevance, score_both};
pub use ranking::{
    dense_rank, extract_summary, rank_all, rank_variant, FeatureColumns, Variant, COMBINED,
    VARIANTS,
};
pub use rhetorical::rhetorical_scores;
pub use surface::surface_scores;
