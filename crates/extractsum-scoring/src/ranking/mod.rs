//! Variant ranking and top-third extraction.

pub mod dense_rank;
pub mod extraction;
pub mod variants;

pub use dense_rank::dense_rank;
pub use extraction::{extract_summary, summary_cutoff};
pub use variants::{rank_all, rank_variant, FeatureColumns, Variant, COMBINED, VARIANTS};
