//! # extractsum-topics
//!
//! Builds the two sentence-feature matrices (TF-IDF, and averaged word
//! vectors concatenated with TF-IDF), factorizes each with seeded
//! multiplicative-update NMF, and reports the top feature labels per topic.

pub mod builder;
pub mod matrix;
pub mod nmf;
pub mod tfidf;
pub mod topic_words;

pub use builder::{to_array2, to_rows, TopicModelBuilder};
pub use matrix::{shift_non_negative, FeatureMatrix};
pub use nmf::{factorize, Factorization, NmfParams};
pub use tfidf::TfidfMatrix;
pub use topic_words::top_words;
