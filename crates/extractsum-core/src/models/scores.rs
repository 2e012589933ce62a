//! Score records, one per sentence per scorer.

use serde::{Deserialize, Serialize};

/// Rhetorical keyword categories hit by one sentence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordAnalysis {
    pub index: usize,
    /// Number of categories with at least one hit.
    pub total_keywords: usize,
    /// `"Category (count)"` entries joined by `", "`, or `"None"`.
    pub keywords_found: String,
    /// Hit count per category, in taxonomy order.
    pub category_counts: Vec<(String, usize)>,
    pub cleaned: String,
    pub original: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrsScore {
    pub index: usize,
    pub score: f64,
    pub cleaned: String,
    pub original: String,
}

/// Both global relevance series of a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrsScores {
    /// From the TF-IDF-only topic model ("NMF Score").
    pub lexical: Vec<GrsScore>,
    /// From the embedding-augmented topic model ("NMF GRS Score").
    pub embedding: Vec<GrsScore>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceScore {
    pub index: usize,
    pub final_score: f64,
    pub position_score: f64,
    pub length_score: f64,
    pub length: usize,
    pub cleaned: String,
    pub original: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentScore {
    pub index: usize,
    pub final_score: f64,
    pub centroid_score: f64,
    pub high_frequency_score: f64,
    pub cleaned: String,
    pub original: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RhetoricalScore {
    pub index: usize,
    pub final_score: f64,
    pub keyword_count: usize,
    pub cleaned: String,
    pub original: String,
}

/// Surface, content and rhetorical scores side by side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureScore {
    pub index: usize,
    pub overall: f64,
    pub surface: f64,
    pub content: f64,
    pub rhetorical: f64,
    pub cleaned: String,
    pub original: String,
}
