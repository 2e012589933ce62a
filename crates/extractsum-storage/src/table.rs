//! Envelopes written around every persisted artifact.

use serde::{Deserialize, Serialize};

/// A per-sentence table: one row per sentence, in sentence order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtifactTable<T> {
    pub doc: String,
    pub stage: String,
    pub row_count: usize,
    pub rows: Vec<T>,
}

impl<T> ArtifactTable<T> {
    pub fn new(doc: &str, stage: &str, rows: Vec<T>) -> Self {
        Self {
            doc: doc.to_string(),
            stage: stage.to_string(),
            row_count: rows.len(),
            rows,
        }
    }
}

/// A structured artifact (topic model, paired GRS series) whose
/// `row_count` is the number of sentences it covers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtifactRecord<T> {
    pub doc: String,
    pub stage: String,
    pub row_count: usize,
    pub rows: T,
}

impl<T> ArtifactRecord<T> {
    pub fn new(doc: &str, stage: &str, row_count: usize, rows: T) -> Self {
        Self {
            doc: doc.to_string(),
            stage: stage.to_string(),
            row_count,
            rows,
        }
    }
}
