//! Ranked tables and extracted summaries.

use serde::{Deserialize, Serialize};

use super::Feature;

/// One sentence of a ranked variant table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedRow {
    pub index: usize,
    /// The summed feature values, in the variant's declared order.
    pub components: Vec<(Feature, f64)>,
    pub total_score: f64,
    /// Dense rank; 1 is the highest total.
    pub rank: usize,
    pub cleaned: String,
    pub original: String,
}

/// A variant's scores for every sentence, in document order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedTable {
    pub variant: String,
    pub name: String,
    pub rows: Vec<RankedRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedSentence {
    pub index: usize,
    pub rank: usize,
    pub original: String,
}

/// Sentences of one variant whose rank falls within the cutoff, in document order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub variant: String,
    pub name: String,
    pub sentence_count: usize,
    pub cutoff: usize,
    pub selected: Vec<SelectedSentence>,
}

impl Summary {
    /// Selected sentences joined by newlines.
    pub fn text(&self) -> String {
        self.selected
            .iter()
            .map(|s| s.original.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
