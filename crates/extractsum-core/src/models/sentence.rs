use serde::{Deserialize, Serialize};

/// One retained sentence of the input document.
///
/// Created once by the segmenter; `index` is 0-based and dense.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentenceRecord {
    pub index: usize,
    /// Sentence after line cleanup, before character filtering.
    pub original: String,
    /// Letters, digits, whitespace, comma, period and parentheses only.
    pub processed: String,
    /// Letters and single spaces only; stopwords and 1-char tokens removed.
    pub cleaned: String,
}

impl SentenceRecord {
    /// Whitespace tokens of the cleaned text.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.cleaned.split_whitespace()
    }

    pub fn token_count(&self) -> usize {
        self.tokens().count()
    }
}
