//! Raw text to the dense, ordered sentence table.

use extractsum_core::constants::MIN_SENTENCE_TOKENS;
use extractsum_core::errors::InputError;
use extractsum_core::{Lexicon, SentenceRecord};
use regex::Regex;
use tracing::debug;

use crate::normalize;
use crate::sentence_splitter::split_sentences;

/// Segments documents using the abbreviations and stopwords of one lexicon.
#[derive(Debug, Clone)]
pub struct Segmenter<'a> {
    lexicon: &'a Lexicon,
    /// A candidate ending in `<abbreviation>.` is not a sentence.
    abbreviation_end: Regex,
    min_tokens: usize,
}

impl<'a> Segmenter<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        // Abbreviations are escaped, except that an inner `.` keeps its
        // wildcard meaning (`e.g` also matches `e-g`).
        let alternation = lexicon
            .abbreviations()
            .iter()
            .map(|a| regex::escape(a).replace(r"\.", "."))
            .collect::<Vec<_>>()
            .join("|");
        let abbreviation_end = Regex::new(&format!(r"\b(?:{alternation})\.$"))
            .expect("escaped abbreviation alternation is a valid pattern");

        Self {
            lexicon,
            abbreviation_end,
            min_tokens: MIN_SENTENCE_TOKENS,
        }
    }

    /// Split `text` into sentence records. `source` names the document in errors.
    ///
    /// Fails when the text has no non-whitespace content, or when nothing
    /// survives the abbreviation, token-count and empty-processed filters.
    pub fn segment(&self, text: &str, source: &str) -> Result<Vec<SentenceRecord>, InputError> {
        if text.trim().is_empty() {
            return Err(InputError::EmptyContent {
                path: source.to_string(),
            });
        }

        let content = text.to_lowercase();
        let mut records = Vec::new();
        let mut candidates = 0usize;

        for line in content.lines() {
            let line = normalize::normalize_line(line);
            for candidate in split_sentences(&line) {
                candidates += 1;
                let Some(record) = self.build_record(candidate, records.len()) else {
                    continue;
                };
                records.push(record);
            }
        }

        debug!(
            source,
            candidates,
            retained = records.len(),
            "segmented document"
        );

        if records.is_empty() {
            return Err(InputError::NoSentences {
                path: source.to_string(),
                min_tokens: self.min_tokens,
            });
        }
        Ok(records)
    }

    fn build_record(&self, candidate: &str, index: usize) -> Option<SentenceRecord> {
        let sentence = candidate.trim();
        if self.abbreviation_end.is_match(sentence)
            || sentence.split_whitespace().count() < self.min_tokens
        {
            return None;
        }

        // Keep spreadsheet tools from reading the sentence as a formula.
        let original = if sentence.starts_with(['=', '+', '-']) {
            format!("'{sentence}")
        } else {
            sentence.to_string()
        };

        let processed = normalize::processed_text(&original);
        if processed.is_empty() {
            return None;
        }
        let cleaned = normalize::cleaned_text(&original, |w| !self.lexicon.is_stopword(w));

        Some(SentenceRecord {
            index,
            original,
            processed,
            cleaned,
        })
    }
}
