//! Rhetorical keyword density.

use extractsum_core::models::RhetoricalScore;
use extractsum_core::{Lexicon, SentenceRecord};

/// Number of cleaned tokens that exactly equal a taxonomy term.
///
/// Multi-word terms such as `"subject to"` never equal a single token, so
/// only single-word terms contribute here.
pub fn rhetorical_scores(sentences: &[SentenceRecord], lexicon: &Lexicon) -> Vec<RhetoricalScore> {
    sentences
        .iter()
        .map(|sentence| {
            let keyword_count = sentence.tokens().filter(|t| lexicon.is_keyword(t)).count();
            RhetoricalScore {
                index: sentence.index,
                final_score: keyword_count as f64,
                keyword_count,
                cleaned: sentence.cleaned.clone(),
                original: sentence.original.clone(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentence(cleaned: &str) -> SentenceRecord {
        SentenceRecord {
            index: 0,
            original: cleaned.to_string(),
            processed: cleaned.to_string(),
            cleaned: cleaned.to_string(),
        }
    }

    #[test]
    fn counts_exact_token_matches() {
        let scores = rhetorical_scores(
            &[sentence("you must agree however we may cancel")],
            &Lexicon::standard(),
        );
        // must, agree, however, may. "cancel" only contains "can".
        assert_eq!(scores[0].keyword_count, 4);
        assert_eq!(scores[0].final_score, 4.0);
    }

    #[test]
    fn multi_word_terms_never_match() {
        let scores = rhetorical_scores(&[sentence("subject to right to")], &Lexicon::standard());
        assert_eq!(scores[0].keyword_count, 0);
    }
}
