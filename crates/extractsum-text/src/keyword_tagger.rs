//! Per-category rhetorical keyword counts for each sentence.

use extractsum_core::models::KeywordAnalysis;
use extractsum_core::{Lexicon, SentenceRecord};

/// Count keyword hits in one sentence's cleaned text.
///
/// A category's count is the sum, over its terms, of non-overlapping
/// substring occurrences, so `"can"` also fires inside `"cancel"`.
pub fn tag_sentence(sentence: &SentenceRecord, lexicon: &Lexicon) -> KeywordAnalysis {
    let text = sentence.cleaned.to_lowercase();

    let category_counts: Vec<(String, usize)> = lexicon
        .categories()
        .iter()
        .map(|category| {
            let hits = category
                .terms
                .iter()
                .map(|term| text.matches(term.as_str()).count())
                .sum();
            (category.name.clone(), hits)
        })
        .collect();

    let found: Vec<String> = category_counts
        .iter()
        .filter(|(_, count)| *count > 0)
        .map(|(name, count)| format!("{name} ({count})"))
        .collect();

    KeywordAnalysis {
        index: sentence.index,
        total_keywords: found.len(),
        keywords_found: if found.is_empty() {
            "None".to_string()
        } else {
            found.join(", ")
        },
        category_counts,
        cleaned: sentence.cleaned.clone(),
        original: sentence.original.clone(),
    }
}

/// Tag every sentence, preserving order.
pub fn tag_sentences(sentences: &[SentenceRecord], lexicon: &Lexicon) -> Vec<KeywordAnalysis> {
    sentences.iter().map(|s| tag_sentence(s, lexicon)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(cleaned: &str) -> SentenceRecord {
        SentenceRecord {
            index: 4,
            original: cleaned.to_string(),
            processed: cleaned.to_string(),
            cleaned: cleaned.to_string(),
        }
    }

    #[test]
    fn counts_substring_hits_per_category() {
        let analysis = tag_sentence(&record("you must agree and shall comply"), &Lexicon::standard());
        // "must", "agree", "shall" under Obligations.
        assert_eq!(analysis.category_counts[0], ("Obligations".to_string(), 3));
        assert_eq!(analysis.index, 4);
        assert!(analysis.keywords_found.starts_with("Obligations (3)"));
    }

    #[test]
    fn substring_matches_inside_words() {
        let analysis = tag_sentence(&record("cancel"), &Lexicon::standard());
        let rights = analysis
            .category_counts
            .iter()
            .find(|(name, _)| name == "Rights")
            .unwrap();
        assert_eq!(rights.1, 1);
    }

    #[test]
    fn no_hits_formats_as_none() {
        let analysis = tag_sentence(&record("xyz qqq"), &Lexicon::standard());
        assert_eq!(analysis.total_keywords, 0);
        assert_eq!(analysis.keywords_found, "None");
    }

    #[test]
    fn total_keywords_counts_categories_not_hits() {
        let analysis = tag_sentence(&record("must must however"), &Lexicon::standard());
        assert_eq!(analysis.total_keywords, 2);
        assert_eq!(
            analysis.keywords_found,
            "Obligations (2), Contrast/Concession (1)"
        );
    }
}
