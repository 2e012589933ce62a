//! Row alignment against the sentence table.
//!
//! Every artifact downstream of the segmenter is keyed by sentence index.
//! Consumers call [`verify_alignment`] before use; any count, index or text
//! disagreement is a data error, never a silent truncation.

use crate::errors::DataError;
use crate::models::{
    ContentScore, FeatureScore, GrsScore, KeywordAnalysis, RankedRow, RhetoricalScore,
    SentenceRecord, SurfaceScore, TopicRow,
};

/// A record that belongs to exactly one sentence.
pub trait SentenceAligned {
    fn sentence_index(&self) -> usize;
    fn cleaned_text(&self) -> &str;
}

/// Check that `rows` has one entry per sentence, in order, with matching text.
pub fn verify_alignment<T: SentenceAligned>(
    sentences: &[SentenceRecord],
    rows: &[T],
    artifact: &str,
) -> Result<(), DataError> {
    verify_row_count(sentences.len(), rows.len(), artifact)?;
    for (position, (sentence, row)) in sentences.iter().zip(rows).enumerate() {
        if row.sentence_index() != sentence.index {
            return Err(DataError::Misaligned {
                artifact: artifact.to_string(),
                position,
                expected_index: sentence.index,
                detail: format!("row carries index {}", row.sentence_index()),
            });
        }
        if row.cleaned_text() != sentence.cleaned {
            return Err(DataError::Misaligned {
                artifact: artifact.to_string(),
                position,
                expected_index: sentence.index,
                detail: "cleaned text differs".to_string(),
            });
        }
    }
    Ok(())
}

/// Count-only check for artifacts without per-row text (matrices).
pub fn verify_row_count(expected: usize, actual: usize, artifact: &str) -> Result<(), DataError> {
    if expected != actual {
        return Err(DataError::RowCountMismatch {
            artifact: artifact.to_string(),
            expected,
            actual,
        });
    }
    Ok(())
}

macro_rules! impl_aligned {
    ($($ty:ty),* $(,)?) => {
        $(
            impl SentenceAligned for $ty {
                fn sentence_index(&self) -> usize {
                    self.index
                }
                fn cleaned_text(&self) -> &str {
                    &self.cleaned
                }
            }
        )*
    };
}

impl_aligned!(
    SentenceRecord,
    TopicRow,
    KeywordAnalysis,
    GrsScore,
    SurfaceScore,
    ContentScore,
    RhetoricalScore,
    FeatureScore,
    RankedRow,
);

#[cfg(test)]
mod tests {
    use super::*;

    fn sentence(index: usize, cleaned: &str) -> SentenceRecord {
        SentenceRecord {
            index,
            original: cleaned.to_string(),
            processed: cleaned.to_string(),
            cleaned: cleaned.to_string(),
        }
    }

    fn grs(index: usize, cleaned: &str) -> GrsScore {
        GrsScore {
            index,
            score: 0.5,
            cleaned: cleaned.to_string(),
            original: cleaned.to_string(),
        }
    }

    #[test]
    fn aligned_rows_pass() {
        let sentences = vec![sentence(0, "alpha beta"), sentence(1, "gamma delta")];
        let rows = vec![grs(0, "alpha beta"), grs(1, "gamma delta")];
        assert!(verify_alignment(&sentences, &rows, "grs").is_ok());
    }

    #[test]
    fn short_table_is_a_row_count_error() {
        let sentences = vec![sentence(0, "alpha beta"), sentence(1, "gamma delta")];
        let rows = vec![grs(0, "alpha beta")];
        let err = verify_alignment(&sentences, &rows, "grs").unwrap_err();
        assert!(matches!(
            err,
            DataError::RowCountMismatch { expected: 2, actual: 1, .. }
        ));
    }

    #[test]
    fn shifted_rows_are_misaligned() {
        let sentences = vec![sentence(0, "alpha beta"), sentence(1, "gamma delta")];
        let rows = vec![grs(1, "gamma delta"), grs(0, "alpha beta")];
        let err = verify_alignment(&sentences, &rows, "grs").unwrap_err();
        assert!(matches!(err, DataError::Misaligned { position: 0, .. }));
    }

    #[test]
    fn text_mismatch_is_detected_even_with_correct_index() {
        let sentences = vec![sentence(0, "alpha beta")];
        let rows = vec![grs(0, "something else")];
        assert!(verify_alignment(&sentences, &rows, "grs").is_err());
    }
}
