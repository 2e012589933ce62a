//! Sentence-feature matrices fed to the factorization.

use extractsum_core::errors::DataError;
use extractsum_core::SentenceRecord;
use extractsum_embeddings::WordEmbeddings;
use ndarray::{concatenate, Array2, Axis};

use crate::tfidf::TfidfMatrix;

/// A non-negative matrix with one row per sentence and labelled columns.
#[derive(Debug, Clone)]
pub struct FeatureMatrix {
    pub labels: Vec<String>,
    pub values: Array2<f64>,
    /// Amount added to every entry to remove negatives.
    pub shift: f64,
}

impl FeatureMatrix {
    /// TF-IDF over the cleaned sentences.
    pub fn lexical(sentences: &[SentenceRecord]) -> Self {
        Self::from_tfidf(TfidfMatrix::fit_transform(&cleaned(sentences)))
    }

    pub fn from_tfidf(tfidf: TfidfMatrix) -> Self {
        let mut values = tfidf.values;
        let shift = shift_non_negative(&mut values);
        Self {
            labels: tfidf.terms,
            values,
            shift,
        }
    }

    /// Averaged word vectors (`emb_0..emb_{D-1}`) followed by the TF-IDF columns.
    ///
    /// The embedding block is shifted on its own first; the combined matrix
    /// is checked again afterwards.
    pub fn embedding_augmented<E: WordEmbeddings>(
        sentences: &[SentenceRecord],
        embeddings: &E,
        tfidf: &TfidfMatrix,
    ) -> Result<Self, DataError> {
        let dims = embeddings.dimensions();
        let mut block = Array2::<f64>::zeros((sentences.len(), dims));
        for (row, sentence) in sentences.iter().enumerate() {
            let (avg, _) = embeddings.average(sentence.tokens());
            for (col, v) in avg.into_iter().enumerate() {
                block[[row, col]] = v;
            }
        }
        let block_shift = shift_non_negative(&mut block);

        if tfidf.values.nrows() != block.nrows() {
            return Err(DataError::DimensionMismatch {
                context: "embedding-augmented matrix rows".to_string(),
                expected: block.nrows(),
                actual: tfidf.values.nrows(),
            });
        }
        let mut values = concatenate(Axis(1), &[block.view(), tfidf.values.view()]).map_err(
            |e| DataError::FactorizationFailed {
                model: "embedding".to_string(),
                reason: e.to_string(),
            },
        )?;
        let whole_shift = shift_non_negative(&mut values);

        let labels = (0..dims)
            .map(|d| format!("emb_{d}"))
            .chain(tfidf.terms.iter().cloned())
            .collect();

        Ok(Self {
            labels,
            values,
            shift: block_shift + whole_shift,
        })
    }

    pub fn rows(&self) -> usize {
        self.values.nrows()
    }

    pub fn cols(&self) -> usize {
        self.values.ncols()
    }
}

/// If any entry is negative, add |min| to every entry so the minimum is
/// exactly zero. Returns the shift applied (0.0 when none was needed).
pub fn shift_non_negative(values: &mut Array2<f64>) -> f64 {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    if !(min < 0.0) {
        return 0.0;
    }
    let shift = -min;
    values.mapv_inplace(|v| v + shift);
    shift
}

pub(crate) fn cleaned(sentences: &[SentenceRecord]) -> Vec<&str> {
    sentences.iter().map(|s| s.cleaned.as_str()).collect()
}
