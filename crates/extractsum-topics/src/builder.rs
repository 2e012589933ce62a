//! Builds both topic models of a document from its sentence table.

use extractsum_core::config::TopicConfig;
use extractsum_core::errors::DataError;
use extractsum_core::models::{TopicModel, TopicModelKind, TopicRow, TopicWords};
use extractsum_core::SentenceRecord;
use extractsum_embeddings::WordEmbeddings;
use ndarray::Array2;
use tracing::info;

use crate::matrix::{cleaned, FeatureMatrix};
use crate::nmf::{factorize, Factorization, NmfParams};
use crate::tfidf::TfidfMatrix;
use crate::topic_words::top_words;

/// Turns a sentence table into the lexical and embedding-augmented models.
#[derive(Debug, Clone)]
pub struct TopicModelBuilder {
    topics: usize,
    lexical_max_iter: usize,
    embedding_max_iter: usize,
    tolerance: f64,
    seed: u64,
    top_words: usize,
}

impl TopicModelBuilder {
    pub fn new(config: &TopicConfig) -> Self {
        Self {
            topics: config.effective_topics(),
            lexical_max_iter: config.effective_lexical_max_iter(),
            embedding_max_iter: config.effective_embedding_max_iter(),
            tolerance: config.effective_tolerance(),
            seed: config.effective_seed(),
            top_words: config.effective_top_words(),
        }
    }

    /// NMF over TF-IDF of the cleaned sentences.
    pub fn build_lexical(&self, sentences: &[SentenceRecord]) -> Result<TopicModel, DataError> {
        let matrix = FeatureMatrix::lexical(sentences);
        self.fit(TopicModelKind::Lexical, sentences, matrix, self.lexical_max_iter)
    }

    /// NMF over `[averaged embeddings | TF-IDF]`.
    pub fn build_embedding<E: WordEmbeddings>(
        &self,
        sentences: &[SentenceRecord],
        embeddings: &E,
    ) -> Result<TopicModel, DataError> {
        let tfidf = TfidfMatrix::fit_transform(&cleaned(sentences));
        let matrix = FeatureMatrix::embedding_augmented(sentences, embeddings, &tfidf)?;
        self.fit(
            TopicModelKind::EmbeddingAugmented,
            sentences,
            matrix,
            self.embedding_max_iter,
        )
    }

    /// Both models; the lexical one first.
    pub fn build_both<E: WordEmbeddings>(
        &self,
        sentences: &[SentenceRecord],
        embeddings: &E,
    ) -> Result<(TopicModel, TopicModel), DataError> {
        let tfidf = TfidfMatrix::fit_transform(&cleaned(sentences));
        let augmented = FeatureMatrix::embedding_augmented(sentences, embeddings, &tfidf)?;
        let lexical = self.fit(
            TopicModelKind::Lexical,
            sentences,
            FeatureMatrix::from_tfidf(tfidf),
            self.lexical_max_iter,
        )?;
        let embedding = self.fit(
            TopicModelKind::EmbeddingAugmented,
            sentences,
            augmented,
            self.embedding_max_iter,
        )?;
        Ok((lexical, embedding))
    }

    /// Top feature labels of each topic of `model`.
    pub fn topic_words(&self, model: &TopicModel) -> Result<TopicWords, DataError> {
        let h = to_array2(&model.h, "H")?;
        Ok(TopicWords {
            kind: model.kind,
            topics: top_words(&h, &model.features, self.top_words),
        })
    }

    fn fit(
        &self,
        kind: TopicModelKind,
        sentences: &[SentenceRecord],
        matrix: FeatureMatrix,
        max_iter: usize,
    ) -> Result<TopicModel, DataError> {
        let params = NmfParams {
            components: self.topics,
            max_iter,
            tolerance: self.tolerance,
            seed: self.seed,
        };
        let Factorization {
            w,
            h,
            error_trace,
            iterations,
        } = factorize(&matrix.values, &params, kind.name())?;

        info!(
            model = kind.name(),
            rows = matrix.rows(),
            cols = matrix.cols(),
            topics = h.nrows(),
            iterations,
            final_error = error_trace.last().copied().unwrap_or(0.0),
            shift = matrix.shift,
            "topic model fitted"
        );

        Ok(TopicModel {
            kind,
            rows: sentences
                .iter()
                .map(|s| TopicRow {
                    index: s.index,
                    cleaned: s.cleaned.clone(),
                })
                .collect(),
            features: matrix.labels,
            shift: matrix.shift,
            a: to_rows(&matrix.values),
            w: to_rows(&w),
            h: to_rows(&h),
            error_trace,
            iterations,
        })
    }
}

/// Row-major nested vectors, the persisted form of a matrix.
pub fn to_rows(m: &Array2<f64>) -> Vec<Vec<f64>> {
    m.rows().into_iter().map(|r| r.to_vec()).collect()
}

/// Rebuild a matrix from nested rows; ragged input is a dimension error.
pub fn to_array2(rows: &[Vec<f64>], name: &str) -> Result<Array2<f64>, DataError> {
    let cols = rows.first().map_or(0, Vec::len);
    let mut flat = Vec::with_capacity(rows.len() * cols);
    for row in rows {
        if row.len() != cols {
            return Err(DataError::DimensionMismatch {
                context: format!("matrix {name} row width"),
                expected: cols,
                actual: row.len(),
            });
        }
        flat.extend_from_slice(row);
    }
    Array2::from_shape_vec((rows.len(), cols), flat).map_err(|e| DataError::FactorizationFailed {
        model: name.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_array2_rejects_ragged_rows() {
        let rows = vec![vec![1.0, 2.0], vec![3.0]];
        assert!(matches!(
            to_array2(&rows, "W"),
            Err(DataError::DimensionMismatch { expected: 2, actual: 1, .. })
        ));
    }

    #[test]
    fn rows_round_trip_through_array() {
        let rows = vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]];
        let m = to_array2(&rows, "A").unwrap();
        assert_eq!(m.dim(), (2, 3));
        assert_eq!(to_rows(&m), rows);
    }
}
