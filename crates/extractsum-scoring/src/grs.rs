//! Global relevance: how much of the document's total topic mass a
//! sentence carries, weighted by topic importance.

use extractsum_core::alignment::{verify_alignment, verify_row_count};
use extractsum_core::errors::DataError;
use extractsum_core::models::{GrsScore, GrsScores, TopicModel, TopicModelKind};
use extractsum_core::SentenceRecord;
use extractsum_topics::to_array2;
use ndarray::Axis;
use tracing::debug;

/// topic_weight[k] = colsum(W)[k] / sum(W); score[i] = W[i, :] . topic_weight
///
/// The model must have been fitted on exactly `sentences`: W's row count and
/// the recorded index and cleaned text of every row are checked first.
pub fn global_relevance(
    model: &TopicModel,
    sentences: &[SentenceRecord],
) -> Result<Vec<GrsScore>, DataError> {
    let artifact = format!("{} topic model", model.kind.name());
    verify_row_count(sentences.len(), model.w.len(), &format!("{artifact} W"))?;
    verify_alignment(sentences, &model.rows, &artifact)?;

    let w = to_array2(&model.w, "W")?;
    let total = w.sum();
    if total == 0.0 || !total.is_finite() {
        return Err(DataError::ZeroWeightSum {
            model: model.kind.name().to_string(),
        });
    }
    let topic_weights = w.sum_axis(Axis(0)) / total;
    let scores = w.dot(&topic_weights);

    debug!(
        model = model.kind.name(),
        sentences = sentences.len(),
        topics = topic_weights.len(),
        "computed global relevance"
    );

    Ok(sentences
        .iter()
        .zip(scores.iter())
        .map(|(sentence, &score)| GrsScore {
            index: sentence.index,
            score,
            cleaned: sentence.cleaned.clone(),
            original: sentence.original.clone(),
        })
        .collect())
}

/// Both series: the lexical model gives "NMF Score", the embedding-augmented
/// model "NMF GRS Score".
pub fn score_both(
    lexical: &TopicModel,
    embedding: &TopicModel,
    sentences: &[SentenceRecord],
) -> Result<GrsScores, DataError> {
    for (model, expected) in [
        (lexical, TopicModelKind::Lexical),
        (embedding, TopicModelKind::EmbeddingAugmented),
    ] {
        if model.kind != expected {
            return Err(DataError::FactorizationFailed {
                model: model.kind.name().to_string(),
                reason: format!("expected the {} model here", expected.name()),
            });
        }
    }
    Ok(GrsScores {
        lexical: global_relevance(lexical, sentences)?,
        embedding: global_relevance(embedding, sentences)?,
    })
}
