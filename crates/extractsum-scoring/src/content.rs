//! Semantic centrality: closeness to the document centroid plus affinity
//! with the document's most frequent words.

use extractsum_core::config::ScoringConfig;
use extractsum_core::models::ContentScore;
use extractsum_core::SentenceRecord;
use extractsum_embeddings::{cosine_similarity, WordEmbeddings};
use rustc_hash::FxHashMap;
use tracing::debug;

/// Token counts over every cleaned sentence, most frequent first.
/// Equal counts keep first-occurrence order.
pub fn token_frequencies(sentences: &[SentenceRecord]) -> Vec<(String, usize)> {
    let mut position: FxHashMap<&str, usize> = FxHashMap::default();
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for token in sentences.iter().flat_map(|s| s.tokens()) {
        match position.get(token) {
            Some(&i) => counts[i].1 += 1,
            None => {
                position.insert(token, counts.len());
                counts.push((token, 1));
            }
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
        .into_iter()
        .map(|(t, c)| (t.to_string(), c))
        .collect()
}

/// Mean of the per-sentence average vectors, over sentences with at least
/// one in-vocabulary token. Zero vector if there are none.
pub fn document_centroid<E: WordEmbeddings>(sentences: &[SentenceRecord], embeddings: &E) -> Vec<f64> {
    let mut centroid = vec![0.0f64; embeddings.dimensions()];
    let mut contributing = 0usize;
    for sentence in sentences {
        let (avg, found) = embeddings.average(sentence.tokens());
        if found > 0 {
            for (c, v) in centroid.iter_mut().zip(avg) {
                *c += v;
            }
            contributing += 1;
        }
    }
    if contributing > 0 {
        let n = contributing as f64;
        centroid.iter_mut().for_each(|c| *c /= n);
    }
    centroid
}

/// Centroid score plus the high-frequency score rescaled so its maximum
/// equals the configured ceiling.
pub fn content_scores<E: WordEmbeddings>(
    sentences: &[SentenceRecord],
    embeddings: &E,
    config: &ScoringConfig,
) -> Vec<ContentScore> {
    let centroid = document_centroid(sentences, embeddings);
    let frequencies = token_frequencies(sentences);
    let freq_of: FxHashMap<&str, usize> =
        frequencies.iter().map(|(t, c)| (t.as_str(), *c)).collect();

    let frequent: Vec<(&[f32], f64)> = frequencies
        .iter()
        .take(config.effective_frequent_tokens())
        .filter_map(|(t, c)| embeddings.vector(t).map(|v| (v, *c as f64)))
        .collect();

    let mut centroid_scores = Vec::with_capacity(sentences.len());
    let mut high_frequency = Vec::with_capacity(sentences.len());

    for sentence in sentences {
        let tokens: Vec<&str> = sentence.tokens().collect();
        let (avg, _) = embeddings.average(tokens.iter().copied());
        let length = tokens.len().max(1) as f64;
        centroid_scores.push(cosine_similarity(&avg, &centroid) / length);

        let mut score = 0.0;
        if !tokens.is_empty() {
            for token in &tokens {
                let Some(vector) = embeddings.vector(token) else {
                    continue;
                };
                let freq = freq_of.get(token).copied().unwrap_or(0) as f64;
                let affinity: f64 = frequent
                    .iter()
                    .map(|&(f_vec, f_count)| cosine_similarity(vector, f_vec) * f_count)
                    .sum();
                score += (freq + affinity) / tokens.len() as f64;
            }
        }
        high_frequency.push(score);
    }

    rescale_to_ceiling(&mut high_frequency, config.effective_high_frequency_ceiling());

    debug!(
        sentences = sentences.len(),
        frequent_in_vocabulary = frequent.len(),
        "computed content scores"
    );

    sentences
        .iter()
        .zip(centroid_scores)
        .zip(high_frequency)
        .map(|((sentence, centroid_score), high_frequency_score)| ContentScore {
            index: sentence.index,
            final_score: centroid_score + high_frequency_score,
            centroid_score,
            high_frequency_score,
            cleaned: sentence.cleaned.clone(),
            original: sentence.original.clone(),
        })
        .collect()
}

/// Scale so the largest value equals `ceiling`. A series whose maximum is
/// not positive is left as is.
fn rescale_to_ceiling(values: &mut [f64], ceiling: f64) {
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if max > 0.0 {
        values.iter_mut().for_each(|v| *v = *v / max * ceiling);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use extractsum_embeddings::EmbeddingTable;

    fn sentence(index: usize, cleaned: &str) -> SentenceRecord {
        SentenceRecord {
            index,
            original: cleaned.to_string(),
            processed: cleaned.to_string(),
            cleaned: cleaned.to_string(),
        }
    }

    fn table() -> EmbeddingTable {
        EmbeddingTable::from_entries([
            ("user", vec![1.0, 0.0]),
            ("agree", vec![0.0, 1.0]),
            ("terms", vec![1.0, 1.0]),
        ])
        .unwrap()
    }

    #[test]
    fn frequencies_break_ties_by_first_occurrence() {
        let sentences = [sentence(0, "beta alpha beta"), sentence(1, "gamma alpha delta")];
        let freq = token_frequencies(&sentences);
        let order: Vec<&str> = freq.iter().map(|(t, _)| t.as_str()).collect();
        assert_eq!(order, vec!["beta", "alpha", "gamma", "delta"]);
        assert_eq!(freq[0].1, 2);
    }

    #[test]
    fn centroid_skips_all_oov_sentences() {
        let sentences = [sentence(0, "user"), sentence(1, "unknown words"), sentence(2, "agree")];
        let centroid = document_centroid(&sentences, &table());
        assert_eq!(centroid, vec![0.5, 0.5]);
    }

    #[test]
    fn high_frequency_series_peaks_at_ceiling() {
        let sentences = [
            sentence(0, "user agree terms"),
            sentence(1, "user user"),
            sentence(2, "nothing known here"),
        ];
        let scores = content_scores(&sentences, &table(), &ScoringConfig::default());
        let max = scores
            .iter()
            .map(|s| s.high_frequency_score)
            .fold(f64::NEG_INFINITY, f64::max);
        assert!((max - 5.0).abs() < 1e-12);
        // No in-vocabulary tokens: no centroid similarity, no frequency mass.
        assert_eq!(scores[2].centroid_score, 0.0);
        assert_eq!(scores[2].high_frequency_score, 0.0);
        assert_eq!(scores[2].final_score, 0.0);
    }

    #[test]
    fn centroid_score_is_divided_by_token_count() {
        let sentences = [sentence(0, "terms"), sentence(1, "terms terms")];
        let scores = content_scores(&sentences, &table(), &ScoringConfig::default());
        // Both average to the centroid, cosine 1.
        assert!((scores[0].centroid_score - 1.0).abs() < 1e-12);
        assert!((scores[1].centroid_score - 0.5).abs() < 1e-12);
    }

    #[test]
    fn all_zero_high_frequency_is_left_unscaled() {
        let mut values = vec![0.0, 0.0];
        rescale_to_ceiling(&mut values, 5.0);
        assert_eq!(values, vec![0.0, 0.0]);
    }
}
