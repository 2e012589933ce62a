//! Position and length cues.

use extractsum_core::config::ScoringConfig;
use extractsum_core::models::SurfaceScore;
use extractsum_core::SentenceRecord;

/// position = 1 / (i + 1); length score = 0 up to the threshold, then one
/// point per extra token, capped.
pub fn surface_scores(sentences: &[SentenceRecord], config: &ScoringConfig) -> Vec<SurfaceScore> {
    let threshold = config.effective_length_threshold();
    let cap = config.effective_length_cap();

    sentences
        .iter()
        .enumerate()
        .map(|(i, sentence)| {
            let position_score = 1.0 / (i as f64 + 1.0);
            let length = sentence.token_count();
            let length_score = if length <= threshold {
                0.0
            } else {
                cap.min((length - threshold) as f64)
            };
            SurfaceScore {
                index: sentence.index,
                final_score: position_score + length_score,
                position_score,
                length_score,
                length,
                cleaned: sentence.cleaned.clone(),
                original: sentence.original.clone(),
            }
        })
        .collect()
}
