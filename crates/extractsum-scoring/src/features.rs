//! Surface + content + rhetorical, side by side.

use extractsum_core::alignment::verify_alignment;
use extractsum_core::errors::DataError;
use extractsum_core::models::{ContentScore, FeatureScore, RhetoricalScore, SurfaceScore};
use extractsum_core::SentenceRecord;

/// Join the three feature tables on sentence index. Each table must be
/// aligned with `sentences`; the overall score is their sum.
pub fn aggregate_features(
    sentences: &[SentenceRecord],
    surface: &[SurfaceScore],
    content: &[ContentScore],
    rhetorical: &[RhetoricalScore],
) -> Result<Vec<FeatureScore>, DataError> {
    verify_alignment(sentences, surface, "surface features")?;
    verify_alignment(sentences, content, "content features")?;
    verify_alignment(sentences, rhetorical, "rhetorical features")?;

    Ok(sentences
        .iter()
        .zip(surface)
        .zip(content)
        .zip(rhetorical)
        .map(|(((sentence, s), c), r)| FeatureScore {
            index: sentence.index,
            overall: s.final_score + c.final_score + r.final_score,
            surface: s.final_score,
            content: c.final_score,
            rhetorical: r.final_score,
            cleaned: sentence.cleaned.clone(),
            original: sentence.original.clone(),
        })
        .collect())
}
