//! Feature scorer configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Tunable constants of the surface and content scorers.
///
/// The defaults are the hand-tuned values the scorers were calibrated with;
/// they are exposed, not derived.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ScoringConfig {
    /// Token count at or below which the length score is zero. Default: 5.
    pub length_threshold: Option<usize>,
    /// Cap on the length score. Default: 5.0.
    pub length_cap: Option<f64>,
    /// Maximum of the rescaled high-frequency series. Default: 5.0.
    pub high_frequency_ceiling: Option<f64>,
    /// Most frequent corpus tokens compared against. Default: 10.
    pub frequent_tokens: Option<usize>,
}

impl ScoringConfig {
    pub fn effective_length_threshold(&self) -> usize {
        self.length_threshold
            .unwrap_or(constants::LENGTH_THRESHOLD)
    }

    pub fn effective_length_cap(&self) -> f64 {
        self.length_cap.unwrap_or(constants::LENGTH_SCORE_CAP)
    }

    pub fn effective_high_frequency_ceiling(&self) -> f64 {
        self.high_frequency_ceiling
            .unwrap_or(constants::HIGH_FREQUENCY_CEILING)
    }

    pub fn effective_frequent_tokens(&self) -> usize {
        self.frequent_tokens
            .unwrap_or(constants::FREQUENT_TOKEN_COUNT)
    }
}
