//! Typed records passed between pipeline stages.
//!
//! Every per-sentence record carries the sentence index it belongs to plus
//! the cleaned and original text, so consumers can verify alignment instead
//! of trusting row position.

pub mod feature;
pub mod ranking;
pub mod scores;
pub mod sentence;
pub mod topic;

pub use feature::Feature;
pub use ranking::{RankedRow, RankedTable, SelectedSentence, Summary};
pub use scores::{
    ContentScore, FeatureScore, GrsScore, GrsScores, KeywordAnalysis, RhetoricalScore,
    SurfaceScore,
};
pub use sentence::SentenceRecord;
pub use topic::{TopicModel, TopicModelKind, TopicRow, TopicWords};
