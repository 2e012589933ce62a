//! Configuration system for ExtractSum.
//! TOML-based, 5-layer resolution: CLI > env > project > user > defaults.

pub mod batch_config;
pub mod embedding_config;
pub mod extractsum_config;
pub mod output_config;
pub mod scoring_config;
pub mod topic_config;

pub use batch_config::BatchConfig;
pub use embedding_config::EmbeddingConfig;
pub use extractsum_config::{CliOverrides, ExtractSumConfig};
pub use output_config::OutputConfig;
pub use scoring_config::ScoringConfig;
pub use topic_config::TopicConfig;
