//! Top-level ExtractSum configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{BatchConfig, EmbeddingConfig, OutputConfig, ScoringConfig, TopicConfig};
use crate::constants;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`EXTRACTSUM_*`)
/// 3. Project config (`extractsum.toml` in the working root)
/// 4. User config (`~/.extractsum/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ExtractSumConfig {
    pub topics: TopicConfig,
    pub scoring: ScoringConfig,
    pub embeddings: EmbeddingConfig,
    pub output: OutputConfig,
    pub batch: BatchConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub config_file: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub embeddings: Option<PathBuf>,
    pub topics: Option<usize>,
    pub seed: Option<u64>,
    pub parallel: Option<bool>,
}

impl ExtractSumConfig {
    /// Load configuration with layered resolution rooted at `root`.
    ///
    /// An explicit `--config` file replaces the project file layer and must exist.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Lowest priority: user config.
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(_) => {
                        // An unreadable user config is not fatal; keep defaults.
                    }
                }
            }
        }

        // Project config, or the file named on the command line.
        match cli_overrides.and_then(|c| c.config_file.as_ref()) {
            Some(explicit) => {
                if !explicit.exists() {
                    return Err(ConfigError::FileNotFound {
                        path: explicit.display().to_string(),
                    });
                }
                Self::merge_toml_file(&mut config, explicit)?;
            }
            None => {
                let project_config_path = root.join(constants::PROJECT_CONFIG_FILE);
                if project_config_path.exists() {
                    Self::merge_toml_file(&mut config, &project_config_path)?;
                }
            }
        }

        Self::apply_env_overrides(&mut config);

        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &ExtractSumConfig) -> Result<(), ConfigError> {
        if config.topics.topics == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "topics.topics".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if config.topics.lexical_max_iter == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "topics.lexical_max_iter".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if config.topics.embedding_max_iter == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "topics.embedding_max_iter".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if let Some(tol) = config.topics.tolerance {
            if !(tol >= 0.0 && tol.is_finite()) {
                return Err(ConfigError::ValidationFailed {
                    field: "topics.tolerance".to_string(),
                    message: "must be a finite, non-negative number".to_string(),
                });
            }
        }
        if let Some(cap) = config.scoring.length_cap {
            if !(cap >= 0.0 && cap.is_finite()) {
                return Err(ConfigError::ValidationFailed {
                    field: "scoring.length_cap".to_string(),
                    message: "must be a finite, non-negative number".to_string(),
                });
            }
        }
        if let Some(ceiling) = config.scoring.high_frequency_ceiling {
            if !(ceiling > 0.0 && ceiling.is_finite()) {
                return Err(ConfigError::ValidationFailed {
                    field: "scoring.high_frequency_ceiling".to_string(),
                    message: "must be a finite, positive number".to_string(),
                });
            }
        }
        if config.batch.threads == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "batch.threads".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }

    /// Returns the user config path: `~/.extractsum/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        dirs_path().map(|d| d.join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut ExtractSumConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: ExtractSumConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        debug!(path = %path.display(), "merged config file");
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins only where it has a `Some` value.
    fn merge(base: &mut ExtractSumConfig, other: &ExtractSumConfig) {
        // Topics
        if other.topics.topics.is_some() {
            base.topics.topics = other.topics.topics;
        }
        if other.topics.lexical_max_iter.is_some() {
            base.topics.lexical_max_iter = other.topics.lexical_max_iter;
        }
        if other.topics.embedding_max_iter.is_some() {
            base.topics.embedding_max_iter = other.topics.embedding_max_iter;
        }
        if other.topics.tolerance.is_some() {
            base.topics.tolerance = other.topics.tolerance;
        }
        if other.topics.seed.is_some() {
            base.topics.seed = other.topics.seed;
        }
        if other.topics.top_words.is_some() {
            base.topics.top_words = other.topics.top_words;
        }

        // Scoring
        if other.scoring.length_threshold.is_some() {
            base.scoring.length_threshold = other.scoring.length_threshold;
        }
        if other.scoring.length_cap.is_some() {
            base.scoring.length_cap = other.scoring.length_cap;
        }
        if other.scoring.high_frequency_ceiling.is_some() {
            base.scoring.high_frequency_ceiling = other.scoring.high_frequency_ceiling;
        }
        if other.scoring.frequent_tokens.is_some() {
            base.scoring.frequent_tokens = other.scoring.frequent_tokens;
        }

        // Embeddings
        if other.embeddings.path.is_some() {
            base.embeddings.path = other.embeddings.path.clone();
        }

        // Output
        if other.output.dir.is_some() {
            base.output.dir = other.output.dir.clone();
        }
        if other.output.variant_folders.is_some() {
            base.output.variant_folders = other.output.variant_folders;
        }

        // Batch
        if other.batch.parallel.is_some() {
            base.batch.parallel = other.batch.parallel;
        }
        if other.batch.threads.is_some() {
            base.batch.threads = other.batch.threads;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `EXTRACTSUM_TOPICS`, `EXTRACTSUM_EMBEDDINGS`, etc.
    fn apply_env_overrides(config: &mut ExtractSumConfig) {
        if let Ok(val) = std::env::var("EXTRACTSUM_TOPICS") {
            if let Ok(v) = val.parse::<usize>() {
                config.topics.topics = Some(v);
            }
        }
        if let Ok(val) = std::env::var("EXTRACTSUM_SEED") {
            if let Ok(v) = val.parse::<u64>() {
                config.topics.seed = Some(v);
            }
        }
        if let Ok(val) = std::env::var("EXTRACTSUM_EMBEDDINGS") {
            config.embeddings.path = Some(PathBuf::from(val));
        }
        if let Ok(val) = std::env::var("EXTRACTSUM_OUTPUT_DIR") {
            config.output.dir = Some(PathBuf::from(val));
        }
        if let Ok(val) = std::env::var("EXTRACTSUM_BATCH_PARALLEL") {
            if let Ok(v) = val.parse::<bool>() {
                config.batch.parallel = Some(v);
            }
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut ExtractSumConfig, cli: &CliOverrides) {
        if let Some(ref v) = cli.output_dir {
            config.output.dir = Some(v.clone());
        }
        if let Some(ref v) = cli.embeddings {
            config.embeddings.path = Some(v.clone());
        }
        if let Some(v) = cli.topics {
            config.topics.topics = Some(v);
        }
        if let Some(v) = cli.seed {
            config.topics.seed = Some(v);
        }
        if let Some(v) = cli.parallel {
            config.batch.parallel = Some(v);
        }
    }

    /// A copy with every defaulted field filled in, for display.
    /// Settings without a default (embedding path, thread count) stay as they are.
    pub fn resolved(&self) -> ExtractSumConfig {
        let mut resolved = self.clone();
        let topics = &mut resolved.topics;
        topics.topics = Some(self.topics.effective_topics());
        topics.lexical_max_iter = Some(self.topics.effective_lexical_max_iter());
        topics.embedding_max_iter = Some(self.topics.effective_embedding_max_iter());
        topics.tolerance = Some(self.topics.effective_tolerance());
        topics.seed = Some(self.topics.effective_seed());
        topics.top_words = Some(self.topics.effective_top_words());

        let scoring = &mut resolved.scoring;
        scoring.length_threshold = Some(self.scoring.effective_length_threshold());
        scoring.length_cap = Some(self.scoring.effective_length_cap());
        scoring.high_frequency_ceiling = Some(self.scoring.effective_high_frequency_ceiling());
        scoring.frequent_tokens = Some(self.scoring.effective_frequent_tokens());

        resolved.output.dir = Some(self.output.effective_dir());
        resolved.output.variant_folders = Some(self.output.effective_variant_folders());
        resolved.batch.parallel = Some(self.batch.effective_parallel());
        resolved
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Returns the user-level config directory: `~/.extractsum/`.
fn dirs_path() -> Option<PathBuf> {
    home_dir().map(|h| h.join(".extractsum"))
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
