/// ExtractSum version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Candidate sentences with fewer whitespace tokens than this are dropped.
pub const MIN_SENTENCE_TOKENS: usize = 3;

/// Requested topic count for both topic models.
pub const DEFAULT_TOPIC_COUNT: usize = 30;

/// Maximum iterations for the lexical (TF-IDF only) factorization.
pub const DEFAULT_LEXICAL_MAX_ITER: usize = 3000;

/// Maximum iterations for the embedding-augmented factorization.
pub const DEFAULT_EMBEDDING_MAX_ITER: usize = 1000;

/// Relative reconstruction-error improvement below which NMF stops.
pub const DEFAULT_NMF_TOLERANCE: f64 = 1e-4;

/// Seed for NMF initialization.
pub const DEFAULT_SEED: u64 = 0;

/// Feature labels reported per topic for inspection.
pub const DEFAULT_TOP_WORDS: usize = 10;

/// Cleaned sentences at or below this token count earn no length score.
pub const LENGTH_THRESHOLD: usize = 5;

/// Upper bound of the surface length score.
pub const LENGTH_SCORE_CAP: f64 = 5.0;

/// The high-frequency series is rescaled so its maximum equals this.
pub const HIGH_FREQUENCY_CEILING: f64 = 5.0;

/// Number of most frequent corpus tokens used by the content scorer.
pub const FREQUENT_TOKEN_COUNT: usize = 10;

/// Summaries keep sentences ranked within `sentence_count / SUMMARY_DIVISOR`.
pub const SUMMARY_DIVISOR: usize = 3;

/// Default root for per-document artifact namespaces.
pub const DEFAULT_OUTPUT_DIR: &str = "Summary";

/// Project-level config file name.
pub const PROJECT_CONFIG_FILE: &str = "extractsum.toml";

/// Environment variable holding the tracing filter.
pub const LOG_ENV_VAR: &str = "EXTRACTSUM_LOG";
