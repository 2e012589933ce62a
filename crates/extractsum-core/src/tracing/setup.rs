//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::LOG_ENV_VAR;

static INIT: Once = Once::new();

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Initialize the ExtractSum tracing/logging system.
///
/// Reads `EXTRACTSUM_LOG` for per-crate log levels, e.g.
/// `EXTRACTSUM_LOG=extractsum_topics=debug,extractsum_pipeline=info`.
/// Falls back to `default_filter` (or `extractsum=info` style defaults) when
/// the variable is unset or invalid. Logs go to stderr so stage output on
/// stdout stays clean.
///
/// Idempotent: only the first call installs a subscriber.
pub fn init_tracing(default_filter: Option<&str>, format: LogFormat) {
    INIT.call_once(|| {
        let fallback = default_filter.unwrap_or(
            "extractsum_core=info,extractsum_text=info,extractsum_embeddings=info,\
             extractsum_topics=info,extractsum_scoring=info,extractsum_storage=info,\
             extractsum_eval=info,extractsum_pipeline=info,extractsum=info",
        );
        let filter =
            EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(fallback));

        let registry = tracing_subscriber::registry().with(filter);
        let result = match format {
            LogFormat::Json => registry
                .with(fmt::layer().json().with_target(true).with_writer(std::io::stderr))
                .try_init(),
            LogFormat::Text => registry
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_thread_ids(true)
                        .with_writer(std::io::stderr),
                )
                .try_init(),
        };
        // Another subscriber may already be installed by an embedding host.
        let _ = result;
    });
}
