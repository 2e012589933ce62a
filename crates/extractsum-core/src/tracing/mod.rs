//! Observability for ExtractSum.
//! `tracing` with `EnvFilter`, per-crate log levels via `EXTRACTSUM_LOG`.

pub mod setup;

pub use setup::{init_tracing, LogFormat};
