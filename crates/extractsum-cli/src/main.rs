//! `extractsum` binary.

mod cli;
mod commands;
mod output;

use std::process::ExitCode;

use clap::Parser;
use extractsum_core::errors::{ExtractSumErrorCode, PipelineError};
use extractsum_core::tracing::{init_tracing, LogFormat};

use crate::cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = cli.global.log_level.as_deref().map(output::filter_for_level);
    let format = if cli.global.json {
        LogFormat::Json
    } else {
        LogFormat::Text
    };
    init_tracing(filter.as_deref(), format);

    match commands::dispatch(&cli) {
        Ok(code) => code,
        Err(error) => {
            match error.downcast_ref::<PipelineError>() {
                Some(pipeline) => eprintln!("error [{}]: {error:#}", pipeline.error_code()),
                None => eprintln!("error: {error:#}"),
            }
            ExitCode::FAILURE
        }
    }
}
