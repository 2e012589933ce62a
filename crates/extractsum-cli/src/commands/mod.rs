//! One module per subcommand.

mod batch;
mod config;
mod evaluate;
mod run;
mod stage;
mod variants;

use std::process::ExitCode;

use anyhow::Context;
use extractsum_core::errors::PipelineError;
use extractsum_core::ExtractSumConfig;

use crate::cli::{Cli, Command};

/// Resolve the layered configuration rooted at the working directory.
fn load_config(cli: &Cli) -> anyhow::Result<ExtractSumConfig> {
    let root = std::env::current_dir().context("cannot determine the working directory")?;
    let overrides = cli.global.overrides(cli.command.parallel());
    Ok(ExtractSumConfig::load(&root, Some(&overrides)).map_err(PipelineError::from)?)
}

pub fn dispatch(cli: &Cli) -> anyhow::Result<ExitCode> {
    let config = load_config(cli)?;
    let json = cli.global.json;
    match &cli.command {
        Command::Run { document } => run::execute(config, document, json),
        Command::Stage { name, document } => stage::execute(config, name, document, json),
        Command::Batch { documents, .. } => batch::execute(config, documents, json),
        Command::Evaluate { reference_dir } => evaluate::execute(&config, reference_dir, json),
        Command::Variants => variants::execute(json),
        Command::Config => config::execute(&config, json),
    }
}
