use std::process::ExitCode;

use extractsum_core::errors::PipelineError;
use extractsum_core::ExtractSumConfig;

use crate::output::print_json;

pub fn execute(config: &ExtractSumConfig, json: bool) -> anyhow::Result<ExitCode> {
    let resolved = config.resolved();
    if json {
        print_json(&resolved)?;
    } else {
        print!("{}", resolved.to_toml().map_err(PipelineError::from)?);
    }
    Ok(ExitCode::SUCCESS)
}
