use std::path::Path;
use std::process::ExitCode;

use extractsum_core::errors::PipelineError;
use extractsum_core::ExtractSumConfig;
use extractsum_pipeline::{run_stage, PipelineContext, Stage};

use crate::output::print_json;

pub fn execute(
    config: ExtractSumConfig,
    name: &str,
    document: &Path,
    json: bool,
) -> anyhow::Result<ExitCode> {
    let stage: Stage = name.parse().map_err(PipelineError::from)?;
    let ctx = PipelineContext::new(config);
    let report = run_stage(&ctx, stage, document)?;

    if json {
        print_json(&report)?;
        return Ok(ExitCode::SUCCESS);
    }

    println!("{} [{}]: {} rows", report.doc, report.stage, report.rows);
    for artifact in &report.artifacts {
        println!("  {}", ctx.store.document(&report.doc).path(artifact).display());
    }
    if let Some(summary) = &report.summary {
        println!();
        println!("{}", summary.text());
    }
    Ok(ExitCode::SUCCESS)
}
