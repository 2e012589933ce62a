use std::path::PathBuf;
use std::process::ExitCode;

use extractsum_core::ExtractSumConfig;
use extractsum_pipeline::{run_batch, PipelineContext};

use crate::output::{print_json, print_table};

/// Exit status is failure when any document failed.
pub fn execute(
    config: ExtractSumConfig,
    documents: &[PathBuf],
    json: bool,
) -> anyhow::Result<ExitCode> {
    let ctx = PipelineContext::new(config);
    let report = run_batch(&ctx, documents);

    if json {
        print_json(&report)?;
    } else {
        let rows: Vec<Vec<String>> = report
            .succeeded
            .iter()
            .map(|s| {
                vec![
                    s.doc.clone(),
                    "ok".to_string(),
                    format!("{} of {} sentences", s.selected, s.sentences),
                ]
            })
            .chain(report.failed.iter().map(|f| {
                vec![f.doc.clone(), f.code.to_string(), f.message.clone()]
            }))
            .collect();
        print_table(&["Document", "Status", "Detail"], &rows);
        println!(
            "{} succeeded, {} failed in {} ms",
            report.succeeded.len(),
            report.failed.len(),
            report.duration_ms
        );
    }

    Ok(if report.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
