use std::path::Path;
use std::process::ExitCode;

use extractsum_core::models::SelectedSentence;
use extractsum_core::ExtractSumConfig;
use extractsum_pipeline::{run_document, PipelineContext};
use serde::Serialize;

use crate::output::{print_json, print_table};

#[derive(Serialize)]
struct RunSummary<'a> {
    doc: &'a str,
    sentences: usize,
    artifacts: String,
    variants: Vec<VariantLine<'a>>,
    summary: &'a [SelectedSentence],
}

#[derive(Serialize)]
struct VariantLine<'a> {
    variant: &'a str,
    cutoff: usize,
    selected: usize,
}

pub fn execute(config: ExtractSumConfig, document: &Path, json: bool) -> anyhow::Result<ExitCode> {
    let ctx = PipelineContext::new(config);
    let output = run_document(&ctx, document)?;
    let artifacts = ctx.store.document(&output.doc).dir().display().to_string();

    if json {
        let variants = output
            .summaries
            .iter()
            .chain([&output.combined_summary])
            .map(|s| VariantLine {
                variant: &s.variant,
                cutoff: s.cutoff,
                selected: s.selected.len(),
            })
            .collect();
        print_json(&RunSummary {
            doc: &output.doc,
            sentences: output.sentences.len(),
            artifacts,
            variants,
            summary: &output.combined_summary.selected,
        })?;
        return Ok(ExitCode::SUCCESS);
    }

    println!(
        "{}: {} sentences, artifacts in {}",
        output.doc,
        output.sentences.len(),
        artifacts
    );
    let rows: Vec<Vec<String>> = output
        .summaries
        .iter()
        .chain([&output.combined_summary])
        .map(|s| {
            vec![
                s.name.clone(),
                s.cutoff.to_string(),
                s.selected.len().to_string(),
            ]
        })
        .collect();
    print_table(&["Variant", "Cutoff", "Selected"], &rows);
    println!();
    println!("{}", output.combined_summary.text());
    Ok(ExitCode::SUCCESS)
}
