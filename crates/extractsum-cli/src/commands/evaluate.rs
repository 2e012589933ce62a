use std::path::Path;
use std::process::ExitCode;

use extractsum_core::ExtractSumConfig;
use extractsum_eval::evaluate_dir;

use crate::output::{print_json, print_table};

pub fn execute(config: &ExtractSumConfig, reference_dir: &Path, json: bool) -> anyhow::Result<ExitCode> {
    let output_dir = config.output.effective_dir();
    let report = evaluate_dir(reference_dir, &output_dir)?;
    let averages = report.averages();

    if json {
        print_json(&averages)?;
        return Ok(ExitCode::SUCCESS);
    }

    let rows: Vec<Vec<String>> = averages
        .iter()
        .map(|row| {
            vec![
                row.folder.clone(),
                row.documents.to_string(),
                format!("{:.4}", row.scores.rouge1),
                format!("{:.4}", row.scores.rouge2),
                format!("{:.4}", row.scores.rouge_l),
            ]
        })
        .collect();
    print_table(&["Variant", "Docs", "ROUGE-1", "ROUGE-2", "ROUGE-L"], &rows);
    println!("results in {}", output_dir.join("rouge").display());
    Ok(ExitCode::SUCCESS)
}
