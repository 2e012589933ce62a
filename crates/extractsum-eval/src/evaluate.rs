//! Score every per-variant summary folder against a reference directory.

use std::path::{Path, PathBuf};

use extractsum_core::errors::{EvalError, ExtractSumResult};
use extractsum_storage::{write_json, ArtifactStore};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::rouge::{rouge, RougeScores};

/// Directory under the output root that receives evaluation results.
pub const ROUGE_DIR: &str = "rouge";
pub const AVERAGES_FILE: &str = "averages.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationRecord {
    pub doc: String,
    #[serde(flatten)]
    pub scores: RougeScores,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantEvaluation {
    pub folder: String,
    pub records: Vec<EvaluationRecord>,
    /// Mean over `records`; absent when no generated file matched a reference.
    pub average: Option<RougeScores>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AverageRow {
    pub folder: String,
    pub documents: usize,
    #[serde(flatten)]
    pub scores: RougeScores,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EvaluationReport {
    pub variants: Vec<VariantEvaluation>,
}

impl EvaluationReport {
    /// One row per variant that had at least one matched document.
    pub fn averages(&self) -> Vec<AverageRow> {
        self.variants
            .iter()
            .filter_map(|v| {
                v.average.map(|scores| AverageRow {
                    folder: v.folder.clone(),
                    documents: v.records.len(),
                    scores,
                })
            })
            .collect()
    }
}

fn read_text(path: &Path) -> Result<String, EvalError> {
    std::fs::read_to_string(path).map_err(|e| EvalError::Unreadable {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

/// `*.txt` files in `dir` as (stem, path), sorted by stem.
fn reference_files(dir: &Path) -> Result<Vec<(String, PathBuf)>, EvalError> {
    if !dir.is_dir() {
        return Err(EvalError::ReferenceDirNotFound {
            path: dir.display().to_string(),
        });
    }
    let entries = std::fs::read_dir(dir).map_err(|e| EvalError::Unreadable {
        path: dir.display().to_string(),
        reason: e.to_string(),
    })?;
    let mut files: Vec<(String, PathBuf)> = entries
        .filter_map(Result::ok)
        .map(|e| e.path())
        .filter(|p| p.is_file() && p.extension().is_some_and(|ext| ext == "txt"))
        .filter_map(|p| {
            let stem = p.file_stem()?.to_string_lossy().into_owned();
            Some((stem, p))
        })
        .collect();
    files.sort();
    if files.is_empty() {
        return Err(EvalError::NoReferences {
            path: dir.display().to_string(),
        });
    }
    Ok(files)
}

/// Pair each reference with `<output_dir>/variants/<folder>/<stem>.txt` for
/// every variant folder, then write `<output_dir>/rouge/<folder>.json` and
/// `<output_dir>/rouge/averages.json`.
///
/// References without a generated counterpart in a folder are skipped for
/// that folder.
pub fn evaluate_dir(reference_dir: &Path, output_dir: &Path) -> ExtractSumResult<EvaluationReport> {
    let references = reference_files(reference_dir)?;
    let store = ArtifactStore::new(output_dir);
    let rouge_dir = output_dir.join(ROUGE_DIR);

    let reference_texts = references
        .iter()
        .map(|(stem, path)| Ok((stem.as_str(), read_text(path)?)))
        .collect::<Result<Vec<_>, EvalError>>()?;

    let mut report = EvaluationReport::default();
    for folder in store.variant_folders()? {
        let variant_dir = store.variant_dir(&folder);
        let mut records = Vec::new();
        for (stem, reference) in &reference_texts {
            let generated_path = variant_dir.join(format!("{stem}.txt"));
            if !generated_path.is_file() {
                continue;
            }
            let generated = read_text(&generated_path)?;
            records.push(EvaluationRecord {
                doc: (*stem).to_string(),
                scores: rouge(reference, &generated),
            });
        }
        if records.is_empty() {
            warn!(folder = %folder, "no generated summary matches a reference");
        }

        let scores: Vec<RougeScores> = records.iter().map(|r| r.scores).collect();
        let evaluation = VariantEvaluation {
            average: RougeScores::mean(&scores),
            folder,
            records,
        };
        write_json(&rouge_dir.join(format!("{}.json", evaluation.folder)), &evaluation)?;
        report.variants.push(evaluation);
    }

    write_json(&rouge_dir.join(AVERAGES_FILE), &report.averages())?;
    info!(
        references = references.len(),
        variants = report.variants.len(),
        "ROUGE evaluation complete"
    );
    Ok(report)
}
