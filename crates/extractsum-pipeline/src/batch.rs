//! Many documents, one pipeline each. Failures are collected, not fatal.

use std::path::{Path, PathBuf};
use std::time::Instant;

use extractsum_core::errors::{ExtractSumErrorCode, InputError, PipelineError};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use serde::Serialize;
use tracing::{info, warn};

use crate::context::PipelineContext;
use crate::document::document_stem;
use crate::runner::run_document;

#[derive(Debug, Clone, Serialize)]
pub struct BatchSuccess {
    pub doc: String,
    pub sentences: usize,
    /// Sentences in the combined summary.
    pub selected: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct BatchFailure {
    pub doc: String,
    pub path: PathBuf,
    pub code: &'static str,
    pub message: String,
}

/// Outcome of a batch, in input order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchReport {
    pub succeeded: Vec<BatchSuccess>,
    pub failed: Vec<BatchFailure>,
    pub duration_ms: u64,
}

impl BatchReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn total(&self) -> usize {
        self.succeeded.len() + self.failed.len()
    }
}

type DocumentOutcome = Result<BatchSuccess, BatchFailure>;

/// Input position plus path, so outcomes can be put back in input order.
type Job<'p> = (usize, &'p Path);

fn process(ctx: &PipelineContext, path: &Path) -> DocumentOutcome {
    match run_document(ctx, path) {
        Ok(output) => Ok(BatchSuccess {
            doc: output.doc,
            sentences: output.sentences.len(),
            selected: output.combined_summary.selected.len(),
        }),
        Err(error) => {
            let failure = failure(path, &error);
            warn!(doc = %failure.doc, code = failure.code, error = %failure.message, "document failed");
            Err(failure)
        }
    }
}

fn failure(path: &Path, error: &PipelineError) -> BatchFailure {
    BatchFailure {
        doc: document_stem(path),
        path: path.to_path_buf(),
        code: error.error_code(),
        message: error.to_string(),
    }
}

/// Split `paths` into jobs with a namespace of their own and failures for
/// every later path whose file stem was already claimed.
fn claim_namespaces(paths: &[PathBuf]) -> (Vec<Job<'_>>, Vec<(usize, BatchFailure)>) {
    let mut claimed: FxHashMap<String, &Path> = FxHashMap::default();
    let mut jobs = Vec::with_capacity(paths.len());
    let mut duplicates = Vec::new();
    for (position, path) in paths.iter().enumerate() {
        let doc = document_stem(path);
        match claimed.get(&doc) {
            Some(first) => {
                let error = PipelineError::from(InputError::DuplicateNamespace {
                    path: path.display().to_string(),
                    doc,
                    first: first.display().to_string(),
                });
                let failure = failure(path, &error);
                warn!(doc = %failure.doc, error = %failure.message, "document skipped");
                duplicates.push((position, failure));
            }
            None => {
                claimed.insert(doc, path);
                jobs.push((position, path.as_path()));
            }
        }
    }
    (jobs, duplicates)
}

fn run_sequential(ctx: &PipelineContext, jobs: &[Job<'_>]) -> Vec<(usize, DocumentOutcome)> {
    jobs.iter().map(|&(i, p)| (i, process(ctx, p))).collect()
}

fn run_parallel(ctx: &PipelineContext, jobs: &[Job<'_>]) -> Vec<(usize, DocumentOutcome)> {
    let work = || -> Vec<(usize, DocumentOutcome)> {
        jobs.par_iter().map(|&(i, p)| (i, process(ctx, p))).collect()
    };
    match ctx.config.batch.threads {
        Some(threads) => match rayon::ThreadPoolBuilder::new().num_threads(threads).build() {
            Ok(pool) => pool.install(work),
            Err(e) => {
                warn!(threads, error = %e, "cannot build thread pool; using the global pool");
                work()
            }
        },
        None => work(),
    }
}

/// Summarize every document in `paths`, sequentially or on the rayon pool
/// per `batch.parallel`. Each document writes its own namespace; the
/// embedding table is loaded once and shared. A path whose file stem repeats
/// an earlier one is not run and is reported as a failure.
pub fn run_batch(ctx: &PipelineContext, paths: &[PathBuf]) -> BatchReport {
    let start = Instant::now();
    let parallel = ctx.config.batch.effective_parallel();
    info!(documents = paths.len(), parallel, "batch started");

    let (jobs, duplicates) = claim_namespaces(paths);
    let mut outcomes = if parallel {
        run_parallel(ctx, &jobs)
    } else {
        run_sequential(ctx, &jobs)
    };
    outcomes.extend(duplicates.into_iter().map(|(i, failure)| (i, Err(failure))));
    outcomes.sort_by_key(|&(i, _)| i);

    let mut report = BatchReport::default();
    for (_, outcome) in outcomes {
        match outcome {
            Ok(success) => report.succeeded.push(success),
            Err(failure) => report.failed.push(failure),
        }
    }
    report.duration_ms = start.elapsed().as_millis() as u64;

    info!(
        succeeded = report.succeeded.len(),
        failed = report.failed.len(),
        duration_ms = report.duration_ms,
        "batch finished"
    );
    report
}
