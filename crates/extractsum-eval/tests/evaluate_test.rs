//! Directory evaluation against the fixture reference summaries.

use std::path::Path;

use extractsum_core::errors::{EvalError, PipelineError};
use extractsum_eval::{evaluate_dir, rouge, RougeScores};

fn write(path: &Path, text: &str) {
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, text).unwrap();
}

#[test]
fn references_match_generated_files_by_stem() {
    let refs = test_fixtures::references_dir();
    let out = tempfile::tempdir().unwrap();
    let service_ref = std::fs::read_to_string(refs.join("service_terms.txt")).unwrap();

    // A perfect copy in one folder, an unrelated text in another.
    write(&out.path().join("variants/01_nmf/service_terms.txt"), &service_ref);
    write(
        &out.path().join("variants/02_nmf_glove/service_terms.txt"),
        "zebra quantum lighthouse",
    );
    write(
        &out.path().join("variants/02_nmf_glove/privacy_terms.txt"),
        "We collect information that you provide.",
    );

    let report = evaluate_dir(&refs, out.path()).unwrap();
    assert_eq!(report.variants.len(), 2);

    let nmf = &report.variants[0];
    assert_eq!(nmf.folder, "01_nmf");
    assert_eq!(nmf.records.len(), 1);
    assert_eq!(nmf.records[0].scores.rouge1, 1.0);
    assert_eq!(nmf.average.unwrap().rouge_l, 1.0);

    let glove = &report.variants[1];
    let docs: Vec<&str> = glove.records.iter().map(|r| r.doc.as_str()).collect();
    assert_eq!(docs, vec!["privacy_terms", "service_terms"]);
    assert_eq!(glove.records[1].scores.rouge1, 0.0);
    assert!(glove.records[0].scores.rouge1 > 0.0);

    assert!(out.path().join("rouge/01_nmf.json").is_file());
    let averages: serde_json::Value = serde_json::from_str(
        &std::fs::read_to_string(out.path().join("rouge/averages.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(averages.as_array().unwrap().len(), 2);
    assert_eq!(averages[0]["folder"], "01_nmf");
    assert_eq!(averages[0]["rouge1"], 1.0);
}

#[test]
fn missing_reference_dir_is_reported() {
    let out = tempfile::tempdir().unwrap();
    let err = evaluate_dir(&out.path().join("nope"), out.path()).unwrap_err();
    assert!(matches!(
        err,
        PipelineError::Eval(EvalError::ReferenceDirNotFound { .. })
    ));
}

#[test]
fn empty_reference_dir_is_reported() {
    let refs = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    let err = evaluate_dir(refs.path(), out.path()).unwrap_err();
    assert!(matches!(err, PipelineError::Eval(EvalError::NoReferences { .. })));
}

#[test]
fn no_variant_folders_yields_empty_report() {
    let out = tempfile::tempdir().unwrap();
    let report = evaluate_dir(&test_fixtures::references_dir(), out.path()).unwrap();
    assert!(report.variants.is_empty());
    assert!(out.path().join("rouge/averages.json").is_file());
}

#[test]
fn rouge_is_symmetric_in_f_measure() {
    let a = "you agree to these terms and conditions";
    let b = "these terms apply to you";
    let ab = rouge(a, b);
    let ba = rouge(b, a);
    assert!((ab.rouge1 - ba.rouge1).abs() < 1e-12);
    assert!((ab.rouge_l - ba.rouge_l).abs() < 1e-12);
}

#[test]
fn empty_summary_or_reference_scores_zero() {
    let refs = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    // A one-sentence document extracts nothing, so its summary file is empty.
    write(&refs.path().join("single_sentence.txt"), "You agree to these terms.");
    write(&out.path().join("variants/01_nmf/single_sentence.txt"), "");
    write(&refs.path().join("blank_reference.txt"), "\n");
    write(
        &out.path().join("variants/01_nmf/blank_reference.txt"),
        "We may update these terms.",
    );

    let report = evaluate_dir(refs.path(), out.path()).unwrap();
    let nmf = &report.variants[0];
    assert_eq!(nmf.records.len(), 2);
    for record in &nmf.records {
        assert_eq!(record.scores, RougeScores::default(), "{}", record.doc);
    }
    let average = nmf.average.unwrap();
    assert!(average.rouge1.is_finite() && average.rouge2.is_finite() && average.rouge_l.is_finite());
    assert_eq!(average, RougeScores::default());
}
