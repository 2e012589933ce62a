//! End-to-end runs over the sample documents.

use std::path::PathBuf;
use std::sync::Arc;

use extractsum_core::config::{BatchConfig, OutputConfig, TopicConfig};
use extractsum_core::errors::{DataError, ExtractSumErrorCode, InputError, PipelineError};
use extractsum_core::{ExtractSumConfig, SentenceRecord};
use extractsum_pipeline::{run_batch, run_document, run_stage, PipelineContext, Stage};
use extractsum_scoring::{COMBINED, VARIANTS};
use extractsum_storage::names;

fn config(output: &std::path::Path) -> ExtractSumConfig {
    let mut config = ExtractSumConfig {
        topics: TopicConfig {
            topics: Some(4),
            lexical_max_iter: Some(200),
            embedding_max_iter: Some(200),
            ..Default::default()
        },
        output: OutputConfig {
            dir: Some(output.to_path_buf()),
            variant_folders: Some(true),
        },
        ..Default::default()
    };
    config.embeddings.path = Some(test_fixtures::mini_embeddings_path());
    config
}

#[test]
fn full_run_writes_every_artifact() {
    let out = tempfile::tempdir().unwrap();
    let ctx = PipelineContext::new(config(out.path()));
    let output = run_document(&ctx, &test_fixtures::document_path("service_terms.txt")).unwrap();

    assert_eq!(output.doc, "service_terms");
    assert_eq!(output.keywords.len(), output.sentences.len());
    assert_eq!(output.rankings.len(), 9);
    assert_eq!(output.summaries.len(), 9);

    let doc = ctx.store.document("service_terms");
    for name in [
        names::SENTENCES,
        names::KEYWORD_ANALYSIS,
        names::LEXICAL_TOPIC_MODEL,
        names::EMBEDDING_TOPIC_MODEL,
        names::TOPIC_WORDS,
        names::GRS_SCORES,
        names::SURFACE_FEATURES,
        names::CONTENT_FEATURES,
        names::RHETORICAL_FEATURES,
        names::FEATURE_SCORES,
        names::COMBINED_RANKING,
        names::SUMMARY_TEXT,
    ] {
        assert!(doc.exists(name), "missing {name}");
    }
    for variant in VARIANTS.iter() {
        assert!(doc.exists(&names::variant_ranking(variant.slug)));
    }

    assert_eq!(doc.read_summary_text().unwrap(), output.combined_summary.text());
    for folder in VARIANTS.iter().map(|v| v.folder).chain([COMBINED.folder]) {
        assert!(ctx.store.variant_dir(folder).join("service_terms.txt").is_file());
        assert!(ctx.store.variant_dir(folder).join("service_terms.json").is_file());
    }

    // Summaries hold at least a third of the document, in document order.
    let n = output.sentences.len();
    for summary in output.summaries.iter().chain([&output.combined_summary]) {
        assert_eq!(summary.cutoff, n / 3);
        assert!(summary.selected.len() >= n / 3);
        assert!(summary.selected.windows(2).all(|p| p[0].index < p[1].index));
    }
}

#[test]
fn stages_run_one_at_a_time_match_a_full_run() {
    let staged_out = tempfile::tempdir().unwrap();
    let full_out = tempfile::tempdir().unwrap();
    let doc_path = test_fixtures::document_path("privacy_terms.txt");

    let staged = PipelineContext::new(config(staged_out.path()));
    let mut last = None;
    for stage in Stage::ALL {
        last = Some(run_stage(&staged, stage, &doc_path).unwrap());
    }
    let extract = last.unwrap();
    assert_eq!(extract.stage, "extract");

    let full = PipelineContext::new(config(full_out.path()));
    let output = run_document(&full, &doc_path).unwrap();

    assert_eq!(extract.summary.unwrap(), output.combined_summary);
    assert_eq!(
        staged.store.document("privacy_terms").read_summary_text().unwrap(),
        full.store.document("privacy_terms").read_summary_text().unwrap()
    );
}

#[test]
fn stage_without_prerequisite_names_the_stage_to_run() {
    let out = tempfile::tempdir().unwrap();
    let ctx = PipelineContext::new(config(out.path()));
    let doc_path = test_fixtures::document_path("service_terms.txt");

    let err = run_stage(&ctx, Stage::Keywords, &doc_path).unwrap_err();
    assert_eq!(err.error_code(), "MISSING_PREREQUISITE");

    run_stage(&ctx, Stage::Segment, &doc_path).unwrap();
    let err = run_stage(&ctx, Stage::Grs, &doc_path).unwrap_err();
    match err {
        PipelineError::Input(InputError::MissingPrerequisite { run_first, artifact, .. }) => {
            assert_eq!(run_first, "topics");
            assert_eq!(artifact, names::LEXICAL_TOPIC_MODEL);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn missing_embeddings_fail_the_topic_stage_only() {
    let out = tempfile::tempdir().unwrap();
    let mut config = config(out.path());
    config.embeddings.path = None;
    let ctx = PipelineContext::new(config);
    let doc_path = test_fixtures::document_path("service_terms.txt");

    run_stage(&ctx, Stage::Segment, &doc_path).unwrap();
    run_stage(&ctx, Stage::Surface, &doc_path).unwrap();
    let err = run_stage(&ctx, Stage::Topics, &doc_path).unwrap_err();
    assert!(matches!(err, PipelineError::Embedding(_)));
}

#[test]
fn batch_records_failures_and_continues() {
    let out = tempfile::tempdir().unwrap();
    let empty = out.path().join("empty.txt");
    std::fs::write(&empty, "   \n").unwrap();

    let paths: Vec<PathBuf> = vec![
        test_fixtures::document_path("service_terms.txt"),
        out.path().join("missing.txt"),
        empty,
        test_fixtures::document_path("single_sentence.txt"),
    ];
    let ctx = PipelineContext::new(config(&out.path().join("summaries")));
    let report = run_batch(&ctx, &paths);

    assert_eq!(report.total(), 4);
    assert!(!report.is_success());
    let ok: Vec<&str> = report.succeeded.iter().map(|s| s.doc.as_str()).collect();
    assert_eq!(ok, vec!["service_terms", "single_sentence"]);
    // One sentence: cutoff 0, nothing selected, no error.
    assert_eq!(report.succeeded[1].sentences, 1);
    assert_eq!(report.succeeded[1].selected, 0);

    let failed: Vec<(&str, &str)> = report
        .failed
        .iter()
        .map(|f| (f.doc.as_str(), f.code))
        .collect();
    assert_eq!(failed, vec![("missing", "INPUT_ERROR"), ("empty", "INPUT_ERROR")]);
}

#[test]
fn parallel_batch_shares_one_embedding_table() {
    let out = tempfile::tempdir().unwrap();
    let mut config = config(out.path());
    config.batch = BatchConfig {
        parallel: Some(true),
        threads: Some(2),
    };
    let ctx = PipelineContext::new(config);
    let embeddings = Arc::clone(&ctx.embeddings);

    let paths = vec![
        test_fixtures::document_path("service_terms.txt"),
        test_fixtures::document_path("privacy_terms.txt"),
    ];
    let report = run_batch(&ctx, &paths);
    assert!(report.is_success(), "{:?}", report.failed);
    let docs: Vec<&str> = report.succeeded.iter().map(|s| s.doc.as_str()).collect();
    assert_eq!(docs, vec!["service_terms", "privacy_terms"]);
    assert!(embeddings.is_loaded());
    assert!(out.path().join("variants/01_nmf/privacy_terms.txt").is_file());
}

#[test]
fn batch_rejects_documents_that_share_a_file_stem() {
    let out = tempfile::tempdir().unwrap();
    let service = std::fs::read_to_string(test_fixtures::document_path("service_terms.txt")).unwrap();
    let privacy = std::fs::read_to_string(test_fixtures::document_path("privacy_terms.txt")).unwrap();
    let first = out.path().join("a/terms.txt");
    let second = out.path().join("b/terms.txt");
    std::fs::create_dir_all(first.parent().unwrap()).unwrap();
    std::fs::create_dir_all(second.parent().unwrap()).unwrap();
    std::fs::write(&first, &service).unwrap();
    std::fs::write(&second, &privacy).unwrap();

    let mut config = config(&out.path().join("summaries"));
    config.batch = BatchConfig {
        parallel: Some(true),
        threads: Some(2),
    };
    let ctx = PipelineContext::new(config);
    let report = run_batch(&ctx, &[first.clone(), second.clone()]);

    assert_eq!(report.total(), 2);
    assert_eq!(report.succeeded.len(), 1);
    assert_eq!(report.succeeded[0].doc, "terms");
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].path, second);
    assert_eq!(report.failed[0].code, "INPUT_ERROR");
    assert!(report.failed[0].message.contains(&first.display().to_string()));

    // The namespace holds the first document only.
    let stored: Vec<SentenceRecord> = ctx
        .store
        .document("terms")
        .read_table(names::SENTENCES)
        .unwrap();
    let expected = run_document(&PipelineContext::new(self::config(&out.path().join("check"))), &first)
        .unwrap()
        .sentences;
    assert_eq!(stored, expected);
}

#[test]
fn grs_rejects_topic_models_fitted_before_an_edit() {
    let out = tempfile::tempdir().unwrap();
    let ctx = PipelineContext::new(config(&out.path().join("summaries")));
    let original = std::fs::read_to_string(test_fixtures::document_path("service_terms.txt")).unwrap();
    let doc_path = out.path().join("service_terms.txt");
    std::fs::write(&doc_path, &original).unwrap();

    run_stage(&ctx, Stage::Segment, &doc_path).unwrap();
    run_stage(&ctx, Stage::Topics, &doc_path).unwrap();

    // Same sentence count, one sentence reworded.
    let edited = original.replacen("confidentiality", "secrecy", 1);
    assert_ne!(edited, original);
    std::fs::write(&doc_path, edited).unwrap();
    let before = ctx
        .store
        .document("service_terms")
        .read_table::<SentenceRecord>(names::SENTENCES)
        .unwrap()
        .len();
    let report = run_stage(&ctx, Stage::Segment, &doc_path).unwrap();
    assert_eq!(report.rows, before);

    let err = run_stage(&ctx, Stage::Grs, &doc_path).unwrap_err();
    assert!(matches!(err, PipelineError::Data(DataError::Misaligned { .. })), "{err}");
    assert_eq!(err.error_code(), "ALIGNMENT_ERROR");
}
