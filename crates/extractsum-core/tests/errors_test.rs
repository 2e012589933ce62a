//! Error display and code mapping.

use extractsum_core::errors::{
    DataError, EmbeddingError, ExtractSumErrorCode, InputError, PipelineError,
};

#[test]
fn missing_prerequisite_names_the_stage_to_run() {
    let err = InputError::MissingPrerequisite {
        doc: "tos".to_string(),
        artifact: "01_sentences.json".to_string(),
        run_first: "segment".to_string(),
    };
    let msg = err.to_string();
    assert!(msg.contains("01_sentences.json"));
    assert!(msg.contains("'segment'"));
    assert_eq!(err.error_code(), "MISSING_PREREQUISITE");
}

#[test]
fn row_count_mismatch_is_an_alignment_error() {
    let err: PipelineError = DataError::RowCountMismatch {
        artifact: "05_surface_features.json".to_string(),
        expected: 10,
        actual: 9,
    }
    .into();
    assert_eq!(err.error_code(), "ALIGNMENT_ERROR");
    assert!(err.to_string().starts_with("Data error:"));
}

#[test]
fn pipeline_error_delegates_codes() {
    let err: PipelineError = EmbeddingError::NotConfigured.into();
    assert_eq!(err.error_code(), "EMBEDDING_ERROR");

    let err: PipelineError = DataError::ZeroWeightSum {
        model: "lexical".to_string(),
    }
    .into();
    assert_eq!(err.error_code(), "DATA_ERROR");
}
