//! Test fixture loader for ExtractSum sample documents, embedding tables,
//! reference summaries and golden scenarios.
//!
//! Shared by the integration tests of every crate in the workspace.

use serde::de::DeserializeOwned;
use std::path::PathBuf;

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").join("documents").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixture_path(relative_path).exists()
}

/// Path of a sample document under `documents/`.
pub fn document_path(name: &str) -> PathBuf {
    fixture_path(&format!("documents/{name}"))
}

/// Read a sample document as text.
///
/// # Panics
/// Panics if the file doesn't exist.
pub fn load_document(name: &str) -> String {
    let path = document_path(name);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e))
}

/// The 5-dimensional GloVe-format table covering the sample documents' vocabulary.
pub fn mini_embeddings_path() -> PathBuf {
    fixture_path("embeddings/glove_mini_5d.txt")
}

/// Directory of hand-written reference summaries, one per sample document.
pub fn references_dir() -> PathBuf {
    fixture_path("references")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixture_path(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixtures_root_exists() {
        assert!(fixtures_root().exists(), "test-fixtures directory not found");
    }

    #[test]
    fn all_sample_documents_exist() {
        for f in [
            "documents/service_terms.txt",
            "documents/privacy_terms.txt",
            "documents/single_sentence.txt",
            "embeddings/glove_mini_5d.txt",
            "references/service_terms.txt",
            "references/privacy_terms.txt",
            "golden/dense_rank_12.json",
        ] {
            assert!(fixture_exists(f), "Missing fixture: {}", f);
        }
    }

    #[test]
    fn golden_dense_rank_parses() {
        let golden: serde_json::Value = load_fixture("golden/dense_rank_12.json");
        assert_eq!(golden["scores"].as_array().unwrap().len(), 12);
        assert_eq!(golden["expected_selected"].as_array().unwrap().len(), 6);
    }
}
