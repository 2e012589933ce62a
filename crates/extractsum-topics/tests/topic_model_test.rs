//! Topic models built from the sample documents.

use extractsum_core::config::TopicConfig;
use extractsum_core::errors::DataError;
use extractsum_core::models::TopicModelKind;
use extractsum_core::{Lexicon, SentenceRecord};
use extractsum_embeddings::EmbeddingTable;
use extractsum_text::Segmenter;
use extractsum_topics::{factorize, NmfParams, TopicModelBuilder};
use ndarray::Array2;
use proptest::prelude::*;

fn service_sentences() -> Vec<SentenceRecord> {
    let lexicon = Lexicon::standard();
    let text = test_fixtures::load_document("service_terms.txt");
    Segmenter::new(&lexicon).segment(&text, "service_terms").unwrap()
}

fn small_config() -> TopicConfig {
    TopicConfig {
        topics: Some(5),
        lexical_max_iter: Some(300),
        embedding_max_iter: Some(300),
        ..Default::default()
    }
}

#[test]
fn both_models_have_one_row_per_sentence() {
    let sentences = service_sentences();
    let table = EmbeddingTable::load(&test_fixtures::mini_embeddings_path()).unwrap();
    let builder = TopicModelBuilder::new(&small_config());
    let (lexical, embedding) = builder.build_both(&sentences, &table).unwrap();

    assert_eq!(lexical.kind, TopicModelKind::Lexical);
    assert_eq!(lexical.sentence_count(), sentences.len());
    assert_eq!(embedding.sentence_count(), sentences.len());
    assert_eq!(lexical.topic_count(), 5);
    assert_eq!(embedding.features.len(), 5 + lexical.features.len());
    assert!(embedding.features[0] == "emb_0");

    for model in [&lexical, &embedding] {
        assert!(model.w.iter().flatten().all(|v| *v >= 0.0));
        assert!(model.h.iter().flatten().all(|v| *v >= 0.0));
        let min = model.a.iter().flatten().copied().fold(f64::INFINITY, f64::min);
        assert!(min >= 0.0);
    }
}

#[test]
fn fitting_is_deterministic_for_a_seed() {
    let sentences = service_sentences();
    let builder = TopicModelBuilder::new(&small_config());
    let first = builder.build_lexical(&sentences).unwrap();
    let second = builder.build_lexical(&sentences).unwrap();
    assert_eq!(first.w, second.w);
    assert_eq!(first.error_trace, second.error_trace);
}

#[test]
fn topic_words_come_from_feature_labels() {
    let sentences = service_sentences();
    let builder = TopicModelBuilder::new(&small_config());
    let model = builder.build_lexical(&sentences).unwrap();
    let words = builder.topic_words(&model).unwrap();
    assert_eq!(words.topics.len(), model.topic_count());
    for topic in &words.topics {
        assert!(topic.len() <= 10);
        assert!(topic.iter().all(|w| model.features.contains(w)));
    }
}

#[test]
fn sentences_without_terms_fail_with_empty_matrix() {
    let sentences: Vec<SentenceRecord> = (0..3)
        .map(|i| SentenceRecord {
            index: i,
            original: "1 2 3".to_string(),
            processed: "1 2 3".to_string(),
            cleaned: String::new(),
        })
        .collect();
    let builder = TopicModelBuilder::new(&small_config());
    let err = builder.build_lexical(&sentences).unwrap_err();
    assert!(matches!(err, DataError::EmptyMatrix { cols: 0, .. }));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn error_trace_is_non_increasing_and_factors_non_negative(
        rows in 2usize..6,
        cols in 2usize..6,
        seed in 0u64..1000,
        values in prop::collection::vec(0.0f64..5.0, 36)
    ) {
        let a = Array2::from_shape_fn((rows, cols), |(i, j)| values[i * 6 + j]);
        let params = NmfParams { components: 3, max_iter: 200, tolerance: 0.0, seed };
        let f = factorize(&a, &params, "prop").unwrap();

        prop_assert!(f.w.iter().all(|v| *v >= 0.0));
        prop_assert!(f.h.iter().all(|v| *v >= 0.0));
        for pair in f.error_trace.windows(2) {
            prop_assert!(pair[1] <= pair[0] * (1.0 + 1e-9) + 1e-12);
        }
    }
}
