use criterion::{criterion_group, criterion_main, Criterion};

use extractsum_core::config::TopicConfig;
use extractsum_core::Lexicon;
use extractsum_embeddings::EmbeddingTable;
use extractsum_text::Segmenter;
use extractsum_topics::{factorize, FeatureMatrix, NmfParams, TopicModelBuilder};

fn bench_lexical_factorization(c: &mut Criterion) {
    let lexicon = Lexicon::standard();
    let text = test_fixtures::load_document("service_terms.txt");
    let sentences = Segmenter::new(&lexicon).segment(&text, "bench").unwrap();
    let matrix = FeatureMatrix::lexical(&sentences);
    let params = NmfParams {
        components: 30,
        max_iter: 3000,
        tolerance: 1e-4,
        seed: 0,
    };

    c.bench_function("nmf_lexical_service_terms", |b| {
        b.iter(|| factorize(&matrix.values, &params, "lexical").unwrap());
    });
}

fn bench_both_models(c: &mut Criterion) {
    let lexicon = Lexicon::standard();
    let text = test_fixtures::load_document("privacy_terms.txt");
    let sentences = Segmenter::new(&lexicon).segment(&text, "bench").unwrap();
    let table = EmbeddingTable::load(&test_fixtures::mini_embeddings_path()).unwrap();
    let builder = TopicModelBuilder::new(&TopicConfig::default());

    c.bench_function("topic_models_privacy_terms", |b| {
        b.iter(|| builder.build_both(&sentences, &table).unwrap());
    });
}

criterion_group!(benches, bench_lexical_factorization, bench_both_models);
criterion_main!(benches);
