//! Artifact file names inside a document namespace.

pub const SENTENCES: &str = "01_sentences.json";
pub const KEYWORD_ANALYSIS: &str = "02_keyword_analysis.json";
pub const LEXICAL_TOPIC_MODEL: &str = "03_lexical_topic_model.json";
pub const EMBEDDING_TOPIC_MODEL: &str = "03_embedding_topic_model.json";
pub const TOPIC_WORDS: &str = "03_topic_words.json";
pub const GRS_SCORES: &str = "04_grs_scores.json";
pub const SURFACE_FEATURES: &str = "05_surface_features.json";
pub const CONTENT_FEATURES: &str = "05_content_features.json";
pub const RHETORICAL_FEATURES: &str = "05_rhetorical_features.json";
pub const FEATURE_SCORES: &str = "06_feature_scores.json";
pub const COMBINED_RANKING: &str = "07_combined_ranking.json";
pub const SUMMARY_TEXT: &str = "summary.txt";

/// Directory under the output root that collects summaries per variant.
pub const VARIANTS_DIR: &str = "variants";

/// `07_variant_<slug>.json`.
pub fn variant_ranking(slug: &str) -> String {
    format!("07_variant_{slug}.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_ranking_embeds_slug() {
        assert_eq!(variant_ranking("nmf_glove"), "07_variant_nmf_glove.json");
    }
}
