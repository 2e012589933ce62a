//! The full per-document chain over typed records.

use extractsum_core::errors::{ExtractSumResult, StorageError};
use extractsum_core::models::{
    ContentScore, FeatureScore, GrsScores, KeywordAnalysis, RankedTable, RhetoricalScore,
    Summary, SurfaceScore, TopicModel, TopicWords,
};
use extractsum_core::SentenceRecord;
use extractsum_scoring::{
    aggregate_features, content_scores, extract_summary, rank_all, rank_variant,
    rhetorical_scores, score_both, surface_scores, FeatureColumns, COMBINED, VARIANTS,
};
use extractsum_storage::{names, ArtifactStore};
use extractsum_text::{tag_sentences, Segmenter};
use extractsum_topics::TopicModelBuilder;
use tracing::{info, info_span};

use crate::context::PipelineContext;
use crate::stage::Stage;

/// Every artifact of one document, in stage order.
#[derive(Debug, Clone)]
pub struct DocumentOutput {
    pub doc: String,
    pub sentences: Vec<SentenceRecord>,
    pub keywords: Vec<KeywordAnalysis>,
    pub lexical_model: TopicModel,
    pub embedding_model: TopicModel,
    pub topic_words: Vec<TopicWords>,
    pub grs: GrsScores,
    pub surface: Vec<SurfaceScore>,
    pub content: Vec<ContentScore>,
    pub rhetorical: Vec<RhetoricalScore>,
    pub features: Vec<FeatureScore>,
    /// The nine variants, in declaration order.
    pub rankings: Vec<RankedTable>,
    pub combined: RankedTable,
    /// One summary per entry of `rankings`.
    pub summaries: Vec<Summary>,
    pub combined_summary: Summary,
}

impl DocumentOutput {
    /// Write every artifact into the document's namespace and, when
    /// `variant_folders` is set, each summary into its shared variant folder.
    pub fn persist(&self, store: &ArtifactStore, variant_folders: bool) -> Result<(), StorageError> {
        let artifacts = store.document(&self.doc);
        let n = self.sentences.len();

        artifacts.write_table(names::SENTENCES, Stage::Segment.name(), &self.sentences)?;
        artifacts.write_table(names::KEYWORD_ANALYSIS, Stage::Keywords.name(), &self.keywords)?;
        artifacts.write_record(
            names::LEXICAL_TOPIC_MODEL,
            Stage::Topics.name(),
            n,
            &self.lexical_model,
        )?;
        artifacts.write_record(
            names::EMBEDDING_TOPIC_MODEL,
            Stage::Topics.name(),
            n,
            &self.embedding_model,
        )?;
        artifacts.write_record(names::TOPIC_WORDS, Stage::Topics.name(), n, &self.topic_words)?;
        artifacts.write_record(names::GRS_SCORES, Stage::Grs.name(), n, &self.grs)?;
        artifacts.write_table(names::SURFACE_FEATURES, Stage::Surface.name(), &self.surface)?;
        artifacts.write_table(names::CONTENT_FEATURES, Stage::Content.name(), &self.content)?;
        artifacts.write_table(
            names::RHETORICAL_FEATURES,
            Stage::Rhetorical.name(),
            &self.rhetorical,
        )?;
        artifacts.write_table(names::FEATURE_SCORES, Stage::Features.name(), &self.features)?;
        for table in &self.rankings {
            artifacts.write_table(
                &names::variant_ranking(&table.variant),
                Stage::Rank.name(),
                &table.rows,
            )?;
        }
        artifacts.write_table(names::COMBINED_RANKING, Stage::Rank.name(), &self.combined.rows)?;

        write_summaries(
            store,
            &self.doc,
            &self.summaries,
            &self.combined_summary,
            variant_folders,
        )
    }
}

/// `summary.txt` holds the combined summary; variant folders get all ten.
pub(crate) fn write_summaries(
    store: &ArtifactStore,
    doc: &str,
    summaries: &[Summary],
    combined: &Summary,
    variant_folders: bool,
) -> Result<(), StorageError> {
    store.document(doc).write_summary_text(&combined.text())?;
    if variant_folders {
        for (variant, summary) in VARIANTS.iter().zip(summaries) {
            store.write_variant_summary(variant.folder, doc, summary)?;
        }
        store.write_variant_summary(COMBINED.folder, doc, combined)?;
    }
    Ok(())
}

/// Runs every stage of one document in memory.
pub struct Summarizer<'a> {
    ctx: &'a PipelineContext,
}

impl<'a> Summarizer<'a> {
    pub fn new(ctx: &'a PipelineContext) -> Self {
        Self { ctx }
    }

    pub fn summarize(&self, doc: &str, text: &str) -> ExtractSumResult<DocumentOutput> {
        let span = info_span!("summarize", doc);
        let _guard = span.enter();

        let sentences = Segmenter::new(&self.ctx.lexicon).segment(text, doc)?;
        let keywords = tag_sentences(&sentences, &self.ctx.lexicon);

        let table = self.ctx.embeddings.get()?;
        let builder = TopicModelBuilder::new(&self.ctx.config.topics);
        let (lexical_model, embedding_model) = builder.build_both(&sentences, table.as_ref())?;
        let topic_words = vec![
            builder.topic_words(&lexical_model)?,
            builder.topic_words(&embedding_model)?,
        ];
        let grs = score_both(&lexical_model, &embedding_model, &sentences)?;

        let scoring = &self.ctx.config.scoring;
        let surface = surface_scores(&sentences, scoring);
        let content = content_scores(&sentences, table.as_ref(), scoring);
        let rhetorical = rhetorical_scores(&sentences, &self.ctx.lexicon);
        let features = aggregate_features(&sentences, &surface, &content, &rhetorical)?;

        let columns = FeatureColumns::assemble(&sentences, &grs, &features)?;
        let rankings = rank_all(&columns);
        let combined = rank_variant(&columns, &COMBINED);
        let summaries: Vec<Summary> = rankings.iter().map(extract_summary).collect();
        let combined_summary = extract_summary(&combined);

        info!(
            sentences = sentences.len(),
            cutoff = combined_summary.cutoff,
            selected = combined_summary.selected.len(),
            "document summarized"
        );

        Ok(DocumentOutput {
            doc: doc.to_string(),
            sentences,
            keywords,
            lexical_model,
            embedding_model,
            topic_words,
            grs,
            surface,
            content,
            rhetorical,
            features,
            rankings,
            combined,
            summaries,
            combined_summary,
        })
    }
}
