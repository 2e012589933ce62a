//! Whole-document runs and single stages against the artifact store.
//!
//! A single stage reads its inputs from the document's namespace, so stages
//! can be run one at a time in order. A missing input is reported with the
//! stage that produces it; nothing is computed implicitly.

use std::path::Path;

use extractsum_core::alignment::verify_alignment;
use extractsum_core::errors::{ExtractSumResult, InputError, PipelineError, StorageError};
use extractsum_core::models::{
    ContentScore, FeatureScore, GrsScores, RankedRow, RankedTable, RhetoricalScore, Summary,
    SurfaceScore, TopicModel,
};
use extractsum_core::SentenceRecord;
use extractsum_scoring::{
    aggregate_features, content_scores, extract_summary, rank_all, rank_variant,
    rhetorical_scores, score_both, surface_scores, FeatureColumns, Variant, COMBINED, VARIANTS,
};
use extractsum_storage::{names, DocumentArtifacts};
use extractsum_text::{tag_sentences, Segmenter};
use extractsum_topics::TopicModelBuilder;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{info, info_span};

use crate::context::PipelineContext;
use crate::document::{document_stem, read_document};
use crate::stage::Stage;
use crate::summarizer::{write_summaries, DocumentOutput, Summarizer};

/// What a single stage produced.
#[derive(Debug, Clone, Serialize)]
pub struct StageReport {
    pub stage: String,
    pub doc: String,
    /// Sentences covered by the stage's output.
    pub rows: usize,
    /// File names written inside the document namespace.
    pub artifacts: Vec<String>,
    /// Set by `extract`: the combined summary.
    pub summary: Option<Summary>,
}

impl StageReport {
    fn new(stage: Stage, doc: &str, rows: usize, artifacts: Vec<String>) -> Self {
        Self {
            stage: stage.name().to_string(),
            doc: doc.to_string(),
            rows,
            artifacts,
            summary: None,
        }
    }
}

/// Read, summarize and persist one document.
pub fn run_document(ctx: &PipelineContext, path: &Path) -> ExtractSumResult<DocumentOutput> {
    let input = read_document(path)?;
    let output = Summarizer::new(ctx).summarize(&input.doc, &input.text)?;
    output.persist(&ctx.store, ctx.config.output.effective_variant_folders())?;
    let dir = ctx.store.document(&output.doc).dir().to_path_buf();
    info!(doc = %output.doc, dir = %dir.display(), "artifacts written");
    Ok(output)
}

/// Run one named stage for the document at `path`.
pub fn run_stage(ctx: &PipelineContext, stage: Stage, path: &Path) -> ExtractSumResult<StageReport> {
    let doc = document_stem(path);
    let span = info_span!("stage", stage = stage.name(), doc = %doc);
    let _guard = span.enter();

    let artifacts = ctx.store.document(&doc);
    let report = match stage {
        Stage::Segment => segment(ctx, path, &artifacts)?,
        Stage::Keywords => keywords(ctx, &artifacts)?,
        Stage::Topics => topics(ctx, &artifacts)?,
        Stage::Grs => grs(&artifacts)?,
        Stage::Surface => surface(ctx, &artifacts)?,
        Stage::Content => content(ctx, &artifacts)?,
        Stage::Rhetorical => rhetorical(ctx, &artifacts)?,
        Stage::Features => features(&artifacts)?,
        Stage::Rank => rank(&artifacts)?,
        Stage::Extract => extract(ctx, &artifacts)?,
    };
    info!(rows = report.rows, artifacts = report.artifacts.len(), "stage complete");
    Ok(report)
}

/// Load a stage input, turning "file absent" into a prerequisite error.
fn require<T: DeserializeOwned>(
    artifacts: &DocumentArtifacts,
    name: &str,
    producer: Stage,
) -> ExtractSumResult<Vec<T>> {
    artifacts
        .read_table(name)
        .map_err(|e| missing_prerequisite(e, artifacts, name, producer))
}

fn require_record<T: DeserializeOwned>(
    artifacts: &DocumentArtifacts,
    name: &str,
    producer: Stage,
) -> ExtractSumResult<T> {
    artifacts
        .read_record(name)
        .map(|record| record.rows)
        .map_err(|e| missing_prerequisite(e, artifacts, name, producer))
}

fn missing_prerequisite(
    error: StorageError,
    artifacts: &DocumentArtifacts,
    name: &str,
    producer: Stage,
) -> PipelineError {
    match error {
        StorageError::NotFound { .. } => InputError::MissingPrerequisite {
            doc: artifacts.doc().to_string(),
            artifact: name.to_string(),
            run_first: producer.name().to_string(),
        }
        .into(),
        other => other.into(),
    }
}

fn sentences(artifacts: &DocumentArtifacts) -> ExtractSumResult<Vec<SentenceRecord>> {
    require(artifacts, names::SENTENCES, Stage::Segment)
}

fn segment(
    ctx: &PipelineContext,
    path: &Path,
    artifacts: &DocumentArtifacts,
) -> ExtractSumResult<StageReport> {
    let input = read_document(path)?;
    let sentences = Segmenter::new(&ctx.lexicon).segment(&input.text, &input.doc)?;
    artifacts.write_table(names::SENTENCES, Stage::Segment.name(), &sentences)?;
    Ok(StageReport::new(
        Stage::Segment,
        artifacts.doc(),
        sentences.len(),
        vec![names::SENTENCES.to_string()],
    ))
}

fn keywords(ctx: &PipelineContext, artifacts: &DocumentArtifacts) -> ExtractSumResult<StageReport> {
    let sentences = sentences(artifacts)?;
    let analysis = tag_sentences(&sentences, &ctx.lexicon);
    artifacts.write_table(names::KEYWORD_ANALYSIS, Stage::Keywords.name(), &analysis)?;
    Ok(StageReport::new(
        Stage::Keywords,
        artifacts.doc(),
        analysis.len(),
        vec![names::KEYWORD_ANALYSIS.to_string()],
    ))
}

fn topics(ctx: &PipelineContext, artifacts: &DocumentArtifacts) -> ExtractSumResult<StageReport> {
    let sentences = sentences(artifacts)?;
    let table = ctx.embeddings.get()?;
    let builder = TopicModelBuilder::new(&ctx.config.topics);
    let (lexical, embedding) = builder.build_both(&sentences, table.as_ref())?;
    let words = vec![builder.topic_words(&lexical)?, builder.topic_words(&embedding)?];

    let n = sentences.len();
    let stage = Stage::Topics.name();
    artifacts.write_record(names::LEXICAL_TOPIC_MODEL, stage, n, &lexical)?;
    artifacts.write_record(names::EMBEDDING_TOPIC_MODEL, stage, n, &embedding)?;
    artifacts.write_record(names::TOPIC_WORDS, stage, n, &words)?;
    Ok(StageReport::new(
        Stage::Topics,
        artifacts.doc(),
        n,
        vec![
            names::LEXICAL_TOPIC_MODEL.to_string(),
            names::EMBEDDING_TOPIC_MODEL.to_string(),
            names::TOPIC_WORDS.to_string(),
        ],
    ))
}

fn grs(artifacts: &DocumentArtifacts) -> ExtractSumResult<StageReport> {
    let sentences = sentences(artifacts)?;
    let lexical: TopicModel = require_record(artifacts, names::LEXICAL_TOPIC_MODEL, Stage::Topics)?;
    let embedding: TopicModel =
        require_record(artifacts, names::EMBEDDING_TOPIC_MODEL, Stage::Topics)?;
    let scores = score_both(&lexical, &embedding, &sentences)?;
    artifacts.write_record(names::GRS_SCORES, Stage::Grs.name(), sentences.len(), &scores)?;
    Ok(StageReport::new(
        Stage::Grs,
        artifacts.doc(),
        sentences.len(),
        vec![names::GRS_SCORES.to_string()],
    ))
}

fn surface(ctx: &PipelineContext, artifacts: &DocumentArtifacts) -> ExtractSumResult<StageReport> {
    let sentences = sentences(artifacts)?;
    let scores = surface_scores(&sentences, &ctx.config.scoring);
    artifacts.write_table(names::SURFACE_FEATURES, Stage::Surface.name(), &scores)?;
    Ok(StageReport::new(
        Stage::Surface,
        artifacts.doc(),
        scores.len(),
        vec![names::SURFACE_FEATURES.to_string()],
    ))
}

fn content(ctx: &PipelineContext, artifacts: &DocumentArtifacts) -> ExtractSumResult<StageReport> {
    let sentences = sentences(artifacts)?;
    let table = ctx.embeddings.get()?;
    let scores = content_scores(&sentences, table.as_ref(), &ctx.config.scoring);
    artifacts.write_table(names::CONTENT_FEATURES, Stage::Content.name(), &scores)?;
    Ok(StageReport::new(
        Stage::Content,
        artifacts.doc(),
        scores.len(),
        vec![names::CONTENT_FEATURES.to_string()],
    ))
}

fn rhetorical(ctx: &PipelineContext, artifacts: &DocumentArtifacts) -> ExtractSumResult<StageReport> {
    let sentences = sentences(artifacts)?;
    let scores = rhetorical_scores(&sentences, &ctx.lexicon);
    artifacts.write_table(names::RHETORICAL_FEATURES, Stage::Rhetorical.name(), &scores)?;
    Ok(StageReport::new(
        Stage::Rhetorical,
        artifacts.doc(),
        scores.len(),
        vec![names::RHETORICAL_FEATURES.to_string()],
    ))
}

fn features(artifacts: &DocumentArtifacts) -> ExtractSumResult<StageReport> {
    let sentences = sentences(artifacts)?;
    let surface: Vec<SurfaceScore> = require(artifacts, names::SURFACE_FEATURES, Stage::Surface)?;
    let content: Vec<ContentScore> = require(artifacts, names::CONTENT_FEATURES, Stage::Content)?;
    let rhetorical: Vec<RhetoricalScore> =
        require(artifacts, names::RHETORICAL_FEATURES, Stage::Rhetorical)?;
    let scores = aggregate_features(&sentences, &surface, &content, &rhetorical)?;
    artifacts.write_table(names::FEATURE_SCORES, Stage::Features.name(), &scores)?;
    Ok(StageReport::new(
        Stage::Features,
        artifacts.doc(),
        scores.len(),
        vec![names::FEATURE_SCORES.to_string()],
    ))
}

fn rank(artifacts: &DocumentArtifacts) -> ExtractSumResult<StageReport> {
    let sentences = sentences(artifacts)?;
    let grs: GrsScores = require_record(artifacts, names::GRS_SCORES, Stage::Grs)?;
    let features: Vec<FeatureScore> =
        require(artifacts, names::FEATURE_SCORES, Stage::Features)?;
    let columns = FeatureColumns::assemble(&sentences, &grs, &features)?;

    let mut written = Vec::with_capacity(VARIANTS.len() + 1);
    for table in rank_all(&columns) {
        let name = names::variant_ranking(&table.variant);
        artifacts.write_table(&name, Stage::Rank.name(), &table.rows)?;
        written.push(name);
    }
    let combined = rank_variant(&columns, &COMBINED);
    artifacts.write_table(names::COMBINED_RANKING, Stage::Rank.name(), &combined.rows)?;
    written.push(names::COMBINED_RANKING.to_string());

    Ok(StageReport::new(Stage::Rank, artifacts.doc(), sentences.len(), written))
}

fn ranked_table(
    artifacts: &DocumentArtifacts,
    sentences: &[SentenceRecord],
    variant: &Variant,
    name: &str,
) -> ExtractSumResult<RankedTable> {
    let rows: Vec<RankedRow> = require(artifacts, name, Stage::Rank)?;
    verify_alignment(sentences, &rows, name)?;
    Ok(RankedTable {
        variant: variant.slug.to_string(),
        name: variant.name.to_string(),
        rows,
    })
}

fn extract(ctx: &PipelineContext, artifacts: &DocumentArtifacts) -> ExtractSumResult<StageReport> {
    let sentences = sentences(artifacts)?;
    let summaries = VARIANTS
        .iter()
        .map(|variant| {
            let name = names::variant_ranking(variant.slug);
            ranked_table(artifacts, &sentences, variant, &name).map(|t| extract_summary(&t))
        })
        .collect::<ExtractSumResult<Vec<Summary>>>()?;
    let combined = extract_summary(&ranked_table(
        artifacts,
        &sentences,
        &COMBINED,
        names::COMBINED_RANKING,
    )?);

    let variant_folders = ctx.config.output.effective_variant_folders();
    write_summaries(&ctx.store, artifacts.doc(), &summaries, &combined, variant_folders)?;

    let mut report = StageReport::new(
        Stage::Extract,
        artifacts.doc(),
        sentences.len(),
        vec![names::SUMMARY_TEXT.to_string()],
    );
    report.summary = Some(combined);
    Ok(report)
}
