//! The declarative list of summary variants and the one routine that ranks them.

use extractsum_core::alignment::verify_alignment;
use extractsum_core::errors::DataError;
use extractsum_core::models::{FeatureScore, GrsScores, RankedRow, RankedTable};
use extractsum_core::{Feature, SentenceRecord};
use tracing::debug;

use super::dense_rank;

/// A named combination of feature columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Variant {
    pub number: usize,
    pub name: &'static str,
    /// Used in artifact names: `07_variant_<slug>.json`.
    pub slug: &'static str,
    /// Per-variant folder shared across documents.
    pub folder: &'static str,
    pub features: &'static [Feature],
}

impl Variant {
    /// Look up one of the nine variants, or the combined table, by slug or folder.
    pub fn find(key: &str) -> Option<&'static Variant> {
        VARIANTS
            .iter()
            .chain(std::iter::once(&COMBINED))
            .find(|v| v.slug == key || v.folder == key)
    }
}

use Feature::{Content, NmfGrs, NmfScore, OverallFeature, Rhetorical, Surface};

pub const VARIANTS: [Variant; 9] = [
    Variant {
        number: 1,
        name: "NMF",
        slug: "nmf",
        folder: "01_nmf",
        features: &[NmfScore],
    },
    Variant {
        number: 2,
        name: "NMF+GloVe",
        slug: "nmf_glove",
        folder: "02_nmf_glove",
        features: &[NmfGrs],
    },
    Variant {
        number: 3,
        name: "NMF+GloVe+Rhetorical",
        slug: "nmf_glove_rhetorical",
        folder: "03_nmf_glove_rhetorical",
        features: &[NmfGrs, Rhetorical],
    },
    Variant {
        number: 4,
        name: "NMF+GloVe+Surface",
        slug: "nmf_glove_surface",
        folder: "04_nmf_glove_surface",
        features: &[NmfGrs, Surface],
    },
    Variant {
        number: 5,
        name: "NMF+GloVe+Content",
        slug: "nmf_glove_content",
        folder: "05_nmf_glove_content",
        features: &[NmfGrs, Content],
    },
    Variant {
        number: 6,
        name: "NMF+GloVe+Surface+Content",
        slug: "nmf_glove_surface_content",
        folder: "06_nmf_glove_surface_content",
        features: &[NmfGrs, Surface, Content],
    },
    Variant {
        number: 7,
        name: "NMF+GloVe+Rhetorical+Content",
        slug: "nmf_glove_rhetorical_content",
        folder: "07_nmf_glove_rhetorical_content",
        features: &[NmfGrs, Rhetorical, Content],
    },
    Variant {
        number: 8,
        name: "NMF+GloVe+Rhetorical+Surface",
        slug: "nmf_glove_rhetorical_surface",
        folder: "08_nmf_glove_rhetorical_surface",
        features: &[NmfGrs, Rhetorical, Surface],
    },
    Variant {
        number: 9,
        name: "NMF+Rhetorical+Surface+Content",
        slug: "nmf_rhetorical_surface_content",
        folder: "09_nmf_rhetorical_surface_content",
        features: &[NmfScore, Rhetorical, Surface, Content],
    },
];

/// NMF GRS plus the overall feature score.
pub const COMBINED: Variant = Variant {
    number: 10,
    name: "NMF+GloVe+Rhetorical+Surface+Content",
    slug: "combined",
    folder: "10_nmf_glove_rhetorical_surface_content",
    features: &[NmfGrs, OverallFeature],
};

/// Every rankable column of one document, aligned on sentence index.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureColumns {
    indices: Vec<usize>,
    cleaned: Vec<String>,
    original: Vec<String>,
    nmf_score: Vec<f64>,
    nmf_grs: Vec<f64>,
    surface: Vec<f64>,
    content: Vec<f64>,
    rhetorical: Vec<f64>,
    overall: Vec<f64>,
}

impl FeatureColumns {
    /// Join the GRS series and the feature table, checking each against
    /// the sentence table first.
    pub fn assemble(
        sentences: &[SentenceRecord],
        grs: &GrsScores,
        features: &[FeatureScore],
    ) -> Result<Self, DataError> {
        verify_alignment(sentences, &grs.lexical, "lexical grs scores")?;
        verify_alignment(sentences, &grs.embedding, "embedding grs scores")?;
        verify_alignment(sentences, features, "feature scores")?;

        Ok(Self {
            indices: sentences.iter().map(|s| s.index).collect(),
            cleaned: sentences.iter().map(|s| s.cleaned.clone()).collect(),
            original: sentences.iter().map(|s| s.original.clone()).collect(),
            nmf_score: grs.lexical.iter().map(|g| g.score).collect(),
            nmf_grs: grs.embedding.iter().map(|g| g.score).collect(),
            surface: features.iter().map(|f| f.surface).collect(),
            content: features.iter().map(|f| f.content).collect(),
            rhetorical: features.iter().map(|f| f.rhetorical).collect(),
            overall: features.iter().map(|f| f.overall).collect(),
        })
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn column(&self, feature: Feature) -> &[f64] {
        match feature {
            NmfScore => &self.nmf_score,
            NmfGrs => &self.nmf_grs,
            Surface => &self.surface,
            Content => &self.content,
            Rhetorical => &self.rhetorical,
            OverallFeature => &self.overall,
        }
    }
}

/// Sum the variant's columns per sentence and dense-rank the totals.
pub fn rank_variant(columns: &FeatureColumns, variant: &Variant) -> RankedTable {
    let totals: Vec<f64> = (0..columns.len())
        .map(|row| {
            variant
                .features
                .iter()
                .map(|&f| columns.column(f)[row])
                .sum()
        })
        .collect();
    let ranks = dense_rank(&totals);

    let rows = (0..columns.len())
        .map(|row| RankedRow {
            index: columns.indices[row],
            components: variant
                .features
                .iter()
                .map(|&f| (f, columns.column(f)[row]))
                .collect(),
            total_score: totals[row],
            rank: ranks[row],
            cleaned: columns.cleaned[row].clone(),
            original: columns.original[row].clone(),
        })
        .collect();

    debug!(variant = variant.slug, rows = columns.len(), "ranked variant");

    RankedTable {
        variant: variant.slug.to_string(),
        name: variant.name.to_string(),
        rows,
    }
}

/// All nine variants in declaration order. The combined table is ranked
/// separately with [`COMBINED`].
pub fn rank_all(columns: &FeatureColumns) -> Vec<RankedTable> {
    VARIANTS.iter().map(|v| rank_variant(columns, v)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use extractsum_core::models::GrsScore;

    fn fixture(n: usize) -> (Vec<SentenceRecord>, GrsScores, Vec<FeatureScore>) {
        let sentences: Vec<SentenceRecord> = (0..n)
            .map(|i| SentenceRecord {
                index: i,
                original: format!("Sentence number {i}."),
                processed: format!("sentence number {i}."),
                cleaned: "sentence number".to_string(),
            })
            .collect();
        let grs = |scale: f64| -> Vec<GrsScore> {
            sentences
                .iter()
                .map(|s| GrsScore {
                    index: s.index,
                    score: scale * (n - s.index) as f64,
                    cleaned: s.cleaned.clone(),
                    original: s.original.clone(),
                })
                .collect()
        };
        let grs = GrsScores {
            lexical: grs(1.0),
            embedding: grs(0.5),
        };
        let features = sentences
            .iter()
            .map(|s| FeatureScore {
                index: s.index,
                overall: s.index as f64 * 3.0,
                surface: s.index as f64,
                content: s.index as f64,
                rhetorical: s.index as f64,
                cleaned: s.cleaned.clone(),
                original: s.original.clone(),
            })
            .collect();
        (sentences, grs, features)
    }

    #[test]
    fn variant_table_is_well_formed() {
        assert_eq!(VARIANTS.len(), 9);
        for (i, v) in VARIANTS.iter().enumerate() {
            assert_eq!(v.number, i + 1);
            assert!(v.folder.starts_with(&format!("{:02}_", i + 1)));
            assert!(v.folder.ends_with(v.slug));
            assert!(!v.features.is_empty());
        }
        assert_eq!(COMBINED.folder, "10_nmf_glove_rhetorical_surface_content");
    }

    #[test]
    fn find_by_slug_or_folder() {
        assert_eq!(Variant::find("nmf_glove").map(|v| v.number), Some(2));
        assert_eq!(Variant::find("09_nmf_rhetorical_surface_content").map(|v| v.number), Some(9));
        assert_eq!(Variant::find("combined").map(|v| v.number), Some(10));
        assert!(Variant::find("nope").is_none());
    }

    #[test]
    fn baseline_follows_lexical_grs() {
        let (sentences, grs, features) = fixture(4);
        let columns = FeatureColumns::assemble(&sentences, &grs, &features).unwrap();
        let table = rank_variant(&columns, &VARIANTS[0]);
        let ranks: Vec<usize> = table.rows.iter().map(|r| r.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3, 4]);
        assert_eq!(table.rows[0].components, vec![(NmfScore, 4.0)]);
    }

    #[test]
    fn totals_sum_the_selected_columns() {
        let (sentences, grs, features) = fixture(4);
        let columns = FeatureColumns::assemble(&sentences, &grs, &features).unwrap();
        // NMF GRS (0.5 * (4 - i)) + Surface (i) = 2 + 0.5i.
        let table = rank_variant(&columns, &VARIANTS[3]);
        let totals: Vec<f64> = table.rows.iter().map(|r| r.total_score).collect();
        assert_eq!(totals, vec![2.0, 2.5, 3.0, 3.5]);
        let ranks: Vec<usize> = table.rows.iter().map(|r| r.rank).collect();
        assert_eq!(ranks, vec![4, 3, 2, 1]);
    }

    #[test]
    fn rank_all_covers_every_variant_in_order() {
        let (sentences, grs, features) = fixture(3);
        let columns = FeatureColumns::assemble(&sentences, &grs, &features).unwrap();
        let tables = rank_all(&columns);
        let slugs: Vec<&str> = tables.iter().map(|t| t.variant.as_str()).collect();
        let expected: Vec<&str> = VARIANTS.iter().map(|v| v.slug).collect();
        assert_eq!(slugs, expected);
        assert!(tables.iter().all(|t| t.rows.len() == 3));
    }

    #[test]
    fn misaligned_feature_table_is_rejected() {
        let (sentences, grs, mut features) = fixture(3);
        features[1].index = 7;
        let err = FeatureColumns::assemble(&sentences, &grs, &features).unwrap_err();
        assert!(matches!(err, DataError::Misaligned { position: 1, .. }));
    }
}
