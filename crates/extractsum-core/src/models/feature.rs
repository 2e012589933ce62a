use std::fmt;

use serde::{Deserialize, Serialize};

/// A per-sentence score column that ranking variants can sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    /// GRS over the lexical (TF-IDF only) topic model.
    NmfScore,
    /// GRS over the embedding-augmented topic model.
    NmfGrs,
    Surface,
    Content,
    Rhetorical,
    /// Surface + Content + Rhetorical.
    OverallFeature,
}

impl Feature {
    /// Column label used in persisted tables and CLI output.
    pub fn label(self) -> &'static str {
        match self {
            Self::NmfScore => "NMF Score",
            Self::NmfGrs => "NMF GRS Score",
            Self::Surface => "Surface Score",
            Self::Content => "Content Score",
            Self::Rhetorical => "Rhetorical Score",
            Self::OverallFeature => "Overall Feature Score",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
