//! Named pipeline stages and their prerequisites.

use std::fmt;
use std::str::FromStr;

use extractsum_core::errors::InputError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Segment,
    Keywords,
    Topics,
    Grs,
    Surface,
    Content,
    Rhetorical,
    Features,
    Rank,
    Extract,
}

impl Stage {
    /// Execution order of a full run.
    pub const ALL: [Stage; 10] = [
        Stage::Segment,
        Stage::Keywords,
        Stage::Topics,
        Stage::Grs,
        Stage::Surface,
        Stage::Content,
        Stage::Rhetorical,
        Stage::Features,
        Stage::Rank,
        Stage::Extract,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Segment => "segment",
            Self::Keywords => "keywords",
            Self::Topics => "topics",
            Self::Grs => "grs",
            Self::Surface => "surface",
            Self::Content => "content",
            Self::Rhetorical => "rhetorical",
            Self::Features => "features",
            Self::Rank => "rank",
            Self::Extract => "extract",
        }
    }

    /// Stages whose artifacts this stage reads.
    pub fn prerequisites(self) -> &'static [Stage] {
        match self {
            Self::Segment => &[],
            Self::Keywords | Self::Topics | Self::Surface | Self::Content | Self::Rhetorical => {
                &[Stage::Segment]
            }
            Self::Grs => &[Stage::Segment, Stage::Topics],
            Self::Features => &[Stage::Segment, Stage::Surface, Stage::Content, Stage::Rhetorical],
            Self::Rank => &[Stage::Segment, Stage::Grs, Stage::Features],
            Self::Extract => &[Stage::Segment, Stage::Rank],
        }
    }

    /// Whether the stage loads the embedding table.
    pub fn needs_embeddings(self) -> bool {
        matches!(self, Self::Topics | Self::Content)
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Stage {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Stage::ALL
            .into_iter()
            .find(|stage| stage.name() == wanted)
            .ok_or_else(|| InputError::UnknownStage(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for stage in Stage::ALL {
            assert_eq!(stage.name().parse::<Stage>().unwrap(), stage);
        }
        assert_eq!(" GRS ".parse::<Stage>().unwrap(), Stage::Grs);
    }

    #[test]
    fn unknown_stage_is_rejected() {
        assert!(matches!(
            "summarize".parse::<Stage>(),
            Err(InputError::UnknownStage(name)) if name == "summarize"
        ));
    }

    #[test]
    fn prerequisites_run_earlier() {
        for (position, stage) in Stage::ALL.iter().enumerate() {
            for prerequisite in stage.prerequisites() {
                let before = Stage::ALL.iter().position(|s| s == prerequisite).unwrap();
                assert!(before < position, "{stage} depends on later {prerequisite}");
            }
        }
    }
}
