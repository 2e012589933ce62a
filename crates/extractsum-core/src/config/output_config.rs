//! Artifact output configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OutputConfig {
    /// Root directory for per-document artifacts. Default: `Summary`.
    pub dir: Option<PathBuf>,
    /// Also write per-variant summary folders shared across documents. Default: true.
    pub variant_folders: Option<bool>,
}

impl OutputConfig {
    pub fn effective_dir(&self) -> PathBuf {
        self.dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(constants::DEFAULT_OUTPUT_DIR))
    }

    pub fn effective_variant_folders(&self) -> bool {
        self.variant_folders.unwrap_or(true)
    }
}
