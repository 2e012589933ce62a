//! Batch processing configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct BatchConfig {
    /// Run independent documents on the rayon pool. Default: false.
    pub parallel: Option<bool>,
    /// Worker threads when parallel. Default: rayon's choice.
    pub threads: Option<usize>,
}

impl BatchConfig {
    pub fn effective_parallel(&self) -> bool {
        self.parallel.unwrap_or(false)
    }
}
