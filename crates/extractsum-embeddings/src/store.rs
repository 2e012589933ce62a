//! Process-wide, lazily loaded embedding table.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use extractsum_core::errors::EmbeddingError;
use once_cell::sync::OnceCell;
use tracing::debug;

use crate::table::EmbeddingTable;

/// Loads the configured vector file on first use and hands out shared
/// references afterwards. The table is never reloaded or mutated.
#[derive(Debug, Default)]
pub struct EmbeddingStore {
    path: Option<PathBuf>,
    table: OnceCell<Arc<EmbeddingTable>>,
}

impl EmbeddingStore {
    /// A store backed by the file at `path` (or by nothing, if `None`).
    pub fn new(path: Option<PathBuf>) -> Self {
        Self {
            path,
            table: OnceCell::new(),
        }
    }

    /// A store that already holds `table`.
    pub fn preloaded(table: EmbeddingTable) -> Self {
        Self {
            path: None,
            table: OnceCell::with_value(Arc::new(table)),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn is_loaded(&self) -> bool {
        self.table.get().is_some()
    }

    /// The table, loading it if this is the first call.
    ///
    /// A failed load is not cached; the next call tries again.
    pub fn get(&self) -> Result<Arc<EmbeddingTable>, EmbeddingError> {
        self.table
            .get_or_try_init(|| {
                let path = self.path.as_ref().ok_or(EmbeddingError::NotConfigured)?;
                debug!(path = %path.display(), "loading embedding table on first use");
                EmbeddingTable::load(path).map(Arc::new)
            })
            .cloned()
    }
}
