//! Output root and per-document namespaces.

use std::path::{Path, PathBuf};

use extractsum_core::errors::StorageError;
use extractsum_core::models::Summary;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::atomic::{atomic_write, read_json, write_json};
use crate::names;
use crate::table::{ArtifactRecord, ArtifactTable};

/// The output root shared by every document of a run.
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    root: PathBuf,
}

impl ArtifactStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Namespace for the document with file stem `doc`. Nothing is created
    /// on disk until the first write.
    pub fn document(&self, doc: &str) -> DocumentArtifacts {
        DocumentArtifacts {
            doc: doc.to_string(),
            dir: self.root.join(doc),
        }
    }

    pub fn variant_dir(&self, folder: &str) -> PathBuf {
        self.root.join(names::VARIANTS_DIR).join(folder)
    }

    /// Write `<doc>.txt` and `<doc>.json` into the variant's shared folder.
    pub fn write_variant_summary(
        &self,
        folder: &str,
        doc: &str,
        summary: &Summary,
    ) -> Result<(), StorageError> {
        let dir = self.variant_dir(folder);
        atomic_write(&dir.join(format!("{doc}.txt")), summary.text().as_bytes())?;
        write_json(&dir.join(format!("{doc}.json")), summary)?;
        debug!(folder, doc, selected = summary.selected.len(), "wrote variant summary");
        Ok(())
    }

    /// Variant folders present under `<root>/variants`, sorted by name.
    pub fn variant_folders(&self) -> Result<Vec<String>, StorageError> {
        let dir = self.root.join(names::VARIANTS_DIR);
        let entries = match std::fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(StorageError::Io {
                    path: dir.display().to_string(),
                    reason: e.to_string(),
                })
            }
        };
        let mut folders: Vec<String> = entries
            .filter_map(Result::ok)
            .filter(|e| e.path().is_dir())
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .collect();
        folders.sort();
        Ok(folders)
    }
}

#[derive(Serialize)]
struct TableRef<'a, T> {
    doc: &'a str,
    stage: &'a str,
    row_count: usize,
    rows: &'a [T],
}

#[derive(Serialize)]
struct RecordRef<'a, T> {
    doc: &'a str,
    stage: &'a str,
    row_count: usize,
    rows: &'a T,
}

/// All artifacts of one document, under `<root>/<doc>/`.
#[derive(Debug, Clone)]
pub struct DocumentArtifacts {
    doc: String,
    dir: PathBuf,
}

impl DocumentArtifacts {
    pub fn doc(&self) -> &str {
        &self.doc
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }

    pub fn exists(&self, name: &str) -> bool {
        self.path(name).is_file()
    }

    /// Persist a per-sentence table.
    pub fn write_table<T: Serialize>(
        &self,
        name: &str,
        stage: &str,
        rows: &[T],
    ) -> Result<(), StorageError> {
        let table = TableRef {
            doc: &self.doc,
            stage,
            row_count: rows.len(),
            rows,
        };
        write_json(&self.path(name), &table)?;
        debug!(doc = %self.doc, artifact = name, rows = rows.len(), "wrote table");
        Ok(())
    }

    /// Load a per-sentence table and return its rows. A table whose
    /// `row_count` disagrees with its rows is treated as corrupt.
    pub fn read_table<T: DeserializeOwned>(&self, name: &str) -> Result<Vec<T>, StorageError> {
        let path = self.path(name);
        let table: ArtifactTable<T> = read_json(&path)?;
        if table.row_count != table.rows.len() {
            return Err(StorageError::Serialization {
                path: path.display().to_string(),
                reason: format!(
                    "row_count is {} but the table has {} rows",
                    table.row_count,
                    table.rows.len()
                ),
            });
        }
        Ok(table.rows)
    }

    /// Persist a structured artifact covering `row_count` sentences.
    pub fn write_record<T: Serialize>(
        &self,
        name: &str,
        stage: &str,
        row_count: usize,
        value: &T,
    ) -> Result<(), StorageError> {
        let record = RecordRef {
            doc: &self.doc,
            stage,
            row_count,
            rows: value,
        };
        write_json(&self.path(name), &record)?;
        debug!(doc = %self.doc, artifact = name, rows = row_count, "wrote record");
        Ok(())
    }

    pub fn read_record<T: DeserializeOwned>(
        &self,
        name: &str,
    ) -> Result<ArtifactRecord<T>, StorageError> {
        read_json(&self.path(name))
    }

    pub fn write_summary_text(&self, text: &str) -> Result<(), StorageError> {
        atomic_write(&self.path(names::SUMMARY_TEXT), text.as_bytes())
    }

    pub fn read_summary_text(&self) -> Result<String, StorageError> {
        let path = self.path(names::SUMMARY_TEXT);
        std::fs::read_to_string(&path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => StorageError::NotFound {
                path: path.display().to_string(),
            },
            _ => StorageError::Io {
                path: path.display().to_string(),
                reason: e.to_string(),
            },
        })
    }
}
