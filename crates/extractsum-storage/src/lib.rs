//! # extractsum-storage
//!
//! On-disk layout of the pipeline's output. Each input document owns a
//! namespace `<output_dir>/<doc_stem>/` holding one JSON table per stage;
//! summaries are additionally collected per variant under
//! `<output_dir>/variants/<folder>/`.

pub mod atomic;
pub mod names;
pub mod store;
pub mod table;

pub use atomic::{atomic_write, read_json, write_json};
pub use store::{ArtifactStore, DocumentArtifacts};
pub use table::{ArtifactRecord, ArtifactTable};
