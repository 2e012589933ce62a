//! Reading an input document and deriving its namespace key.

use std::path::{Path, PathBuf};

use extractsum_core::errors::InputError;

/// A loaded input document.
#[derive(Debug, Clone)]
pub struct DocumentInput {
    pub path: PathBuf,
    /// File stem; names the artifact namespace.
    pub doc: String,
    pub text: String,
}

/// The namespace key for `path`: its file stem.
pub fn document_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "document".to_string())
}

pub fn read_document(path: &Path) -> Result<DocumentInput, InputError> {
    if !path.is_file() {
        return Err(InputError::DocumentNotFound {
            path: path.display().to_string(),
        });
    }
    let text = std::fs::read_to_string(path).map_err(|e| InputError::Unreadable {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    Ok(DocumentInput {
        path: path.to_path_buf(),
        doc: document_stem(path),
        text,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stem_drops_directories_and_extension() {
        assert_eq!(document_stem(Path::new("docs/acme_terms.txt")), "acme_terms");
        assert_eq!(document_stem(Path::new("plain")), "plain");
    }

    #[test]
    fn missing_document_is_an_input_error() {
        let err = read_document(Path::new("/definitely/not/here.txt")).unwrap_err();
        assert!(matches!(err, InputError::DocumentNotFound { .. }));
    }

    #[test]
    fn non_utf8_document_is_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("latin1.txt");
        std::fs::write(&path, [0x66, 0x6f, 0xe9, 0xff]).unwrap();
        assert!(matches!(
            read_document(&path).unwrap_err(),
            InputError::Unreadable { .. }
        ));
    }
}
