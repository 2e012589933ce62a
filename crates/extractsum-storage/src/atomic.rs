//! Temp-file-then-rename writes and JSON helpers.

use std::path::Path;

use extractsum_core::errors::StorageError;
use serde::de::DeserializeOwned;
use serde::Serialize;

fn io_error(path: &Path, e: std::io::Error) -> StorageError {
    StorageError::Io {
        path: path.display().to_string(),
        reason: e.to_string(),
    }
}

/// Write `content` to `<path>.tmp` in the same directory, then rename it
/// over `path`. Parent directories are created as needed.
pub fn atomic_write(path: &Path, content: &[u8]) -> Result<(), StorageError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| io_error(parent, e))?;
    }
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = Path::new(&tmp);

    if let Err(e) = std::fs::write(tmp, content) {
        let _ = std::fs::remove_file(tmp);
        return Err(io_error(tmp, e));
    }
    std::fs::rename(tmp, path).map_err(|e| {
        let _ = std::fs::remove_file(tmp);
        io_error(path, e)
    })
}

/// Pretty-printed JSON, written atomically.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), StorageError> {
    let json = serde_json::to_vec_pretty(value).map_err(|e| StorageError::Serialization {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    atomic_write(path, &json)
}

/// Read and deserialize a JSON file. A missing file is `NotFound`.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, StorageError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(StorageError::NotFound {
                path: path.display().to_string(),
            })
        }
        Err(e) => return Err(io_error(path, e)),
    };
    serde_json::from_str(&content).map_err(|e| StorageError::Serialization {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}
