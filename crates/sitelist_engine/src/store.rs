use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde_json::Value;
use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("document not found: {0:?}")]
    NotFound(PathBuf),
    #[error("document is not valid JSON: {0}")]
    Malformed(#[source] serde_json::Error),
    #[error("failed to encode document: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Load the export document. The caller decides whether its shape is
/// acceptable; this only requires well-formed JSON.
pub fn load_document(path: &Path) -> Result<Value, StoreError> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Err(StoreError::NotFound(path.to_path_buf()));
        }
        Err(err) => return Err(StoreError::Io(err)),
    };
    serde_json::from_str(&text).map_err(StoreError::Malformed)
}

/// Atomically write `document` to `path` by writing a temp file in the same
/// directory then renaming over the destination. A failed save leaves any
/// existing file untouched.
///
/// Output is pretty two-space JSON with non-ASCII text unescaped and a
/// trailing newline, matching the export files being updated.
pub fn save_document(path: &Path, document: &Value) -> Result<(), StoreError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut text = serde_json::to_string_pretty(document).map_err(StoreError::Encode)?;
    text.push('\n');

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(text.as_bytes())?;
    tmp.flush()?;
    tmp.as_file_mut().sync_all()?;
    tmp.persist(path).map_err(|e| StoreError::Io(e.error))?;
    Ok(())
}
