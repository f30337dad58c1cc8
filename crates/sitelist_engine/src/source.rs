use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use sitelist_core::RawLine;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("input file not found: {0:?}")]
    NotFound(PathBuf),
    #[error("input file is not valid UTF-8: {0:?}")]
    Decode(PathBuf),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Read the whole list file into numbered lines. The file must decode as
/// UTF-8; anything else aborts the run with no partial result.
pub fn read_lines(path: &Path) -> Result<Vec<RawLine>, SourceError> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Err(SourceError::NotFound(path.to_path_buf()));
        }
        Err(err) => return Err(SourceError::Io(err)),
    };
    let text =
        String::from_utf8(bytes).map_err(|_| SourceError::Decode(path.to_path_buf()))?;

    Ok(text
        .lines()
        .enumerate()
        .map(|(index, line)| RawLine {
            number: index + 1,
            text: line.to_string(),
        })
        .collect())
}
