//! JSON loading for the free-exercise-db export.

use crate::types::SourceRecord;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("File not found: {0}")]
    NotFound(String),
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("JSON parse error in {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}

/// Load every exercise record from a free-exercise-db JSON file.
///
/// The file must hold a single JSON array. A missing file is reported as
/// [`LoadError::NotFound`] so callers can treat it as a startup failure.
pub fn load_source_records(path: &Path) -> Result<Vec<SourceRecord>, LoadError> {
    if !path.exists() {
        return Err(LoadError::NotFound(path.display().to_string()));
    }

    let contents = std::fs::read_to_string(path).map_err(|e| LoadError::Io {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_source_records(&contents).map_err(|e| LoadError::Parse {
        path: path.display().to_string(),
        source: e,
    })
}

/// Parse records from an in-memory JSON document.
pub fn parse_source_records(json: &str) -> Result<Vec<SourceRecord>, serde_json::Error> {
    serde_json::from_str(json)
}
