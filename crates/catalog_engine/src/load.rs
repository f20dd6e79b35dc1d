use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use catalog_core::{ContentRecord, Repository, RepositoryError};
use catalog_logging::{catalog_debug, catalog_info};
use thiserror::Error;

/// Assignment that wraps the record array in script-style data files.
pub const LEGACY_DATA_PREFIX: &str = "window.CONTENT_DATA";

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed data wrapper: expected `{LEGACY_DATA_PREFIX} = [...];`")]
    Wrapper,
    #[error("invalid record data: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Parse a JSON record array, optionally wrapped as `window.CONTENT_DATA = [...];`.
pub fn parse_records(text: &str) -> Result<Vec<ContentRecord>, LoadError> {
    let text = text.trim_start_matches('\u{feff}').trim();
    let json = match text.strip_prefix(LEGACY_DATA_PREFIX) {
        Some(rest) => {
            let rest = rest.trim_start().strip_prefix('=').ok_or(LoadError::Wrapper)?;
            let rest = rest.trim_end();
            rest.strip_suffix(';').unwrap_or(rest).trim()
        }
        None => text,
    };
    Ok(serde_json::from_str(json)?)
}

pub fn load_records(path: &Path) -> Result<Vec<ContentRecord>, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let records = parse_records(&text)?;
    catalog_debug!("parsed {} records from {}", records.len(), path.display());
    Ok(records)
}

/// Load the data file and build the indexed repository.
pub fn load_repository(path: &Path) -> Result<Repository, LoadError> {
    let repository = Repository::new(load_records(path)?)?;
    catalog_info!(
        "loaded {} records ({} tags) from {}",
        repository.len(),
        repository.tags().len(),
        path.display()
    );
    Ok(repository)
}
