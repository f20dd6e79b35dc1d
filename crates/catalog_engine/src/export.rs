use std::path::Path;

use catalog_core::ContentRecord;
use catalog_logging::catalog_info;

use crate::load::LEGACY_DATA_PREFIX;
use crate::persist::{write_atomic, PersistError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DataFormat {
    /// Plain pretty-printed JSON array.
    #[default]
    Json,
    /// `window.CONTENT_DATA = [...];` for pages that load data with a script tag.
    LegacyScript,
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to serialize records: {0}")]
    Json(#[from] serde_json::Error),
    #[error("persist error: {0}")]
    Persist(#[from] PersistError),
}

pub fn render_data(records: &[ContentRecord], format: DataFormat) -> Result<String, ExportError> {
    let json = serde_json::to_string_pretty(records)?;
    Ok(match format {
        DataFormat::Json => format!("{json}\n"),
        DataFormat::LegacyScript => format!("{LEGACY_DATA_PREFIX} = {json};"),
    })
}

pub fn write_data(
    path: &Path,
    records: &[ContentRecord],
    format: DataFormat,
) -> Result<(), ExportError> {
    write_atomic(path, &render_data(records, format)?)?;
    catalog_info!("wrote {} records to {}", records.len(), path.display());
    Ok(())
}
