//! Builds records from a `content/<platform>/<id>/` folder tree.

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use catalog_core::{ContentRecord, Platform};
use catalog_logging::{catalog_info, catalog_warn};
use thiserror::Error;

pub const NAME_FILE: &str = "name.txt";
pub const URL_FILE: &str = "url.txt";
pub const TAGS_FILE: &str = "tags.txt";
pub const ZIP_FILE: &str = "Files.zip";

/// Placeholder prefix for links that are not published yet.
const URL_PLACEHOLDER: &str = "TODO";

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("duplicate id '{id}' in platform '{platform}'")]
    DuplicateId { platform: Platform, id: String },
}

/// Scan every platform directory under `root`, LinkedIn first, folders in name order.
pub fn scan_content(root: &Path) -> Result<Vec<ContentRecord>, ScanError> {
    let mut records = Vec::new();
    for platform in Platform::ALL {
        records.extend(scan_platform(root, platform)?);
    }
    if records.is_empty() {
        catalog_warn!("no content items found under {}", root.display());
    }
    ensure_unique_ids(&records)?;
    Ok(records)
}

fn scan_platform(root: &Path, platform: Platform) -> Result<Vec<ContentRecord>, ScanError> {
    let base = root.join(platform.as_str());
    if !base.exists() {
        catalog_info!("directory not found: {} (skipping)", base.display());
        return Ok(Vec::new());
    }

    let entries = fs::read_dir(&base).map_err(|source| io_error(&base, source))?;
    let mut folders = Vec::new();
    for entry in entries {
        let path = entry.map_err(|source| io_error(&base, source))?.path();
        if path.is_dir() && path.join(NAME_FILE).exists() {
            folders.push(path);
        }
    }
    folders.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    let mut records = Vec::with_capacity(folders.len());
    for folder in &folders {
        if let Some(record) = read_folder(root, platform, folder)? {
            records.push(record);
        }
    }
    catalog_info!("found {} items in {}", records.len(), base.display());
    Ok(records)
}

fn read_folder(
    root: &Path,
    platform: Platform,
    folder: &Path,
) -> Result<Option<ContentRecord>, ScanError> {
    let title = read_trimmed(&folder.join(NAME_FILE))?;
    if title.is_empty() {
        catalog_warn!("empty {} in {}, skipping", NAME_FILE, folder.display());
        return Ok(None);
    }

    let mut url = read_trimmed(&folder.join(URL_FILE))?;
    if url.starts_with(URL_PLACEHOLDER) {
        url.clear();
    }

    let tags = read_trimmed(&folder.join(TAGS_FILE))?
        .lines()
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect();

    let id = folder
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let download_url = folder
        .join(ZIP_FILE)
        .exists()
        .then(|| download_path(root, platform, &id));

    Ok(Some(ContentRecord {
        id,
        platform,
        title,
        url,
        tags,
        download_url,
    }))
}

/// Forward-slash path of a folder's archive, relative to wherever `root` is relative to.
fn download_path(root: &Path, platform: Platform, id: &str) -> String {
    let root = root.to_string_lossy().replace('\\', "/");
    let root = root.trim_end_matches('/');
    if root.is_empty() {
        format!("{platform}/{id}/{ZIP_FILE}")
    } else {
        format!("{root}/{platform}/{id}/{ZIP_FILE}")
    }
}

/// Trimmed file contents; a missing file reads as empty.
fn read_trimmed(path: &Path) -> Result<String, ScanError> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(text.trim().to_string()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(String::new()),
        Err(source) => Err(io_error(path, source)),
    }
}

fn ensure_unique_ids(records: &[ContentRecord]) -> Result<(), ScanError> {
    let mut seen = HashSet::new();
    for record in records {
        if !seen.insert((record.platform, record.id.as_str())) {
            return Err(ScanError::DuplicateId {
                platform: record.platform,
                id: record.id.clone(),
            });
        }
    }
    Ok(())
}

fn io_error(path: &Path, source: io::Error) -> ScanError {
    ScanError::Io {
        path: path.to_path_buf(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn download_path_uses_forward_slashes() {
        assert_eq!(
            download_path(Path::new("content/"), Platform::LinkedIn, "0001"),
            "content/linkedin/0001/Files.zip"
        );
        assert_eq!(
            download_path(Path::new(""), Platform::YouTube, "20250101"),
            "youtube/20250101/Files.zip"
        );
    }
}
