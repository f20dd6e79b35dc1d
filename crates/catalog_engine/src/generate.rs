use std::path::PathBuf;

use catalog_core::Platform;
use catalog_logging::catalog_info;
use thiserror::Error;

use crate::export::{write_data, DataFormat, ExportError};
use crate::readme::{update_readme, ReadmeError};
use crate::scan::{scan_content, ScanError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    pub content_root: PathBuf,
    pub output: PathBuf,
    pub readme: Option<PathBuf>,
    pub format: DataFormat,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateSummary {
    pub linkedin: usize,
    pub youtube: usize,
    pub output: PathBuf,
    pub readme_updated: bool,
}

impl GenerateSummary {
    pub fn total(&self) -> usize {
        self.linkedin + self.youtube
    }
}

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Scan(#[from] ScanError),
    #[error(transparent)]
    Export(#[from] ExportError),
    #[error(transparent)]
    Readme(#[from] ReadmeError),
}

/// Scan the content tree, write the data file and refresh the README if one is given.
pub fn generate(options: &GenerateOptions) -> Result<GenerateSummary, GenerateError> {
    catalog_info!("generating index from {}", options.content_root.display());
    let records = scan_content(&options.content_root)?;
    write_data(&options.output, &records, options.format)?;
    if let Some(readme) = &options.readme {
        update_readme(readme, &records)?;
    }

    let count = |platform: Platform| {
        records
            .iter()
            .filter(|record| record.platform == platform)
            .count()
    };
    Ok(GenerateSummary {
        linkedin: count(Platform::LinkedIn),
        youtube: count(Platform::YouTube),
        output: options.output.clone(),
        readme_updated: options.readme.is_some(),
    })
}
