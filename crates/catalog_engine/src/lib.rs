//! Catalog engine: data file loading, content-folder scanning and README upkeep.
mod export;
mod generate;
mod load;
mod persist;
mod readme;
mod scan;

pub use export::{render_data, write_data, DataFormat, ExportError};
pub use generate::{generate, GenerateError, GenerateOptions, GenerateSummary};
pub use load::{load_records, load_repository, parse_records, LoadError, LEGACY_DATA_PREFIX};
pub use persist::{ensure_dir, write_atomic, PersistError};
pub use readme::{render_readme, topic_badges, update_readme, ReadmeError, TAG_DISPLAY_ORDER};
pub use scan::{scan_content, ScanError, NAME_FILE, TAGS_FILE, URL_FILE, ZIP_FILE};
