//! Keeps the auto-managed README sections (platform counts, topic badges) in sync
//! with the catalog.

use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use catalog_core::{ContentRecord, Platform};
use catalog_logging::catalog_info;
use thiserror::Error;

use crate::persist::{write_atomic, PersistError};

/// Known tags, in the order their badges appear.
pub const TAG_DISPLAY_ORDER: [&str; 8] = [
    "excel",
    "power-query",
    "m-code",
    "formulas",
    "dynamic-arrays",
    "charts",
    "data-analysis",
    "data-cleaning",
];

const FALLBACK_COLOR: &str = "6C757D";
const BADGE_SEPARATOR: &str = "&nbsp;";

#[derive(Debug, Error)]
pub enum ReadmeError {
    #[error("README file not found: {0}")]
    Missing(PathBuf),
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("expected exactly one marker pair for {marker}, found {found}")]
    MarkerCount { marker: String, found: usize },
    #[error(transparent)]
    Persist(#[from] PersistError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Badge {
    label: String,
    color: &'static str,
    alt: String,
    logo: Option<&'static str>,
    logo_color: Option<&'static str>,
}

impl Badge {
    fn known(
        label: &str,
        color: &'static str,
        alt: &str,
        logo: Option<&'static str>,
        logo_color: &'static str,
    ) -> Self {
        Self {
            label: label.to_string(),
            color,
            alt: alt.to_string(),
            logo,
            logo_color: Some(logo_color),
        }
    }

    fn for_tag(tag: &str) -> Self {
        match tag {
            "excel" => Self::known("Excel", "217346", "Excel", Some("microsoftexcel"), "white"),
            "power-query" => Self::known("Power_Query", "F2C811", "Power Query", None, "black"),
            "m-code" => Self::known("M_Code", "8E44AD", "M Code", None, "white"),
            "formulas" => Self::known("Formulas", "27AE60", "Formulas", None, "white"),
            "dynamic-arrays" => {
                Self::known("Dynamic_Arrays", "4472C4", "Dynamic Arrays", None, "white")
            }
            "charts" => Self::known("Charts", "E67E22", "Charts", None, "white"),
            "data-analysis" => {
                Self::known("Data_Analysis", "2E86C1", "Data Analysis", None, "white")
            }
            "data-cleaning" => {
                Self::known("Data_Cleaning", "1ABC9C", "Data Cleaning", None, "white")
            }
            _ => {
                let words: Vec<String> = tag.split('-').map(capitalize).collect();
                Self {
                    label: words.join("_"),
                    color: FALLBACK_COLOR,
                    alt: words.join(" "),
                    logo: None,
                    logo_color: None,
                }
            }
        }
    }

    fn to_html(&self) -> String {
        let mut src = format!(
            "https://img.shields.io/badge/{}-{}?style=flat-square",
            self.label, self.color
        );
        if let Some(logo) = self.logo {
            src.push_str("&logo=");
            src.push_str(logo);
        }
        if let Some(logo_color) = self.logo_color {
            src.push_str("&logoColor=");
            src.push_str(logo_color);
        }
        format!("<img src=\"{src}\" alt=\"{}\">", self.alt)
    }
}

/// First letter upper-cased, the rest lower-cased.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Badge markup for `tags`: known tags in display order, then the rest alphabetically.
pub fn topic_badges(tags: &BTreeSet<String>) -> String {
    let known = TAG_DISPLAY_ORDER
        .iter()
        .copied()
        .filter(|tag| tags.contains(*tag));
    let unknown = tags
        .iter()
        .map(String::as_str)
        .filter(|tag| !TAG_DISPLAY_ORDER.contains(tag));
    let badges: Vec<String> = known.chain(unknown).map(|tag| Badge::for_tag(tag).to_html()).collect();
    badges.join(&format!("{BADGE_SEPARATOR}\n"))
}

fn total_badge(total: usize) -> String {
    format!(
        "<img src=\"https://img.shields.io/badge/Total-{total}-FFD100?style=for-the-badge\" alt=\"Total\">"
    )
}

/// Rewrite every auto-managed section of `readme` for `records`.
pub fn render_readme(readme: &str, records: &[ContentRecord]) -> Result<String, ReadmeError> {
    let count = |platform: Platform| records.iter().filter(|r| r.platform == platform).count();
    let tags: BTreeSet<String> = records.iter().flat_map(|r| r.tags.iter().cloned()).collect();

    let readme = replace_inline(readme, "LINKEDIN_COUNT", &count(Platform::LinkedIn).to_string())?;
    let readme = replace_inline(&readme, "YOUTUBE_COUNT", &count(Platform::YouTube).to_string())?;
    let readme = replace_inline(&readme, "TOTAL_BADGE", &total_badge(records.len()))?;
    let readme = replace_inline(&readme, "TOTAL_COUNT", &records.len().to_string())?;
    replace_block(&readme, "TOPIC_BADGES", &topic_badges(&tags))
}

pub fn update_readme(path: &Path, records: &[ContentRecord]) -> Result<(), ReadmeError> {
    if !path.exists() {
        return Err(ReadmeError::Missing(path.to_path_buf()));
    }
    let readme = fs::read_to_string(path).map_err(|source| ReadmeError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let updated = render_readme(&readme, records)?;
    write_atomic(path, &updated)?;
    catalog_info!("updated {}", path.display());
    Ok(())
}

/// `<!-- AUTO:NAME -->value<!-- /AUTO:NAME -->`
fn replace_inline(content: &str, marker: &str, value: &str) -> Result<String, ReadmeError> {
    let open = format!("<!-- AUTO:{marker} -->");
    let close = format!("<!-- /AUTO:{marker} -->");
    replace_between(content, marker, &open, &close, value)
}

/// `<!-- AUTO:NAME_START -->` newline, value, newline `<!-- AUTO:NAME_END -->`
fn replace_block(content: &str, marker: &str, value: &str) -> Result<String, ReadmeError> {
    let open = format!("<!-- AUTO:{marker}_START -->");
    let close = format!("<!-- AUTO:{marker}_END -->");
    replace_between(content, marker, &open, &close, &format!("\n{value}\n"))
}

fn replace_between(
    content: &str,
    marker: &str,
    open: &str,
    close: &str,
    value: &str,
) -> Result<String, ReadmeError> {
    let mut spans = Vec::new();
    let mut cursor = 0;
    while let Some(found) = content[cursor..].find(open) {
        let body_start = cursor + found + open.len();
        let Some(len) = content[body_start..].find(close) else {
            break;
        };
        spans.push((body_start, body_start + len));
        cursor = body_start + len + close.len();
    }
    match spans.as_slice() {
        [(start, end)] => Ok(format!("{}{value}{}", &content[..*start], &content[*end..])),
        _ => Err(ReadmeError::MarkerCount {
            marker: marker.to_string(),
            found: spans.len(),
        }),
    }
}
