#![allow(dead_code)]

use std::path::Path;
use std::sync::{Arc, Once};
use std::time::Duration;

use catalog_app::platform::{Browser, PreferenceStore};
use catalog_core::{ContentRecord, Platform, Repository, Settings};
use url::Url;

pub const SHORT_DEBOUNCE: Duration = Duration::from_millis(20);

pub fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(catalog_logging::initialize_for_tests);
}

/// Thirty records `0001..=0030`; every fifth is a YouTube post, tags cycle by `i % 3`.
/// `0030` links to a relative page and ships a download.
pub fn sample_records() -> Vec<ContentRecord> {
    (1..=30)
        .map(|i| {
            let platform = if i % 5 == 0 {
                Platform::YouTube
            } else {
                Platform::LinkedIn
            };
            let (title, tags): (String, &[&str]) = match i % 3 {
                0 => (format!("Excel Formulas {i}"), &["excel", "formulas"]),
                1 => (format!("Power Query trick {i}"), &["power-query", "m-code"]),
                _ => (format!("Charting {i}"), &["excel", "charts"]),
            };
            ContentRecord {
                id: format!("{i:04}"),
                platform,
                title,
                url: if i == 30 {
                    "watch/0030".to_string()
                } else {
                    String::new()
                },
                tags: tags.iter().map(|tag| tag.to_string()).collect(),
                download_url: (i == 30).then(|| "files/0030.zip".to_string()),
            }
        })
        .collect()
}

pub fn sample_repository() -> Arc<Repository> {
    Arc::new(Repository::new(sample_records()).expect("unique keys"))
}

pub fn settings() -> Settings {
    Settings {
        base_url: Some(Url::parse("https://catalog.example.com/").expect("valid url")),
        search_debounce: SHORT_DEBOUNCE,
    }
}

pub fn open(dir: &Path, location: &str) -> Browser {
    init_logging();
    Browser::open(
        sample_repository(),
        settings(),
        location,
        PreferenceStore::new(dir.join("prefs.ron")),
    )
}

/// Number of cards rendered in the grid.
pub fn card_count(browser: &Browser) -> usize {
    browser
        .document()
        .region("content-grid")
        .map(|grid| grid.content.matches("class=\"session-card\"").count())
        .unwrap_or(0)
}

pub fn text(browser: &Browser, id: &str) -> String {
    browser
        .document()
        .region(id)
        .map(|region| region.content.clone())
        .unwrap_or_default()
}
