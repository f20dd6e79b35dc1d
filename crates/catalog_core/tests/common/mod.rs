#![allow(dead_code)]

use std::sync::{Arc, Once};

use catalog_core::{update, AppState, ContentRecord, Effect, Msg, Platform, Repository, Settings, Theme};

pub fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(catalog_logging::initialize_for_tests);
}

pub fn record(platform: Platform, id: &str, title: &str, tags: &[&str]) -> ContentRecord {
    ContentRecord {
        id: id.to_string(),
        platform,
        title: title.to_string(),
        url: String::new(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        download_url: None,
    }
}

/// Thirty records `0001..=0030`; every fifth is a YouTube post.
///
/// Tags cycle by `i % 3`: 0 -> excel+formulas, 1 -> power-query+m-code, 2 -> excel+charts.
pub fn sample_records() -> Vec<ContentRecord> {
    (1..=30)
        .map(|i| {
            let platform = if i % 5 == 0 {
                Platform::YouTube
            } else {
                Platform::LinkedIn
            };
            let id = format!("{i:04}");
            match i % 3 {
                0 => record(platform, &id, &format!("Excel Formulas {i}"), &["excel", "formulas"]),
                1 => record(platform, &id, &format!("Power Query trick {i}"), &["power-query", "m-code"]),
                _ => record(platform, &id, &format!("Charting {i}"), &["excel", "charts"]),
            }
        })
        .collect()
}

pub fn sample_repository() -> Arc<Repository> {
    Arc::new(Repository::new(sample_records()).expect("unique keys"))
}

pub fn start(location: &str) -> (AppState, Vec<Effect>) {
    let state = AppState::new(sample_repository(), Settings::default());
    update(
        state,
        Msg::Started {
            location: location.to_string(),
            theme: Theme::Dark,
        },
    )
}

pub fn ids(state: &AppState) -> Vec<String> {
    state
        .listing()
        .records(state.repository())
        .map(|r| r.id.clone())
        .collect()
}

pub fn pushed(effects: &[Effect]) -> Vec<String> {
    effects
        .iter()
        .filter_map(|effect| match effect {
            Effect::PushUrl { query } => Some(query.clone()),
            _ => None,
        })
        .collect()
}
