mod common;

use std::fs;
use std::sync::Arc;

use catalog_app::commands::{browse, render_page};
use catalog_app::platform::PreferenceStore;
use catalog_app::script::{parse_script, ScriptError};
use catalog_core::{ContentRecord, Platform, Repository, Settings};
use pretty_assertions::assert_eq;
use tempfile::tempdir;

use common::{init_logging, sample_repository, settings};

fn run_script(script: &str) -> String {
    init_logging();
    let dir = tempdir().unwrap();
    let commands = parse_script(script).unwrap();
    let mut out = Vec::new();
    browse(
        sample_repository(),
        settings(),
        "",
        PreferenceStore::new(dir.path().join("prefs.ron")),
        &commands,
        &mut out,
    )
    .unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn browse_echoes_commands_changes_and_address() {
    let output = run_script("# narrow down\ntag m-code\nback\n");
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines[0], "@ ");
    assert_eq!(lines[1], "> tag m-code");
    assert!(lines
        .iter()
        .any(|line| line.starts_with("[results-count] <p id=\"results-count\">Showing 1\u{2013}10 of 10 items")));
    let back = lines.iter().position(|line| *line == "> back").unwrap();
    assert_eq!(lines[back - 1], "@ ?tag=m-code");
    assert_eq!(lines.last(), Some(&"@ "));
}

#[test]
fn browse_reports_nothing_for_a_no_op() {
    let output = run_script("platform all\n");
    assert_eq!(output, "@ \n> platform all\n@ \n");
}

#[test]
fn browse_waits_out_the_search_debounce() {
    let output = run_script("search Excel Formulas\nwait 200\nshow results-count\n");
    assert!(output.contains("> wait 200\n"));
    assert!(output.contains("@ ?q=excel+formulas\n"));
    assert!(output.ends_with("<p id=\"results-count\">Showing 1\u{2013}10 of 10 items</p>\n"));
}

#[test]
fn goto_opens_a_fresh_page() {
    let output = run_script("goto page=2&sort=oldest\nshow results-count\n");
    assert!(output.contains("> goto page=2&sort=oldest\n@ ?page=2&sort=oldest\n"));
    assert!(output.contains("Showing 13\u{2013}24 of 30 items"));
}

#[test]
fn script_errors_name_the_line() {
    assert_eq!(
        parse_script("tag excel\n\nzoom 3\n").unwrap_err(),
        ScriptError::UnknownCommand {
            line: 3,
            command: "zoom".to_string()
        }
    );
    assert_eq!(
        parse_script("page two").unwrap_err().to_string(),
        "line 1: page expects a page number"
    );
}

#[test]
fn rendered_page_escapes_record_text_and_neutralises_links() {
    init_logging();
    let dir = tempdir().unwrap();
    let repository = Repository::new(vec![ContentRecord {
        id: "0001".into(),
        platform: Platform::LinkedIn,
        title: "<b>Tips & Tricks</b>".into(),
        url: "javascript:alert(1)".into(),
        tags: vec!["o'reilly".into()],
        download_url: None,
    }])
    .unwrap();

    let html = render_page(
        Arc::new(repository),
        Settings::default(),
        "",
        PreferenceStore::new(dir.path().join("prefs.ron")),
    );
    assert!(html.contains("&lt;b&gt;Tips &amp; Tricks&lt;/b&gt;"));
    assert!(!html.contains("<b>Tips"));
    assert!(html.contains("o&#039;reilly"));
    assert!(html.contains("data-key=\"linkedin-0001\""));
    assert!(html.contains("Showing 1\u{2013}1 of 1 items"));
    assert!(!html.contains("javascript:"));
}

#[test]
fn render_page_reads_stored_theme() {
    init_logging();
    let dir = tempdir().unwrap();
    let prefs = dir.path().join("prefs.ron");
    fs::write(&prefs, "(theme: light)").unwrap();

    let html = render_page(
        sample_repository(),
        settings(),
        "?platform=youtube",
        PreferenceStore::new(prefs),
    );
    assert!(html.contains("data-theme=\"light\""));
    assert!(html.contains("Showing 1\u{2013}6 of 6 items"));
}
