use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use catalog_core::{FocusTarget, Key, Msg, Repository, Settings};
use catalog_engine::{generate, load_repository, DataFormat, GenerateOptions, GenerateSummary};
use catalog_logging::{catalog_debug, catalog_info};

use crate::cli::{BrowseArgs, GenerateArgs, RenderArgs};
use crate::platform::app::merge;
use crate::platform::{AppConfig, Browser, PreferenceStore, RegionId};
use crate::script::{parse_script, ScriptCommand};

/// Time left for animation-frame callbacks after each scripted action.
const FRAME_SETTLE: Duration = Duration::from_millis(50);

pub fn run_render(args: &RenderArgs, config: &AppConfig) -> Result<()> {
    let repository = open_repository(args.data.as_deref(), config)?;
    let settings = config.settings(args.base_url.as_deref())?;
    let preferences = PreferenceStore::new(config.preferences.clone());
    let html = render_page(repository, settings, &args.query, preferences);
    print!("{html}");
    Ok(())
}

/// Markup of the whole page opened at `query`.
pub fn render_page(
    repository: Arc<Repository>,
    settings: Settings,
    query: &str,
    preferences: PreferenceStore,
) -> String {
    Browser::open(repository, settings, query, preferences)
        .document()
        .to_html()
}

pub fn run_browse(args: &BrowseArgs, config: &AppConfig) -> Result<()> {
    let repository = open_repository(args.data.as_deref(), config)?;
    let settings = config.settings(None)?;
    let preferences = PreferenceStore::new(config.preferences.clone());

    let text = match &args.script {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("read script {}", path.display()))?,
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("read script from stdin")?;
            text
        }
    };
    let script = parse_script(&text)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    browse(repository, settings, &args.query, preferences, &script, &mut out)?;
    Ok(())
}

/// Replays `script` against a page opened at `query`, echoing each command and
/// the regions it changed, followed by the address bar.
pub fn browse(
    repository: Arc<Repository>,
    settings: Settings,
    query: &str,
    preferences: PreferenceStore,
    script: &[(usize, ScriptCommand)],
    out: &mut impl Write,
) -> io::Result<()> {
    let mut browser = Browser::open(
        Arc::clone(&repository),
        settings.clone(),
        query,
        preferences.clone(),
    );
    writeln!(out, "@ {}", browser.history().address())?;

    for (line, command) in script {
        catalog_debug!("script line {}: {:?}", line, command);
        writeln!(out, "> {}", describe(command))?;
        let changed = match command {
            ScriptCommand::Show(region) => {
                show(&browser, region.as_deref(), out)?;
                continue;
            }
            ScriptCommand::Goto(query) => {
                browser = Browser::open(
                    Arc::clone(&repository),
                    settings.clone(),
                    query,
                    preferences.clone(),
                );
                Vec::new()
            }
            command => {
                let mut changed = perform(&mut browser, command);
                merge(&mut changed, browser.wait(FRAME_SETTLE));
                changed
            }
        };
        for id in changed {
            if let Some(snapshot) = browser.document().snapshot(id) {
                writeln!(out, "[{id}] {snapshot}")?;
            }
        }
        writeln!(out, "@ {}", browser.history().address())?;
    }
    Ok(())
}

fn perform(browser: &mut Browser, command: &ScriptCommand) -> Vec<RegionId> {
    match command {
        ScriptCommand::Search(text) => {
            let mut changed = browser.focus(FocusTarget::SearchInput);
            merge(&mut changed, browser.dispatch(Msg::SearchInput(text.clone())));
            changed
        }
        ScriptCommand::ClearSearch => browser.dispatch(Msg::SearchCleared),
        ScriptCommand::Sort(sort) => browser.dispatch(Msg::SortSelected(sort.clone())),
        ScriptCommand::Platform(value) => browser.dispatch(Msg::PlatformSelected(value.clone())),
        ScriptCommand::Tag(value) => browser.dispatch(Msg::TagSelected(value.clone())),
        ScriptCommand::Reset => browser.dispatch(Msg::ResetFilters),
        ScriptCommand::Dismiss(facet) => browser.dispatch(Msg::FilterChipDismissed(*facet)),
        ScriptCommand::Page(page) => browser.dispatch(Msg::PageRequested(*page)),
        ScriptCommand::Back => browser.back(),
        ScriptCommand::Forward => browser.forward(),
        ScriptCommand::Open(key) => browser.activate_card(key.clone()),
        ScriptCommand::Close => browser.dispatch(Msg::ModalDismissed),
        ScriptCommand::Key(key) => browser.dispatch(Msg::KeyPressed(*key)),
        ScriptCommand::Scroll(offset) => browser.scroll(*offset),
        ScriptCommand::ScrollTop => browser.dispatch(Msg::ScrollTopClicked),
        ScriptCommand::Theme => browser.dispatch(Msg::ThemeToggled),
        ScriptCommand::Wait(duration) => browser.wait(*duration),
        ScriptCommand::Goto(_) | ScriptCommand::Show(_) => Vec::new(),
    }
}

fn show(browser: &Browser, region: Option<&str>, out: &mut impl Write) -> io::Result<()> {
    match region {
        Some(id) => match browser.document().outer_html(id) {
            Some(html) => write!(out, "{html}"),
            None => writeln!(out, "! no region {id:?}"),
        },
        None => write!(out, "{}", browser.document().to_html()),
    }
}

fn describe(command: &ScriptCommand) -> String {
    match command {
        ScriptCommand::Search(text) => format!("search {text}"),
        ScriptCommand::ClearSearch => "clear-search".to_string(),
        ScriptCommand::Sort(sort) => format!("sort {}", sort.as_str()),
        ScriptCommand::Platform(value) => format!("platform {}", value.as_str()),
        ScriptCommand::Tag(value) => format!("tag {}", value.as_str()),
        ScriptCommand::Reset => "reset".to_string(),
        ScriptCommand::Dismiss(facet) => format!("dismiss {}", facet.as_str()),
        ScriptCommand::Page(page) => format!("page {page}"),
        ScriptCommand::Back => "back".to_string(),
        ScriptCommand::Forward => "forward".to_string(),
        ScriptCommand::Goto(query) => format!("goto {query}"),
        ScriptCommand::Open(key) => format!("open {key}"),
        ScriptCommand::Close => "close".to_string(),
        ScriptCommand::Key(key) => format!("key {}", key_name(*key)),
        ScriptCommand::Scroll(offset) => format!("scroll {offset}"),
        ScriptCommand::ScrollTop => "scroll-top".to_string(),
        ScriptCommand::Theme => "theme".to_string(),
        ScriptCommand::Wait(duration) => format!("wait {}", duration.as_millis()),
        ScriptCommand::Show(Some(id)) => format!("show {id}"),
        ScriptCommand::Show(None) => "show".to_string(),
    }
}

fn key_name(key: Key) -> &'static str {
    match key {
        Key::Escape => "escape",
        Key::Tab => "tab",
        Key::ShiftTab => "shift-tab",
        Key::Slash => "slash",
        Key::Other => "other",
    }
}

pub fn run_generate(args: &GenerateArgs) -> Result<GenerateSummary> {
    let options = GenerateOptions {
        content_root: args.content_root.clone(),
        output: args.output.clone(),
        readme: args.readme.clone(),
        format: if args.legacy_js {
            DataFormat::LegacyScript
        } else {
            DataFormat::Json
        },
    };
    let summary = generate(&options)
        .with_context(|| format!("generate from {}", options.content_root.display()))?;
    catalog_info!(
        "wrote {} records to {}",
        summary.total(),
        summary.output.display()
    );
    Ok(summary)
}

fn open_repository(data: Option<&Path>, config: &AppConfig) -> Result<Arc<Repository>> {
    let path: PathBuf = data
        .map(Path::to_path_buf)
        .or_else(|| config.data.clone())
        .ok_or_else(|| anyhow!("no data file: pass --data or set `data` in the config"))?;
    let repository =
        load_repository(&path).with_context(|| format!("load {}", path.display()))?;
    Ok(Arc::new(repository))
}
