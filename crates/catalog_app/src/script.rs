//! Line-oriented command scripts for `browse`.
//!
//! One command per line; blank lines and lines starting with `#` are skipped.

use std::time::Duration;

use catalog_core::{FacetValue, FilterFacet, Key, RecordKey, SortOrder};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptCommand {
    /// Type into the search field (replaces its text).
    Search(String),
    ClearSearch,
    Sort(SortOrder),
    Platform(FacetValue),
    Tag(FacetValue),
    Reset,
    Dismiss(FilterFacet),
    Page(usize),
    Back,
    Forward,
    /// Open a fresh page at this query string.
    Goto(String),
    Open(RecordKey),
    Close,
    Key(Key),
    Scroll(u32),
    ScrollTop,
    Theme,
    Wait(Duration),
    /// Print one region, or the whole document.
    Show(Option<String>),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScriptError {
    #[error("line {line}: unknown command {command:?}")]
    UnknownCommand { line: usize, command: String },
    #[error("line {line}: {command} expects {expected}")]
    BadArgument {
        line: usize,
        command: String,
        expected: &'static str,
    },
}

/// Parse a whole script. Lines are numbered from 1 in errors.
pub fn parse_script(text: &str) -> Result<Vec<(usize, ScriptCommand)>, ScriptError> {
    let mut commands = Vec::new();
    for (index, raw) in text.lines().enumerate() {
        let line = index + 1;
        if let Some(command) = parse_line(line, raw)? {
            commands.push((line, command));
        }
    }
    Ok(commands)
}

pub fn parse_line(line: usize, raw: &str) -> Result<Option<ScriptCommand>, ScriptError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }
    let (name, arg) = match trimmed.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (trimmed, ""),
    };
    let bad = |expected: &'static str| ScriptError::BadArgument {
        line,
        command: name.to_string(),
        expected,
    };

    let command = match name {
        "search" => ScriptCommand::Search(arg.to_string()),
        "clear-search" => ScriptCommand::ClearSearch,
        "sort" => ScriptCommand::Sort(SortOrder::parse(arg)),
        "platform" => ScriptCommand::Platform(FacetValue::parse(arg)),
        "tag" => ScriptCommand::Tag(FacetValue::parse(arg)),
        "reset" => ScriptCommand::Reset,
        "dismiss" => {
            ScriptCommand::Dismiss(FilterFacet::parse(arg).ok_or_else(|| bad("platform, tag, sort or search"))?)
        }
        "page" => ScriptCommand::Page(arg.parse().map_err(|_| bad("a page number"))?),
        "back" => ScriptCommand::Back,
        "forward" => ScriptCommand::Forward,
        "goto" => ScriptCommand::Goto(arg.to_string()),
        "open" => ScriptCommand::Open(RecordKey::parse(arg).ok_or_else(|| bad("<platform>-<id>"))?),
        "close" => ScriptCommand::Close,
        "key" => ScriptCommand::Key(match arg {
            "escape" => Key::Escape,
            "tab" => Key::Tab,
            "shift-tab" => Key::ShiftTab,
            "slash" => Key::Slash,
            _ => return Err(bad("escape, tab, shift-tab or slash")),
        }),
        "scroll" => ScriptCommand::Scroll(arg.parse().map_err(|_| bad("a pixel offset"))?),
        "scroll-top" => ScriptCommand::ScrollTop,
        "theme" => ScriptCommand::Theme,
        "wait" => ScriptCommand::Wait(Duration::from_millis(
            arg.parse().map_err(|_| bad("milliseconds"))?,
        )),
        "show" => ScriptCommand::Show((!arg.is_empty()).then(|| arg.to_string())),
        other => {
            return Err(ScriptError::UnknownCommand {
                line,
                command: other.to_string(),
            })
        }
    };
    Ok(Some(command))
}
