//! CLI argument definitions for the catalog browser.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use log::LevelFilter;

#[derive(Parser)]
#[command(
    name = "catalog_app",
    version,
    about = "Browse, render and generate a LinkedIn/YouTube content catalog",
    long_about = "Filter, sort and paginate a content catalog the way the web page does.\n\n\
                  `render` prints the page for one address, `browse` replays user actions,\n\
                  and `generate` rebuilds the data file from content folders."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// RON configuration file.
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Raise log verbosity (-v for debug, -vv for trace).
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

impl Cli {
    /// Level requested by `-v`, if any.
    pub fn verbosity(&self) -> Option<LevelFilter> {
        match self.verbose {
            0 => None,
            1 => Some(LevelFilter::Debug),
            _ => Some(LevelFilter::Trace),
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the rendered page for one address.
    Render(RenderArgs),

    /// Replay a script of user actions and print the regions each one changes.
    Browse(BrowseArgs),

    /// Build the data file from content folders.
    Generate(GenerateArgs),
}

#[derive(Parser)]
pub struct RenderArgs {
    /// Record data (JSON array or legacy script wrapper).
    #[arg(long = "data", value_name = "FILE")]
    pub data: Option<PathBuf>,

    /// Query string of the page address, with or without the leading `?`.
    #[arg(long = "query", value_name = "QS", default_value = "")]
    pub query: String,

    /// Page address that relative record links resolve against.
    #[arg(long = "base-url", value_name = "URL")]
    pub base_url: Option<String>,
}

#[derive(Parser)]
pub struct BrowseArgs {
    /// Record data (JSON array or legacy script wrapper).
    #[arg(long = "data", value_name = "FILE")]
    pub data: Option<PathBuf>,

    /// Query string the page is opened at.
    #[arg(long = "query", value_name = "QS", default_value = "")]
    pub query: String,

    /// Command script; standard input when omitted.
    #[arg(long = "script", value_name = "FILE")]
    pub script: Option<PathBuf>,
}

#[derive(Parser)]
pub struct GenerateArgs {
    /// Directory holding the `linkedin/` and `youtube/` content folders.
    #[arg(long = "content-root", value_name = "DIR", default_value = ".")]
    pub content_root: PathBuf,

    /// Data file to write.
    #[arg(long = "output", value_name = "FILE")]
    pub output: PathBuf,

    /// README whose AUTO markers are refreshed.
    #[arg(long = "readme", value_name = "FILE")]
    pub readme: Option<PathBuf>,

    /// Write `window.CONTENT_DATA = [...];` instead of plain JSON.
    #[arg(long = "legacy-js")]
    pub legacy_js: bool,
}
