//! Content catalog browser CLI.

use anyhow::Result;
use catalog_app::cli::{Cli, Command};
use catalog_app::commands::{run_browse, run_generate, run_render};
use catalog_app::platform::logging;
use catalog_app::platform::AppConfig;
use catalog_logging::catalog_info;
use clap::Parser;

fn main() {
    let cli = Cli::parse();
    let exit_code = match run(&cli) {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> Result<()> {
    let config = AppConfig::load(cli.config.as_deref())?;
    let configured = config.level_filter()?;
    let level = cli
        .verbosity()
        .map_or(configured, |requested| requested.max(configured));
    logging::initialize(config.log.destination, level, &config.log.file);
    catalog_info!("catalog_app starting");

    match &cli.command {
        Command::Render(args) => run_render(args, &config),
        Command::Browse(args) => run_browse(args, &config),
        Command::Generate(args) => {
            let summary = run_generate(args)?;
            println!(
                "Generated {} with {} items ({} LinkedIn, {} YouTube)",
                summary.output.display(),
                summary.total(),
                summary.linkedin,
                summary.youtube
            );
            if summary.readme_updated {
                println!("README counters and badges updated");
            }
            Ok(())
        }
    }
}
