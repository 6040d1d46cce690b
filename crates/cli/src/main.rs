//! Hintsheet CLI - context-sensitive cheatsheets of keyboard shortcuts.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Load the sheet collection and persisted settings, then dispatch to
//!   the subcommand implementations.
//!
//! Does NOT handle:
//! - Sheet resolution logic (see `crates/sheets`).
//! - Window detection: callers pass `--wm-class`/`--title` explicitly
//!   (typically from their compositor's scripting hook).
//!
//! Invariants:
//! - Errors print to stderr and map to structured exit codes so scripts
//!   can distinguish configuration mistakes from unknown ids.

mod args;
mod commands;
mod error;

use args::{Cli, Commands};
use clap::Parser;
use error::{ExitCode, exit_code_for};
use hintsheet_sheets::{SettingsManager, SheetCollection};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(exit_code_for(&e).as_i32());
    }

    std::process::exit(ExitCode::Success.as_i32());
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let collection = match &cli.user_dir {
        Some(dir) => SheetCollection::load_with_user_dir(dir)?,
        None => SheetCollection::load()?,
    };

    match &cli.command {
        Commands::List { json } => commands::run_list(&collection, *json),
        Commands::Show { id, json } => commands::run_show(&collection, id, *json),
        Commands::Match {
            wm_class,
            title,
            fallback,
        } => {
            let settings = SettingsManager::new()?.load();
            commands::run_match(&collection, &settings, wm_class, title, fallback.as_deref())
        }
    }
}
