//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse command-line arguments and environment variables.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `commands` module).
//! - Does not load sheets or settings (see the sheets crate).

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "hintsheet")]
#[command(about = "Context-sensitive cheatsheets of keyboard shortcuts", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  hintsheet list\n  hintsheet show firefox\n  hintsheet match --wm-class Firefox --title 'Mozilla Firefox'\n  hintsheet match --wm-class unknown --fallback vscode\n"
)]
pub struct Cli {
    /// Directory with user sheet files (overrides the default config dir)
    #[arg(long, global = true, env = "HINTSHEET_USER_DIR", value_name = "DIR")]
    pub user_dir: Option<PathBuf>,

    /// Enable debug logging (RUST_LOG overrides this)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all loaded sheets
    List {
        /// Emit the full sheet collection as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print one sheet's sections and bindings
    Show {
        /// Id of the sheet to print
        id: String,

        /// Emit the sheet as JSON
        #[arg(long)]
        json: bool,
    },

    /// Resolve the best-matching sheet id for a window
    Match {
        /// Window class / process name of the focused window
        #[arg(long, default_value = "")]
        wm_class: String,

        /// Title of the focused window
        #[arg(long, default_value = "")]
        title: String,

        /// Sheet id to fall back to when nothing matches
        /// (defaults to the persisted fallback_cheatsheet setting)
        #[arg(long)]
        fallback: Option<String>,
    },
}
