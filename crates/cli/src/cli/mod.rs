//! CLI command definitions.

pub mod calendar;
pub mod chronicles;
pub mod listing;
pub mod search;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Calendar and content listings of the Croatian-German Society Split.
#[derive(Debug, Parser)]
#[command(name = "hnds")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format.
    #[arg(long, global = true, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress summaries and footers.
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Directory holding the JSON fixtures.
    #[arg(long, global = true, env = "HNDS_FIXTURES_DIR")]
    pub fixtures_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable text.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Month grids and upcoming events.
    Calendar(calendar::CalendarCommand),
    /// Filter, search and paginate any JSON array of records.
    List(listing::ListCommand),
    /// Browse the chronicles archive by decade.
    Chronicles(chronicles::ChroniclesCommand),
    /// Search the whole site.
    Search(search::SearchCommand),
}
