//! Chronicles archive command.

use std::path::PathBuf;

use clap::Parser;

/// Browse the chronicles archive.
#[derive(Debug, Parser)]
pub struct ChroniclesCommand {
    /// Chronicles JSON file (defaults to chronicles.json in the fixture directory).
    #[arg(long)]
    pub file: Option<PathBuf>,
    /// Decade to show, e.g. 1990.
    #[arg(long)]
    pub decade: Option<i32>,
    /// Case-insensitive search over title and description.
    #[arg(long, default_value = "")]
    pub search: String,
}
