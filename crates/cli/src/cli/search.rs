//! Site-wide search command.

use std::path::PathBuf;

use clap::Parser;

/// Search pages, activities, news and chronicles.
#[derive(Debug, Parser)]
pub struct SearchCommand {
    /// Search text.
    pub query: String,
    /// Extra JSON file with search entries.
    #[arg(long)]
    pub file: Option<PathBuf>,
    /// Restrict results to one kind (page, news, chronicle, gallery, activity).
    #[arg(long, default_value = "all")]
    pub kind: String,
}
