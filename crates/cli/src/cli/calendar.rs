//! Calendar CLI commands.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use hnds_core::calendar::Language;

/// Calendar commands.
#[derive(Debug, Parser)]
pub struct CalendarCommand {
    #[command(subcommand)]
    pub action: CalendarAction,
}

/// Available calendar actions.
#[derive(Debug, Subcommand)]
pub enum CalendarAction {
    /// Print the 6x7 grid of one or more months.
    Month {
        /// Year (defaults to the year of `--today`).
        #[arg(long)]
        year: Option<i32>,
        /// Month, 1-12 (defaults to the month of `--today`).
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: Option<u32>,
        /// Number of consecutive months to print.
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..=120))]
        count: u32,
        /// Day to highlight (defaults to the local date).
        #[arg(long)]
        today: Option<NaiveDate>,
        /// Heading and label language (hr or de).
        #[arg(long, default_value = "hr")]
        lang: Language,
        /// JSON file with events (defaults to the built-in events).
        #[arg(long)]
        events: Option<PathBuf>,
    },
    /// List events dated after a day.
    Upcoming {
        /// Maximum number of events.
        #[arg(long)]
        limit: Option<usize>,
        /// Reference day (defaults to the local date).
        #[arg(long)]
        now: Option<NaiveDate>,
        /// Label language (hr or de).
        #[arg(long, default_value = "hr")]
        lang: Language,
        /// JSON file with events (defaults to the built-in events).
        #[arg(long)]
        events: Option<PathBuf>,
    },
    /// Show one event.
    Show {
        /// Event ID.
        id: String,
        /// Label language (hr or de).
        #[arg(long, default_value = "hr")]
        lang: Language,
        /// JSON file with events (defaults to the built-in events).
        #[arg(long)]
        events: Option<PathBuf>,
    },
}
