//! hnds_cli - command-line viewer for the HNDS calendar and content listings.

pub mod cli;
pub mod config;
pub mod error;
pub mod fixtures;
pub mod output;
pub mod run;

pub use config::Config;
pub use error::{CliError, Result};
