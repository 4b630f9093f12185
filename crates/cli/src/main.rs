//! hnds CLI entry point.

use anyhow::Result;
use clap::Parser;
use hnds_cli::cli::Cli;
use hnds_cli::{run::run, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so JSON on stdout stays parseable.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hnds=info,hnds_cli=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let output = run(cli, Config::from_env())?;
    println!("{output}");

    Ok(())
}
