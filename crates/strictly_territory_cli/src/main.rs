//! Strictly Territory - terminal tic-tac-toe.
//!
//! Play against a second human or an automated opponent on an N×N board.

#![warn(missing_docs)]

mod cli;
mod driver;
mod input;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr, stdout belongs to the board
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let settings = cli.settings()?;
    info!(?settings, "Starting territory");

    driver::run(settings).await
}
