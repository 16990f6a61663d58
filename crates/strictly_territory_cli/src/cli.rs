//! Command-line interface for the territory binary.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use strictly_territory::{Difficulty, GameSettings, Opponent};
use tracing::{debug, instrument};

/// Strictly Territory - tic-tac-toe on an N×N board
#[derive(Parser, Debug)]
#[command(name = "territory")]
#[command(about = "Play tic-tac-toe against a human or an automated opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Settings file (TOML); flags below override its values
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Rows and columns of the board
    #[arg(short, long)]
    pub size: Option<usize>,

    /// Play against a second human instead of the engine
    #[arg(long, conflicts_with = "difficulty")]
    pub human: bool,

    /// Automated opponent strength: easy, medium or hard
    #[arg(short, long)]
    pub difficulty: Option<Difficulty>,

    /// Seed for reproducible games
    #[arg(long)]
    pub seed: Option<u64>,

    /// Pause before the automated opponent moves, in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,
}

impl Cli {
    /// Builds validated game settings from the config file and flags.
    #[instrument(skip(self))]
    pub fn settings(&self) -> Result<GameSettings> {
        let mut settings = match &self.config {
            Some(path) => GameSettings::from_file(path)
                .with_context(|| format!("loading settings from {}", path.display()))?,
            None => GameSettings::default(),
        };

        if let Some(size) = self.size {
            settings = settings.with_size(size);
        }
        if self.human {
            settings = settings.with_opponent(Opponent::Human);
        } else if let Some(difficulty) = self.difficulty {
            settings = settings.with_opponent(Opponent::Automated { difficulty });
        }
        if let Some(seed) = self.seed {
            settings = settings.with_seed(seed);
        }
        if let Some(delay_ms) = self.delay_ms {
            settings = settings.with_automated_move_delay_ms(delay_ms);
        }

        settings.validate()?;
        debug!(?settings, "Resolved settings");
        Ok(settings)
    }
}
