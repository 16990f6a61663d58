//! Strictly Territory - square-board tic-tac-toe engine.
//!
//! Two contestants take turns marking tiles on an N×N board. Completing a
//! whole row, column, or one of the two main diagonals wins; a full board
//! without a completed line is a draw.
//!
//! # Architecture
//!
//! - **Board**: tiles, locations and lazy line views
//! - **Rules**: win and draw detection over a board
//! - **Strategy**: the three automated move policies
//! - **Game**: turn order and the InProgress / Draw / Won state machine
//! - **Session**: async wrapper that plays automated moves after a delay
//!
//! # Example
//!
//! ```
//! use strictly_territory::{Dimension, Game, GameStatus, Opponent};
//!
//! # fn example() -> Result<(), strictly_territory::GameError> {
//! let mut game = Game::new(Dimension::square(3), Opponent::Human)?;
//! let location = game.board().unmarked_locations().next().unwrap();
//! assert_eq!(game.submit_human_move(location)?, GameStatus::InProgress);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod contestant;
mod error;
mod game;
pub mod invariants;
pub mod rules;
mod session;
mod settings;
mod status;
mod strategy;
mod types;

// Crate-level exports - Board model
pub use board::{Board, Line, LineTiles, Tile};

// Crate-level exports - Value types
pub use types::{Difficulty, Dimension, Location, Sign};

// Crate-level exports - Errors
pub use error::GameError;

// Crate-level exports - Contestants and strategies
pub use contestant::{Contestant, MoveSource};
pub use strategy::{Strategy, all_but_one, find_all_but_one, pick_random};

// Crate-level exports - Game state machine
pub use game::{Game, GameSetup};
pub use status::GameStatus;

// Crate-level exports - Settings
pub use settings::{GameSettings, Opponent, SIZE_RANGE, SettingsError};

// Crate-level exports - Async session
pub use session::{GameEvent, GameSession};
