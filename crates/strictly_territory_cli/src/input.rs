//! Parsing of typed commands.

use derive_more::{Display, Error};
use strictly_territory::{Dimension, Location};

/// A command typed by a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Mark the tile at the given location.
    Mark(Location),
    /// Start a fresh game with the same settings.
    Restart,
    /// Show the board and the command list again.
    Help,
    /// Leave the program.
    Quit,
}

/// Why a typed line could not be understood.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum InputError {
    /// Nothing but whitespace was typed.
    #[display("Type a move as `row column`, or `help`")]
    Empty,
    /// A coordinate was not a positive number.
    #[display("`{}` is not a row or column number", _0)]
    NotANumber(#[error(not(source))] String),
    /// Wrong number of words.
    #[display("Expected `row column`, got `{}`", _0)]
    Malformed(#[error(not(source))] String),
    /// Coordinates outside the board.
    #[display("Rows and columns go from 1 to {}", _0)]
    OffBoard(#[error(not(source))] usize),
}

/// Parses one line of input.
///
/// Coordinates are 1-based, row first, separated by whitespace or a comma.
pub fn parse_command(line: &str, dimension: Dimension) -> Result<Command, InputError> {
    let trimmed = line.trim();
    match trimmed.to_ascii_lowercase().as_str() {
        "" => return Err(InputError::Empty),
        "r" | "restart" => return Ok(Command::Restart),
        "q" | "quit" | "exit" => return Ok(Command::Quit),
        "h" | "help" | "?" => return Ok(Command::Help),
        _ => {}
    }

    let words: Vec<&str> = trimmed
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|word| !word.is_empty())
        .collect();
    let [row, column] = words.as_slice() else {
        return Err(InputError::Malformed(trimmed.to_string()));
    };

    let row = coordinate(row, dimension.rows())?;
    let column = coordinate(column, dimension.columns())?;
    Ok(Command::Mark(Location::new(row, column)))
}

fn coordinate(word: &str, limit: usize) -> Result<usize, InputError> {
    let value: usize = word
        .parse()
        .map_err(|_| InputError::NotANumber(word.to_string()))?;
    if value == 0 || value > limit {
        return Err(InputError::OffBoard(limit));
    }
    Ok(value - 1)
}
