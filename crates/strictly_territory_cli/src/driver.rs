//! Line-based terminal driver.
//!
//! Reads commands from stdin and renders session events to stdout. Logs go
//! to stderr so they never interleave with the board.

use crate::input::{Command, parse_command};
use anyhow::{Context, Result};
use std::ops::ControlFlow;
use strictly_territory::{GameEvent, GameSession, GameSettings, GameStatus};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info, instrument};

const HELP: &str = "Commands: `row column` (1-based) to mark a tile, `r` to restart, `q` to quit";

/// Plays games until the player quits or stdin closes.
#[instrument(skip_all, fields(size = settings.size()))]
pub async fn run(settings: GameSettings) -> Result<()> {
    let dimension = settings.dimension();
    let (session, mut events) = GameSession::start(settings).context("starting game session")?;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("{}", HELP);
    render_board(&session);
    prompt(&session);

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("reading from stdin")? else {
                    debug!("stdin closed");
                    break;
                };
                match parse_command(&line, dimension) {
                    Ok(command) => {
                        if execute(&session, command)?.is_break() {
                            break;
                        }
                    }
                    Err(e) => println!("{}", e),
                }
            }
            Some(event) = events.recv() => render_event(&session, event),
        }
    }

    info!("Leaving");
    Ok(())
}

/// Carries out one command; `Break` means the player wants to leave.
fn execute(session: &GameSession, command: Command) -> Result<ControlFlow<()>> {
    match command {
        Command::Quit => return Ok(ControlFlow::Break(())),
        Command::Help => {
            println!("{}", HELP);
            render_board(session);
        }
        Command::Restart => session.restart().context("restarting game")?,
        Command::Mark(location) => {
            // Printed when the MoveRejected event arrives.
            if let Err(e) = session.submit_human_move(location) {
                debug!(%location, error = %e, "Move not applied");
            }
        }
    }
    Ok(ControlFlow::Continue(()))
}

fn render_event(session: &GameSession, event: GameEvent) {
    match event {
        GameEvent::AutomatedThinking { sign } => println!("{} is thinking...", sign),
        GameEvent::MoveMade { sign, location } => {
            println!(
                "{} marks row {}, column {}",
                sign,
                location.row() + 1,
                location.column() + 1
            );
            render_board(session);
            prompt(session);
        }
        GameEvent::MoveRejected(e) => println!("Move rejected: {}", e),
        GameEvent::GameOver { winner } => {
            match winner {
                Some(sign) => println!("Player {} wins!", sign),
                None => println!("Draw."),
            }
            println!("Type `r` to play again or `q` to quit.");
        }
        GameEvent::Restarted => {
            println!("New game.");
            render_board(session);
            prompt(session);
        }
    }
}

fn render_board(session: &GameSession) {
    println!("\n{}\n", session.board().display());
}

fn prompt(session: &GameSession) {
    let game = session.game();
    if game.status() == GameStatus::InProgress && game.is_human_contestants_turn() {
        println!("{} to move:", game.current_contestant().sign());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_territory::{GameError, Location, Opponent};
    use tokio::sync::mpsc::UnboundedReceiver;

    fn human_session() -> (GameSession, UnboundedReceiver<GameEvent>) {
        let settings = GameSettings::default()
            .with_opponent(Opponent::Human)
            .with_seed(4);
        GameSession::start(settings).unwrap()
    }

    #[tokio::test]
    async fn test_rejected_mark_keeps_playing() {
        let (session, mut events) = human_session();
        let location = Location::new(1, 1);

        assert_eq!(
            execute(&session, Command::Mark(location)).unwrap(),
            ControlFlow::Continue(())
        );
        assert_eq!(
            execute(&session, Command::Mark(location)).unwrap(),
            ControlFlow::Continue(())
        );

        assert!(matches!(events.recv().await, Some(GameEvent::MoveMade { .. })));
        assert_eq!(
            events.recv().await,
            Some(GameEvent::MoveRejected(GameError::AlreadyMarked(location)))
        );
    }

    #[tokio::test]
    async fn test_quit_breaks() {
        let (session, _events) = human_session();
        assert!(execute(&session, Command::Quit).unwrap().is_break());
    }
}
