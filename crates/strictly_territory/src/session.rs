//! Asynchronous game session: schedules the automated contestant's moves.
//!
//! The [`Game`] itself is synchronous. A session wraps it behind a mutex,
//! reports every change as a [`GameEvent`], and runs automated moves on a
//! tokio task after a short "thinking" delay.

use crate::{Board, Game, GameError, GameSettings, GameStatus, Location, Sign, Tile};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

/// Messages sent from the session to the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// An automated contestant is about to move.
    AutomatedThinking {
        /// Sign of the automated contestant.
        sign: Sign,
    },
    /// A tile was marked.
    MoveMade {
        /// Sign that marked the tile.
        sign: Sign,
        /// Marked location.
        location: Location,
    },
    /// A submitted human move was rejected; the game is unchanged.
    MoveRejected(GameError),
    /// The game reached a terminal status.
    GameOver {
        /// Winner, or `None` for a draw.
        winner: Option<Sign>,
    },
    /// A fresh game replaced the previous one.
    Restarted,
}

#[derive(Debug)]
struct SessionState {
    game: Game,
    /// Bumped on restart so tasks scheduled for an old game do nothing.
    generation: u64,
    pending_automated: bool,
}

#[derive(Debug)]
struct Shared {
    state: Mutex<SessionState>,
    settings: GameSettings,
    delay: Duration,
    runtime: Handle,
    events: mpsc::UnboundedSender<GameEvent>,
}

/// A game plus the machinery that plays its automated contestant.
///
/// Cheap to clone; clones share the same game.
#[derive(Debug, Clone)]
pub struct GameSession {
    shared: Arc<Shared>,
}

impl GameSession {
    /// Creates a session and its event stream.
    ///
    /// Must be called from within a tokio runtime. If the automated
    /// contestant moves first, its move is scheduled immediately.
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidConfiguration` for a malformed board or
    /// when no tokio runtime is available.
    #[instrument(skip(settings), fields(size = settings.size(), opponent = ?settings.opponent()))]
    pub fn start(
        settings: GameSettings,
    ) -> Result<(Self, mpsc::UnboundedReceiver<GameEvent>), GameError> {
        let runtime = Handle::try_current().map_err(|e| {
            GameError::InvalidConfiguration(format!("game session needs a tokio runtime: {}", e))
        })?;
        let game = Game::from_settings(&settings)?;
        let (events, event_rx) = mpsc::unbounded_channel();

        let session = Self {
            shared: Arc::new(Shared {
                state: Mutex::new(SessionState {
                    game,
                    generation: 0,
                    pending_automated: false,
                }),
                delay: settings.automated_move_delay(),
                settings,
                runtime,
                events,
            }),
        };

        {
            let mut state = session.lock();
            session.schedule_if_automated(&mut state);
        }

        info!("Game session started");
        Ok((session, event_rx))
    }

    /// Submits a move for the human contestant whose turn it is.
    ///
    /// Rejections are returned and also reported as
    /// [`GameEvent::MoveRejected`].
    #[instrument(skip(self))]
    pub fn submit_human_move(&self, location: Location) -> Result<GameStatus, GameError> {
        let mut state = self.lock();
        let sign = state.game.current_contestant().sign();

        match state.game.submit_human_move(location) {
            Ok(status) => {
                self.emit(GameEvent::MoveMade { sign, location });
                self.after_move(&mut state);
                Ok(status)
            }
            Err(e) => {
                self.emit(GameEvent::MoveRejected(e.clone()));
                Err(e)
            }
        }
    }

    /// Replaces the game with a fresh one built from the same settings.
    ///
    /// Any automated move scheduled for the previous game is dropped.
    #[instrument(skip(self))]
    pub fn restart(&self) -> Result<(), GameError> {
        let game = Game::from_settings(&self.shared.settings)?;
        let mut state = self.lock();
        state.game = game;
        state.generation += 1;
        state.pending_automated = false;
        info!(generation = state.generation, "Game restarted");
        self.emit(GameEvent::Restarted);
        self.schedule_if_automated(&mut state);
        Ok(())
    }

    /// Snapshot of the current game.
    pub fn game(&self) -> Game {
        self.lock().game.clone()
    }

    /// Current status.
    pub fn status(&self) -> GameStatus {
        self.lock().game.status()
    }

    /// Snapshot of the board.
    pub fn board(&self) -> Board {
        self.lock().game.board().clone()
    }

    /// Snapshot of all tiles in row-major order, for rendering.
    pub fn tiles(&self) -> Vec<Tile> {
        self.lock().game.tiles().to_vec()
    }

    /// Whether a human contestant is to move.
    pub fn is_human_contestants_turn(&self) -> bool {
        self.lock().game.is_human_contestants_turn()
    }

    /// Settings the session was started with.
    pub fn settings(&self) -> &GameSettings {
        &self.shared.settings
    }

    fn lock(&self) -> MutexGuard<'_, SessionState> {
        // Every mutation completes before the guard drops, so a poisoned
        // state is still consistent.
        self.shared
            .state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn emit(&self, event: GameEvent) {
        if let Err(e) = self.shared.events.send(event) {
            debug!(event = ?e.0, "No listener for game event");
        }
    }

    fn after_move(&self, state: &mut SessionState) {
        if let GameStatus::Won(_) | GameStatus::Draw = state.game.status() {
            let winner = state.game.status().winner();
            info!(?winner, "Game over");
            self.emit(GameEvent::GameOver { winner });
            return;
        }
        self.schedule_if_automated(state);
    }

    fn schedule_if_automated(&self, state: &mut SessionState) {
        if !state.game.is_automated_contestants_turn() || state.pending_automated {
            return;
        }
        state.pending_automated = true;

        let sign = state.game.current_contestant().sign();
        let generation = state.generation;
        let delay = self.shared.delay;
        debug!(%sign, generation, ?delay, "Scheduling automated move");
        self.emit(GameEvent::AutomatedThinking { sign });

        let session = self.clone();
        self.shared.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            session.run_automated_move(generation);
        });
    }

    fn run_automated_move(&self, generation: u64) {
        let mut state = self.lock();
        if state.generation != generation {
            debug!(generation, current = state.generation, "Dropping move for replaced game");
            return;
        }
        state.pending_automated = false;

        if !state.game.is_in_progress() {
            debug!("Game already over, automated move skipped");
            return;
        }

        let sign = state.game.current_contestant().sign();
        match state.game.play_automated_move() {
            Ok(location) => {
                self.emit(GameEvent::MoveMade { sign, location });
                self.after_move(&mut state);
            }
            Err(e) => warn!(error = %e, "Automated move failed"),
        }
    }
}
