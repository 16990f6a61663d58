//! Game state machine: turn order, move validation and end-of-game detection.

use crate::invariants::assert_invariants;
use crate::rules;
use crate::{
    Board, Contestant, Dimension, GameError, GameSettings, GameStatus, Line, Location, Opponent,
    Sign, Strategy, Tile,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Setup
// ─────────────────────────────────────────────────────────────

/// A validated board and contestant line-up, ready to start.
///
/// X is always human; O is either a second human or an automated
/// contestant.
#[derive(Debug, Clone)]
pub struct GameSetup {
    board: Board,
    contestants: [Contestant; 2],
}

impl GameSetup {
    /// Validates the dimension and builds the contestants.
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidConfiguration` if the dimension is empty
    /// or not square.
    #[instrument]
    pub fn new(dimension: Dimension, opponent: Opponent) -> Result<Self, GameError> {
        if dimension.rows() == 0 || dimension.columns() == 0 {
            warn!(%dimension, "Rejected empty board");
            return Err(GameError::InvalidConfiguration(format!(
                "board dimension {} must have positive rows and columns",
                dimension
            )));
        }
        if !dimension.is_square() {
            warn!(%dimension, "Rejected non-square board");
            return Err(GameError::InvalidConfiguration(format!(
                "board dimension {} must be square",
                dimension
            )));
        }

        let second = match opponent {
            Opponent::Human => Contestant::human(Sign::O),
            Opponent::Automated { difficulty } => {
                Contestant::automated(Sign::O, Strategy::for_difficulty(difficulty))
            }
        };

        Ok(Self {
            board: Board::new(dimension),
            contestants: [Contestant::human(Sign::X), second],
        })
    }

    /// Starts the game with a uniformly random first mover.
    #[instrument(skip_all)]
    pub fn start(self, mut rng: StdRng) -> Game {
        let first = rng.gen_range(0..self.contestants.len());
        let sign = self.contestants[first].sign();
        self.start_with(sign, rng)
    }

    /// Starts the game with the given sign to move first.
    #[instrument(skip(self, rng))]
    pub fn start_with(self, first: Sign, rng: StdRng) -> Game {
        let current = if self.contestants[0].sign() == first { 0 } else { 1 };
        let game = Game {
            board: self.board,
            contestants: self.contestants,
            current,
            status: GameStatus::InProgress,
            winning_line: None,
            rng,
        };
        info!(
            dimension = %game.board_dimension(),
            first = %game.current_contestant(),
            against_automated = game.is_playing_against_automated(),
            "Game started"
        );
        game
    }
}

// ─────────────────────────────────────────────────────────────
//  Game
// ─────────────────────────────────────────────────────────────

/// A running or finished game.
///
/// Mutated only by submitting moves; once the status leaves
/// `InProgress` every further move is rejected.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    contestants: [Contestant; 2],
    current: usize,
    status: GameStatus,
    winning_line: Option<Line>,
    rng: StdRng,
}

impl Game {
    /// Creates a game with an entropy-seeded random source.
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidConfiguration` if the dimension is empty
    /// or not square.
    #[instrument]
    pub fn new(dimension: Dimension, opponent: Opponent) -> Result<Self, GameError> {
        Ok(GameSetup::new(dimension, opponent)?.start(StdRng::from_entropy()))
    }

    /// Creates a game from settings, seeding the random source if a seed is set.
    #[instrument(skip(settings), fields(size = settings.size(), seed = ?settings.seed()))]
    pub fn from_settings(settings: &GameSettings) -> Result<Self, GameError> {
        let rng = match settings.seed() {
            Some(seed) => StdRng::seed_from_u64(*seed),
            None => StdRng::from_entropy(),
        };
        Ok(GameSetup::new(settings.dimension(), *settings.opponent())?.start(rng))
    }

    /// Marks a tile for the human contestant whose turn it is.
    ///
    /// # Errors
    ///
    /// - `GameOver` if the game has ended.
    /// - `NotYourTurn` if the automated contestant is to move.
    /// - `OutOfBounds` / `AlreadyMarked` if the tile cannot be marked.
    ///
    /// A rejected move leaves the game unchanged.
    #[instrument(skip(self), fields(status = %self.status))]
    pub fn submit_human_move(&mut self, location: Location) -> Result<GameStatus, GameError> {
        self.ensure_in_progress()?;
        let mover = *self.current_contestant();
        if mover.is_automated() {
            let submitter = mover.sign().opponent();
            warn!(%submitter, "Human move submitted during automated turn");
            return Err(GameError::NotYourTurn(submitter));
        }
        self.apply(mover.sign(), location)
    }

    /// Marks a tile on behalf of a specific human contestant.
    ///
    /// Rejected with `NotYourTurn` unless `sign` belongs to the human
    /// contestant currently to move.
    #[instrument(skip(self), fields(status = %self.status))]
    pub fn submit_move_for(
        &mut self,
        sign: Sign,
        location: Location,
    ) -> Result<GameStatus, GameError> {
        self.ensure_in_progress()?;
        let mover = *self.current_contestant();
        if mover.sign() != sign || mover.is_automated() {
            warn!(%sign, to_move = %mover, "Move submitted out of turn");
            return Err(GameError::NotYourTurn(sign));
        }
        self.apply(sign, location)
    }

    /// Lets the automated contestant whose turn it is choose and mark a tile.
    ///
    /// Returns the marked location.
    ///
    /// # Errors
    ///
    /// `GameOver` on a finished game, `NotYourTurn` if a human is to move.
    #[instrument(skip(self), fields(status = %self.status))]
    pub fn play_automated_move(&mut self) -> Result<Location, GameError> {
        self.ensure_in_progress()?;
        let mover = *self.current_contestant();
        let Some(strategy) = mover.strategy() else {
            return Err(GameError::NotYourTurn(mover.sign()));
        };

        let location = strategy
            .select(&self.board, mover.sign(), &mut self.rng)
            .ok_or(GameError::GameOver)?;
        debug!(%strategy, %location, "Automated contestant chose tile");

        self.apply(mover.sign(), location)?;
        Ok(location)
    }

    fn ensure_in_progress(&self) -> Result<(), GameError> {
        if self.status.is_terminal() {
            warn!(status = %self.status, "Move submitted after game end");
            return Err(GameError::GameOver);
        }
        Ok(())
    }

    fn apply(&mut self, sign: Sign, location: Location) -> Result<GameStatus, GameError> {
        if let Err(e) = self.board.mark(location, sign) {
            warn!(%sign, %location, error = %e, "Move rejected");
            return Err(e);
        }
        info!(%sign, %location, "Move applied");
        self.end_turn();
        Ok(self.status)
    }

    /// Checks for a completed line, then a full board, then passes the turn.
    fn end_turn(&mut self) {
        if let Some((line, sign)) = rules::check_winner(&self.board) {
            self.status = GameStatus::Won(sign);
            self.winning_line = Some(line);
            info!(winner = %sign, %line, "Game won");
        } else if rules::is_full(&self.board) {
            self.status = GameStatus::Draw;
            info!("Game ended in a draw");
        } else {
            self.current = (self.current + 1) % self.contestants.len();
            debug!(to_move = %self.current_contestant(), "Turn passed");
        }

        assert_invariants(self);
    }

    /// Current status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Winning contestant, once the game is won.
    pub fn winner(&self) -> Option<&Contestant> {
        let sign = self.status.winner()?;
        self.contestants.iter().find(|c| c.sign() == sign)
    }

    /// Line that decided the game, once the game is won.
    pub fn winning_line(&self) -> Option<Line> {
        self.winning_line
    }

    /// Whether the game ended in a draw.
    pub fn is_draw(&self) -> bool {
        self.status == GameStatus::Draw
    }

    /// Whether the game is still being played.
    pub fn is_in_progress(&self) -> bool {
        self.status == GameStatus::InProgress
    }

    /// Whether one of the contestants is automated.
    pub fn is_playing_against_automated(&self) -> bool {
        self.contestants.iter().any(Contestant::is_automated)
    }

    /// Whether a human contestant is to move in a running game.
    pub fn is_human_contestants_turn(&self) -> bool {
        self.is_in_progress() && self.current_contestant().is_human()
    }

    /// Whether the automated contestant is to move in a running game.
    pub fn is_automated_contestants_turn(&self) -> bool {
        self.is_in_progress() && self.current_contestant().is_automated()
    }

    /// Contestant the turn pointer indicates.
    pub fn current_contestant(&self) -> &Contestant {
        &self.contestants[self.current]
    }

    /// Both contestants, X first.
    pub fn contestants(&self) -> &[Contestant; 2] {
        &self.contestants
    }

    /// Shape of the board.
    pub fn board_dimension(&self) -> Dimension {
        self.board.dimension()
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// All tiles in row-major order.
    pub fn tiles(&self) -> &[Tile] {
        self.board.tiles()
    }
}
