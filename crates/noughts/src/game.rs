//! Turn sequencing for a two-player game.
//!
//! One turn is the command sequence
//! [`validate_coordinate_text`](GameState::validate_coordinate_text) →
//! [`is_available`](GameState::is_available) →
//! [`apply_move`](GameState::apply_move) →
//! [`check_win`](GameState::check_win) →
//! [`switch_turn`](GameState::switch_turn), the last step skipped once
//! the game is over. [`GameState::play_turn`] runs the whole sequence.

use crate::{Board, ConfigError, Coordinates, InputError, Player, Symbol};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves are still accepted.
    InProgress,
    /// A player completed a line.
    Won(Symbol),
    /// The board filled without a winner.
    Drawn,
}

/// Board, players, whose turn it is, and who (if anyone) has won.
///
/// Only the constructors build one, so the players always hold `x` and
/// `o` and the winner is consistent with the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    board: Board,
    player_x: Player,
    player_o: Player,
    current: Symbol,
    winner: Option<Symbol>,
}

impl GameState {
    /// Starts a game on a default 3x3 board.
    ///
    /// `player_x` plays `x`, `player_o` plays `o`. The first mover is
    /// drawn from `rng` with equal probability.
    #[instrument(skip(player_x, player_o, rng))]
    pub fn new<R: Rng>(
        player_x: impl Into<String>,
        player_o: impl Into<String>,
        rng: &mut R,
    ) -> Self {
        Self::start(Board::default(), player_x.into(), player_o.into(), rng)
    }

    /// Starts a game on a `dimension` x `dimension` board.
    #[instrument(skip(player_x, player_o, rng))]
    pub fn with_dimension<R: Rng>(
        player_x: impl Into<String>,
        player_o: impl Into<String>,
        dimension: usize,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        let board = Board::new(dimension)?;
        Ok(Self::start(board, player_x.into(), player_o.into(), rng))
    }

    fn start<R: Rng>(board: Board, player_x: String, player_o: String, rng: &mut R) -> Self {
        let current = if rng.random_bool(0.5) {
            Symbol::X
        } else {
            Symbol::O
        };
        info!(
            %player_x,
            %player_o,
            first = %current,
            dimension = board.dimension(),
            "Game started"
        );
        Self {
            board,
            player_x: Player::new(player_x, Symbol::X),
            player_o: Player::new(player_o, Symbol::O),
            current,
            winner: None,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player who plays `symbol`.
    pub fn player(&self, symbol: Symbol) -> &Player {
        match symbol {
            Symbol::X => &self.player_x,
            Symbol::O => &self.player_o,
        }
    }

    /// Returns the player to move.
    pub fn current_player(&self) -> &Player {
        self.player(self.current)
    }

    /// Returns the winner, once there is one.
    pub fn winner(&self) -> Option<&Player> {
        self.winner.map(|symbol| self.player(symbol))
    }

    /// Returns true once the board is full or someone has won.
    pub fn is_game_over(&self) -> bool {
        self.board.is_full() || self.winner.is_some()
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        match self.winner {
            Some(symbol) => GameStatus::Won(symbol),
            None if self.board.is_full() => GameStatus::Drawn,
            None => GameStatus::InProgress,
        }
    }

    /// Parses prompt text into coordinates on this board.
    ///
    /// See [`Coordinates::parse`] for the accepted form.
    #[instrument(skip(self))]
    pub fn validate_coordinate_text(&self, text: &str) -> Option<Coordinates> {
        Coordinates::parse(text, self.board.dimension())
    }

    /// Returns `coords` back if that square is still empty.
    #[instrument(skip(self))]
    pub fn is_available(&self, coords: Coordinates) -> Option<Coordinates> {
        self.board.is_empty(coords).then_some(coords)
    }

    /// Places the current player's symbol at `coords`.
    ///
    /// Returns `coords` on success, or `None` if the game is over or the
    /// square is taken. Nothing changes in the `None` case.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, coords: Coordinates) -> Option<Coordinates> {
        if self.is_game_over() {
            warn!(%coords, "Move rejected: game is over");
            return None;
        }
        if !self.board.is_empty(coords) {
            warn!(%coords, "Move rejected: square occupied");
            return None;
        }
        self.board.place(self.current, coords);
        Some(coords)
    }

    /// Records the current player as winner if the move at `coords` won.
    ///
    /// An existing winner is never replaced.
    #[instrument(skip(self))]
    pub fn check_win(&mut self, coords: Option<Coordinates>) {
        if self.winner.is_some() {
            return;
        }
        if let Some(coords) = coords
            && self.board.is_winning_move(self.current, coords)
        {
            info!(winner = %self.current_player(), "Game won");
            self.winner = Some(self.current);
        }
    }

    /// Hands the move to the other player.
    #[instrument(skip(self), fields(from = %self.current))]
    pub fn switch_turn(&mut self) {
        self.current = self.current.opponent();
    }

    /// Runs one full turn for the current player from prompt text.
    ///
    /// On error the game is untouched and the same player is still to
    /// move.
    #[instrument(skip(self), fields(player = %self.current_player()))]
    pub fn play_turn(&mut self, text: &str) -> Result<GameStatus, InputError> {
        if self.is_game_over() {
            return Err(InputError::GameOver);
        }
        let coords = self
            .validate_coordinate_text(text)
            .ok_or(InputError::MalformedInput {
                dimension: self.board.dimension(),
            })?;
        let coords = self
            .is_available(coords)
            .ok_or(InputError::SquareOccupied(coords))?;

        let applied = self.apply_move(coords);
        self.check_win(applied);

        let status = self.status();
        if status == GameStatus::InProgress {
            self.switch_turn();
        } else {
            info!(?status, "Game over");
        }
        debug!(?status, "Turn complete");
        Ok(status)
    }
}
