//! Error types for input validation and configuration.

use crate::Coordinates;
use derive_more::{Display, Error};
use tracing::instrument;

/// Why a line of player input did not become a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum InputError {
    /// The text is not two digits inside the board.
    #[display("Enter square coordinates in such a form: xy (where x and y are >= 0 and < {dimension})")]
    MalformedInput {
        /// Board dimension the text was checked against.
        dimension: usize,
    },

    /// The coordinates are well formed but the square is taken.
    #[display("Square {_0} already taken")]
    SquareOccupied(#[error(not(source))] Coordinates),

    /// The game has already been won or drawn.
    #[display("Game is already over")]
    GameOver,
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
