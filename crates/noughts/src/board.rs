//! N-by-N board storage and occupancy queries.

use crate::{ConfigError, Coordinates, Symbol, rules};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Dimension used when none is configured.
pub const DEFAULT_DIMENSION: usize = 3;

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square holding a symbol.
    Occupied(Symbol),
}

impl Square {
    /// Returns the symbol in this square, if any.
    pub fn symbol(self) -> Option<Symbol> {
        match self {
            Square::Empty => None,
            Square::Occupied(symbol) => Some(symbol),
        }
    }
}

/// Square tic-tac-toe board of any positive dimension.
///
/// Squares are stored in row-major order. Nothing clears a marked square.
/// Deserialization goes through [`Board::new`], so a decoded board always
/// has a positive dimension and exactly `dimension²` squares.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    dimension: usize,
    squares: Vec<Square>,
}

impl Board {
    /// Creates an empty `dimension` x `dimension` board.
    #[instrument]
    pub fn new(dimension: usize) -> Result<Self, ConfigError> {
        if dimension == 0 {
            return Err(ConfigError::new("Board dimension must be at least 1"));
        }
        Ok(Self {
            dimension,
            squares: vec![Square::Empty; dimension * dimension],
        })
    }

    /// Returns the side length of the board.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Places `symbol` at `at`.
    ///
    /// Callers check [`Board::is_empty`] first; an occupied square is
    /// overwritten without complaint.
    ///
    /// # Panics
    ///
    /// Panics if `at` lies outside the board.
    #[instrument(skip(self))]
    pub fn place(&mut self, symbol: Symbol, at: Coordinates) {
        let index = self.index(at);
        self.squares[index] = Square::Occupied(symbol);
        debug!(%symbol, %at, "Symbol placed");
    }

    /// Returns true if placing `symbol` at `at` completed a line through `at`.
    #[instrument(skip(self))]
    pub fn is_winning_move(&self, symbol: Symbol, at: Coordinates) -> bool {
        rules::is_winning_move(self, symbol, at)
    }

    /// Returns true when every square holds a symbol.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Returns true if the square at `at` holds no symbol.
    ///
    /// # Panics
    ///
    /// Panics if `at` lies outside the board.
    pub fn is_empty(&self, at: Coordinates) -> bool {
        self.get(at) == Square::Empty
    }

    /// Gets the square at `at`.
    ///
    /// # Panics
    ///
    /// Panics if `at` lies outside the board.
    pub fn get(&self, at: Coordinates) -> Square {
        self.squares[self.index(at)]
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Iterates over the rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Square]> {
        self.squares.chunks(self.dimension)
    }

    fn index(&self, at: Coordinates) -> usize {
        assert!(
            at.row < self.dimension && at.col < self.dimension,
            "coordinates {at} outside {n}x{n} board",
            n = self.dimension
        );
        at.row * self.dimension + at.col
    }
}

/// Unchecked wire form of a [`Board`].
#[derive(Deserialize)]
struct RawBoard {
    dimension: usize,
    squares: Vec<Square>,
}

impl TryFrom<RawBoard> for Board {
    type Error = ConfigError;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        let mut board = Board::new(raw.dimension)?;
        if raw.squares.len() != board.squares.len() {
            return Err(ConfigError::new(format!(
                "Board of dimension {} needs {} squares, got {}",
                raw.dimension,
                board.squares.len(),
                raw.squares.len()
            )));
        }
        board.squares = raw.squares;
        Ok(board)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self {
            dimension: DEFAULT_DIMENSION,
            squares: vec![Square::Empty; DEFAULT_DIMENSION * DEFAULT_DIMENSION],
        }
    }
}

/// Renders the grid with column indices across the top and row indices
/// down the left, using `.` for empty squares.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\t ")?;
        for col in 0..self.dimension {
            write!(f, " {col}")?;
        }
        writeln!(f)?;
        for (row, squares) in self.rows().enumerate() {
            write!(f, "\t{row}")?;
            for square in squares {
                match square.symbol() {
                    Some(symbol) => write!(f, " {symbol}")?,
                    None => write!(f, " .")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
