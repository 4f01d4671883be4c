//! Win detection.
//!
//! A move wins when it completes a line through the moved square. Only
//! the lines containing that square are scanned, each in O(N).

use crate::{Board, Coordinates, Square, Symbol};
use tracing::{debug, instrument};

/// Returns true if placing `symbol` at `at` completed its row, its
/// column, or a diagonal passing through `at`.
#[instrument(skip(board), fields(dimension = board.dimension()))]
pub fn is_winning_move(board: &Board, symbol: Symbol, at: Coordinates) -> bool {
    let n = board.dimension();
    let won = row_complete(board, symbol, at.row)
        || column_complete(board, symbol, at.col)
        || (at.on_main_diagonal() && main_diagonal_complete(board, symbol))
        || (at.on_anti_diagonal(n) && anti_diagonal_complete(board, symbol));
    if won {
        debug!(%symbol, %at, "Line completed");
    }
    won
}

/// Returns true if every square in `row` holds `symbol`.
pub fn row_complete(board: &Board, symbol: Symbol, row: usize) -> bool {
    line_complete(board, symbol, (0..board.dimension()).map(|col| Coordinates::new(row, col)))
}

/// Returns true if every square in `col` holds `symbol`.
pub fn column_complete(board: &Board, symbol: Symbol, col: usize) -> bool {
    line_complete(board, symbol, (0..board.dimension()).map(|row| Coordinates::new(row, col)))
}

/// Returns true if the top-left to bottom-right diagonal is all `symbol`.
pub fn main_diagonal_complete(board: &Board, symbol: Symbol) -> bool {
    line_complete(board, symbol, (0..board.dimension()).map(|i| Coordinates::new(i, i)))
}

/// Returns true if the top-right to bottom-left diagonal is all `symbol`.
pub fn anti_diagonal_complete(board: &Board, symbol: Symbol) -> bool {
    let last = board.dimension() - 1;
    line_complete(board, symbol, (0..board.dimension()).map(|i| Coordinates::new(i, last - i)))
}

fn line_complete(
    board: &Board,
    symbol: Symbol,
    mut line: impl Iterator<Item = Coordinates>,
) -> bool {
    line.all(|at| board.get(at) == Square::Occupied(symbol))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(marks: &[(Symbol, usize, usize)]) -> Board {
        let mut board = Board::default();
        for &(symbol, row, col) in marks {
            board.place(symbol, Coordinates::new(row, col));
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::default();
        for symbol in [Symbol::X, Symbol::O] {
            assert!(!is_winning_move(&board, symbol, Coordinates::new(1, 1)));
        }
    }

    #[test]
    fn test_top_row() {
        let board = board_with(&[(Symbol::X, 0, 0), (Symbol::X, 0, 1), (Symbol::X, 0, 2)]);
        for col in 0..3 {
            assert!(is_winning_move(&board, Symbol::X, Coordinates::new(0, col)));
            assert!(!is_winning_move(&board, Symbol::O, Coordinates::new(0, col)));
        }
    }

    #[test]
    fn test_column_only_through_that_column() {
        let board = board_with(&[(Symbol::O, 0, 1), (Symbol::O, 1, 1), (Symbol::O, 2, 1)]);
        for row in 0..3 {
            assert!(is_winning_move(&board, Symbol::O, Coordinates::new(row, 1)));
            assert!(!is_winning_move(&board, Symbol::O, Coordinates::new(row, 0)));
            assert!(!is_winning_move(&board, Symbol::O, Coordinates::new(row, 2)));
        }
    }

    #[test]
    fn test_main_diagonal() {
        let board = board_with(&[(Symbol::X, 0, 0), (Symbol::X, 1, 1), (Symbol::X, 2, 2)]);
        for i in 0..3 {
            assert!(is_winning_move(&board, Symbol::X, Coordinates::new(i, i)));
        }
        assert!(main_diagonal_complete(&board, Symbol::X));
        assert!(!anti_diagonal_complete(&board, Symbol::X));
    }

    #[test]
    fn test_anti_diagonal() {
        let board = board_with(&[(Symbol::O, 0, 2), (Symbol::O, 1, 1), (Symbol::O, 2, 0)]);
        for i in 0..3 {
            assert!(is_winning_move(&board, Symbol::O, Coordinates::new(i, 2 - i)));
        }
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_with(&[(Symbol::X, 0, 0), (Symbol::X, 0, 1), (Symbol::O, 0, 2)]);
        assert!(!row_complete(&board, Symbol::X, 0));
        assert!(!is_winning_move(&board, Symbol::X, Coordinates::new(0, 1)));
    }

    #[test]
    fn test_single_square_board_wins_immediately() {
        let mut board = Board::new(1).unwrap();
        board.place(Symbol::X, Coordinates::new(0, 0));
        assert!(is_winning_move(&board, Symbol::X, Coordinates::new(0, 0)));
    }

    #[test]
    fn test_four_by_four_row() {
        let mut board = Board::new(4).unwrap();
        for col in 0..3 {
            board.place(Symbol::X, Coordinates::new(3, col));
        }
        assert!(!is_winning_move(&board, Symbol::X, Coordinates::new(3, 2)));
        board.place(Symbol::X, Coordinates::new(3, 3));
        assert!(is_winning_move(&board, Symbol::X, Coordinates::new(3, 3)));
    }
}
