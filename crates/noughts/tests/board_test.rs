//! Tests for board occupancy and win queries across dimensions.

use noughts::{Board, Coordinates, Square, Symbol};

fn all_coordinates(dimension: usize) -> impl Iterator<Item = Coordinates> {
    (0..dimension).flat_map(move |row| (0..dimension).map(move |col| Coordinates::new(row, col)))
}

#[test]
fn test_fresh_boards_are_empty() {
    for dimension in 1..=10 {
        let board = Board::new(dimension).unwrap();
        assert!(all_coordinates(dimension).all(|at| board.is_empty(at)));
        assert!(!board.is_full());
    }
}

#[test]
fn test_filling_every_square_makes_board_full() {
    for dimension in 1..=6 {
        let mut board = Board::new(dimension).unwrap();
        let mut symbol = Symbol::X;
        for at in all_coordinates(dimension) {
            assert!(board.is_empty(at));
            board.place(symbol, at);
            assert!(!board.is_empty(at));
            symbol = symbol.opponent();
        }
        assert!(board.is_full());
        assert!(board.squares().iter().all(|s| *s != Square::Empty));
    }
}

#[test]
fn test_top_row_win_for_every_dimension() {
    for dimension in 2..=6 {
        let mut board = Board::new(dimension).unwrap();
        for col in 0..dimension {
            board.place(Symbol::X, Coordinates::new(0, col));
        }
        for col in 0..dimension {
            let at = Coordinates::new(0, col);
            assert!(board.is_winning_move(Symbol::X, at));
            assert!(!board.is_winning_move(Symbol::O, at));
        }
    }
}

#[test]
fn test_main_diagonal_win_on_three_by_three() {
    let mut board = Board::default();
    for i in 0..3 {
        board.place(Symbol::X, Coordinates::new(i, i));
    }
    for i in 0..3 {
        assert!(board.is_winning_move(Symbol::X, Coordinates::new(i, i)));
    }
}

#[test]
fn test_marks_are_never_cleared() {
    let mut board = Board::default();
    let at = Coordinates::new(2, 2);
    board.place(Symbol::O, at);
    for other in all_coordinates(3).filter(|c| *c != at) {
        board.place(Symbol::X, other);
        assert_eq!(board.get(at), Square::Occupied(Symbol::O));
    }
}
