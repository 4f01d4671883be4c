//! Game rules for tic-tac-toe.
//!
//! Pure functions evaluating a [`Board`](crate::Board). Rules are kept
//! apart from board storage so each can be tested on hand-built boards.

mod draw;
mod win;

pub use draw::is_full;
pub use win::{
    anti_diagonal_complete, column_complete, is_winning_move, main_diagonal_complete,
    row_complete,
};
