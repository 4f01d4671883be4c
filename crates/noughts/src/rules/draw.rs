//! Draw detection.

use crate::{Board, Square};
use tracing::instrument;

/// Returns true once all `dimension²` squares hold a symbol.
///
/// Whether a full board is a draw depends on the winner, which the
/// game tracks; this only answers occupancy.
#[instrument(skip(board), fields(dimension = board.dimension()))]
pub fn is_full(board: &Board) -> bool {
    !board.squares().contains(&Square::Empty)
}
