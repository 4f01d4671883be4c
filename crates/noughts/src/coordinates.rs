//! Square addressing.

use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A `(row, col)` address on the board, both zero-based.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
    new,
)]
#[display("[{row}][{col}]")]
pub struct Coordinates {
    /// Row index.
    pub row: usize,
    /// Column index.
    pub col: usize,
}

impl Coordinates {
    /// Parses the two-digit `rc` form used at the prompt.
    ///
    /// Accepts exactly two decimal digits, each below `dimension`.
    /// The first digit is the row, the second the column. Boards wider
    /// than ten cannot be fully addressed this way.
    #[instrument]
    pub fn parse(text: &str, dimension: usize) -> Option<Self> {
        let mut chars = text.chars();
        let (Some(row), Some(col), None) = (chars.next(), chars.next(), chars.next()) else {
            return None;
        };

        let row = row.to_digit(10)? as usize;
        let col = col.to_digit(10)? as usize;
        (row < dimension && col < dimension).then_some(Self { row, col })
    }

    /// Returns true if this cell lies on the top-left to bottom-right diagonal.
    pub fn on_main_diagonal(&self) -> bool {
        self.row == self.col
    }

    /// Returns true if this cell lies on the top-right to bottom-left diagonal.
    pub fn on_anti_diagonal(&self, dimension: usize) -> bool {
        self.row + self.col + 1 == dimension
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_row_then_column() {
        assert_eq!(Coordinates::parse("20", 3), Some(Coordinates::new(2, 0)));
        assert_eq!(Coordinates::parse("02", 3), Some(Coordinates::new(0, 2)));
    }

    #[test]
    fn test_parse_rejects_bad_shapes() {
        for text in ["-11", "14", "101", "0", "", "m!", " 11", "11\n", "1 "] {
            assert_eq!(Coordinates::parse(text, 3), None, "{text:?} should be rejected");
        }
    }

    #[test]
    fn test_parse_rejects_non_ascii_digits() {
        // Arabic-Indic digits one and two
        assert_eq!(Coordinates::parse("\u{0661}\u{0662}", 3), None);
    }

    #[test]
    fn test_parse_respects_dimension() {
        assert_eq!(Coordinates::parse("33", 4), Some(Coordinates::new(3, 3)));
        assert_eq!(Coordinates::parse("33", 3), None);
        assert_eq!(Coordinates::parse("99", 10), Some(Coordinates::new(9, 9)));
        assert_eq!(Coordinates::parse("00", 1), Some(Coordinates::new(0, 0)));
    }

    #[test]
    fn test_diagonal_membership() {
        assert!(Coordinates::new(1, 1).on_main_diagonal());
        assert!(Coordinates::new(1, 1).on_anti_diagonal(3));
        assert!(Coordinates::new(0, 2).on_anti_diagonal(3));
        assert!(!Coordinates::new(0, 1).on_main_diagonal());
        assert!(!Coordinates::new(0, 1).on_anti_diagonal(3));
    }

    #[test]
    fn test_display() {
        assert_eq!(Coordinates::new(1, 2).to_string(), "[1][2]");
    }
}
