//! Player identities: the two marks and the people who place them.

use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// A mark placed on the board.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Symbol {
    /// The `x` mark.
    #[strum(serialize = "x")]
    #[serde(rename = "x")]
    X,
    /// The `o` mark.
    #[strum(serialize = "o")]
    #[serde(rename = "o")]
    O,
}

impl Symbol {
    /// Returns the other symbol.
    pub fn opponent(self) -> Self {
        match self {
            Symbol::X => Symbol::O,
            Symbol::O => Symbol::X,
        }
    }
}

/// A named participant bound to one symbol for the whole game.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, Serialize, Deserialize, new)]
pub struct Player {
    /// Display name.
    #[new(into)]
    name: String,
    /// The symbol this player places.
    #[getter(skip)]
    symbol: Symbol,
}

impl Player {
    /// Returns the symbol this player places.
    pub fn symbol(&self) -> Symbol {
        self.symbol
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.name, self.symbol)
    }
}
