//! Noughts - two-player tic-tac-toe on an N-by-N board.
//!
//! # Architecture
//!
//! - **Board**: grid storage, occupancy and win queries
//! - **Rules**: pure line and draw checks over a board
//! - **GameState**: players, turn order, winner and input validation
//! - **GameConfig**: TOML-backed settings for a game
//!
//! # Example
//!
//! ```
//! use noughts::{GameState, GameStatus};
//! use rand::SeedableRng;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(1);
//! let mut game = GameState::new("Bob", "Joan", &mut rng);
//! assert_eq!(game.play_turn("11"), Ok(GameStatus::InProgress));
//! assert!(game.play_turn("11").is_err());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod config;
mod coordinates;
mod error;
mod game;
mod player;
pub mod rules;

pub use board::{Board, DEFAULT_DIMENSION, Square};
pub use config::{GameConfig, MAX_DIMENSION};
pub use coordinates::Coordinates;
pub use error::{ConfigError, InputError};
pub use game::{GameState, GameStatus};
pub use player::{Player, Symbol};
