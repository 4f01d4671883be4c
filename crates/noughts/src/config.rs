//! Game configuration loaded from TOML.

use crate::ConfigError;
use crate::board::DEFAULT_DIMENSION;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Widest board the two-digit prompt can address.
pub const MAX_DIMENSION: usize = 10;

/// Settings for one game.
///
/// ```toml
/// dimension = 4
/// player_x = "Bob"
/// player_o = "Joan"
/// seed = 42
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board side length.
    #[serde(default = "default_dimension")]
    dimension: usize,

    /// Name of the player placing `x`; prompted for when absent.
    #[serde(default)]
    player_x: Option<String>,

    /// Name of the player placing `o`; prompted for when absent.
    #[serde(default)]
    player_o: Option<String>,

    /// Seed for the first-turn draw; OS entropy when absent.
    #[serde(default)]
    seed: Option<u64>,
}

fn default_dimension() -> usize {
    DEFAULT_DIMENSION
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            dimension: default_dimension(),
            player_x: None,
            player_o: None,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        info!(dimension = config.dimension, "Config loaded successfully");
        Ok(config)
    }

    /// Checks that the dimension is playable from the prompt.
    #[instrument(skip(self), fields(dimension = self.dimension))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_DIMENSION).contains(&self.dimension) {
            return Err(ConfigError::new(format!(
                "Board dimension must be between 1 and {}, got {}",
                MAX_DIMENSION, self.dimension
            )));
        }
        Ok(())
    }

    /// Overrides the board dimension.
    pub fn with_dimension(mut self, dimension: usize) -> Self {
        self.dimension = dimension;
        self
    }

    /// Overrides the name of the `x` player.
    pub fn with_player_x(mut self, name: impl Into<String>) -> Self {
        self.player_x = Some(name.into());
        self
    }

    /// Overrides the name of the `o` player.
    pub fn with_player_o(mut self, name: impl Into<String>) -> Self {
        self.player_o = Some(name.into());
        self
    }

    /// Overrides the first-turn seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
