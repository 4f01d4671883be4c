//! Command-line interface for noughts.

use clap::Parser;
use noughts::GameConfig;
use std::path::PathBuf;

/// Noughts - two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// TOML file with game settings
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Board side length (1-10)
    #[arg(short, long)]
    pub dimension: Option<usize>,

    /// Name of the player placing x (prompted for if omitted)
    #[arg(long)]
    pub player_x: Option<String>,

    /// Name of the player placing o (prompted for if omitted)
    #[arg(long)]
    pub player_o: Option<String>,

    /// Seed for choosing who moves first
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Cli {
    /// Layers command-line flags over `base`.
    pub fn apply(&self, base: GameConfig) -> GameConfig {
        let mut config = base;
        if let Some(dimension) = self.dimension {
            config = config.with_dimension(dimension);
        }
        if let Some(name) = &self.player_x {
            config = config.with_player_x(name.clone());
        }
        if let Some(name) = &self.player_o {
            config = config.with_player_o(name.clone());
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_file_values() {
        let cli = Cli::parse_from(["noughts", "--dimension", "4", "--player-o", "Joan"]);
        let base = GameConfig::default().with_player_x("Bob").with_player_o("Ann");
        let config = cli.apply(base);
        assert_eq!(*config.dimension(), 4);
        assert_eq!(config.player_x().as_deref(), Some("Bob"));
        assert_eq!(config.player_o().as_deref(), Some("Joan"));
        assert!(config.seed().is_none());
    }

    #[test]
    fn test_no_flags_keeps_defaults() {
        let cli = Cli::parse_from(["noughts"]);
        assert_eq!(cli.apply(GameConfig::default()), GameConfig::default());
    }
}
