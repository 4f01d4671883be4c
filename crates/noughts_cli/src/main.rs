//! Noughts - terminal tic-tac-toe for two players.

#![warn(missing_docs)]

mod cli;
mod controller;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use controller::Controller;
use noughts::{GameConfig, GameState};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so they never interleave with the board on stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    run(config)
}

/// Reads the config file, if any, and layers the command-line flags on top.
#[instrument(skip_all)]
fn load_config(cli: &Cli) -> Result<GameConfig> {
    let base = match &cli.config {
        Some(path) => GameConfig::from_file(path)?,
        None => GameConfig::default(),
    };
    let config = cli.apply(base);
    config.validate()?;
    Ok(config)
}

/// Prompts for missing names, then plays one game on stdin/stdout.
#[instrument(skip_all, fields(dimension = config.dimension()))]
fn run(config: GameConfig) -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut controller = Controller::new(stdin.lock(), stdout.lock());

    let player_x = match config.player_x() {
        Some(name) => name.clone(),
        None => controller.prompt_name("Player X: ")?,
    };
    let player_o = match config.player_o() {
        Some(name) => name.clone(),
        None => controller.prompt_name("Player O: ")?,
    };

    let dimension = *config.dimension();
    let mut game = match config.seed() {
        Some(seed) => {
            let mut rng = StdRng::seed_from_u64(*seed);
            GameState::with_dimension(player_x, player_o, dimension, &mut rng)?
        }
        None => GameState::with_dimension(player_x, player_o, dimension, &mut rand::rng())?,
    };

    controller.play(&mut game)?;
    info!(status = ?game.status(), "Game finished");
    Ok(())
}
