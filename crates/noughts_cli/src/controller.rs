//! Terminal game loop: prompts, board rendering and end-of-game messages.

use anyhow::{Context, Result, bail};
use noughts::{GameState, InputError};
use std::io::{BufRead, Write};
use tracing::{debug, instrument, warn};

/// Drives a game over a line-oriented reader and a writer.
pub struct Controller<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Controller<R, W> {
    /// Creates a controller reading from `input` and printing to `output`.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Prints `label` and reads one line as a player name.
    #[instrument(skip(self))]
    pub fn prompt_name(&mut self, label: &str) -> Result<String> {
        write!(self.output, "{label}")?;
        self.output.flush()?;
        self.read_line()
            .with_context(|| format!("No name given for {}", label.trim_end_matches([':', ' '])))
    }

    /// Plays `game` until it is won or drawn, then prints the result.
    #[instrument(skip_all)]
    pub fn play(&mut self, game: &mut GameState) -> Result<()> {
        while !game.is_game_over() {
            writeln!(self.output, "{}: ", game.current_player())?;
            writeln!(self.output, "{}", game.board())?;
            self.take_turn(game)?;
        }

        writeln!(self.output, "{}", game.board())?;
        match game.winner() {
            Some(winner) => {
                writeln!(self.output, "The winner is: {}. Congratsss!!!", winner.name())?
            }
            None => writeln!(self.output, "We have a tie...")?,
        }
        Ok(())
    }

    /// Reads lines until one is accepted as the current player's move.
    fn take_turn(&mut self, game: &mut GameState) -> Result<()> {
        loop {
            let line = self
                .read_line()
                .context("Input ended before the game finished")?;
            match game.play_turn(&line) {
                Ok(status) => {
                    debug!(?status, "Move accepted");
                    return Ok(());
                }
                Err(err @ (InputError::MalformedInput { .. } | InputError::SquareOccupied(_))) => {
                    debug!(%err, input = %line, "Move refused");
                    writeln!(self.output, "{err}")?;
                }
                Err(InputError::GameOver) => bail!("Game is already over"),
            }
        }
    }

    /// Reads one line without its terminator. End of input is an error.
    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            warn!("End of input");
            bail!("End of input");
        }
        Ok(line.trim_end_matches(['\n', '\r']).to_string())
    }
}
