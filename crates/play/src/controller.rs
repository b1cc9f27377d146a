//! Sources of Player moves: a human at a terminal, or a seeded random mover.

use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};
use pursuit_core::Agent;
use pursuit_game::{Action, GameState};
use rand::seq::SliceRandom;
use rand::Rng;

/// Chooses the Player's action each turn.
pub trait Controller {
    /// Pick one of `legal`, which is never empty.
    fn choose(&mut self, state: &GameState, legal: &[Action]) -> Result<Action>;
}

/// Reads move tokens (`w`, `wb`, `stay`, ...) from a line-based reader,
/// re-prompting until a legal one arrives.
pub struct HumanController<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanController<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn prompt(&mut self, legal: &[Action]) -> Result<()> {
        let tokens: Vec<&str> = legal.iter().map(|a| a.token()).collect();
        write!(self.output, "Choose your move [{}]: ", tokens.join(", "))?;
        self.output.flush()?;
        Ok(())
    }
}

impl<R: BufRead, W: Write> Controller for HumanController<R, W> {
    fn choose(&mut self, state: &GameState, legal: &[Action]) -> Result<Action> {
        writeln!(self.output, "Player's Move # {}", state.moves_taken() + 1)?;

        loop {
            self.prompt(legal)?;

            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .context("failed to read the player's move")?;
            if read == 0 {
                bail!("input closed before the game ended");
            }

            match line.parse::<Action>() {
                Ok(action) if legal.contains(&action) && action.usable_by(Agent::Player) => {
                    return Ok(action);
                }
                _ => writeln!(self.output, "Not a valid move")?,
            }
        }
    }
}

/// Plays uniformly random legal moves from a seeded RNG.
pub struct RandomController<R> {
    rng: R,
}

impl<R: Rng> RandomController<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Controller for RandomController<R> {
    fn choose(&mut self, _state: &GameState, legal: &[Action]) -> Result<Action> {
        legal
            .choose(&mut self.rng)
            .copied()
            .context("player has no legal actions")
    }
}
