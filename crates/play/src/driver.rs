//! The turn loop: Player, item check, terminal check, Monster, terminal check.

use std::io::Write;

use anyhow::{Context, Result};
use pursuit_core::Agent;
use pursuit_game::{Action, GameState, Outcome};
use pursuit_search::{search_monster, SearchConfig};
use serde::Serialize;
use tracing::{debug, info};

use crate::controller::Controller;

/// One committed ply.
#[derive(Clone, Debug, Serialize)]
pub struct PlyRecord {
    pub agent: Agent,
    pub action: Action,
    /// Branches pruned by the search that chose this action (Monster only).
    pub pruned: u64,
    pub nodes: u64,
    /// Root value of the search, absent for Player plies.
    pub value: Option<f32>,
}

/// Summary of a finished game.
#[derive(Clone, Debug, Serialize)]
pub struct GameReport {
    pub outcome: Outcome,
    pub player_moves: u32,
    pub total_pruned: u64,
    pub total_nodes: u64,
    pub plies: Vec<PlyRecord>,
}

impl GameReport {
    fn new() -> Self {
        Self {
            outcome: Outcome::Stalemate,
            player_moves: 0,
            total_pruned: 0,
            total_nodes: 0,
            plies: Vec::new(),
        }
    }

    fn record(&mut self, ply: PlyRecord) {
        self.total_pruned += ply.pruned;
        self.total_nodes += ply.nodes;
        self.plies.push(ply);
    }
}

/// Where the turn loop is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    PlayerTurn,
    ItemCheck { had_item: bool },
    /// Check for an ending with `to_move` about to act.
    TerminalCheck { to_move: Agent },
    MonsterTurn,
    Finished(Outcome),
}

/// Final line shown to the human Player.
pub fn outcome_message(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::PlayerWon => "You Won!",
        Outcome::MonsterWon => "You Lost!",
        Outcome::Stalemate => "Stalemate!",
    }
}

/// Play one game from `initial`, the Player moving first.
///
/// The board is written to `out` after every ply, followed by the pruned
/// count (always 0 for Player plies). Pass `io::sink()` to play silently.
pub fn run_game<C: Controller, W: Write>(
    initial: GameState,
    config: &SearchConfig,
    player: &mut C,
    out: &mut W,
) -> Result<GameReport> {
    let mut state = initial;
    let mut report = GameReport::new();
    let mut phase = Phase::TerminalCheck {
        to_move: Agent::Player,
    };

    writeln!(out, "{}", state)?;

    loop {
        debug!(?phase, "driver phase");
        phase = match phase {
            Phase::PlayerTurn => {
                let legal = state.legal_actions(Agent::Player);
                let action = player.choose(&state, &legal)?;
                let had_item = state.has_item();
                state = state
                    .apply(action, Agent::Player)
                    .context("controller chose an illegal move")?;
                report.record(PlyRecord {
                    agent: Agent::Player,
                    action,
                    pruned: 0,
                    nodes: 0,
                    value: None,
                });
                writeln!(out, "{}", state)?;
                writeln!(out, "Number pruned due to a/b: 0")?;
                Phase::ItemCheck { had_item }
            }
            Phase::ItemCheck { had_item } => {
                if !had_item && state.has_item() {
                    info!(at = %state.item_pos(), "item collected");
                    writeln!(out, "You picked up the item!")?;
                }
                Phase::TerminalCheck {
                    to_move: Agent::Monster,
                }
            }
            Phase::TerminalCheck { to_move } => match state.outcome(to_move) {
                Some(outcome) => Phase::Finished(outcome),
                None if to_move == Agent::Player => Phase::PlayerTurn,
                None => Phase::MonsterTurn,
            },
            Phase::MonsterTurn => {
                let result = search_monster(&state, config)?;
                let action = result
                    .best_action
                    .context("search returned no action for a live position")?;
                state = state.apply(action, Agent::Monster)?;
                report.record(PlyRecord {
                    agent: Agent::Monster,
                    action,
                    pruned: result.pruned,
                    nodes: result.nodes,
                    value: Some(result.value),
                });
                writeln!(out, "Monster plays {}", action)?;
                writeln!(out, "{}", state)?;
                writeln!(out, "Number pruned due to a/b: {}", result.pruned)?;
                Phase::TerminalCheck {
                    to_move: Agent::Player,
                }
            }
            Phase::Finished(outcome) => {
                report.outcome = outcome;
                report.player_moves = state.moves_taken();
                debug!(%outcome, plies = report.plies.len(), "game finished");
                writeln!(out, "GAME OVER")?;
                writeln!(out, "{}", outcome_message(outcome))?;
                return Ok(report);
            }
        };
    }
}
