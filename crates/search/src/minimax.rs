//! Plain minimax without pruning, kept as a reference for alpha-beta.
//!
//! Visits every node down to the depth limit, so it is only practical on
//! small boards or shallow depths.

use pursuit_core::{Agent, Game, Result};

use crate::SearchResult;

/// Exhaustive depth-limited minimax.
#[derive(Clone, Debug)]
pub struct Minimax<G: Game> {
    game: G,
}

impl<G: Game> Minimax<G> {
    /// Create a new minimax searcher.
    pub fn new(game: G) -> Self {
        Self { game }
    }

    /// Search `depth` plies from `state` with `agent` to move.
    ///
    /// Same leaf rules and tie-break as [`crate::AlphaBeta`]; `pruned` is
    /// always zero.
    pub fn search(
        &self,
        state: &G::State,
        depth: usize,
        agent: Agent,
    ) -> Result<SearchResult<G::Action>> {
        let mut nodes = 0;
        let (value, best_action) = self.minimax(state, depth, agent, &mut nodes)?;
        Ok(SearchResult {
            best_action,
            value,
            pruned: 0,
            nodes,
        })
    }

    fn minimax(
        &self,
        state: &G::State,
        depth: usize,
        agent: Agent,
        nodes: &mut u64,
    ) -> Result<(f32, Option<G::Action>)> {
        *nodes += 1;

        if self.game.is_terminal(state, agent) {
            return Ok((self.game.utility(state), None));
        }
        if depth == 0 {
            return Ok((self.game.evaluate(state), None));
        }

        let maximizing = agent.is_maximizer();
        let mut best_value = if maximizing {
            f32::NEG_INFINITY
        } else {
            f32::INFINITY
        };
        let mut best_action = None;

        for action in self.game.legal_actions(state, agent) {
            let child = self.game.apply(state, action, agent)?;
            let (value, _) = self.minimax(&child, depth - 1, agent.opponent(), nodes)?;

            if maximizing {
                if value > best_value {
                    best_value = value;
                    best_action = Some(action);
                }
            } else if value < best_value {
                best_value = value;
                best_action = Some(action);
            }
        }

        Ok((best_value, best_action))
    }
}
