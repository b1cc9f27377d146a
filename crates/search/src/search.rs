//! Depth-limited minimax with alpha-beta pruning.
//!
//! The maximizing agent ([`Agent::MAXIMIZER`], the Monster) and the
//! minimizing agent alternate one ply per recursion level. Alpha and beta are
//! threaded down the recursion; cutoff counts are returned up it, so a search
//! owns all of its bookkeeping and the engine is reentrant.

use pursuit_core::{Agent, Game, Result, Value};
use tracing::{debug, instrument, trace};

use crate::config::SearchConfig;

/// Result of a search.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchResult<A> {
    /// Best action for the agent to move; None at terminal or cutoff roots.
    pub best_action: Option<A>,

    /// Minimax value of the root, from the maximizer's perspective.
    /// Exact (-1, 0, +1) when the search reached terminal states, a heuristic
    /// estimate otherwise.
    pub value: f32,

    /// Sibling branches skipped by cutoffs, summed over the whole tree.
    pub pruned: u64,

    /// Nodes visited, root included.
    pub nodes: u64,
}

impl<A> SearchResult<A> {
    /// Get the root value as a typed Value (enforces [-1, 1] range invariant).
    pub fn typed_value(&self) -> Value {
        Value::clamped(self.value)
    }
}

/// Value, choice and cutoff count of one subtree.
struct Line<A> {
    value: f32,
    action: Option<A>,
    pruned: u64,
}

impl<A> Line<A> {
    fn leaf(value: f32) -> Self {
        Self {
            value,
            action: None,
            pruned: 0,
        }
    }
}

/// Alpha-beta search over any two-agent [`Game`].
///
/// Ties go to the earliest action in `legal_actions` order: a child only
/// replaces the current best when it is strictly better.
#[derive(Clone, Debug)]
pub struct AlphaBeta<G: Game> {
    game: G,
    config: SearchConfig,
}

impl<G: Game> AlphaBeta<G> {
    /// Create a new search engine.
    pub fn new(game: G, config: SearchConfig) -> Self {
        Self { game, config }
    }

    /// Search from `state` with `agent` to move, full window, configured depth.
    #[instrument(level = "debug", skip_all, fields(agent = %agent, depth = self.config.max_depth))]
    pub fn best_action(&self, state: &G::State, agent: Agent) -> Result<SearchResult<G::Action>> {
        let result = self.search(
            state,
            self.config.max_depth,
            f32::NEG_INFINITY,
            f32::INFINITY,
            agent,
        )?;
        debug!(
            action = ?result.best_action,
            value = result.value,
            pruned = result.pruned,
            nodes = result.nodes,
            "search complete"
        );
        Ok(result)
    }

    /// Search `depth` plies from `state` inside the window (`alpha`, `beta`).
    ///
    /// - terminal for `agent` → the state's utility, no action
    /// - `depth == 0` → the heuristic, no action
    /// - otherwise the best child value for `agent` and the action reaching it
    ///
    /// # Errors
    /// Propagates `PursuitError::IllegalAction` from the game, which only
    /// happens if the game's legal-action list and transition disagree.
    pub fn search(
        &self,
        state: &G::State,
        depth: usize,
        alpha: f32,
        beta: f32,
        agent: Agent,
    ) -> Result<SearchResult<G::Action>> {
        let mut nodes = 0;
        let line = self.alphabeta(state, depth, alpha, beta, agent, &mut nodes)?;
        Ok(SearchResult {
            best_action: line.action,
            value: line.value,
            pruned: line.pruned,
            nodes,
        })
    }

    fn alphabeta(
        &self,
        state: &G::State,
        depth: usize,
        mut alpha: f32,
        mut beta: f32,
        agent: Agent,
        nodes: &mut u64,
    ) -> Result<Line<G::Action>> {
        *nodes += 1;

        if self.game.is_terminal(state, agent) {
            return Ok(Line::leaf(self.game.utility(state)));
        }
        // The root always expands so a live position yields an action
        let out_of_budget = *nodes > 1 && self.config.budget_exceeded(*nodes);
        if depth == 0 || out_of_budget {
            return Ok(Line::leaf(self.game.evaluate(state)));
        }

        let maximizing = agent.is_maximizer();
        let actions = self.game.legal_actions(state, agent);
        let mut best = Line {
            value: if maximizing {
                f32::NEG_INFINITY
            } else {
                f32::INFINITY
            },
            action: None,
            pruned: 0,
        };

        for (i, &action) in actions.iter().enumerate() {
            let child = self.game.apply(state, action, agent)?;
            let reply = self.alphabeta(&child, depth - 1, alpha, beta, agent.opponent(), nodes)?;
            best.pruned += reply.pruned;

            let improves = if maximizing {
                reply.value > best.value
            } else {
                reply.value < best.value
            };
            if improves {
                best.value = reply.value;
                best.action = Some(action);
            }

            if !self.config.pruning {
                continue;
            }

            let outside_window = if maximizing {
                alpha = alpha.max(best.value);
                best.value >= beta
            } else {
                beta = beta.min(best.value);
                best.value <= alpha
            };
            // Values never leave [-1, 1], so reaching the bound is a cutoff too
            let cutoff = outside_window || Value::clamped(best.value).is_decisive_for(agent);

            if cutoff {
                let skipped = (actions.len() - i - 1) as u64;
                if skipped > 0 {
                    trace!(%agent, depth, skipped, value = best.value, "cutoff");
                }
                best.pruned += skipped;
                break;
            }
        }

        Ok(best)
    }
}
