//! The transition function: (state, action, agent) → state.

use pursuit_core::{Agent, PursuitError, Result};
use tracing::trace;

use crate::{Action, GameState};

/// Applies actions to states without touching the input state.
///
/// Every call copies the state and edits the copy, so callers can hold on
/// to the parent for sibling branches.
#[derive(Clone, Copy, Debug, Default)]
pub struct MoveApplier;

impl MoveApplier {
    /// Apply `action` for `agent`, returning the successor state.
    ///
    /// Player actions advance the move counter; a Player step onto the item
    /// collects it. Monster actions never touch the counter.
    ///
    /// # Errors
    /// Returns `PursuitError::IllegalAction` if `action` is not in
    /// `state.legal_actions(agent)`.
    pub fn apply(state: &GameState, action: Action, agent: Agent) -> Result<GameState> {
        if !state.is_legal(action, agent) {
            return Err(illegal(action, agent));
        }

        let mut next = *state;
        let Some(direction) = action.direction() else {
            // Stay
            return Ok(next);
        };
        let target = state
            .open_step(state.position_of(agent), direction)
            .ok_or_else(|| illegal(action, agent))?;

        match agent {
            Agent::Player => {
                if action.is_build() {
                    next.obstacles.insert(target);
                } else {
                    next.player = target;
                    if target == next.item && !next.has_item {
                        trace!(at = %target, "player collected the item");
                        next.has_item = true;
                    }
                }
                next.moves_taken += 1;
            }
            Agent::Monster => next.monster = target,
        }

        Ok(next)
    }
}

impl GameState {
    /// Shorthand for [`MoveApplier::apply`].
    pub fn apply(&self, action: Action, agent: Agent) -> Result<GameState> {
        MoveApplier::apply(self, action, agent)
    }
}

fn illegal(action: Action, agent: Agent) -> PursuitError {
    PursuitError::IllegalAction {
        action: action.to_string(),
        agent,
    }
}
