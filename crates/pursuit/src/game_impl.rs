//! Implementation of the two-agent Game trait for the pursuit game.

use pursuit_core::{Agent, Game, Result};

use crate::{Action, GameState, MoveApplier};

/// Pursuit game implementation for search.
#[derive(Clone, Copy, Debug, Default)]
pub struct Pursuit;

impl Game for Pursuit {
    type State = GameState;
    type Action = Action;

    fn legal_actions(&self, state: &GameState, agent: Agent) -> Vec<Action> {
        state.legal_actions(agent)
    }

    fn apply(&self, state: &GameState, action: Action, agent: Agent) -> Result<GameState> {
        MoveApplier::apply(state, action, agent)
    }

    fn is_terminal(&self, state: &GameState, agent: Agent) -> bool {
        state.is_terminal(agent)
    }

    fn utility(&self, state: &GameState) -> f32 {
        state.utility().get()
    }

    fn evaluate(&self, state: &GameState) -> f32 {
        state.evaluate_heuristic()
    }
}
