use std::fmt::Debug;
use std::hash::Hash;

use crate::{Agent, Result};

/// A two-agent, alternating-move game that can be searched with minimax.
///
/// Unlike a side-to-move game, the acting [`Agent`] is passed explicitly to
/// every query. Values are always expressed from the perspective of the
/// maximizing agent ([`Agent::MAXIMIZER`]): `+1` is a win for it, `-1` a win
/// for its opponent, `0` a draw.
pub trait Game: Clone + Send + Sync {
    /// The game state (positions, counters, board contents)
    type State: Clone + Send;

    /// A game action (a move, a build, a pass)
    type Action: Clone + Copy + Send + Eq + Hash + Debug;

    /// Returns all legal actions for `agent`, in a fixed order.
    ///
    /// The order is significant: search breaks ties in favour of the
    /// earliest action.
    fn legal_actions(&self, state: &Self::State, agent: Agent) -> Vec<Self::Action>;

    /// Applies an action for `agent`, returning a new state (immutable operation)
    ///
    /// # Errors
    /// Returns `PursuitError::IllegalAction` if the action is not legal for
    /// `agent` in `state`.
    fn apply(&self, state: &Self::State, action: Self::Action, agent: Agent)
        -> Result<Self::State>;

    /// Returns true if the game is over, or `agent` has nothing to play
    fn is_terminal(&self, state: &Self::State, agent: Agent) -> bool;

    /// Exact value of a terminal state, in {-1, 0, +1}
    fn utility(&self, state: &Self::State) -> f32;

    /// Heuristic value of a non-terminal state, strictly inside (-1, +1)
    fn evaluate(&self, state: &Self::State) -> f32;
}
