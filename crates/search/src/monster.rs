//! Entry points used by the game driver to pick the Monster's move.

use pursuit_core::{Agent, PursuitError, Result};
use pursuit_game::{Action, GameState, Pursuit};

use crate::{AlphaBeta, SearchConfig, SearchResult};

/// Best Monster action for `state` with the default configuration
/// (alpha-beta, depth 20, no node budget).
///
/// # Errors
/// - `PursuitError::GameOver` if either side has already won
/// - `PursuitError::NoLegalActions` if the Monster cannot act
pub fn choose_monster_action(state: &GameState) -> Result<Action> {
    let result = search_monster(state, &SearchConfig::default())?;
    result
        .best_action
        .ok_or(PursuitError::NoLegalActions(Agent::Monster))
}

/// Full search result for the Monster's turn.
///
/// The root is always searched at least one ply deep so a result carries an
/// action even with `max_depth == 0`.
///
/// # Errors
/// Same as [`choose_monster_action`].
pub fn search_monster(state: &GameState, config: &SearchConfig) -> Result<SearchResult<Action>> {
    if state.is_game_over() {
        return Err(PursuitError::GameOver);
    }
    if state.legal_actions(Agent::Monster).is_empty() {
        return Err(PursuitError::NoLegalActions(Agent::Monster));
    }

    let config = SearchConfig {
        max_depth: config.max_depth.max(1),
        ..config.clone()
    };
    AlphaBeta::new(Pursuit, config).best_action(state, Agent::Monster)
}
