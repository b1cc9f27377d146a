//! Game-tree search for the pursuit game.
//!
//! This crate provides a generic depth-limited minimax with alpha-beta
//! pruning that works with any game implementing `pursuit_core::Game`,
//! plus the Monster entry points the driver calls.
//!
//! # Features
//!
//! - **Explicit agents**: Monster maximizes, Player minimizes, by type
//! - **Threaded window**: alpha/beta passed down, cutoffs counted up
//! - **Deterministic tie-break**: first action in generation order wins
//! - **Graceful limits**: depth limit and optional node budget fall back to
//!   the heuristic
//! - **Reference minimax**: unpruned search for comparison
//!
//! # Example
//!
//! ```
//! use pursuit_core::Agent;
//! use pursuit_game::{Action, GameState};
//! use pursuit_search::{search_monster, SearchConfig};
//!
//! let state = GameState::classic()
//!     .apply(Action::MoveUp, Agent::Player)
//!     .unwrap();
//!
//! let result = search_monster(&state, &SearchConfig::with_depth(4)).unwrap();
//! println!("Best action: {:?}", result.best_action);
//! println!("Pruned branches: {}", result.pruned);
//! ```

pub mod config;
pub mod minimax;
mod monster;
pub mod search;

pub use config::{SearchConfig, DEFAULT_MAX_DEPTH};
pub use minimax::Minimax;
pub use monster::{choose_monster_action, search_monster};
pub use search::{AlphaBeta, SearchResult};
