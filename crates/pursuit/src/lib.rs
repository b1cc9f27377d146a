//! Pursuit Game - Rules of the Player/Monster grid game
//!
//! The Player must pick up the item and return to the exit within
//! `2N + 1` moves, building obstacles to slow the Monster down. The Monster
//! wins by stepping onto the Player or by running out the Player's budget.

mod action;
mod apply;
mod bitboard;
mod game_impl;
mod layout;
mod position;
mod state;

pub use action::Action;
pub use apply::MoveApplier;
pub use bitboard::{Obstacles, ObstaclesIter};
pub use game_impl::Pursuit;
pub use layout::{Layout, StayRule, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
pub use position::{Direction, Position};
pub use state::{GameState, Outcome};
