//! Pursuit Core - Game abstractions and common types
//!
//! This crate provides the two-agent `Game` trait searched by
//! `pursuit-search`, together with the types every other crate shares.
//!
//! # Types
//!
//! - [`Agent`] - The two sides of the game (Player and Monster)
//! - [`Game`] - Trait for searchable game implementations
//! - [`Value`] - Game value in [-1, 1], positive favours the Monster
//! - [`PursuitError`] - Error taxonomy for rules and search

mod error;
mod game;
mod types;

pub use error::{PursuitError, Result};
pub use game::Game;
pub use types::{Agent, Value};
