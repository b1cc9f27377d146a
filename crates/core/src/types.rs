//! Shared domain types with enforced invariants.
//!
//! - Agent: which side is acting, never a bare boolean
//! - Value: game value in range [-1, 1], from the Monster's perspective

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the two sides of the pursuit game.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Agent {
    /// The human side: collects the item and heads for the exit.
    Player,
    /// The searching side: tries to catch the Player.
    Monster,
}

impl Agent {
    /// The agent whose turns maximize the game value.
    pub const MAXIMIZER: Agent = Agent::Monster;

    /// Get the opposing agent.
    pub fn opponent(self) -> Self {
        match self {
            Agent::Player => Agent::Monster,
            Agent::Monster => Agent::Player,
        }
    }

    /// True if this agent's turns take the maximum over child values.
    pub fn is_maximizer(self) -> bool {
        self == Self::MAXIMIZER
    }
}

impl fmt::Display for Agent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Agent::Player => write!(f, "Player"),
            Agent::Monster => write!(f, "Monster"),
        }
    }
}

/// A game value.
///
/// Invariant: Value is in range [-1, 1] where:
/// - +1 means the Monster has won (catch or move budget exhausted)
/// - -1 means the Player has won (item collected and exit reached)
/// - 0 means a stalemate
///
/// Heuristic estimates fall strictly between the two extremes.
///
/// # Example
/// ```
/// use pursuit_core::Value;
///
/// let value = Value::clamped(0.5);
/// assert!(value.get() >= -1.0 && value.get() <= 1.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Serialize)]
pub struct Value(f32);

impl Value {
    /// Value of a Monster win.
    pub const MONSTER_WIN: Self = Self(1.0);

    /// Value of a Player win.
    pub const PLAYER_WIN: Self = Self(-1.0);

    /// Value of a stalemate.
    pub const STALEMATE: Self = Self(0.0);

    /// Create a value by clamping to [-1, 1].
    ///
    /// NaN maps to a stalemate.
    pub fn clamped(value: f32) -> Self {
        if value.is_nan() {
            return Self::STALEMATE;
        }
        Self(value.clamp(-1.0, 1.0))
    }

    /// Get the underlying value.
    pub fn get(self) -> f32 {
        self.0
    }

    /// True if the value is as good as it gets for `agent`.
    pub fn is_decisive_for(self, agent: Agent) -> bool {
        match agent {
            Agent::Monster => self.0 >= 1.0,
            Agent::Player => self.0 <= -1.0,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}

impl From<Value> for f32 {
    fn from(v: Value) -> f32 {
        v.0
    }
}
