use thiserror::Error;

use crate::Agent;

/// Errors that can occur in the pursuit game and its search engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PursuitError {
    #[error("illegal action '{action}' for {agent}")]
    IllegalAction { action: String, agent: Agent },

    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("invalid action token: '{0}'")]
    InvalidActionToken(String),

    #[error("no legal actions available for {0}")]
    NoLegalActions(Agent),

    #[error("game is already over")]
    GameOver,
}

/// Convenience Result type for pursuit operations
pub type Result<T> = std::result::Result<T, PursuitError>;
