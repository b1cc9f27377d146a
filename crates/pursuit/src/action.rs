//! Player and Monster actions with their console tokens.
//!
//! Tokens follow WASD: `w`/`s`/`a`/`d` step up/down/left/right, a trailing
//! `b` builds an obstacle in that direction instead of moving, and `stay`
//! (or an empty token) is the Monster's pass.

use std::fmt;
use std::str::FromStr;

use pursuit_core::{Agent, PursuitError};
use serde::{Deserialize, Serialize};

use crate::Direction;

/// Every action either agent can take.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    BuildUp,
    BuildDown,
    BuildLeft,
    BuildRight,
    Stay,
}

impl Action {
    /// The step action for a direction.
    pub const fn moving(direction: Direction) -> Self {
        match direction {
            Direction::Up => Action::MoveUp,
            Direction::Down => Action::MoveDown,
            Direction::Left => Action::MoveLeft,
            Direction::Right => Action::MoveRight,
        }
    }

    /// The build action for a direction.
    pub const fn building(direction: Direction) -> Self {
        match direction {
            Direction::Up => Action::BuildUp,
            Direction::Down => Action::BuildDown,
            Direction::Left => Action::BuildLeft,
            Direction::Right => Action::BuildRight,
        }
    }

    /// Direction of the targeted cell; None for Stay.
    pub const fn direction(self) -> Option<Direction> {
        match self {
            Action::MoveUp | Action::BuildUp => Some(Direction::Up),
            Action::MoveDown | Action::BuildDown => Some(Direction::Down),
            Action::MoveLeft | Action::BuildLeft => Some(Direction::Left),
            Action::MoveRight | Action::BuildRight => Some(Direction::Right),
            Action::Stay => None,
        }
    }

    pub const fn is_build(self) -> bool {
        matches!(
            self,
            Action::BuildUp | Action::BuildDown | Action::BuildLeft | Action::BuildRight
        )
    }

    /// True if `agent` may ever take this action (ignoring board legality).
    pub const fn usable_by(self, agent: Agent) -> bool {
        match agent {
            Agent::Player => !matches!(self, Action::Stay),
            Agent::Monster => !self.is_build(),
        }
    }

    /// Console token for this action.
    pub const fn token(self) -> &'static str {
        match self {
            Action::MoveUp => "w",
            Action::MoveDown => "s",
            Action::MoveLeft => "a",
            Action::MoveRight => "d",
            Action::BuildUp => "wb",
            Action::BuildDown => "sb",
            Action::BuildLeft => "ab",
            Action::BuildRight => "db",
            Action::Stay => "stay",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Action {
    type Err = PursuitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "w" => Ok(Action::MoveUp),
            "s" => Ok(Action::MoveDown),
            "a" => Ok(Action::MoveLeft),
            "d" => Ok(Action::MoveRight),
            "wb" => Ok(Action::BuildUp),
            "sb" => Ok(Action::BuildDown),
            "ab" => Ok(Action::BuildLeft),
            "db" => Ok(Action::BuildRight),
            "" | "stay" => Ok(Action::Stay),
            _ => Err(PursuitError::InvalidActionToken(s.trim().to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tokens() {
        assert_eq!("w".parse::<Action>().unwrap(), Action::MoveUp);
        assert_eq!("db".parse::<Action>().unwrap(), Action::BuildRight);
        assert_eq!(" SB \n".parse::<Action>().unwrap(), Action::BuildDown);
        assert_eq!("".parse::<Action>().unwrap(), Action::Stay);
        assert_eq!("stay".parse::<Action>().unwrap(), Action::Stay);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "x".parse::<Action>().unwrap_err();
        assert_eq!(err, PursuitError::InvalidActionToken("x".to_string()));
        assert!("wbb".parse::<Action>().is_err());
    }

    #[test]
    fn test_display_matches_parse() {
        for dir in Direction::ALL {
            for action in [Action::moving(dir), Action::building(dir)] {
                assert_eq!(action.to_string().parse::<Action>().unwrap(), action);
            }
        }
    }

    #[test]
    fn test_direction_and_kind() {
        assert_eq!(Action::BuildLeft.direction(), Some(Direction::Left));
        assert_eq!(Action::MoveLeft.direction(), Some(Direction::Left));
        assert_eq!(Action::Stay.direction(), None);
        assert!(Action::BuildLeft.is_build());
        assert!(!Action::MoveLeft.is_build());
    }

    #[test]
    fn test_usable_by() {
        assert!(Action::BuildUp.usable_by(Agent::Player));
        assert!(!Action::BuildUp.usable_by(Agent::Monster));
        assert!(Action::Stay.usable_by(Agent::Monster));
        assert!(!Action::Stay.usable_by(Agent::Player));
        assert!(Action::MoveDown.usable_by(Agent::Monster));
    }
}
