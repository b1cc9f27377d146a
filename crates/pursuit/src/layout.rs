//! Starting configurations and their validation.

use std::collections::{BTreeSet, VecDeque};

use pursuit_core::{PursuitError, Result};
use serde::{Deserialize, Serialize};

use crate::bitboard::STRIDE;
use crate::{Obstacles, Position};

/// Smallest board that can hold all four pieces.
pub const MIN_BOARD_SIZE: u8 = 2;

/// Largest board accepted; search is exhaustive, so boards stay small.
pub const MAX_BOARD_SIZE: u8 = STRIDE;

/// When the Monster may pass its turn.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StayRule {
    /// Stay is always offered, after the movement actions.
    #[default]
    Always,
    /// Stay is offered only when the Monster has no movement action.
    WhenCornered,
    /// The Monster must move; with no open neighbour it has no actions.
    Never,
}

/// The starting configuration of a game.
///
/// Layouts are plain data (loadable from JSON); [`Layout::validate`] checks
/// that a game can actually be played on them.
///
/// # Example
/// ```
/// use pursuit_game::{Layout, Position};
///
/// let layout = Layout::classic();
/// assert_eq!(layout.board_size, 4);
/// assert_eq!(layout.player, Position::new(3, 0));
/// assert_eq!(layout.max_moves(), 9);
/// assert!(layout.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Layout {
    pub board_size: u8,
    pub player: Position,
    pub monster: Position,
    pub item: Position,
    pub exit: Position,
    #[serde(default)]
    pub obstacles: Vec<Position>,
    #[serde(default)]
    pub stay_rule: StayRule,
}

impl Layout {
    /// The 4×4 board: Monster top-left, Player on the exit bottom-left,
    /// item at (1, 2).
    pub fn classic() -> Self {
        Self {
            board_size: 4,
            player: Position::new(3, 0),
            monster: Position::new(0, 0),
            item: Position::new(1, 2),
            exit: Position::new(3, 0),
            obstacles: Vec::new(),
            stay_rule: StayRule::Always,
        }
    }

    /// Set the initial obstacles.
    pub fn with_obstacles(mut self, obstacles: impl IntoIterator<Item = Position>) -> Self {
        self.obstacles = obstacles.into_iter().collect();
        self
    }

    /// Set the Monster's stay rule.
    pub fn with_stay_rule(mut self, stay_rule: StayRule) -> Self {
        self.stay_rule = stay_rule;
        self
    }

    /// Player move budget: `2 * board_size + 1`.
    pub fn max_moves(&self) -> u32 {
        2 * u32::from(self.board_size) + 1
    }

    /// Check that the layout describes a playable game.
    ///
    /// # Errors
    /// Returns `PursuitError::InvalidConfiguration` if:
    /// - the board is smaller than 2×2 or larger than 11×11
    /// - any piece or obstacle lies off the board
    /// - the Monster shares a cell with the Player, item or exit
    /// - the item lies on the exit
    /// - an obstacle covers a piece, the item or the exit
    /// - the item is unreachable from the Player, or the exit from the item
    pub fn validate(&self) -> Result<()> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&self.board_size) {
            return Err(invalid(format!(
                "board size {} is outside {}..={}",
                self.board_size, MIN_BOARD_SIZE, MAX_BOARD_SIZE
            )));
        }

        for (name, pos) in self.named_cells() {
            if !pos.is_within(self.board_size) {
                return Err(invalid(format!(
                    "{} at {} is off the {}x{} board",
                    name, pos, self.board_size, self.board_size
                )));
            }
        }

        for (name, pos) in [("player", self.player), ("item", self.item), ("exit", self.exit)] {
            if pos == self.monster {
                return Err(invalid(format!("monster and {} share cell {}", name, pos)));
            }
        }
        if self.item == self.exit {
            return Err(invalid(format!("item and exit share cell {}", self.item)));
        }

        for &obstacle in &self.obstacles {
            if !obstacle.is_within(self.board_size) {
                return Err(invalid(format!("obstacle at {} is off the board", obstacle)));
            }
            if let Some((name, _)) = self.named_cells().into_iter().find(|(_, p)| *p == obstacle) {
                return Err(invalid(format!("obstacle at {} covers the {}", obstacle, name)));
            }
        }
        let obstacles: Obstacles = self.obstacles.iter().copied().collect();

        if !reachable(self.board_size, &obstacles, self.player, self.item) {
            return Err(invalid(format!(
                "item at {} is unreachable from the player at {}",
                self.item, self.player
            )));
        }
        if !reachable(self.board_size, &obstacles, self.item, self.exit) {
            return Err(invalid(format!(
                "exit at {} is unreachable from the item at {}",
                self.exit, self.item
            )));
        }

        Ok(())
    }

    fn named_cells(&self) -> [(&'static str, Position); 4] {
        [
            ("player", self.player),
            ("monster", self.monster),
            ("item", self.item),
            ("exit", self.exit),
        ]
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::classic()
    }
}

fn invalid(message: String) -> PursuitError {
    PursuitError::InvalidConfiguration(message)
}

/// Breadth-first search through obstacle-free cells.
fn reachable(size: u8, obstacles: &Obstacles, from: Position, to: Position) -> bool {
    let mut seen = BTreeSet::from([from]);
    let mut queue = VecDeque::from([from]);

    while let Some(cell) = queue.pop_front() {
        if cell == to {
            return true;
        }
        for next in cell.neighbours(size) {
            if !obstacles.contains(next) && seen.insert(next) {
                queue.push_back(next);
            }
        }
    }
    false
}
