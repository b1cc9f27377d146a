//! Game state: positions, obstacles, item flag and move counter.

use std::fmt;

use pursuit_core::{Agent, Result, Value};
use serde::Serialize;

use crate::{Action, Direction, Layout, Obstacles, Position, StayRule};

/// How a game ended.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    PlayerWon,
    MonsterWon,
    Stalemate,
}

impl Outcome {
    /// Terminal value of the outcome, from the Monster's perspective.
    pub fn value(self) -> Value {
        match self {
            Outcome::PlayerWon => Value::PLAYER_WIN,
            Outcome::MonsterWon => Value::MONSTER_WIN,
            Outcome::Stalemate => Value::STALEMATE,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::PlayerWon => write!(f, "player won"),
            Outcome::MonsterWon => write!(f, "monster won"),
            Outcome::Stalemate => write!(f, "stalemate"),
        }
    }
}

/// A snapshot of the board between plies.
///
/// States are small `Copy` values and never mutated once built;
/// [`crate::MoveApplier`] returns a fresh state for every action, so search
/// can branch without undo.
///
/// Invariants:
/// - Player and Monster are on the board and never on an obstacle
/// - `has_item` flips to true once, when the Player reaches the item
/// - `moves_taken` only grows, and only on Player actions
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct GameState {
    pub(crate) board_size: u8,
    pub(crate) obstacles: Obstacles,
    pub(crate) player: Position,
    pub(crate) monster: Position,
    pub(crate) exit: Position,
    pub(crate) item: Position,
    pub(crate) has_item: bool,
    pub(crate) moves_taken: u32,
    pub(crate) max_moves: u32,
    pub(crate) stay_rule: StayRule,
}

impl GameState {
    /// Build the starting state for a layout.
    ///
    /// # Errors
    /// Returns `PursuitError::InvalidConfiguration` if the layout fails
    /// [`Layout::validate`].
    pub fn new(layout: &Layout) -> Result<Self> {
        layout.validate()?;
        Ok(Self::from_layout(layout))
    }

    /// The starting state of [`Layout::classic`].
    pub fn classic() -> Self {
        Self::from_layout(&Layout::classic())
    }

    fn from_layout(layout: &Layout) -> Self {
        Self {
            board_size: layout.board_size,
            obstacles: layout.obstacles.iter().copied().collect(),
            player: layout.player,
            monster: layout.monster,
            exit: layout.exit,
            item: layout.item,
            has_item: layout.player == layout.item,
            moves_taken: 0,
            max_moves: layout.max_moves(),
            stay_rule: layout.stay_rule,
        }
    }

    pub fn board_size(&self) -> u8 {
        self.board_size
    }

    pub fn obstacles(&self) -> Obstacles {
        self.obstacles
    }

    pub fn player_pos(&self) -> Position {
        self.player
    }

    pub fn monster_pos(&self) -> Position {
        self.monster
    }

    pub fn exit_pos(&self) -> Position {
        self.exit
    }

    pub fn item_pos(&self) -> Position {
        self.item
    }

    pub fn has_item(&self) -> bool {
        self.has_item
    }

    pub fn moves_taken(&self) -> u32 {
        self.moves_taken
    }

    pub fn max_moves(&self) -> u32 {
        self.max_moves
    }

    /// Position of an agent's piece.
    pub fn position_of(&self, agent: Agent) -> Position {
        match agent {
            Agent::Player => self.player,
            Agent::Monster => self.monster,
        }
    }

    /// True if `pos` is on the board and not blocked.
    pub fn is_open(&self, pos: Position) -> bool {
        pos.is_within(self.board_size) && !self.obstacles.contains(pos)
    }

    /// Open neighbour of `from` in `direction`, if any.
    pub(crate) fn open_step(&self, from: Position, direction: Direction) -> Option<Position> {
        from.step(direction, self.board_size)
            .filter(|&target| self.is_open(target))
    }

    /// Legal actions for `agent`, in tie-break order.
    ///
    /// Player: for Up, Down, Left, Right, if the neighbour is open, the move
    /// followed by the build in that direction. A build may not land on the
    /// Monster. Monster: moves to open neighbours in the same order, then
    /// Stay as permitted by the stay rule.
    pub fn legal_actions(&self, agent: Agent) -> Vec<Action> {
        let from = self.position_of(agent);
        let mut actions = Vec::with_capacity(9);

        for direction in Direction::ALL {
            let Some(target) = self.open_step(from, direction) else {
                continue;
            };
            actions.push(Action::moving(direction));
            if agent == Agent::Player && target != self.monster {
                actions.push(Action::building(direction));
            }
        }

        if agent == Agent::Monster {
            let stay = match self.stay_rule {
                StayRule::Always => true,
                StayRule::WhenCornered => actions.is_empty(),
                StayRule::Never => false,
            };
            if stay {
                actions.push(Action::Stay);
            }
        }

        actions
    }

    /// True if `action` is currently legal for `agent`.
    pub fn is_legal(&self, action: Action, agent: Agent) -> bool {
        action.usable_by(agent) && self.legal_actions(agent).contains(&action)
    }

    /// Player holds the item and stands on the exit.
    pub fn player_won(&self) -> bool {
        self.has_item && self.player == self.exit
    }

    /// Monster caught the Player, or the Player ran out of moves.
    pub fn monster_won(&self) -> bool {
        self.moves_taken >= self.max_moves || self.monster == self.player
    }

    /// True if `agent`'s winning condition holds.
    pub fn game_ended_for(&self, agent: Agent) -> bool {
        match agent {
            Agent::Player => self.player_won(),
            Agent::Monster => self.monster_won(),
        }
    }

    /// True if either agent's winning condition holds.
    pub fn is_game_over(&self) -> bool {
        self.player_won() || self.monster_won()
    }

    /// True if the game is over, or `agent` (to move) has no legal action.
    ///
    /// Both winning conditions are checked whichever agent is to move: the
    /// agent that just moved may have won on that move.
    pub fn is_terminal(&self, agent: Agent) -> bool {
        self.is_game_over() || self.legal_actions(agent).is_empty()
    }

    /// How the game ended, with `to_move` the agent about to act.
    ///
    /// A Player win takes precedence when both winning conditions hold.
    pub fn outcome(&self, to_move: Agent) -> Option<Outcome> {
        if self.player_won() {
            Some(Outcome::PlayerWon)
        } else if self.monster_won() {
            Some(Outcome::MonsterWon)
        } else if self.legal_actions(to_move).is_empty() {
            Some(Outcome::Stalemate)
        } else {
            None
        }
    }

    /// Exact value of a terminal state.
    ///
    /// -1 for a Player win, +1 for a Monster win, 0 otherwise (a terminal
    /// state with neither condition is a stalemate).
    pub fn utility(&self) -> Value {
        if self.player_won() {
            Value::PLAYER_WIN
        } else if self.monster_won() {
            Value::MONSTER_WIN
        } else {
            Value::STALEMATE
        }
    }

    /// Cutoff estimate from the Monster–Player Manhattan distance.
    ///
    /// With `D = 2 * (board_size - 1)` the largest possible distance and `d`
    /// the current one, the estimate is `(D - 2d) / (D + 1)`: strictly inside
    /// (-1, +1), decreasing in `d`, and 0 at half the board's span.
    pub fn evaluate_heuristic(&self) -> f32 {
        let span = 2 * (u32::from(self.board_size) - 1);
        let distance = self.monster.manhattan(self.player).min(span);
        (span as f32 - 2.0 * distance as f32) / (span as f32 + 1.0)
    }

    /// Moves the Player has left before the budget runs out.
    pub fn moves_remaining(&self) -> u32 {
        self.max_moves.saturating_sub(self.moves_taken)
    }

    fn cell_char(&self, pos: Position) -> char {
        if pos == self.monster {
            'W'
        } else if pos == self.item && !self.has_item {
            'G'
        } else if pos == self.player {
            'P'
        } else if self.obstacles.contains(pos) {
            '#'
        } else if pos == self.exit {
            'E'
        } else {
            ' '
        }
    }
}

impl fmt::Display for GameState {
    /// Board with 1-based row and column headers:
    /// `W` Monster, `P` Player, `G` item, `E` exit, `#` obstacle.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = self.board_size;
        let rule = format!(" {}-", "--".repeat(usize::from(size)));

        write!(f, " ")?;
        for col in 0..size {
            write!(f, " {}", col + 1)?;
        }
        writeln!(f)?;

        for row in 0..size {
            writeln!(f, "{}", rule)?;
            write!(f, "{}", row + 1)?;
            for col in 0..size {
                write!(f, "|{}", self.cell_char(Position::new(row, col)))?;
            }
            writeln!(f, "|")?;
        }
        writeln!(f, "{}", rule)?;
        write!(
            f,
            "Moves: {}/{}  Item: {}",
            self.moves_taken,
            self.max_moves,
            if self.has_item { "held" } else { "not held" }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with(player: Position, monster: Position) -> GameState {
        let layout = Layout {
            player,
            monster,
            ..Layout::classic()
        };
        GameState::new(&layout).unwrap()
    }

    #[test]
    fn test_initial_state() {
        let state = GameState::classic();
        assert_eq!(state.player_pos(), Position::new(3, 0));
        assert_eq!(state.monster_pos(), Position::new(0, 0));
        assert!(!state.has_item());
        assert_eq!(state.moves_taken(), 0);
        assert_eq!(state.max_moves(), 9);
        assert!(!state.is_terminal(Agent::Player));
    }

    #[test]
    fn test_player_actions_corner() {
        let state = GameState::classic();
        assert_eq!(
            state.legal_actions(Agent::Player),
            vec![
                Action::MoveUp,
                Action::BuildUp,
                Action::MoveRight,
                Action::BuildRight
            ]
        );
    }

    #[test]
    fn test_monster_actions_corner() {
        let state = GameState::classic();
        assert_eq!(
            state.legal_actions(Agent::Monster),
            vec![Action::MoveDown, Action::MoveRight, Action::Stay]
        );
    }

    #[test]
    fn test_obstacle_blocks_move_and_build() {
        let layout = Layout::classic().with_obstacles([Position::new(2, 0)]);
        let state = GameState::new(&layout).unwrap();
        assert_eq!(
            state.legal_actions(Agent::Player),
            vec![Action::MoveRight, Action::BuildRight]
        );
    }

    #[test]
    fn test_cannot_build_on_monster() {
        let state = state_with(Position::new(3, 0), Position::new(2, 0));
        let actions = state.legal_actions(Agent::Player);
        assert!(actions.contains(&Action::MoveUp));
        assert!(!actions.contains(&Action::BuildUp));
    }

    #[test]
    fn test_stay_rules() {
        // Monster boxed into the top-left corner
        let boxed = Layout::classic().with_obstacles([Position::new(1, 0), Position::new(0, 1)]);

        let always = GameState::new(&boxed.clone().with_stay_rule(StayRule::Always)).unwrap();
        assert_eq!(always.legal_actions(Agent::Monster), vec![Action::Stay]);

        let cornered = GameState::new(&boxed.clone().with_stay_rule(StayRule::WhenCornered)).unwrap();
        assert_eq!(cornered.legal_actions(Agent::Monster), vec![Action::Stay]);

        let never = GameState::new(&boxed.with_stay_rule(StayRule::Never)).unwrap();
        assert!(never.legal_actions(Agent::Monster).is_empty());
        assert!(never.is_terminal(Agent::Monster));
        assert_eq!(never.outcome(Agent::Monster), Some(Outcome::Stalemate));
        assert_eq!(never.utility(), Value::STALEMATE);
    }

    #[test]
    fn test_when_cornered_hides_stay_if_free() {
        let layout = Layout::classic().with_stay_rule(StayRule::WhenCornered);
        let state = GameState::new(&layout).unwrap();
        assert!(!state.legal_actions(Agent::Monster).contains(&Action::Stay));
    }

    #[test]
    fn test_catch_is_monster_win() {
        let mut state = GameState::classic();
        state.monster = state.player;
        assert!(state.game_ended_for(Agent::Monster));
        assert!(!state.game_ended_for(Agent::Player));
        assert!(state.is_terminal(Agent::Player));
        assert!(state.is_terminal(Agent::Monster));
        assert_eq!(state.utility(), Value::MONSTER_WIN);
        assert_eq!(state.outcome(Agent::Player), Some(Outcome::MonsterWon));
    }

    #[test]
    fn test_budget_exhausted_is_monster_win() {
        let mut state = GameState::classic();
        state.moves_taken = state.max_moves;
        assert!(state.monster_won());
        assert_eq!(state.utility(), Value::MONSTER_WIN);
    }

    #[test]
    fn test_player_win_takes_precedence() {
        let mut state = GameState::classic();
        state.has_item = true;
        state.moves_taken = state.max_moves;
        assert!(state.player_won());
        assert!(state.monster_won());
        assert_eq!(state.utility(), Value::PLAYER_WIN);
        assert_eq!(state.outcome(Agent::Monster), Some(Outcome::PlayerWon));
    }

    #[test]
    fn test_heuristic_bounds_and_monotonicity() {
        let far = state_with(Position::new(3, 3), Position::new(0, 0));
        let mid = state_with(Position::new(3, 0), Position::new(0, 0));
        let near = state_with(Position::new(1, 0), Position::new(0, 0));

        let (far, mid, near) = (
            far.evaluate_heuristic(),
            mid.evaluate_heuristic(),
            near.evaluate_heuristic(),
        );
        assert!(far < mid && mid < near);
        for value in [far, mid, near] {
            assert!(value > -1.0 && value < 1.0);
        }
        // Distance 6 on a 4x4 board is the far extreme
        assert!((far - (-6.0 / 7.0)).abs() < 1e-6);
    }

    #[test]
    fn test_display() {
        let state = GameState::classic();
        let display = state.to_string();
        assert!(display.starts_with("  1 2 3 4\n"));
        assert!(display.contains("1|W| | | |"));
        assert!(display.contains("2| | |G| |"));
        assert!(display.contains("4|P| | | |"));
        assert!(display.contains("Moves: 0/9"));
    }
}
