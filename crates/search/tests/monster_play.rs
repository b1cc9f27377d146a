//! Tests of the Monster's move choice on concrete boards.

use pursuit_core::{Agent, PursuitError, Value};
use pursuit_game::{Action, GameState, Layout, Outcome, Position, Pursuit, StayRule};
use pursuit_search::{choose_monster_action, search_monster, AlphaBeta, SearchConfig};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Classic board with the Player above the Monster and item/exit far away.
fn monster_below_player() -> GameState {
    let layout = Layout {
        board_size: 4,
        player: Position::new(1, 1),
        monster: Position::new(2, 1),
        item: Position::new(0, 3),
        exit: Position::new(3, 3),
        obstacles: Vec::new(),
        stay_rule: StayRule::Always,
    };
    GameState::new(&layout).unwrap()
}

/// Classic board after the Player paces Up and Down for eight moves while
/// the Monster waits; the Monster is to move and the Player has one move left.
fn late_game() -> GameState {
    let mut state = GameState::classic();
    for i in 0..8 {
        if i > 0 {
            state = state.apply(Action::Stay, Agent::Monster).unwrap();
        }
        let action = if i % 2 == 0 {
            Action::MoveUp
        } else {
            Action::MoveDown
        };
        state = state.apply(action, Agent::Player).unwrap();
    }
    state
}

#[test]
fn test_monster_takes_immediate_catch() {
    let state = monster_below_player();

    for depth in [1, 2, 5, 20] {
        let result = search_monster(&state, &SearchConfig::with_depth(depth)).unwrap();
        assert_eq!(result.best_action, Some(Action::MoveUp), "depth {}", depth);
        assert_eq!(result.value, 1.0);
        // The catch is decisive: the other four actions are never searched
        assert_eq!(result.nodes, 2);
        assert_eq!(result.pruned, 4);
    }
}

#[test]
fn test_monster_prefers_catch_over_earlier_moves() {
    // Monster directly above the Player: MoveUp comes first but MoveDown catches
    let layout = Layout {
        monster: Position::new(2, 0),
        ..Layout::classic()
    };
    let state = GameState::new(&layout).unwrap();

    for depth in [1, 2] {
        let result = search_monster(&state, &SearchConfig::with_depth(depth)).unwrap();
        assert_eq!(result.best_action, Some(Action::MoveDown), "depth {}", depth);
        assert_eq!(result.typed_value(), Value::MONSTER_WIN);
    }
}

#[test]
fn test_stuck_monster_is_a_leaf() {
    let layout = Layout::classic()
        .with_obstacles([Position::new(1, 0), Position::new(0, 1)])
        .with_stay_rule(StayRule::Never);
    let state = GameState::new(&layout).unwrap();
    assert!(state.is_terminal(Agent::Monster));

    let result = AlphaBeta::new(Pursuit, SearchConfig::default())
        .best_action(&state, Agent::Monster)
        .unwrap();
    assert_eq!(result.nodes, 1);
    assert_eq!(result.best_action, None);
    assert_eq!(result.value, 0.0);
    assert_eq!(result.pruned, 0);

    assert_eq!(
        choose_monster_action(&state),
        Err(PursuitError::NoLegalActions(Agent::Monster))
    );
}

#[test]
fn test_late_game_full_depth() {
    let state = late_game();
    assert_eq!(state.player_pos(), Position::new(3, 0));
    assert_eq!(state.moves_remaining(), 1);

    // The Player cannot reach the item in time, so every Monster move wins
    let result = search_monster(&state, &SearchConfig::default()).unwrap();
    assert_eq!(result.value, 1.0);
    assert_eq!(result.best_action, Some(Action::MoveDown));
    assert!(result.pruned >= 2);

    let action = choose_monster_action(&state).unwrap();
    assert!(state.legal_actions(Agent::Monster).contains(&action));
}

#[test]
fn test_node_budget_still_yields_action() {
    let state = GameState::classic()
        .apply(Action::MoveUp, Agent::Player)
        .unwrap();

    let config = SearchConfig::default().with_node_budget(200);
    let result = search_monster(&state, &config).unwrap();

    let action = result.best_action.unwrap();
    assert!(state.legal_actions(Agent::Monster).contains(&action));
    assert!(result.value > -1.0 && result.value <= 1.0);
}

#[test]
fn test_zero_node_budget_still_moves() {
    let state = GameState::classic()
        .apply(Action::MoveUp, Agent::Player)
        .unwrap();

    let config = SearchConfig::default().with_node_budget(0);
    let result = search_monster(&state, &config).unwrap();
    let action = result.best_action.unwrap();
    assert!(state.legal_actions(Agent::Monster).contains(&action));
    // Root plus one heuristic leaf per Monster action
    assert_eq!(result.nodes, 1 + state.legal_actions(Agent::Monster).len() as u64);
}

#[test]
fn test_pruning_saves_work_on_real_board() {
    let state = GameState::classic()
        .apply(Action::MoveRight, Agent::Player)
        .unwrap();

    let pruned = search_monster(&state, &SearchConfig::with_depth(4)).unwrap();
    let full = search_monster(&state, &SearchConfig::with_depth(4).without_pruning()).unwrap();

    assert_eq!(pruned.value, full.value);
    assert_eq!(pruned.best_action, full.best_action);
    assert!(pruned.nodes < full.nodes);
    assert!(pruned.pruned > 0);
    assert_eq!(full.pruned, 0);
}

/// Searching Monster never loses to a random Player.
#[test]
fn test_monster_never_loses_to_random_player() {
    let config = SearchConfig::with_depth(4);

    for seed in 0..8 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut state = GameState::classic();
        let mut agent = Agent::Player;

        while !state.is_terminal(agent) {
            let action = match agent {
                Agent::Player => *state
                    .legal_actions(agent)
                    .choose(&mut rng)
                    .expect("non-terminal player has actions"),
                Agent::Monster => choose_with(&state, &config),
            };
            state = state.apply(action, agent).unwrap();
            agent = agent.opponent();
        }

        let outcome = state.outcome(agent).unwrap();
        assert_ne!(outcome, Outcome::PlayerWon, "seed {}:\n{}", seed, state);
    }
}

fn choose_with(state: &GameState, config: &SearchConfig) -> Action {
    search_monster(state, config).unwrap().best_action.unwrap()
}
