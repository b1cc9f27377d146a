//! Search configuration parameters.
//!
//! These parameters control how deep and how wide the alpha-beta search
//! is allowed to go before it falls back to the heuristic.

/// Default search depth in plies.
pub const DEFAULT_MAX_DEPTH: usize = 20;

/// Search configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// Plies searched before the heuristic replaces exact values.
    pub max_depth: usize,

    /// Cut off subtrees that cannot change the result.
    /// With pruning disabled the search is plain minimax and prunes nothing.
    pub pruning: bool,

    /// Maximum number of nodes expanded per search.
    /// Once exceeded, every further non-terminal node is scored by the
    /// heuristic. The root is always expanded.
    pub node_budget: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            pruning: true,
            node_budget: None,
        }
    }
}

impl SearchConfig {
    /// Create a config with the specified depth.
    pub fn with_depth(max_depth: usize) -> Self {
        Self {
            max_depth,
            ..Default::default()
        }
    }

    /// Disable alpha-beta cutoffs.
    pub fn without_pruning(mut self) -> Self {
        self.pruning = false;
        self
    }

    /// Cap the number of nodes expanded per search.
    pub fn with_node_budget(mut self, budget: u64) -> Self {
        self.node_budget = Some(budget);
        self
    }

    /// True once `nodes` expanded nodes exceed the budget.
    ///
    /// The search never applies this to the root.
    pub fn budget_exceeded(&self, nodes: u64) -> bool {
        self.node_budget.is_some_and(|budget| nodes > budget)
    }
}
