//! Move-selection strategies over the game tree
//!
//! Two independent selectors consume a [`GameTree`] node and pick one of
//! its children: exhaustive minimax with a depth-limited minimizing ply,
//! and a probability-of-winning heuristic. Both assume a non-terminal node
//! and fail fast otherwise.

pub mod minimax;
pub mod probability;

use serde::{Deserialize, Serialize};

use crate::tictactoe::GameTree;

/// Default number of minimizing plies searched by minimax
pub const DEFAULT_MINIMAX_DEPTH: u32 = 2;

/// Selectable move strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strategy {
    /// Exhaustive minimax search with the given minimizing-ply depth
    Minimax { depth: u32 },
    /// Maximize the probability of winning under uniform-random opponents
    Probability,
}

impl Default for Strategy {
    fn default() -> Self {
        Strategy::Minimax {
            depth: DEFAULT_MINIMAX_DEPTH,
        }
    }
}

impl Strategy {
    /// Select the next child of `tree` according to this strategy.
    ///
    /// # Panics
    ///
    /// Panics if `tree` is terminal; see the individual selectors.
    pub fn apply<'a>(&self, tree: &'a GameTree) -> &'a GameTree {
        match self {
            Strategy::Minimax { depth } => minimax::select(tree, *depth),
            Strategy::Probability => probability::select(tree),
        }
    }
}
