//! Exhaustive minimax selection with probability-valued leaves

use crate::tictactoe::{GameTree, Player};

/// Select the child of `tree` that maximizes the minimax score for the
/// player to move at `tree`.
///
/// The player to move at `tree` is the maximizer throughout the whole
/// search: the same player index is evaluated at every leaf, it does not
/// alternate by ply parity. Leaves score as
/// [`GameTree::probability_of_winning`] for that player.
///
/// `depth` counts minimizing plies only: it is decremented when descending
/// from a maximizing node into [`minimize`] and left unchanged when
/// descending from a minimizing node into [`maximize`]. This asymmetry is
/// kept deliberately for parity with the reference behavior.
///
/// Ties are broken by the first-occurring child index.
///
/// # Panics
///
/// Panics if `tree` is terminal (has no children); selecting a move from a
/// finished game is a programming error.
pub fn select(tree: &GameTree, depth: u32) -> &GameTree {
    assert!(
        !tree.children.is_empty(),
        "minimax selection requires a non-terminal node"
    );

    let root_player = tree.to_move;
    let mut best_index = 0;
    let mut best_score = f64::NEG_INFINITY;

    for (index, child) in tree.children.iter().enumerate() {
        let score = minimize(child, depth, root_player);
        // Strict comparison keeps the first-occurring child on ties
        if score > best_score {
            best_score = score;
            best_index = index;
        }
    }

    &tree.children[best_index]
}

/// Maximum over all child minimizer values, or the leaf probability
fn maximize(node: &GameTree, depth: u32, root_player: Player) -> f64 {
    if node.children.is_empty() {
        return node.probability_of_winning(root_player);
    }

    node.children
        .iter()
        .map(|child| minimize(child, depth - 1, root_player))
        .fold(f64::NEG_INFINITY, f64::max)
}

/// Minimum over all child maximizer values, or the leaf probability once
/// the depth budget is spent
fn minimize(node: &GameTree, depth: u32, root_player: Player) -> f64 {
    if depth == 0 || node.children.is_empty() {
        return node.probability_of_winning(root_player);
    }

    // Depth is intentionally not decremented on this branch
    node.children
        .iter()
        .map(|child| maximize(child, depth, root_player))
        .fold(f64::INFINITY, f64::min)
}
