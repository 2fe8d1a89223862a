//! Probability-maximizing move selection

use crate::tictactoe::GameTree;

/// Select the child of `tree` with the highest probability of winning for
/// the player to move at `tree`, under the uniform-random-opponent model.
///
/// Ties are broken by the first-occurring child index.
///
/// # Panics
///
/// Panics if `tree` is terminal (has no children); selecting a move from a
/// finished game is a programming error.
pub fn select(tree: &GameTree) -> &GameTree {
    assert!(
        !tree.children.is_empty(),
        "probability selection requires a non-terminal node"
    );

    let root_player = tree.to_move;
    let mut best_index = 0;
    let mut best_score = f64::NEG_INFINITY;

    for (index, child) in tree.children.iter().enumerate() {
        let score = child.probability_of_winning(root_player);
        // Strict comparison keeps the first-occurring child on ties
        if score > best_score {
            best_score = score;
            best_index = index;
        }
    }

    &tree.children[best_index]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::{Board, Cell, Player};

    #[test]
    fn takes_immediate_win() {
        let board = Board::from_string("XX..OO...").unwrap();
        let tree = GameTree::from_position(board, Player::X);

        let chosen = select(&tree);
        assert!(chosen.board.has_won(Player::X));
        assert_eq!(chosen.board.get(2), Cell::X);
    }

    #[test]
    fn tie_break_keeps_first_child() {
        // Both remaining moves lead to the same forced draw (0.5 each)
        let board = Board::from_string("XOXXO.OX.").unwrap();
        let tree = GameTree::from_position(board, Player::O);

        let chosen = select(&tree);
        assert_eq!(chosen.board.get(5), Cell::O);
    }

    #[test]
    fn opening_move_is_the_center() {
        // Under uniform-random play the center cell has the highest win
        // probability for the opening player
        let tree = GameTree::new(Player::X);
        let chosen = select(&tree);
        assert_eq!(chosen.board.get(4), Cell::X);
    }

    #[test]
    #[should_panic(expected = "non-terminal")]
    fn panics_on_terminal_node() {
        let board = Board::from_string("XOXXOXOXO").unwrap();
        let tree = GameTree::from_position(board, Player::X);
        select(&tree);
    }
}
