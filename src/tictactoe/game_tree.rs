//! Eager game-tree construction and outcome evaluation
//!
//! A [`GameTree`] node owns one board position, the player whose mark its
//! children place, and the fully expanded subtree of future positions.
//! Construction recurses to the end of the game with no pruning and no
//! memoization; the complete tree from the empty board stays well under a
//! million nodes because expansion stops at every completed line.

use super::board::{Board, Player};

/// One node of the Tic-Tac-Toe game tree.
///
/// The tree is immutable after construction: advancing a game means
/// selecting a child, never mutating a node. Each node exclusively owns its
/// children, so the whole subtree is released when the node is dropped.
#[derive(Debug, Clone)]
pub struct GameTree {
    /// Board state at this node
    pub board: Board,
    /// The player whose mark this node's children place
    pub to_move: Player,
    /// One child per empty cell, in ascending cell-index order; empty
    /// exactly when this node is terminal
    pub children: Vec<GameTree>,
}

impl GameTree {
    /// Build the complete game tree from the empty board
    pub fn new(first_player: Player) -> Self {
        Self::from_position(Board::empty(), first_player)
    }

    /// Build the complete game tree from an arbitrary position
    pub fn from_position(board: Board, to_move: Player) -> Self {
        let mut node = GameTree {
            board,
            to_move,
            children: Vec::new(),
        };
        node.generate_children();
        node
    }

    /// Generate the children of this node.
    ///
    /// A node is terminal when the mover who produced this board
    /// (`to_move.opponent()`) has three in a row, when `to_move` already had
    /// a line (only possible for directly constructed positions), or when no
    /// empty cells remain. The three conditions are kept separate on
    /// purpose.
    fn generate_children(&mut self) {
        if self.board.has_won(self.to_move.opponent())
            || self.board.has_won(self.to_move)
            || self.board.is_full()
        {
            return;
        }

        for pos in self.board.empty_positions() {
            let child_board = self
                .board
                .place(pos, self.to_move)
                .expect("empty positions are always legal moves");
            self.children
                .push(GameTree::from_position(child_board, self.to_move.opponent()));
        }
    }

    /// Check if a player has three in a row at this node
    pub fn is_win(&self, player: Player) -> bool {
        self.board.has_won(player)
    }

    /// Check if the game has ended at this node (a line completed or board full)
    pub fn is_terminal(&self) -> bool {
        self.board.has_won(Player::X) || self.board.has_won(Player::O) || self.board.is_full()
    }

    /// Get the winner at this node if there is one
    pub fn winner(&self) -> Option<Player> {
        self.board.winner()
    }

    /// Probability of `player` winning from this node under a
    /// uniform-random-opponent model.
    ///
    /// Returns 1.0 if `player` has won here, 0.0 if the other player has
    /// won, 0.5 for a full-board draw, and otherwise the arithmetic mean
    /// over all children. Pure recursive query with no caching.
    pub fn probability_of_winning(&self, player: Player) -> f64 {
        if self.board.has_won(player) {
            1.0
        } else if self.board.has_won(player.opponent()) {
            0.0
        } else if self.board.is_full() {
            0.5
        } else {
            let total: f64 = self
                .children
                .iter()
                .map(|child| child.probability_of_winning(player))
                .sum();
            total / self.children.len() as f64
        }
    }

    /// Total number of nodes in this subtree, including this node
    pub fn node_count(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(GameTree::node_count)
            .sum::<usize>()
    }

    /// Number of terminal positions reachable from this node
    pub fn leaf_count(&self) -> usize {
        if self.children.is_empty() {
            1
        } else {
            self.children.iter().map(GameTree::leaf_count).sum()
        }
    }

    /// Maximum number of plies from this node to any terminal position
    pub fn depth(&self) -> usize {
        self.children
            .iter()
            .map(|child| 1 + child.depth())
            .max()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::board::Cell;

    #[test]
    fn root_has_one_child_per_empty_cell() {
        let tree = GameTree::new(Player::X);
        assert_eq!(tree.children.len(), 9);

        // Children are ordered by ascending cell index and each places X
        for (i, child) in tree.children.iter().enumerate() {
            assert_eq!(child.board.get(i), Cell::X);
            assert_eq!(child.board.occupied_count(), 1);
            assert_eq!(child.to_move, Player::O);
            assert_eq!(child.children.len(), 8);
        }
    }

    #[test]
    fn won_position_is_terminal() {
        let board = Board::from_string("XXX.OO...").unwrap();
        let tree = GameTree::from_position(board, Player::O);
        assert!(tree.is_terminal());
        assert!(tree.children.is_empty());
        assert_eq!(tree.winner(), Some(Player::X));
    }

    #[test]
    fn won_position_is_terminal_even_for_the_winner_to_move() {
        // The winner being the player to move cannot happen during normal
        // expansion, but direct construction must still refuse to expand
        let board = Board::from_string("XXX.OO...").unwrap();
        let tree = GameTree::from_position(board, Player::X);
        assert!(tree.children.is_empty());
    }

    #[test]
    fn full_board_is_terminal() {
        let board = Board::from_string("XOXXOXOXO").unwrap();
        let tree = GameTree::from_position(board, Player::O);
        assert!(tree.is_terminal());
        assert!(tree.children.is_empty());
        assert_eq!(tree.winner(), None);
    }

    #[test]
    fn terminal_probabilities_are_exact() {
        // X win: 1.0 for X, 0.0 for O
        let win = GameTree::from_position(Board::from_string("XXX.OO...").unwrap(), Player::O);
        assert_eq!(win.probability_of_winning(Player::X), 1.0);
        assert_eq!(win.probability_of_winning(Player::O), 0.0);

        // Full-board draw from real play: exactly 0.5 for both players
        let draw = GameTree::from_position(Board::from_string("XOXXOXOXO").unwrap(), Player::O);
        assert_eq!(draw.probability_of_winning(Player::X), 0.5);
        assert_eq!(draw.probability_of_winning(Player::O), 0.5);
    }

    #[test]
    fn forced_win_in_one_has_probability_one() {
        // XX. / OOX / OXO with X to move: the only empty cell completes the
        // top row
        let board = Board::from_string("XX.OOXOXO").unwrap();
        let tree = GameTree::from_position(board, Player::X);
        assert_eq!(tree.children.len(), 1);
        assert_eq!(tree.probability_of_winning(Player::X), 1.0);
        assert_eq!(tree.probability_of_winning(Player::O), 0.0);
    }

    #[test]
    fn forced_draw_has_probability_half() {
        // XOX / XOX / O._ with X to move; both remaining orders end in the
        // same drawn board
        let board = Board::from_string("XOXXO.OX.").unwrap();
        let tree = GameTree::from_position(board, Player::O);
        assert_eq!(tree.children.len(), 2);
        assert_eq!(tree.node_count(), 5);
        assert_eq!(tree.leaf_count(), 2);
        assert_eq!(tree.probability_of_winning(Player::X), 0.5);
        assert_eq!(tree.probability_of_winning(Player::O), 0.5);
    }

    #[test]
    fn depth_is_bounded_by_remaining_cells() {
        let board = Board::from_string("XOXXO.OX.").unwrap();
        let tree = GameTree::from_position(board, Player::O);
        assert_eq!(tree.depth(), 2);
    }
}
