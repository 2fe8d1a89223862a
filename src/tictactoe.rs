//! Tic-Tac-Toe game implementation

pub mod board;
pub mod game_tree;
pub mod lines;

pub use board::{Board, Cell, Player, PLAYERS};
pub use game_tree::GameTree;
pub use lines::{LineAnalyzer, WINNING_LINES};
