//! Exhaustive game-tree search and automated play for Tic-Tac-Toe
//!
//! This crate provides:
//! - Complete Tic-Tac-Toe board representation with validation
//! - Eager full-depth game-tree construction with terminal detection
//! - Two move-selection strategies: exhaustive minimax with a
//!   depth-limited minimizing ply, and a probability-of-winning heuristic
//! - An automated game driver and a CLI for playing and analysis

pub mod cli;
pub mod driver;
pub mod error;
pub mod strategy;
pub mod tictactoe;

pub use driver::{run_game, GameOutcome, GameReport};
pub use error::{Error, Result};
pub use strategy::{Strategy, DEFAULT_MINIMAX_DEPTH};
pub use tictactoe::{Board, GameTree, Player};
