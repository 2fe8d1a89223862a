//! Automated game driver
//!
//! Repeatedly asks a strategy to pick the next child of the current tree
//! node and advances until the game ends, logging each position to the
//! given writer in the same format as the interactive output.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::{
    error::Result,
    strategy::Strategy,
    tictactoe::{Board, GameTree, Player},
};

/// Outcome of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

/// Summary of one automated game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameReport {
    /// Number of moves played
    pub moves: usize,
    /// Board at the end of the game
    pub final_board: Board,
    pub outcome: GameOutcome,
}

/// Play one automated game from `root`, selecting every move with
/// `strategy` applied fresh to the current node.
///
/// Before each move the current move number and board are written to
/// `out`; the final position is written once more after the loop. The tree
/// is never mutated — advancing means walking into a child.
///
/// # Errors
///
/// Returns [`Error::Io`](crate::Error::Io) if writing to `out` fails.
pub fn run_game<W: Write>(out: &mut W, root: &GameTree, strategy: Strategy) -> Result<GameReport> {
    let mut node = root;
    let mut move_number = 0usize;

    while !node.is_terminal() {
        writeln!(out, "Move number: {move_number}")?;
        write!(out, "{}", node.board.render())?;
        node = strategy.apply(node);
        move_number += 1;
    }

    writeln!(out, "Move number: {move_number}")?;
    write!(out, "{}", node.board.render())?;

    let outcome = match node.winner() {
        Some(player) => GameOutcome::Win(player),
        None => GameOutcome::Draw,
    };

    Ok(GameReport {
        moves: move_number,
        final_board: node.board,
        outcome,
    })
}
