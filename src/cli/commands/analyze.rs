//! Game tree analysis
//!
//! Builds the complete game tree from a position and reports its size,
//! shape, and win probabilities, optionally exporting the summary as JSON.

use std::{fs::File, path::PathBuf};

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::{
    cli::output,
    tictactoe::{Board, GameTree, Player},
};

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Starting position as 9 characters, '.' for empty (default: empty board)
    #[arg(long)]
    pub board: Option<String>,

    /// Player to move at the starting position
    #[arg(long, default_value = "X")]
    pub first_player: String,

    /// Write the summary as JSON to this path
    #[arg(long)]
    pub export: Option<PathBuf>,
}

/// Summary of a fully built game tree
#[derive(Debug, Serialize)]
struct TreeSummary {
    root: String,
    to_move: Player,
    nodes: usize,
    leaves: usize,
    depth: usize,
    nodes_by_depth: Vec<usize>,
    probability_x: f64,
    probability_o: f64,
}

pub fn execute(args: AnalyzeArgs) -> Result<()> {
    let board = match &args.board {
        Some(s) => Board::from_string(s)?,
        None => Board::empty(),
    };
    let to_move: Player = args.first_player.parse()?;

    let spinner = output::create_spinner("Building game tree...");
    let tree = GameTree::from_position(board, to_move);
    spinner.finish_and_clear();

    let mut nodes_by_depth = Vec::new();
    count_by_depth(&tree, 0, &mut nodes_by_depth);

    let summary = TreeSummary {
        root: board.encode(),
        to_move,
        nodes: tree.node_count(),
        leaves: tree.leaf_count(),
        depth: tree.depth(),
        nodes_by_depth,
        probability_x: tree.probability_of_winning(Player::X),
        probability_o: tree.probability_of_winning(Player::O),
    };

    output::print_section("Game Tree Statistics");
    output::print_kv("Root", &summary.root);
    output::print_kv("To move", &summary.to_move.to_string());
    output::print_kv("Nodes", &output::format_number(summary.nodes));
    output::print_kv("Leaves", &output::format_number(summary.leaves));
    output::print_kv("Depth", &summary.depth.to_string());
    output::print_kv("P(X wins)", &format!("{:.4}", summary.probability_x));
    output::print_kv("P(O wins)", &format!("{:.4}", summary.probability_o));

    println!("\nNodes by depth:");
    for (depth, count) in summary.nodes_by_depth.iter().enumerate() {
        println!("  Depth {depth}: {} nodes", output::format_number(*count));
    }

    if let Some(path) = &args.export {
        let file = File::create(path)?;
        serde_json::to_writer_pretty(file, &summary)?;
        println!("\nSummary exported to: {}", path.display());
    }

    Ok(())
}

fn count_by_depth(node: &GameTree, depth: usize, counts: &mut Vec<usize>) {
    if depth >= counts.len() {
        counts.resize(depth + 1, 0);
    }
    counts[depth] += 1;
    for child in &node.children {
        count_by_depth(child, depth + 1, counts);
    }
}
