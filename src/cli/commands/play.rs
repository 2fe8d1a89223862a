//! Automated game playback
//!
//! Runs a full game between two copies of the selected strategy, printing
//! every position to stdout.

use anyhow::Result;
use clap::Args;

use crate::{
    driver::{self, GameOutcome},
    strategy::{Strategy, DEFAULT_MINIMAX_DEPTH},
    tictactoe::{GameTree, Player},
};

#[derive(Args, Debug)]
pub struct PlayArgs {
    /// Strategy used for both players
    #[arg(long, default_value = "minimax")]
    pub strategy: String,

    /// Number of minimizing plies searched by minimax
    #[arg(long, default_value_t = DEFAULT_MINIMAX_DEPTH)]
    pub depth: u32,

    /// Player who moves first ("X" or "O")
    #[arg(long, default_value = "X")]
    pub first_player: String,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let strategy = match args.strategy.as_str() {
        "minimax" => Strategy::Minimax { depth: args.depth },
        "probability" => Strategy::Probability,
        other => anyhow::bail!("unknown strategy '{other}'. Use: minimax, probability"),
    };
    let first_player: Player = args.first_player.parse()?;

    let root = GameTree::new(first_player);
    let stdout = std::io::stdout();
    let report = driver::run_game(&mut stdout.lock(), &root, strategy)?;

    match report.outcome {
        GameOutcome::Win(player) => println!("\n{player} wins after {} moves", report.moves),
        GameOutcome::Draw => println!("\nDraw after {} moves", report.moves),
    }

    Ok(())
}
