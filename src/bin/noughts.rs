//! noughts CLI - exhaustive game-tree search and automated Tic-Tac-Toe play
//!
//! This CLI provides:
//! - Automated games between two copies of a strategy (minimax or
//!   probability-maximizing)
//! - Full game-tree analysis from any position

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "noughts")]
#[command(version, about = "Game-tree search and automated Tic-Tac-Toe play", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an automated game between two copies of a strategy
    Play(noughts::cli::commands::play::PlayArgs),

    /// Analyze the complete game tree from a position
    Analyze(noughts::cli::commands::analyze::AnalyzeArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => noughts::cli::commands::play::execute(args),
        Commands::Analyze(args) => noughts::cli::commands::analyze::execute(args),
    }
}
