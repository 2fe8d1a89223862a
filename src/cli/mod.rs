//! CLI infrastructure for the noughts solver
//!
//! This module provides the command-line interface for playing automated
//! games and analyzing the game tree.

pub mod commands;
pub mod output;
