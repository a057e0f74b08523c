//! Command-line interface for strictly_bowling.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use strictly_bowling::RulePreset;

/// Strictly Bowling - ten-pin scorer
#[derive(Parser, Debug)]
#[command(name = "strictly_bowling")]
#[command(about = "Score a ten-pin bowling game from its rolls", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Rule selection
    #[command(flatten)]
    pub rules: RuleArgs,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Flags that choose which rules apply.
///
/// Later sources win: rule file (or `STRICTLY_BOWLING_RULES`), then preset,
/// then the individual switches.
#[derive(Args, Debug, Clone, Default)]
pub struct RuleArgs {
    /// Path to a TOML rule file
    #[arg(long = "rules", global = true, value_name = "PATH")]
    pub rules_file: Option<PathBuf>,

    /// Named rule preset (standard, legacy-tenth, permissive)
    #[arg(long, global = true)]
    pub preset: Option<RulePreset>,

    /// Close the tenth frame after two strikes
    #[arg(long, global = true)]
    pub legacy_tenth: bool,

    /// Accept rolls that knock down more pins than are standing
    #[arg(long, global = true)]
    pub permissive: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Roll each value and print the scorecard
    Score {
        /// Rolls as pin counts or card marks (X, /, -)
        #[arg(allow_negative_numbers = true)]
        rolls: Vec<String>,

        /// Read rolls from a file (whitespace or comma separated)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Print the scorecard as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the effective rules as TOML
    Rules,
}
