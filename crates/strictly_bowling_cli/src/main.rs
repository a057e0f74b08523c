//! Strictly Bowling - command-line scorer.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use strictly_bowling::RuleSet;
use strictly_bowling_cli::cli::{Cli, Command};
use strictly_bowling_cli::{gather_tokens, input, play, settings};
use tracing::{debug, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let rules = settings::resolve_rules(&cli.rules, settings::env_rules_path())?;

    match cli.command {
        Command::Score { rolls, file, json } => run_score(rules, rolls, file, json),
        Command::Rules => run_rules(rules),
    }
}

/// Score the given rolls and print the card
#[instrument(skip(rolls))]
fn run_score(rules: RuleSet, rolls: Vec<String>, file: Option<PathBuf>, json: bool) -> Result<()> {
    let tokens = gather_tokens(file.as_deref(), &rolls)?;
    let counts = input::parse_rolls(&tokens)?;
    debug!(count = counts.len(), "Scoring rolls");

    let card = play(rules, &counts)?.scorecard();
    if json {
        println!("{}", serde_json::to_string_pretty(&card)?);
    } else {
        println!("{}", card);
    }
    Ok(())
}

/// Print the effective rules
fn run_rules(rules: RuleSet) -> Result<()> {
    print!("{}", rules.to_toml_string()?);
    Ok(())
}
