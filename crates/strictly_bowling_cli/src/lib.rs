//! Strictly Bowling command-line support.
//!
//! Argument definitions, roll parsing and rule resolution used by the
//! `strictly_bowling` binary.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod input;
pub mod settings;

use anyhow::{Context, Result};
use std::path::Path;
use strictly_bowling::{Game, RuleSet};
use tracing::{info, instrument};

/// Collects roll tokens from an optional file followed by the arguments.
#[instrument(skip(args))]
pub fn gather_tokens(file: Option<&Path>, args: &[String]) -> Result<Vec<String>> {
    let mut tokens = match file {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read rolls from {}", path.display()))?;
            input::tokenize(&text)
        }
        None => Vec::new(),
    };
    tokens.extend(args.iter().cloned());
    Ok(tokens)
}

/// Rolls every count into a fresh game.
///
/// # Errors
///
/// Names the first rejected roll by position and value.
#[instrument(skip(counts), fields(rolls = counts.len()))]
pub fn play(rules: RuleSet, counts: &[i32]) -> Result<Game> {
    let mut game = Game::with_rules(rules);
    for (index, &pins) in counts.iter().enumerate() {
        game.roll(pins)
            .with_context(|| format!("Roll {} ({} pins) rejected", index + 1, pins))?;
    }
    info!(score = game.score(), over = game.is_over(), "Rolls scored");
    Ok(game)
}
