//! Rule resolution from files, environment and flags.

use crate::cli::RuleArgs;
use std::path::PathBuf;
use strictly_bowling::{ConfigError, RuleSet};
use tracing::{debug, instrument};

/// Environment variable naming a default rule file.
pub const RULES_ENV: &str = "STRICTLY_BOWLING_RULES";

/// Rule file path from the environment, if set and non-empty.
pub fn env_rules_path() -> Option<PathBuf> {
    std::env::var_os(RULES_ENV)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Works out the rules for this run.
///
/// An explicit `--rules` file beats `env_path`; without either the official
/// rules apply. A preset then replaces the file's rules, and the individual
/// switches adjust whatever is left.
#[instrument(skip(args, env_path))]
pub fn resolve_rules(args: &RuleArgs, env_path: Option<PathBuf>) -> Result<RuleSet, ConfigError> {
    let mut rules = match args.rules_file.clone().or(env_path) {
        Some(path) => RuleSet::from_file(path)?,
        None => RuleSet::default(),
    };

    if let Some(preset) = args.preset {
        debug!(%preset, "Applying preset");
        rules = preset.rules();
    }
    if args.legacy_tenth {
        rules = rules.with_tenth_frame_three_rolls(false);
    }
    if args.permissive {
        rules = rules.with_frame_overflow(false);
    }

    debug!(?rules, "Rules resolved");
    Ok(rules)
}
