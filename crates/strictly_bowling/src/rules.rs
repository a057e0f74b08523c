//! Rule strictness switches and their TOML configuration.

use derive_more::{Display, Error};
use derive_new::new;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Which rules a game enforces.
///
/// Both switches default to the official ten-pin rules. Turning one off
/// reproduces an older, looser scorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
#[serde(default)]
pub struct RuleSet {
    /// Reject a roll that knocks down more pins than are standing.
    enforce_frame_overflow: bool,

    /// Two strikes in the tenth frame still earn a third roll.
    ///
    /// When off, the tenth frame closes as soon as rolls 1 and 2 are strikes.
    tenth_frame_always_three_rolls: bool,
}

impl RuleSet {
    /// Official ten-pin rules.
    pub const STANDARD: RuleSet = RuleSet {
        enforce_frame_overflow: true,
        tenth_frame_always_three_rolls: true,
    };

    /// Returns true if same-frame overflow is rejected.
    pub fn enforce_frame_overflow(&self) -> bool {
        self.enforce_frame_overflow
    }

    /// Returns true if a double strike in the tenth frame keeps the frame open.
    pub fn tenth_frame_always_three_rolls(&self) -> bool {
        self.tenth_frame_always_three_rolls
    }

    /// Returns a copy with overflow enforcement set.
    pub fn with_frame_overflow(self, enforce: bool) -> Self {
        Self {
            enforce_frame_overflow: enforce,
            ..self
        }
    }

    /// Returns a copy with the tenth-frame third-roll rule set.
    pub fn with_tenth_frame_three_rolls(self, always: bool) -> Self {
        Self {
            tenth_frame_always_three_rolls: always,
            ..self
        }
    }

    /// Parses a rule set from TOML. Missing keys keep their defaults.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse rules: {}", e)))
    }

    /// Loads a rule set from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading rules from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read rules file: {}", e)))?;

        let rules = Self::from_toml_str(&content)?;
        info!(?rules, "Rules loaded");
        Ok(rules)
    }

    /// Renders the rule set as TOML.
    #[instrument]
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string(self).map_err(|e| ConfigError::new(format!("Failed to render rules: {}", e)))
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Named rule sets.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum RulePreset {
    /// Official rules.
    Standard,
    /// Tenth frame closes after two strikes; overflow still rejected.
    LegacyTenth,
    /// No overflow check; tenth frame closes after two strikes.
    Permissive,
}

impl RulePreset {
    /// Returns the switches this preset stands for.
    pub fn rules(self) -> RuleSet {
        match self {
            RulePreset::Standard => RuleSet::STANDARD,
            RulePreset::LegacyTenth => RuleSet::new(true, false),
            RulePreset::Permissive => RuleSet::new(false, false),
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
