//! Phase-specific typestate wrappers around [`Game`].
//!
//! A finished game has no `bowl` method and always carries its final score,
//! so "roll after the game is over" cannot be written against this API.

use super::error::BowlingError;
use super::game::Game;
use super::rules::RuleSet;
use super::scorecard::Scorecard;
use tracing::{info, instrument};

// ─────────────────────────────────────────────────────────────
//  Setup Phase
// ─────────────────────────────────────────────────────────────

/// Game in setup phase - rules chosen, no rolls yet.
#[derive(Debug, Clone, Default)]
pub struct GameSetup {
    rules: RuleSet,
}

impl GameSetup {
    /// Creates a setup under the official rules.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a setup under the given rules.
    #[instrument]
    pub fn with_rules(rules: RuleSet) -> Self {
        Self { rules }
    }

    /// Returns the rules the game will use.
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Starts the game (consumes setup, returns in-progress).
    #[instrument(skip(self))]
    pub fn start(self) -> GameInProgress {
        GameInProgress {
            game: Game::with_rules(self.rules),
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  InProgress Phase
// ─────────────────────────────────────────────────────────────

/// Game in progress - can accept rolls.
#[derive(Debug, Clone)]
pub struct GameInProgress {
    game: Game,
}

impl GameInProgress {
    /// Bowls one roll, consuming self and transitioning to the next state.
    ///
    /// # Errors
    ///
    /// Returns [`BowlingError::InvalidArgument`] for an illegal pin count. The
    /// game is dropped with `self`; use [`GameInProgress::try_bowl`] to keep it.
    #[instrument(skip(self), fields(frame = self.game.current_frame() + 1))]
    pub fn bowl(self, pins: i32) -> Result<GameResult, BowlingError> {
        self.try_bowl(pins).map_err(|(_, err)| err)
    }

    /// Like [`GameInProgress::bowl`], but hands the unchanged game back on error.
    #[instrument(skip(self), fields(frame = self.game.current_frame() + 1))]
    pub fn try_bowl(mut self, pins: i32) -> Result<GameResult, (Self, BowlingError)> {
        if let Err(err) = self.game.roll(pins) {
            return Err((self, err));
        }

        if self.game.is_over() {
            let final_score = self.game.score();
            info!(final_score, "Game finished");
            return Ok(GameResult::Finished(GameFinished {
                game: self.game,
                final_score,
            }));
        }

        Ok(GameResult::InProgress(self))
    }

    /// Returns the underlying game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Current score.
    pub fn score(&self) -> u32 {
        self.game.score()
    }

    /// Replays rolls from a fresh game.
    #[instrument(skip(counts), fields(rolls = counts.len()))]
    pub fn replay(rules: RuleSet, counts: &[i32]) -> Result<GameResult, BowlingError> {
        let mut game = GameSetup::with_rules(rules).start();

        for &pins in counts {
            match game.bowl(pins)? {
                GameResult::InProgress(g) => game = g,
                GameResult::Finished(g) => return Ok(GameResult::Finished(g)),
            }
        }

        Ok(GameResult::InProgress(game))
    }
}

// ─────────────────────────────────────────────────────────────
//  Finished Phase
// ─────────────────────────────────────────────────────────────

/// Game finished - final score determined.
#[derive(Debug, Clone)]
pub struct GameFinished {
    game: Game,
    final_score: u32,
}

impl GameFinished {
    /// Returns the final score.
    pub fn final_score(&self) -> u32 {
        self.final_score
    }

    /// Returns the underlying game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Returns the completed scorecard.
    pub fn scorecard(&self) -> Scorecard {
        self.game.scorecard()
    }

    /// Starts over under the same rules (consumes finished, returns setup).
    #[instrument(skip(self))]
    pub fn restart(self) -> GameSetup {
        GameSetup::with_rules(*self.game.rules())
    }
}

// ─────────────────────────────────────────────────────────────
//  Result Type
// ─────────────────────────────────────────────────────────────

/// Result of bowling a roll.
#[derive(Debug)]
pub enum GameResult {
    /// Game continues.
    InProgress(GameInProgress),
    /// Game finished.
    Finished(GameFinished),
}

impl GameResult {
    /// Current score regardless of phase.
    pub fn score(&self) -> u32 {
        match self {
            GameResult::InProgress(game) => game.score(),
            GameResult::Finished(game) => game.final_score(),
        }
    }
}
