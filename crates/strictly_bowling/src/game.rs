//! The ten-frame game aggregate.

use super::contracts::{Contract, PinsInRange, RollContract};
use super::error::BowlingError;
use super::frame::Frame;
use super::pins::Pins;
use super::rules::RuleSet;
use super::scorecard::Scorecard;
use super::scoring;
use tracing::{debug, instrument};

/// Frames in a game.
pub const FRAME_COUNT: usize = 10;

/// Index of the tenth frame.
pub const LAST_FRAME: usize = FRAME_COUNT - 1;

/// A single-player ten-pin game.
///
/// Owns all ten frames for its whole lifetime. The cursor points at the frame
/// receiving rolls and reaches [`FRAME_COUNT`] once the tenth frame is
/// complete; rolls after that are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub(crate) frames: [Frame; FRAME_COUNT],
    pub(crate) cursor: usize,
    pub(crate) rules: RuleSet,
    pub(crate) history: Vec<Pins>,
}

impl Game {
    /// Creates a new game under the official rules.
    #[instrument]
    pub fn new() -> Self {
        Self::with_rules(RuleSet::default())
    }

    /// Creates a new game under the given rules.
    #[instrument]
    pub fn with_rules(rules: RuleSet) -> Self {
        Self {
            frames: std::array::from_fn(|index| {
                if index == LAST_FRAME {
                    Frame::last()
                } else {
                    Frame::regular()
                }
            }),
            cursor: 0,
            rules,
            history: Vec::new(),
        }
    }

    /// Builds a game by rolling each count in turn.
    ///
    /// # Errors
    ///
    /// Stops at the first rejected roll.
    #[instrument(skip(counts), fields(rolls = counts.len()))]
    pub fn replay(rules: RuleSet, counts: &[i32]) -> Result<Self, BowlingError> {
        let mut game = Self::with_rules(rules);
        for &count in counts {
            game.roll(count)?;
        }
        Ok(game)
    }

    /// Records a roll of `pins` pins.
    ///
    /// Once the game is over further rolls are silently ignored.
    ///
    /// # Errors
    ///
    /// Returns [`BowlingError::InvalidArgument`] if `pins` is outside `0..=10`,
    /// or if it knocks down more pins than are standing and the rules enforce
    /// that. The game is unchanged on error.
    #[instrument(skip(self), fields(frame = self.cursor + 1))]
    pub fn roll(&mut self, pins: i32) -> Result<(), BowlingError> {
        let pins = PinsInRange::check(pins)?;
        self.roll_pins(pins)
    }

    /// Records an already validated pin count.
    ///
    /// # Errors
    ///
    /// Returns [`BowlingError::InvalidArgument`] on same-frame overflow, and
    /// [`BowlingError::InvariantViolation`] if a postcondition fails in a
    /// debug build.
    #[instrument(skip(self), fields(frame = self.cursor + 1))]
    pub fn roll_pins(&mut self, pins: Pins) -> Result<(), BowlingError> {
        if self.is_over() {
            debug!(%pins, "Game over, roll ignored");
            return Ok(());
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        RollContract::pre(self, &pins)?;
        self.apply(pins);

        #[cfg(debug_assertions)]
        RollContract::post(&before, self)?;

        Ok(())
    }

    /// Routes a roll to the current frame and advances the cursor (unchecked).
    ///
    /// The cursor moves as soon as a frame closes, so the frame it points at
    /// is always open.
    pub(crate) fn apply(&mut self, pins: Pins) {
        let Some(frame) = self.frames.get_mut(self.cursor) else {
            return;
        };
        frame.roll(pins, &self.rules);
        self.history.push(pins);

        if frame.is_finished() {
            debug!(frame = self.cursor + 1, "Frame closed");
            self.cursor += 1;
        }
    }

    /// Current score. Pending bonuses count the rolls bowled so far.
    #[instrument(skip(self))]
    pub fn score(&self) -> u32 {
        scoring::total(&self.frames)
    }

    /// Score of a single frame (0-9).
    pub fn frame_score(&self, index: usize) -> u32 {
        scoring::frame_score(&self.frames, index)
    }

    /// Cumulative score per frame, `None` where bonuses are still pending.
    pub fn running_totals(&self) -> Vec<Option<u32>> {
        scoring::running_totals(&self.frames)
    }

    /// Returns all ten frames.
    pub fn frames(&self) -> &[Frame; FRAME_COUNT] {
        &self.frames
    }

    /// Index of the frame receiving rolls, or [`FRAME_COUNT`] when over.
    pub fn current_frame(&self) -> usize {
        self.cursor
    }

    /// Returns true once the tenth frame is complete.
    pub fn is_over(&self) -> bool {
        self.cursor >= FRAME_COUNT
    }

    /// Returns the rules in force.
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Every accepted roll, in order.
    pub fn history(&self) -> &[Pins] {
        &self.history
    }

    /// Pins standing for the next roll (0 once the game is over).
    pub fn standing(&self) -> u8 {
        self.frames.get(self.cursor).map_or(0, Frame::standing)
    }

    /// Builds a printable, serializable scorecard.
    pub fn scorecard(&self) -> Scorecard {
        Scorecard::from_game(self)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
