//! Frame state machines.
//!
//! Frames 1-9 are [`RegularFrame`]s: a strike closes them after one roll,
//! otherwise they close after two. The tenth frame is a [`FinalFrame`] that
//! grants a third roll after a strike or spare and never looks past itself.
//!
//! Frames record rolls unchecked. Validation lives in
//! [`crate::contracts`] and runs before [`crate::Game`] routes a roll here.

use super::pins::Pins;
use super::rules::RuleSet;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Bonus a closed frame is owed from the rolls that follow it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Bonus {
    /// Spare: one following roll.
    Spare,
    /// Strike: two following rolls.
    Strike,
}

impl Bonus {
    /// Number of following rolls the bonus draws on.
    pub fn rolls(self) -> usize {
        match self {
            Bonus::Spare => 1,
            Bonus::Strike => 2,
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Regular frame (1-9)
// ─────────────────────────────────────────────────────────────

/// State of frames 1-9.
///
/// Every closed state carries exactly the rolls that closed it, so a spare
/// that is still waiting on its second roll cannot exist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RegularFrame {
    /// No rolls yet.
    #[default]
    Empty,
    /// One roll that left pins standing.
    OneRoll(Pins),
    /// All ten pins on the first roll.
    Strike,
    /// All ten pins across two rolls.
    Spare(Pins, Pins),
    /// Two rolls that left pins standing.
    Open(Pins, Pins),
}

impl RegularFrame {
    /// Records a roll (unchecked).
    ///
    /// Rolls after the frame has closed are dropped.
    #[instrument(level = "trace")]
    fn roll(&mut self, pins: Pins) {
        *self = match *self {
            RegularFrame::Empty if pins.is_strike() => RegularFrame::Strike,
            RegularFrame::Empty => RegularFrame::OneRoll(pins),
            RegularFrame::OneRoll(first) if first.get() + pins.get() == Pins::RACK => {
                RegularFrame::Spare(first, pins)
            }
            RegularFrame::OneRoll(first) => RegularFrame::Open(first, pins),
            closed => {
                debug!(?closed, "Roll dropped on closed frame");
                closed
            }
        };
    }

    /// Returns the recorded rolls in order.
    pub fn rolls(&self) -> Vec<Pins> {
        match *self {
            RegularFrame::Empty => Vec::new(),
            RegularFrame::OneRoll(first) => vec![first],
            RegularFrame::Strike => vec![Pins::STRIKE],
            RegularFrame::Spare(first, second) | RegularFrame::Open(first, second) => {
                vec![first, second]
            }
        }
    }

    /// Returns true once the frame accepts no more rolls.
    pub fn is_finished(&self) -> bool {
        matches!(
            self,
            RegularFrame::Strike | RegularFrame::Spare(..) | RegularFrame::Open(..)
        )
    }

    /// Pins standing for the next roll.
    pub fn standing(&self) -> u8 {
        match *self {
            RegularFrame::Empty => Pins::RACK,
            RegularFrame::OneRoll(first) => Pins::RACK.saturating_sub(first.get()),
            _ => 0,
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Final frame (10)
// ─────────────────────────────────────────────────────────────

/// Whether the tenth frame still takes rolls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FinalStatus {
    /// More rolls are owed.
    #[default]
    Rolling,
    /// The game's last roll has been taken.
    Complete,
}

/// State of the tenth frame.
///
/// Up to three rolls. Completion depends only on how many rolls are in and
/// what they knocked down.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FinalFrame {
    rolls: Vec<Pins>,
    status: FinalStatus,
}

impl FinalFrame {
    /// Most rolls the tenth frame can hold.
    pub const MAX_ROLLS: usize = 3;

    /// Records a roll (unchecked).
    #[instrument(level = "trace", skip(rules))]
    fn roll(&mut self, pins: Pins, rules: &RuleSet) {
        if self.status == FinalStatus::Complete {
            debug!(?pins, "Roll dropped on completed tenth frame");
            return;
        }
        self.rolls.push(pins);

        let complete = match self.rolls.as_slice() {
            [first, second] if first.is_strike() && second.is_strike() => {
                !rules.tenth_frame_always_three_rolls()
            }
            [first, second] => !first.is_strike() && first.get() + second.get() != Pins::RACK,
            [_, _, _] => true,
            _ => false,
        };
        if complete {
            debug!(rolls = ?self.rolls, "Tenth frame complete");
            self.status = FinalStatus::Complete;
        }
    }

    /// Returns the recorded rolls in order.
    pub fn rolls(&self) -> &[Pins] {
        &self.rolls
    }

    /// Returns the completion status.
    pub fn status(&self) -> FinalStatus {
        self.status
    }

    /// Returns true once the frame accepts no more rolls.
    pub fn is_finished(&self) -> bool {
        self.status == FinalStatus::Complete
    }

    /// Pins standing for the next roll.
    ///
    /// The rack is reset after a strike or a spare.
    pub fn standing(&self) -> u8 {
        if self.is_finished() {
            return 0;
        }
        let mut standing = Pins::RACK;
        for pins in &self.rolls {
            standing = match standing.saturating_sub(pins.get()) {
                0 => Pins::RACK,
                left => left,
            };
        }
        standing
    }
}

// ─────────────────────────────────────────────────────────────
//  Frame
// ─────────────────────────────────────────────────────────────

/// One of the ten frames of a game.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Frame {
    /// Frames 1-9.
    Regular(RegularFrame),
    /// Frame 10.
    Final(FinalFrame),
}

impl Frame {
    /// Creates an empty regular frame.
    pub fn regular() -> Self {
        Frame::Regular(RegularFrame::Empty)
    }

    /// Creates an empty tenth frame.
    pub fn last() -> Self {
        Frame::Final(FinalFrame::default())
    }

    /// Records a roll (unchecked - use `Game::roll` for validation).
    pub(crate) fn roll(&mut self, pins: Pins, rules: &RuleSet) {
        match self {
            Frame::Regular(frame) => frame.roll(pins),
            Frame::Final(frame) => frame.roll(pins, rules),
        }
    }

    /// Returns the recorded rolls in order.
    pub fn rolls(&self) -> Vec<Pins> {
        match self {
            Frame::Regular(frame) => frame.rolls(),
            Frame::Final(frame) => frame.rolls().to_vec(),
        }
    }

    /// Number of rolls recorded.
    pub fn roll_count(&self) -> usize {
        match self {
            Frame::Regular(frame) => frame.rolls().len(),
            Frame::Final(frame) => frame.rolls().len(),
        }
    }

    /// Most rolls this frame can hold.
    pub fn capacity(&self) -> usize {
        match self {
            Frame::Regular(_) => 2,
            Frame::Final(_) => FinalFrame::MAX_ROLLS,
        }
    }

    /// Sum of this frame's own rolls.
    pub fn pinfall(&self) -> u32 {
        self.rolls().into_iter().map(u32::from).sum()
    }

    /// Returns true once the frame accepts no more rolls.
    pub fn is_finished(&self) -> bool {
        match self {
            Frame::Regular(frame) => frame.is_finished(),
            Frame::Final(frame) => frame.is_finished(),
        }
    }

    /// Returns true if a regular frame was closed by a strike.
    pub fn is_strike(&self) -> bool {
        matches!(self, Frame::Regular(RegularFrame::Strike))
    }

    /// Returns true if a regular frame was closed by a spare.
    pub fn is_spare(&self) -> bool {
        matches!(self, Frame::Regular(RegularFrame::Spare(..)))
    }

    /// Returns true if no rolls are recorded.
    pub fn is_empty(&self) -> bool {
        self.roll_count() == 0
    }

    /// Bonus owed by this frame, if any. The tenth frame never owes one.
    pub fn bonus(&self) -> Option<Bonus> {
        match self {
            Frame::Regular(RegularFrame::Strike) => Some(Bonus::Strike),
            Frame::Regular(RegularFrame::Spare(..)) => Some(Bonus::Spare),
            _ => None,
        }
    }

    /// Pins standing for the next roll.
    pub fn standing(&self) -> u8 {
        match self {
            Frame::Regular(frame) => frame.standing(),
            Frame::Final(frame) => frame.standing(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pins(count: i32) -> Pins {
        Pins::new(count).expect("Valid pin count")
    }

    fn rolled(mut frame: Frame, counts: &[i32], rules: &RuleSet) -> Frame {
        for &count in counts {
            frame.roll(pins(count), rules);
        }
        frame
    }

    #[test]
    fn test_strike_closes_regular_frame() {
        let frame = rolled(Frame::regular(), &[10], &RuleSet::STANDARD);
        assert!(frame.is_strike());
        assert!(frame.is_finished());
        assert_eq!(frame.bonus(), Some(Bonus::Strike));
        assert_eq!(frame.standing(), 0);
    }

    #[test]
    fn test_spare_needs_both_rolls() {
        let frame = rolled(Frame::regular(), &[5], &RuleSet::STANDARD);
        assert!(!frame.is_finished());
        assert!(!frame.is_spare());
        assert_eq!(frame.standing(), 5);

        let frame = rolled(frame, &[5], &RuleSet::STANDARD);
        assert!(frame.is_spare());
        assert!(frame.is_finished());
    }

    #[test]
    fn test_ten_on_second_roll_is_spare_not_strike() {
        let frame = rolled(Frame::regular(), &[0, 10], &RuleSet::STANDARD);
        assert!(frame.is_spare());
        assert!(!frame.is_strike());
    }

    #[test]
    fn test_open_frame() {
        let frame = rolled(Frame::regular(), &[3, 4], &RuleSet::STANDARD);
        assert_eq!(frame, Frame::Regular(RegularFrame::Open(pins(3), pins(4))));
        assert_eq!(frame.bonus(), None);
        assert_eq!(frame.pinfall(), 7);
    }

    #[test]
    fn test_closed_regular_frame_drops_rolls() {
        let frame = rolled(Frame::regular(), &[3, 4, 2], &RuleSet::STANDARD);
        assert_eq!(frame.rolls(), vec![pins(3), pins(4)]);
    }

    #[test]
    fn test_open_tenth_closes_after_two() {
        let frame = rolled(Frame::last(), &[3, 4], &RuleSet::STANDARD);
        assert!(frame.is_finished());
        assert_eq!(frame.bonus(), None);
    }

    #[test]
    fn test_tenth_spare_grants_third_roll() {
        let frame = rolled(Frame::last(), &[5, 5], &RuleSet::STANDARD);
        assert!(!frame.is_finished());
        assert_eq!(frame.standing(), 10);

        let frame = rolled(frame, &[1], &RuleSet::STANDARD);
        assert!(frame.is_finished());
        assert_eq!(frame.pinfall(), 11);
        assert!(!frame.is_spare());
    }

    #[test]
    fn test_tenth_strike_then_partial_rack() {
        let frame = rolled(Frame::last(), &[10, 3], &RuleSet::STANDARD);
        assert!(!frame.is_finished());
        assert_eq!(frame.standing(), 7);
        assert!(!frame.is_strike());
    }

    #[test]
    fn test_tenth_double_strike_standard_rule() {
        let frame = rolled(Frame::last(), &[10, 10], &RuleSet::STANDARD);
        assert!(!frame.is_finished());
        assert_eq!(frame.standing(), 10);

        let frame = rolled(frame, &[10], &RuleSet::STANDARD);
        assert!(frame.is_finished());
        assert_eq!(frame.pinfall(), 30);
    }

    #[test]
    fn test_tenth_double_strike_legacy_rule() {
        let legacy = RuleSet::STANDARD.with_tenth_frame_three_rolls(false);
        let frame = rolled(Frame::last(), &[10, 10], &legacy);
        assert!(frame.is_finished());

        let frame = rolled(frame, &[10], &legacy);
        assert_eq!(frame.roll_count(), 2);
    }

    #[test]
    fn test_capacity() {
        assert_eq!(Frame::regular().capacity(), 2);
        assert_eq!(Frame::last().capacity(), 3);
    }
}
