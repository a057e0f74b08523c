//! Contract-based validation for rolls.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} roll {Q}

use super::error::{BowlingError, InvalidArgument};
use super::game::Game;
use super::invariants::{BowlingInvariants, InvariantSet};
use super::pins::Pins;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), BowlingError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), BowlingError>;
}

// ─────────────────────────────────────────────────────────────
//  Roll Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: A raw pin count must be within `0..=10`.
pub struct PinsInRange;

impl PinsInRange {
    /// Validates a raw count, returning it as [`Pins`].
    #[instrument]
    pub fn check(count: i32) -> Result<Pins, BowlingError> {
        Pins::new(count)
    }
}

/// Precondition: A roll cannot knock down more pins than are standing.
///
/// Only enforced when the game's rules ask for it.
pub struct FitsInFrame;

impl FitsInFrame {
    /// Checks `pins` against the pins standing in the current frame.
    #[instrument(skip(game))]
    pub fn check(pins: Pins, game: &Game) -> Result<(), BowlingError> {
        if !game.rules().enforce_frame_overflow() || game.is_over() {
            return Ok(());
        }
        let standing = game.standing();
        if pins.get() > standing {
            warn!(%pins, standing, "Roll exceeds standing pins");
            return Err(InvalidArgument::FrameOverflow {
                frame: game.current_frame() + 1,
                pins: pins.get(),
                standing,
            }
            .into());
        }
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Roll Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for roll actions.
///
/// Preconditions:
/// - Roll fits in the standing pins (when enforced)
///
/// Postconditions:
/// - Exactly one roll was added to the history
/// - Score never decreases
/// - All game invariants hold
pub struct RollContract;

impl Contract<Game, Pins> for RollContract {
    fn pre(game: &Game, pins: &Pins) -> Result<(), BowlingError> {
        FitsInFrame::check(*pins, game)
    }

    fn post(before: &Game, after: &Game) -> Result<(), BowlingError> {
        if after.history().len() != before.history().len() + 1 {
            return Err(BowlingError::InvariantViolation(format!(
                "Postcondition failed: history grew from {} to {}",
                before.history().len(),
                after.history().len()
            )));
        }

        if after.score() < before.score() {
            return Err(BowlingError::InvariantViolation(format!(
                "Postcondition failed: score fell from {} to {}",
                before.score(),
                after.score()
            )));
        }

        BowlingInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            BowlingError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
