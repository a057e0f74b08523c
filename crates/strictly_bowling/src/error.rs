//! Error types for roll validation.

use derive_more::{Display, From};

/// Why a roll was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum InvalidArgument {
    /// The pin count is outside `0..=10`.
    #[display("{_0} pins is outside 0..=10")]
    OutOfRange(i32),

    /// The roll knocks down more pins than are standing in the frame.
    #[display("{pins} pins exceeds the {standing} left standing in frame {frame}")]
    FrameOverflow {
        /// Frame number (1-10).
        frame: usize,
        /// Pins the roll claimed.
        pins: u8,
        /// Pins actually standing before the roll.
        standing: u8,
    },
}

/// Error that can occur when recording a roll.
///
/// A rejected roll never changes the game.
#[derive(Debug, Clone, PartialEq, Eq, Display, From)]
pub enum BowlingError {
    /// The roll is not a legal pin count for the current frame.
    #[display("Invalid argument: {_0}")]
    InvalidArgument(InvalidArgument),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {_0}")]
    #[from(ignore)]
    InvariantViolation(String),
}

impl BowlingError {
    /// Returns true if this is an [`BowlingError::InvalidArgument`].
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, BowlingError::InvalidArgument(_))
    }
}

impl std::error::Error for BowlingError {}
