//! Validated pin counts.

use super::error::{BowlingError, InvalidArgument};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Number of pins knocked down by a single roll (0-10).
///
/// Out-of-range values cannot be constructed, so every `Pins` that reaches a
/// frame is already a legal single-roll count.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(try_from = "i32", into = "u8")]
pub struct Pins(u8);

impl Pins {
    /// Pins in a full rack.
    pub const RACK: u8 = 10;

    /// A gutter ball.
    pub const ZERO: Pins = Pins(0);

    /// All ten pins.
    pub const STRIKE: Pins = Pins(Self::RACK);

    /// Validates a raw pin count.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument::OutOfRange`] if `count` is negative or above 10.
    #[instrument]
    pub fn new(count: i32) -> Result<Self, BowlingError> {
        u8::try_from(count)
            .ok()
            .filter(|&n| n <= Self::RACK)
            .map(Pins)
            .ok_or(BowlingError::InvalidArgument(InvalidArgument::OutOfRange(count)))
    }

    /// Returns the pin count.
    pub fn get(self) -> u8 {
        self.0
    }

    /// Returns true if all ten pins fell.
    pub fn is_strike(self) -> bool {
        self.0 == Self::RACK
    }
}

impl TryFrom<i32> for Pins {
    type Error = BowlingError;

    fn try_from(count: i32) -> Result<Self, Self::Error> {
        Pins::new(count)
    }
}

impl From<Pins> for u8 {
    fn from(pins: Pins) -> Self {
        pins.0
    }
}

impl From<Pins> for u32 {
    fn from(pins: Pins) -> Self {
        u32::from(pins.0)
    }
}
