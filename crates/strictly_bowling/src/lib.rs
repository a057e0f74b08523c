//! Strictly Bowling - type-safe ten-pin scoring
//!
//! Feed rolls into a [`Game`] one at a time and read the score whenever you
//! like. Strikes and spares pull their bonus from later rolls as they arrive.
//!
//! # Architecture
//!
//! - **Pins**: validated single-roll counts (0-10)
//! - **Frames**: regular frames 1-9 and the three-roll tenth frame
//! - **Scoring**: pure functions with strike/spare lookahead
//! - **Contracts / Invariants**: roll preconditions and debug-build postconditions
//! - **Typestate**: setup, in-progress and finished phases as distinct types
//!
//! # Example
//!
//! ```
//! use strictly_bowling::Game;
//!
//! let mut game = Game::new();
//! for pins in [10, 10, 1, 1] {
//!     game.roll(pins)?;
//! }
//! assert_eq!(game.score(), 35);
//! # Ok::<(), strictly_bowling::BowlingError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod contracts;
mod error;
mod frame;
mod game;
mod invariants;
mod pins;
mod rules;
mod scorecard;
mod scoring;
mod typestate;

// Crate-level exports - Errors
pub use error::{BowlingError, InvalidArgument};

// Crate-level exports - Core game types
pub use frame::{Bonus, FinalFrame, FinalStatus, Frame, RegularFrame};
pub use game::{FRAME_COUNT, Game, LAST_FRAME};
pub use pins::Pins;

// Crate-level exports - Rules and configuration
pub use rules::{ConfigError, RulePreset, RuleSet};

// Crate-level exports - Scoring and presentation
pub use scorecard::{FrameCard, Scorecard, marks};
pub use scoring::{bonus, following_rolls, frame_score, is_resolved, running_totals, total};

// Crate-level exports - Contracts and invariants
pub use contracts::{Contract, FitsInFrame, PinsInRange, RollContract};
pub use invariants::{
    BowlingInvariants, CursorConsistentInvariant, FrameCapacityInvariant,
    HistoryConsistentInvariant, Invariant, InvariantSet, InvariantViolation,
};

// Crate-level exports - Typestate
pub use typestate::{GameFinished, GameInProgress, GameResult, GameSetup};
