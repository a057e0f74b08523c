//! Frame capacity invariant: no frame holds more than it may.

use super::super::{Frame, Game, Pins};
use super::Invariant;

/// Invariant: Every frame respects its roll capacity and pin total.
///
/// Regular frames hold at most two rolls, or one after a strike. The tenth
/// holds at most three. With overflow enforcement on, a regular frame never
/// totals more than ten pins.
pub struct FrameCapacityInvariant;

impl Invariant<Game> for FrameCapacityInvariant {
    fn holds(game: &Game) -> bool {
        let enforce = game.rules().enforce_frame_overflow();
        game.frames().iter().all(|frame| {
            if frame.roll_count() > frame.capacity() {
                return false;
            }
            match frame {
                Frame::Regular(_) => !enforce || frame.pinfall() <= u32::from(Pins::RACK),
                Frame::Final(_) => true,
            }
        })
    }

    fn description() -> &'static str {
        "Frames stay within their roll capacity and pin total"
    }
}
