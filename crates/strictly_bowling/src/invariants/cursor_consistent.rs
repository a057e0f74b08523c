//! Cursor consistency invariant: the cursor sits on the first open frame.

use super::super::{FRAME_COUNT, Game};
use super::Invariant;

/// Invariant: Frames before the cursor are closed, the frame at the cursor is
/// open, and frames after it are untouched.
pub struct CursorConsistentInvariant;

impl Invariant<Game> for CursorConsistentInvariant {
    fn holds(game: &Game) -> bool {
        let cursor = game.current_frame();
        if cursor > FRAME_COUNT {
            return false;
        }
        let frames = game.frames();

        let closed_before = frames[..cursor].iter().all(|f| f.is_finished());
        let open_at = frames.get(cursor).is_none_or(|f| !f.is_finished());
        let empty_after = frames
            .get(cursor + 1..)
            .unwrap_or_default()
            .iter()
            .all(|f| f.is_empty());

        closed_before && open_at && empty_after
    }

    fn description() -> &'static str {
        "Cursor sits on the first open frame"
    }
}
