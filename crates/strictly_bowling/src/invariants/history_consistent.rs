//! History consistency invariant: replaying the history rebuilds the frames.

use super::super::Game;
use super::Invariant;

/// Invariant: The frames are exactly what the roll history produces.
///
/// Every roll in history landed in exactly one frame. No frame holds a roll
/// the history does not.
pub struct HistoryConsistentInvariant;

impl Invariant<Game> for HistoryConsistentInvariant {
    fn holds(game: &Game) -> bool {
        let mut rebuilt = Game::with_rules(*game.rules());
        for &pins in game.history() {
            rebuilt.apply(pins);
        }

        rebuilt.frames() == game.frames() && rebuilt.current_frame() == game.current_frame()
    }

    fn description() -> &'static str {
        "Frames match a replay of the roll history"
    }
}
