//! Frame scoring with strike and spare lookahead.
//!
//! Every roll counts once in its own frame. A strike or spare additionally
//! pulls the next one or two rolls from the frames after it, so lookahead
//! can reach at most two frames ahead and never past the tenth.

use super::frame::Frame;
use super::pins::Pins;
use tracing::instrument;

/// Rolls recorded after frame `index`, in the order they were bowled.
pub fn following_rolls(frames: &[Frame], index: usize) -> impl Iterator<Item = Pins> + '_ {
    frames
        .get(index.saturating_add(1)..)
        .unwrap_or_default()
        .iter()
        .flat_map(Frame::rolls)
}

/// Bonus pins frame `index` has collected so far.
#[instrument(skip(frames))]
pub fn bonus(frames: &[Frame], index: usize) -> u32 {
    frames
        .get(index)
        .and_then(Frame::bonus)
        .map(|bonus| {
            following_rolls(frames, index)
                .take(bonus.rolls())
                .map(u32::from)
                .sum()
        })
        .unwrap_or(0)
}

/// Score of frame `index`: its own pinfall plus any bonus resolved so far.
///
/// Out-of-range indices score zero.
#[instrument(skip(frames))]
pub fn frame_score(frames: &[Frame], index: usize) -> u32 {
    frames
        .get(index)
        .map(|frame| frame.pinfall() + bonus(frames, index))
        .unwrap_or(0)
}

/// Returns true once frame `index` is closed and every bonus roll it is owed
/// has been bowled.
pub fn is_resolved(frames: &[Frame], index: usize) -> bool {
    let Some(frame) = frames.get(index) else {
        return false;
    };
    if !frame.is_finished() {
        return false;
    }
    match frame.bonus() {
        Some(bonus) => following_rolls(frames, index).take(bonus.rolls()).count() == bonus.rolls(),
        None => true,
    }
}

/// Sum of every frame's score.
#[instrument(skip(frames))]
pub fn total(frames: &[Frame]) -> u32 {
    (0..frames.len()).map(|index| frame_score(frames, index)).sum()
}

/// Cumulative score at each frame, as written on a scorecard.
///
/// A frame's entry is `None` until it and every frame before it are resolved.
#[instrument(skip(frames))]
pub fn running_totals(frames: &[Frame]) -> Vec<Option<u32>> {
    let mut cumulative = 0;
    let mut resolved = true;
    (0..frames.len())
        .map(|index| {
            resolved = resolved && is_resolved(frames, index);
            cumulative += frame_score(frames, index);
            resolved.then_some(cumulative)
        })
        .collect()
}
