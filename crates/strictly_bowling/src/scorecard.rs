//! Printable, serializable view of a game.

use super::frame::{Frame, RegularFrame};
use super::game::Game;
use super::pins::Pins;
use super::rules::RuleSet;
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One column of a scorecard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
pub struct FrameCard {
    /// Frame number (1-10).
    number: usize,
    /// Pins per roll.
    rolls: Vec<u8>,
    /// Roll marks as written on a card (`X`, `/`, `-`).
    marks: Vec<String>,
    /// Frame score so far, bonus included.
    score: u32,
    /// Cumulative total, once this frame and all before it are resolved.
    running_total: Option<u32>,
}

/// Frame-by-frame summary of a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Scorecard {
    /// All ten frames.
    frames: Vec<FrameCard>,
    /// Current score.
    total: u32,
    /// Frame number receiving rolls (1-10), absent once the game is over.
    current_frame: Option<usize>,
    /// Whether the tenth frame is complete.
    is_over: bool,
    /// Rules the game was scored under.
    rules: RuleSet,
}

impl Scorecard {
    /// Captures the current state of `game`.
    #[instrument(skip(game), fields(rolls = game.history().len()))]
    pub fn from_game(game: &Game) -> Self {
        let totals = game.running_totals();
        let frames = game
            .frames()
            .iter()
            .zip(totals)
            .enumerate()
            .map(|(index, (frame, running_total))| {
                FrameCard::new(
                    index + 1,
                    frame.rolls().into_iter().map(u8::from).collect(),
                    marks(frame),
                    game.frame_score(index),
                    running_total,
                )
            })
            .collect();

        Self {
            frames,
            total: game.score(),
            current_frame: (!game.is_over()).then(|| game.current_frame() + 1),
            is_over: game.is_over(),
            rules: *game.rules(),
        }
    }
}

fn digit(pins: Pins) -> String {
    match pins.get() {
        0 => "-".to_string(),
        n => n.to_string(),
    }
}

/// Card marks for a frame's rolls.
pub fn marks(frame: &Frame) -> Vec<String> {
    match frame {
        Frame::Regular(RegularFrame::Empty) => Vec::new(),
        Frame::Regular(RegularFrame::OneRoll(first)) => vec![digit(*first)],
        Frame::Regular(RegularFrame::Strike) => vec!["X".to_string()],
        Frame::Regular(RegularFrame::Spare(first, _)) => vec![digit(*first), "/".to_string()],
        Frame::Regular(RegularFrame::Open(first, second)) => vec![digit(*first), digit(*second)],
        Frame::Final(last) => {
            // First ball at a fresh rack marks a strike, a later ball clearing it a spare
            let mut standing = Pins::RACK;
            let mut fresh = true;
            last.rolls()
                .iter()
                .map(|&pins| {
                    let mark = match (pins.get() == standing, fresh) {
                        (true, true) => "X".to_string(),
                        (true, false) => "/".to_string(),
                        (false, _) => digit(pins),
                    };
                    standing = standing.saturating_sub(pins.get());
                    fresh = standing == 0;
                    if fresh {
                        standing = Pins::RACK;
                    }
                    mark
                })
                .collect()
        }
    }
}

impl std::fmt::Display for Scorecard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut numbers = String::from("Frame |");
        let mut rolls = String::from("Rolls |");
        let mut totals = String::from("Total |");

        for card in &self.frames {
            numbers.push_str(&format!("{:^7}|", card.number));
            rolls.push_str(&format!("{:^7}|", card.marks.join(" ")));
            let total = card.running_total.map(|t| t.to_string()).unwrap_or_default();
            totals.push_str(&format!("{:^7}|", total));
        }

        writeln!(f, "{}", numbers)?;
        writeln!(f, "{}", rolls)?;
        writeln!(f, "{}", totals)?;
        write!(f, "Score: {}", self.total)?;
        if !self.is_over {
            write!(f, " (in progress)")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(counts: &[i32]) -> Scorecard {
        Game::replay(RuleSet::STANDARD, counts)
            .expect("Valid replay")
            .scorecard()
    }

    #[test]
    fn test_regular_marks() {
        let card = card(&[10, 7, 3, 0, 5, 4]);
        assert_eq!(card.frames()[0].marks(), &vec!["X".to_string()]);
        assert_eq!(card.frames()[1].marks(), &vec!["7".to_string(), "/".to_string()]);
        assert_eq!(card.frames()[2].marks(), &vec!["-".to_string(), "5".to_string()]);
        assert_eq!(card.frames()[3].marks(), &vec!["4".to_string()]);
    }

    #[test]
    fn test_tenth_frame_marks() {
        let mut counts = vec![0; 18];
        counts.extend([10, 9, 1]);
        let card = card(&counts);
        assert_eq!(
            card.frames()[9].marks(),
            &vec!["X".to_string(), "9".to_string(), "/".to_string()]
        );
    }

    #[test]
    fn test_tenth_frame_spare_after_miss() {
        let mut counts = vec![0; 18];
        counts.extend([0, 10, 5]);
        assert_eq!(card(&counts).frames()[9].marks().join(" "), "- / 5");
    }

    #[test]
    fn test_tenth_frame_spare_then_strike() {
        let mut counts = vec![0; 18];
        counts.extend([3, 7, 10]);
        assert_eq!(card(&counts).frames()[9].marks().join(" "), "3 / X");
    }

    #[test]
    fn test_perfect_tenth_marks() {
        let card = card(&[10; 12]);
        assert_eq!(card.frames()[9].marks().join(" "), "X X X");
        assert_eq!(*card.total(), 300);
        assert!(*card.is_over());
        assert_eq!(*card.current_frame(), None);
    }

    #[test]
    fn test_running_totals_and_current_frame() {
        let card = card(&[5, 5, 2]);
        assert_eq!(*card.frames()[0].running_total(), Some(12));
        assert_eq!(*card.frames()[1].running_total(), None);
        assert_eq!(*card.current_frame(), Some(2));
        assert_eq!(*card.total(), 14);
    }

    #[test]
    fn test_display() {
        let text = card(&[10, 3, 4]).to_string();
        assert!(text.starts_with("Frame |"));
        assert!(text.contains("Rolls |   X   |  3 4  |"));
        assert!(text.contains("Total |  17   |  24   |"));
        assert!(text.ends_with("Score: 24 (in progress)"));
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(card(&[10])).expect("Serializes");
        assert_eq!(json["total"], 10);
        assert_eq!(json["frames"][0]["rolls"][0], 10);
        assert_eq!(json["rules"]["enforce_frame_overflow"], true);
    }
}
