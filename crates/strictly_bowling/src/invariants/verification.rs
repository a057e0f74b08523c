//! Formal verification of invariants using Kani model checker.
//!
//! These proof harnesses verify that invariants hold for every bounded roll
//! sequence.

#[cfg(kani)]
mod proofs {
    use crate::{BowlingInvariants, Game, InvariantSet, RuleSet};

    /// Verify invariants and the 300 ceiling for any short roll sequence.
    #[kani::proof]
    #[kani::unwind(7)]
    fn verify_invariants_after_any_rolls() {
        let rules = RuleSet::new(kani::any(), kani::any());
        let mut game = Game::with_rules(rules);

        for _ in 0..6 {
            let pins: i32 = kani::any();
            let _ = game.roll(pins);
        }

        assert!(BowlingInvariants::check_all(&game).is_ok());
        if rules.enforce_frame_overflow() {
            assert!(game.score() <= 300);
        }
    }
}
