//! Scoring tests for complete and partial games.

use strictly_bowling::{BowlingError, Game, InvalidArgument, RulePreset, RuleSet};

fn roll_all(game: &mut Game, counts: &[i32]) {
    for &pins in counts {
        game.roll(pins).expect("Valid roll");
    }
}

fn score_of(counts: &[i32]) -> u32 {
    let mut game = Game::new();
    roll_all(&mut game, counts);
    game.score()
}

#[test]
fn test_zero_before_any_rolls() {
    assert_eq!(Game::new().score(), 0);
}

#[test]
fn test_first_roll_is_the_score() {
    assert_eq!(score_of(&[1]), 1);
}

#[test]
fn test_more_than_ten_pins_rejected() {
    let mut game = Game::new();
    assert!(matches!(
        game.roll(11),
        Err(BowlingError::InvalidArgument(InvalidArgument::OutOfRange(11)))
    ));
    assert_eq!(game.score(), 0);
}

#[test]
fn test_negative_pins_rejected() {
    let mut game = Game::new();
    let err = game.roll(-1).unwrap_err();
    assert!(err.is_invalid_argument());
    assert_eq!(game.score(), 0);
}

#[test]
fn test_score_unchanged_after_game_over() {
    let mut game = Game::new();
    roll_all(&mut game, &[1; 21]);

    let score = game.score();
    game.roll(1).expect("Ignored after game over");
    assert_eq!(game.score(), score);
    assert_eq!(score, 20);
}

#[test]
fn test_spare_bonus() {
    assert_eq!(score_of(&[5, 5, 2, 1]), 15);
}

#[test]
fn test_strike_bonus() {
    assert_eq!(score_of(&[10, 2, 1]), 16);
}

#[test]
fn test_double_strike_bonus() {
    assert_eq!(score_of(&[10, 10, 1, 1]), 35);
}

#[test]
fn test_perfect_game() {
    let mut game = Game::new();
    roll_all(&mut game, &[10; 12]);
    assert_eq!(game.score(), 300);
    assert!(game.is_over());
}

#[test]
fn test_all_spares_with_five() {
    assert_eq!(score_of(&[5; 21]), 150);
}

#[test]
fn test_all_nine_and_miss() {
    assert_eq!(score_of(&[9, 0].repeat(10)), 90);
}

#[test]
fn test_spare_in_last_frame_counts_each_roll_once() {
    let mut counts = vec![1; 18];
    counts.extend([5, 5, 1]);
    let mut game = Game::new();
    roll_all(&mut game, &counts);

    // 18 + (5 + 5 + 1)
    assert_eq!(game.score(), 29);
    assert!(game.is_over());
}

#[test]
fn test_two_strikes_in_last_frame_standard_rules() {
    let mut game = Game::new();
    roll_all(&mut game, &[1; 18]);
    roll_all(&mut game, &[10, 10]);
    assert!(!game.is_over());
    assert_eq!(game.score(), 38);

    game.roll(7).expect("Third roll granted");
    assert!(game.is_over());
    assert_eq!(game.score(), 45);
}

#[test]
fn test_two_strikes_in_last_frame_legacy_rules() {
    let mut game = Game::with_rules(RulePreset::LegacyTenth.rules());
    roll_all(&mut game, &[1; 18]);
    roll_all(&mut game, &[10, 10]);
    assert!(game.is_over());
    assert_eq!(game.score(), 38);

    game.roll(7).expect("Ignored after game over");
    assert_eq!(game.score(), 38);
}

#[test]
fn test_strike_in_ninth_with_full_tenth() {
    let mut counts = vec![0; 16];
    counts.extend([10, 10, 10, 10]);
    // Ninth: 10 + 10 + 10; tenth: 30
    assert_eq!(score_of(&counts), 60);
}

#[test]
fn test_overflow_in_regular_frame_rejected() {
    let mut game = Game::new();
    game.roll(6).expect("Valid roll");
    assert!(matches!(
        game.roll(6),
        Err(BowlingError::InvalidArgument(InvalidArgument::FrameOverflow { frame: 1, .. }))
    ));
    game.roll(4).expect("Spare still possible");
    assert_eq!(game.current_frame(), 1);
}

#[test]
fn test_overflow_in_tenth_after_strike_rejected() {
    let mut game = Game::new();
    roll_all(&mut game, &[0; 18]);
    roll_all(&mut game, &[10, 8]);
    assert!(game.roll(3).is_err());
    game.roll(2).expect("Valid roll");
    assert_eq!(game.score(), 20);
}

#[test]
fn test_permissive_rules_accept_overflow() {
    let mut game = Game::with_rules(RuleSet::new(false, true));
    roll_all(&mut game, &[6, 6]);
    assert_eq!(game.score(), 12);
}

#[test]
fn test_mid_game_score_counts_partial_bonus() {
    let mut game = Game::new();
    roll_all(&mut game, &[10, 4]);
    assert_eq!(game.score(), 18);
    assert_eq!(game.running_totals()[0], None);
}

#[test]
fn test_frame_scores_add_up() {
    let counts = [10, 9, 1, 5, 5, 7, 2, 10, 10, 10, 9, 0, 8, 2, 9, 1, 10];
    let mut game = Game::new();
    roll_all(&mut game, &counts);

    let per_frame: u32 = (0..10).map(|i| game.frame_score(i)).sum();
    assert_eq!(per_frame, game.score());
    assert_eq!(game.score(), 187);
    assert_eq!(game.running_totals()[9], Some(187));
}
