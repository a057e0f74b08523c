//! Tests for the command-line scoring pipeline.

use std::fs;
use tempfile::TempDir;

use strictly_bowling::{RulePreset, RuleSet};
use strictly_bowling_cli::cli::RuleArgs;
use strictly_bowling_cli::{gather_tokens, input, play, settings};

fn tokens(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

#[test]
fn test_play_card_notation() {
    let counts = input::parse_rolls(&tokens(&["X", "7", "/", "9", "-"])).expect("Valid input");
    let game = play(RuleSet::STANDARD, &counts).expect("Valid rolls");
    // 20 + 19 + 9
    assert_eq!(game.score(), 48);
}

#[test]
fn test_play_reports_rejected_roll() {
    let err = play(RuleSet::STANDARD, &[6, 6]).unwrap_err();
    assert_eq!(err.to_string(), "Roll 2 (6 pins) rejected");
    assert!(format!("{:#}", err).contains("left standing in frame 1"));
}

#[test]
fn test_play_reports_out_of_range() {
    let err = play(RuleSet::STANDARD, &[3, -1]).unwrap_err();
    assert!(format!("{:#}", err).contains("outside 0..=10"));
}

#[test]
fn test_gather_tokens_file_then_args() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("rolls.txt");
    fs::write(&path, "10, 10\n10\n").expect("Write failed");

    let gathered = gather_tokens(Some(&path), &tokens(&["X"])).expect("Readable");
    assert_eq!(gathered, ["10", "10", "10", "X"]);
}

#[test]
fn test_gather_tokens_missing_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let err = gather_tokens(Some(&dir.path().join("absent.txt")), &[]).unwrap_err();
    assert!(err.to_string().contains("Failed to read rolls"));
}

#[test]
fn test_rule_file_then_switch() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("rules.toml");
    fs::write(&path, "tenth_frame_always_three_rolls = false\n").expect("Write failed");

    let args = RuleArgs {
        rules_file: Some(path),
        permissive: true,
        ..RuleArgs::default()
    };
    let rules = settings::resolve_rules(&args, None).expect("Resolves");
    assert_eq!(rules, RulePreset::Permissive.rules());
}

#[test]
fn test_explicit_file_beats_env_path() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let explicit = dir.path().join("explicit.toml");
    fs::write(&explicit, "enforce_frame_overflow = false\n").expect("Write failed");

    let args = RuleArgs {
        rules_file: Some(explicit),
        ..RuleArgs::default()
    };
    let rules = settings::resolve_rules(&args, Some(dir.path().join("absent.toml")))
        .expect("Env path ignored");
    assert!(!rules.enforce_frame_overflow());
    assert!(rules.tenth_frame_always_three_rolls());
}

#[test]
fn test_legacy_game_from_card() {
    let mut words = vec!["-"; 18];
    words.extend(["X", "X"]);
    let counts = input::parse_rolls(&words).expect("Valid input");
    let game = play(RulePreset::LegacyTenth.rules(), &counts).expect("Valid rolls");
    assert!(game.is_over());
    assert_eq!(game.score(), 20);
}
