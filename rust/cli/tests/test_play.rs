use std::io::Cursor;

use blackjack_cli::config::Config;
use blackjack_cli::{handle_play_command, CliError};

fn seeded() -> Config {
    Config {
        seed: Some(42),
        ..Config::default()
    }
}

fn play(rounds: Option<u32>, input: &str) -> (Result<(), CliError>, String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let mut stdin = Cursor::new(input.as_bytes());
    let result = handle_play_command(rounds, &seeded(), &mut out, &mut err, &mut stdin);
    (
        result,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[test]
fn standing_plays_requested_rounds() {
    let (result, out, err) = play(Some(3), "stand\ns\nstand\n");
    assert!(result.is_ok(), "stderr={}", err);
    assert!(out.contains("play: rounds=3 seed=42"));
    assert!(out.contains("Round 3"));
    assert!(out.contains("Result: "));
    assert!(out.contains("Rounds played: 3"));
}

#[test]
fn unknown_input_is_reported_and_prompted_again() {
    let (result, out, err) = play(None, "x\nq\n");
    assert!(result.is_ok());
    assert!(err.contains("unknown action: x"), "stderr={}", err);
    assert!(out.contains("Rounds played: "));
}

#[test]
fn end_of_input_stops_play() {
    let (result, out, _) = play(None, "");
    assert!(result.is_ok());
    assert!(out.contains("Rounds played: "));
}

#[test]
fn same_seed_replays_same_table() {
    let (_, first, _) = play(Some(2), "h\ns\nh\ns\nh\ns\n");
    let (_, second, _) = play(Some(2), "h\ns\nh\ns\nh\ns\n");
    assert_eq!(first, second);
}

#[test]
fn zero_rounds_is_invalid() {
    let (result, _, _) = play(Some(0), "");
    assert!(matches!(result, Err(CliError::InvalidInput(_))));
}
