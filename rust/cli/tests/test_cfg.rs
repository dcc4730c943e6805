use std::io::Write;

use blackjack_cli::run;
use serde_json::Value;
use serial_test::serial;

const VARS: [&str; 5] = [
    "BLACKJACK_CONFIG",
    "BLACKJACK_SEED",
    "BLACKJACK_DECKS",
    "BLACKJACK_DEALER",
    "BLACKJACK_WAGER",
];

fn clear_env() {
    for key in VARS {
        unsafe {
            std::env::remove_var(key);
        }
    }
}

fn cfg() -> (i32, String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = run(["blackjack", "cfg"], &mut out, &mut err);
    (
        code,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[test]
#[serial]
fn cfg_shows_defaults() {
    clear_env();
    let (code, out, _) = cfg();
    assert_eq!(code, 0);
    let json: Value = serde_json::from_str(&out).unwrap();
    assert!(json["seed"]["value"].is_null());
    assert_eq!(json["num_decks"]["value"].as_u64(), Some(1));
    assert_eq!(json["dealer"]["value"].as_str(), Some("h17"));
    assert_eq!(json["wager"]["value"].as_f64(), Some(1.0));
    assert_eq!(json["dealer"]["source"].as_str(), Some("default"));
}

#[test]
#[serial]
fn cfg_env_takes_precedence_over_file() {
    clear_env();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "seed = 456\nnum_decks = 6\ndealer = \"s17\"").unwrap();
    unsafe {
        std::env::set_var("BLACKJACK_CONFIG", file.path());
        std::env::set_var("BLACKJACK_SEED", "7");
    }

    let (code, out, err) = cfg();
    clear_env();
    assert_eq!(code, 0, "stderr={}", err);
    let json: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["seed"]["value"].as_u64(), Some(7));
    assert_eq!(json["seed"]["source"].as_str(), Some("env"));
    assert_eq!(json["num_decks"]["value"].as_u64(), Some(6));
    assert_eq!(json["num_decks"]["source"].as_str(), Some("file"));
    assert_eq!(json["dealer"]["value"].as_str(), Some("s17"));
    assert_eq!(json["wager"]["source"].as_str(), Some("default"));
}

#[test]
#[serial]
fn cfg_rejects_invalid_env() {
    clear_env();
    unsafe {
        std::env::set_var("BLACKJACK_DECKS", "0");
    }
    let (code, out, err) = cfg();
    clear_env();
    assert_eq!(code, 2);
    assert!(out.is_empty());
    assert!(err.contains("Configuration error"), "stderr={}", err);
}

#[test]
#[serial]
fn env_seed_drives_eval() {
    clear_env();
    unsafe {
        std::env::set_var("BLACKJACK_SEED", "123");
    }
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = run(
        ["blackjack", "eval", "--episodes", "10"],
        &mut out,
        &mut err,
    );
    clear_env();
    assert_eq!(code, 0);
    assert!(String::from_utf8(out).unwrap().contains("seed=123"));
}
