use std::io::Cursor;

use blackjack_cli::run_with_input;
use serde_json::Value;
use serial_test::serial;

const KEYS: &[&str] = &[
    "BLACKJACK_CONFIG",
    "BLACKJACK_SEED",
    "BLACKJACK_STARTING_MONEY",
    "BLACKJACK_NAME",
    "BLACKJACK_AI",
];

fn with_env(pairs: &[(&str, &str)]) -> (i32, String, String) {
    for key in KEYS {
        unsafe {
            std::env::remove_var(key);
        }
    }
    for (key, value) in pairs {
        unsafe {
            std::env::set_var(key, value);
        }
    }
    let mut out = Vec::new();
    let mut err = Vec::new();
    let mut input = Cursor::new(Vec::<u8>::new());
    let code = run_with_input(["blackjack", "cfg"], &mut input, &mut out, &mut err);
    for key in KEYS {
        unsafe {
            std::env::remove_var(key);
        }
    }
    (
        code,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[test]
#[serial]
fn defaults_when_nothing_is_set() {
    let (code, out, _) = with_env(&[]);
    assert_eq!(code, 0);
    let json: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["starting_money"]["value"], 1000);
    assert_eq!(json["starting_money"]["source"], "default");
    assert!(json["seed"]["value"].is_null());
    assert_eq!(json["player_name"]["value"], "You");
    assert_eq!(json["ai"]["value"], "baseline");
}

#[test]
#[serial]
fn file_values_are_tagged_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("blackjack.toml");
    std::fs::write(&path, "starting_money = 250\nplayer_name = \"Ada\"\n").unwrap();
    let path_str = path.to_string_lossy().into_owned();

    let (code, out, _) = with_env(&[("BLACKJACK_CONFIG", path_str.as_str())]);
    assert_eq!(code, 0);
    let json: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["starting_money"]["value"], 250);
    assert_eq!(json["starting_money"]["source"], "file");
    assert_eq!(json["player_name"]["source"], "file");
    assert_eq!(json["seed"]["source"], "default");
}

#[test]
#[serial]
fn env_overrides_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("blackjack.toml");
    std::fs::write(&path, "seed = 1\nai = \"baseline\"\n").unwrap();
    let path_str = path.to_string_lossy().into_owned();

    let (code, out, _) = with_env(&[("BLACKJACK_CONFIG", path_str.as_str()), ("BLACKJACK_SEED", "99")]);
    assert_eq!(code, 0);
    let json: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["seed"]["value"], 99);
    assert_eq!(json["seed"]["source"], "env");
    assert_eq!(json["ai"]["source"], "file");
}

#[test]
#[serial]
fn invalid_values_exit_2() {
    let (code, _, err) = with_env(&[("BLACKJACK_STARTING_MONEY", "0")]);
    assert_eq!(code, 2);
    assert!(err.contains("starting_money must be >0"));

    let (code, _, err) = with_env(&[("BLACKJACK_SEED", "abc")]);
    assert_eq!(code, 2);
    assert!(err.contains("Invalid seed 'abc'"));
}

#[test]
#[serial]
fn unreadable_config_file_exits_2() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.toml");
    std::fs::write(&path, "starting_money = \"lots\"\n").unwrap();
    let path_str = path.to_string_lossy().into_owned();

    let (code, _, err) = with_env(&[("BLACKJACK_CONFIG", path_str.as_str())]);
    assert_eq!(code, 2);
    assert!(err.contains("cannot parse config file"));
}
