use std::fs;
use std::io::Cursor;

use blackjack_cli::run_with_input;
use serde_json::Value;
use serial_test::serial;

fn run(args: &[&str]) -> (i32, String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let mut input = Cursor::new(Vec::<u8>::new());
    let code = run_with_input(args.iter().copied(), &mut input, &mut out, &mut err);
    (
        code,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

fn simulate(dir: &std::path::Path, name: &str, rounds: &str, seed: &str) -> String {
    for key in ["BLACKJACK_CONFIG", "BLACKJACK_SIM_BREAK_AFTER", "BLACKJACK_STARTING_MONEY"] {
        unsafe {
            std::env::remove_var(key);
        }
    }
    let path = dir.join(name).to_string_lossy().into_owned();
    let (code, _, err) = run(&[
        "blackjack", "sim", "--rounds", rounds, "--seed", seed, "--output", path.as_str(),
    ]);
    assert_eq!(code, 0, "sim failed: {}", err);
    path
}

#[test]
#[serial]
fn stats_summarizes_a_sim_log() {
    let dir = tempfile::tempdir().unwrap();
    let path = simulate(dir.path(), "a.jsonl", "25", "11");

    let (code, out, err) = run(&["blackjack", "stats", "--input", path.as_str()]);
    assert_eq!(code, 0, "stderr: {}", err);
    let v: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(v["rounds"], 25);
    let total = v["wins"].as_u64().unwrap() + v["ties"].as_u64().unwrap() + v["losses"].as_u64().unwrap();
    assert_eq!(total, 25);
    let by_row: u64 = v["resolutions"]
        .as_object()
        .unwrap()
        .values()
        .map(|n| n.as_u64().unwrap())
        .sum();
    assert_eq!(by_row, 25);
    assert!(err.is_empty());
}

#[test]
#[serial]
fn stats_reads_every_log_in_a_directory() {
    let dir = tempfile::tempdir().unwrap();
    simulate(dir.path(), "a.jsonl", "4", "1");
    fs::create_dir(dir.path().join("nested")).unwrap();
    simulate(&dir.path().join("nested"), "b.jsonl", "6", "2");
    fs::write(dir.path().join("notes.txt"), "not a log").unwrap();

    let dir_str = dir.path().to_string_lossy().into_owned();
    let (code, out, _) = run(&["blackjack", "stats", "--input", dir_str.as_str()]);
    assert_eq!(code, 0);
    let v: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(v["rounds"], 10);
}

#[test]
#[serial]
fn corrupted_lines_are_reported_and_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let path = simulate(dir.path(), "c.jsonl", "3", "9");
    let mut content = fs::read_to_string(&path).unwrap();
    content.insert_str(0, "{\"round_id\": 17}\n");
    content.push_str("{\"round_id\":\"half");
    fs::write(&path, content).unwrap();

    let (code, out, err) = run(&["blackjack", "stats", "--input", path.as_str()]);
    assert_eq!(code, 0);
    let v: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(v["rounds"], 3);
    assert!(err.contains(":1: "), "line number in error: {}", err);
    assert!(err.contains("Skipped 1 corrupted record(s)"));
    assert!(err.contains("Discarded 1 incomplete final line(s)"));
}

#[test]
#[serial]
fn file_without_rounds_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("junk.jsonl");
    fs::write(&path, "nope\n").unwrap();
    let path_str = path.to_string_lossy().into_owned();
    let (code, _, err) = run(&["blackjack", "stats", "--input", path_str.as_str()]);
    assert_eq!(code, 2);
    assert!(err.contains("No valid round records found"));
}

#[test]
#[serial]
fn missing_input_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.jsonl");
    let path_str = path.to_string_lossy().into_owned();
    let (code, _, err) = run(&["blackjack", "stats", "--input", path_str.as_str()]);
    assert_eq!(code, 2);
    assert!(err.contains("Failed to read"));
}
