use std::fs;
use std::path::PathBuf;

use blackjack_engine::cards::{Card, Rank as R, Suit as S};
use blackjack_engine::deck::Shoe;
use blackjack_engine::engine::Engine;
use blackjack_engine::logger::{format_round_id, RoundLogger, RoundRecord};
use blackjack_engine::player::Player;
use blackjack_engine::rules::{Action, Resolution};

fn tmp_path(name: &str) -> PathBuf {
    let mut p = PathBuf::from("target");
    p.push(format!("{}_{}.jsonl", name, std::process::id()));
    p
}

fn settled_engine() -> Engine {
    let cards = vec![
        Card::new(S::Hearts, R::Ten),
        Card::new(S::Clubs, R::Eight),
        Card::new(S::Spades, R::Nine),
        Card::new(S::Diamonds, R::Nine),
    ];
    let mut e = Engine::with_shoe(Shoe::stacked(cards, 0), Player::new("Ada", 500));
    e.place_bet(40).expect("bet");
    e.stand().expect("stand");
    e
}

#[test]
fn record_is_empty_before_any_round() {
    let e = Engine::new(Some(3), "Ada", 500);
    assert!(RoundRecord::from_engine(&e, "20250102-000001".into()).is_none());
}

#[test]
fn record_captures_the_settled_round() {
    let e = settled_engine();
    let rec = RoundRecord::from_engine(&e, format_round_id("20250102", 1)).expect("settled");
    assert_eq!(rec.round_id, "20250102-000001");
    assert_eq!(rec.seed, None);
    assert_eq!(rec.actions, vec![Action::Stand]);
    assert_eq!(rec.player_points, 19);
    assert_eq!(rec.dealer_points, 17);
    assert_eq!(rec.dealer_cards.len(), 2);
    assert!(rec.dealer_cards.iter().all(|c| c.is_face_up()));
    assert_eq!(rec.settlement.resolution, Resolution::PlayerHigher);
    assert_eq!(rec.money_after, 540);
    assert!(rec.ts.is_none());
}

#[test]
fn writes_jsonl_with_lf_only() {
    let path = tmp_path("roundlog");
    let mut logger = RoundLogger::create(&path).expect("create logger");
    let e = settled_engine();
    let id = logger.next_id();
    let rec = RoundRecord::from_engine(&e, id).expect("settled");
    logger.write(&rec).expect("write");
    logger.write(&rec).expect("write");

    let bytes = fs::read(&path).expect("read file");
    assert!(bytes.ends_with(b"\n"));
    assert!(!bytes.contains(&b'\r'));
    let content = String::from_utf8(bytes).expect("utf8");
    assert_eq!(content.lines().count(), 2);
    let _ = fs::remove_file(&path);
}

#[test]
fn sequential_ids_increment() {
    let mut logger = RoundLogger::with_seq_for_test("20251231");
    assert_eq!(logger.next_id(), "20251231-000001");
    assert_eq!(logger.next_id(), "20251231-000002");
}

#[test]
fn ts_is_generated_when_missing_and_preserved_when_present() {
    let path = tmp_path("roundlog_ts");
    let mut logger = RoundLogger::create(&path).expect("create logger");
    let e = settled_engine();

    let rec = RoundRecord::from_engine(&e, "20250102-000010".into()).expect("settled");
    logger.write(&rec).expect("write");

    let mut fixed = rec.clone();
    fixed.round_id = "20250102-000011".into();
    fixed.ts = Some("2025-01-02T03:04:05Z".into());
    logger.write(&fixed).expect("write");

    let content = fs::read_to_string(&path).expect("read");
    let rows: Vec<RoundRecord> = content
        .lines()
        .map(|l| serde_json::from_str(l).expect("parse"))
        .collect();
    assert_eq!(rows.len(), 2);
    assert!(rows[0].ts.as_deref().is_some_and(|t| t.ends_with('Z')));
    assert_eq!(rows[1].ts.as_deref(), Some("2025-01-02T03:04:05Z"));
    assert_eq!(rows[1].settlement, rec.settlement);
    let _ = fs::remove_file(&path);
}

#[test]
fn create_makes_missing_parent_dirs() {
    let dir = PathBuf::from("target").join(format!("nested_logs_{}", std::process::id()));
    let path = dir.join("deeper").join("rounds.jsonl");
    let _ = fs::remove_dir_all(&dir);

    let mut logger = RoundLogger::create(&path).expect("create logger");
    let rec = RoundRecord::from_engine(&settled_engine(), logger.next_id()).expect("settled");
    logger.write(&rec).expect("write");

    assert_eq!(fs::read_to_string(&path).expect("read").lines().count(), 1);
    let _ = fs::remove_dir_all(&dir);
}
