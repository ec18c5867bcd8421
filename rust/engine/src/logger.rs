use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::engine::Engine;
use crate::rules::{Action, Settlement};

/// One settled round, serialized as a single JSONL line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Unique identifier for this round (format: YYYYMMDD-NNNNNN)
    pub round_id: String,
    /// Seed behind the shoe shuffle, if any
    pub seed: Option<u64>,
    /// Player decisions in the order they were taken
    pub actions: Vec<Action>,
    pub player_cards: Vec<Card>,
    pub dealer_cards: Vec<Card>,
    pub player_points: u32,
    pub dealer_points: u32,
    pub settlement: Settlement,
    /// Bankroll once the round was paid out
    pub money_after: u32,
    /// Timestamp when the round was played (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
}

impl RoundRecord {
    /// Captures the round the engine just settled. `None` until a round has
    /// been settled.
    pub fn from_engine(engine: &Engine, round_id: String) -> Option<Self> {
        let settlement = *engine.last_settlement()?;
        Some(Self {
            round_id,
            seed: engine.seed(),
            actions: engine.round_actions().to_vec(),
            player_cards: engine.player().hand().cards().to_vec(),
            dealer_cards: engine.dealer().hand().cards().to_vec(),
            player_points: engine.player().points(),
            dealer_points: engine.dealer().points(),
            settlement,
            money_after: engine.player().money(),
            ts: None,
        })
    }
}

pub fn format_round_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

pub struct RoundLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl RoundLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let f = File::create(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        })
    }

    /// Logger that only hands out ids, for tests and dry runs.
    pub fn with_seq_for_test(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_round_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &RoundRecord) -> std::io::Result<()> {
        // inject timestamp if missing
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(())
    }
}
