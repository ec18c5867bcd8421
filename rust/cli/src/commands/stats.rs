//! Statistics aggregation command for round logs.
//!
//! This module aggregates JSONL round logs written by `sim --output`. It
//! computes the number of rounds, the win/tie/loss split, the bankroll
//! change and how often each payout row decided a round.

use crate::error::{BatchValidationError, CliError};
use crate::io_utils::read_text;
use crate::ui;
use blackjack_engine::logger::RoundRecord;
use blackjack_engine::rules::RoundResult;
use std::collections::BTreeMap;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Default)]
struct StatsState {
    rounds: u64,
    wins: u64,
    ties: u64,
    losses: u64,
    net: i64,
    wagered: u64,
    resolutions: BTreeMap<String, u64>,
    skipped: u64,
    corrupted: Vec<BatchValidationError<String>>,
}

/// Aggregates statistics from a JSONL round log, or every `.jsonl` file
/// below a directory.
///
/// Corrupted lines are reported on `err` and left out of the totals. A
/// final line without a trailing newline is treated as an interrupted write
/// and discarded.
///
/// # Returns
///
/// `Ok(())` when at least one round was read, otherwise an `Err` that maps
/// to exit code `2`.
pub fn handle_stats_command(
    input: String,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let path = Path::new(&input);
    let mut state = StatsState::default();

    if path.is_dir() {
        let mut stack = vec![path.to_path_buf()];
        while let Some(d) = stack.pop() {
            let rd = match std::fs::read_dir(&d) {
                Ok(v) => v,
                Err(_) => continue,
            };
            let mut entries: Vec<_> = rd.filter_map(Result::ok).map(|e| e.path()).collect();
            entries.sort();
            for p in entries {
                if p.is_dir() {
                    stack.push(p);
                } else if p.extension().is_some_and(|ext| ext == "jsonl") {
                    let name = p.to_string_lossy().into_owned();
                    match read_text(&name) {
                        Ok(content) => consume_content(&name, &content, &mut state),
                        Err(e) => state.corrupted.push(BatchValidationError {
                            item_context: name,
                            message: e,
                        }),
                    }
                }
            }
        }
    } else {
        match read_text(&input) {
            Ok(content) => consume_content(&input, &content, &mut state),
            Err(e) => {
                ui::write_error(err, &format!("Failed to read {}: {}", input, e))?;
                return Err(CliError::InvalidInput(format!(
                    "Failed to read {}: {}",
                    input, e
                )));
            }
        }
    }

    for problem in &state.corrupted {
        ui::write_error(err, &problem.to_string())?;
    }
    if !state.corrupted.is_empty() {
        ui::display_warning(
            err,
            &format!("Skipped {} corrupted record(s)", state.corrupted.len()),
        )?;
    }
    if state.skipped > 0 {
        ui::display_warning(
            err,
            &format!("Discarded {} incomplete final line(s)", state.skipped),
        )?;
    }
    if state.rounds == 0 {
        ui::write_error(err, "No valid round records found")?;
        return Err(CliError::InvalidInput(
            "No valid round records found".to_string(),
        ));
    }

    let summary = serde_json::json!({
        "rounds": state.rounds,
        "wins": state.wins,
        "ties": state.ties,
        "losses": state.losses,
        "net": state.net,
        "wagered": state.wagered,
        "resolutions": state.resolutions,
    });
    let json_output = serde_json::to_string_pretty(&summary)
        .map_err(|e| CliError::InvalidInput(format!("Failed to serialize stats: {}", e)))?;
    writeln!(out, "{}", json_output)?;
    Ok(())
}

fn consume_content(source: &str, content: &str, state: &mut StatsState) {
    let has_trailing_nl = content.ends_with('\n');
    let lines: Vec<(usize, &str)> = content
        .lines()
        .enumerate()
        .filter(|(_, l)| !l.trim().is_empty())
        .collect();
    let last = lines.len().saturating_sub(1);

    for (idx, (line_no, line)) in lines.iter().enumerate() {
        let rec: RoundRecord = match serde_json::from_str(line) {
            Ok(r) => r,
            Err(e) => {
                if idx == last && !has_trailing_nl {
                    state.skipped += 1;
                } else {
                    state.corrupted.push(BatchValidationError {
                        item_context: format!("{}:{}", source, line_no + 1),
                        message: e.to_string(),
                    });
                }
                continue;
            }
        };

        let settlement = rec.settlement;
        state.rounds += 1;
        match settlement.result() {
            RoundResult::Win => state.wins += 1,
            RoundResult::Tie => state.ties += 1,
            RoundResult::Loss => state.losses += 1,
        }
        state.net += settlement.net();
        state.wagered += u64::from(settlement.bet) + u64::from(settlement.insurance);
        let key = serde_json::to_value(settlement.resolution)
            .ok()
            .and_then(|v| v.as_str().map(str::to_string))
            .unwrap_or_else(|| format!("{:?}", settlement.resolution));
        *state.resolutions.entry(key).or_insert(0) += 1;
    }
}
