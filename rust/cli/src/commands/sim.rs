//! Simulation command handler.
//!
//! Seats an automatic player at the table and plays a number of rounds
//! without input. Rounds can be logged as JSONL for the `stats` command.
//!
//! # Environment Variables
//!
//! - `BLACKJACK_SIM_BREAK_AFTER`: Stop after N rounds and report an interruption (for testing)
//!
//! # Examples
//!
//! ```no_run
//! use blackjack_cli::commands::sim::handle_sim_command;
//! use std::io;
//!
//! let mut out = io::stdout();
//! let mut err = io::stderr();
//!
//! // 500 rounds with seed 42, logged to data/sim.jsonl
//! handle_sim_command(500, Some(42), None, None, Some("data/sim.jsonl".to_string()), &mut out, &mut err).unwrap();
//! ```

use crate::config::{self, Overrides};
use crate::error::CliError;
use crate::ui;
use blackjack_ai::{AutoPlayer, create_ai};
use blackjack_engine::engine::Engine;
use blackjack_engine::game::Phase;
use blackjack_engine::logger::{RoundLogger, RoundRecord};
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

pub const ENV_BREAK_AFTER: &str = "BLACKJACK_SIM_BREAK_AFTER";

/// Handle the sim command.
///
/// Plays up to `rounds` rounds with the configured automatic player. The run
/// stops early when the player goes bankrupt or declines another round.
///
/// # Returns
///
/// `Ok(())` on success, `CliError::Interrupted` when stopped by
/// `BLACKJACK_SIM_BREAK_AFTER`, or another `CliError` on failure
pub fn handle_sim_command(
    rounds: u64,
    seed: Option<u64>,
    ai: Option<String>,
    money: Option<u32>,
    output: Option<String>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if rounds == 0 {
        ui::write_error(err, "rounds must be >= 1")?;
        return Err(CliError::InvalidInput("rounds must be >= 1".to_string()));
    }

    let resolved = config::load_with_overrides(Overrides {
        starting_money: money,
        seed,
        player_name: None,
        ai,
    })
    .map_err(|e| CliError::Config(format!("Invalid configuration: {}", e)))?;
    let cfg = resolved.config;

    let player = match create_ai(&cfg.ai) {
        Ok(p) => p,
        Err(e) => {
            ui::write_error(err, &e.to_string())?;
            return Err(e.into());
        }
    };
    let seed = cfg.seed.unwrap_or_else(rand::random);

    let mut logger = match output.map(PathBuf::from) {
        Some(path) => match RoundLogger::create(&path) {
            Ok(l) => Some(l),
            Err(e) => {
                ui::write_error(err, &format!("Failed to open output file: {}", e))?;
                return Err(CliError::Io(e));
            }
        },
        None => None,
    };

    let break_after = std::env::var(ENV_BREAK_AFTER)
        .ok()
        .and_then(|v| v.parse::<u64>().ok());

    let mut engine = Engine::new(Some(seed), player.name(), cfg.starting_money);
    let mut completed = 0u64;

    while completed < rounds {
        play_round(&mut engine, player.as_ref())?;
        completed += 1;

        if let Some(logger) = logger.as_mut()
            && let Some(rec) = RoundRecord::from_engine(&engine, logger.next_id())
        {
            logger.write(&rec)?;
        }

        if let Some(b) = break_after
            && completed == b
            && completed < rounds
        {
            writeln!(out, "Interrupted: played {}/{}", completed, rounds)?;
            return Err(CliError::Interrupted(format!(
                "Interrupted: played {}/{}",
                completed, rounds
            )));
        }

        if engine.is_session_over() || completed == rounds {
            break;
        }
        let again = player.play_again(&engine);
        engine.confirm_play_again(again)?;
        if !again {
            break;
        }
    }

    let p = engine.player();
    info!(rounds = completed, seed, money = p.money(), "simulation finished");
    writeln!(
        out,
        "Simulated: {} rounds (ai={} seed={})",
        completed,
        player.name(),
        seed
    )?;
    writeln!(
        out,
        "Record: {} won, {} tied, {} lost",
        p.wins(),
        p.ties(),
        p.losses()
    )?;
    writeln!(
        out,
        "Money: {} -> {} ({:+})",
        p.starting_money(),
        p.money(),
        i64::from(p.money()) - i64::from(p.starting_money())
    )?;
    if p.money() == 0 {
        writeln!(out, "Bankrupt after {} rounds", completed)?;
    }
    Ok(())
}

fn play_round(engine: &mut Engine, player: &dyn AutoPlayer) -> Result<(), CliError> {
    let bet = player.bet(engine);
    engine.place_bet(bet)?;
    while engine.phase() == Phase::PlayerTurn {
        let command = player.decide(engine);
        engine.apply(command)?;
    }
    Ok(())
}
