//! # Play Command
//!
//! Interactive Blackjack session against the dealer.
//!
//! The player types bets, turn actions and the play-again answer on stdin;
//! the table is drawn from [`Engine::snapshot`] so the dealer's hole card
//! stays hidden until the dealer plays.
//!
//! ## Features
//!
//! - Input aliases for every action (`h`/`s`/`d`/`i 50`, `1`/`2`, `y`/`n`)
//! - Rejected input or commands are reported and asked again
//! - Graceful quit handling (`q`, `quit` or end of input)
//! - Session summary with the win/tie/loss record

use crate::config::{self, Overrides};
use crate::error::CliError;
use crate::formatters::{format_action_menu, format_hand, format_resolution};
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{ParseResult, parse_bet, parse_play_again, parse_player_action};
use blackjack_engine::engine::Engine;
use blackjack_engine::game::{Command, Phase, SessionStatus};
use std::io::{BufRead, Write};
use tracing::debug;

/// Handle the play command: interactive session over `stdin`.
///
/// Command-line values override the configuration file and environment.
///
/// # Returns
///
/// * `Ok(())` when the session ends (left, bankrupt, quit or end of input)
/// * `Err(CliError)` on invalid configuration or I/O errors
///
/// # Examples
///
/// ```ignore
/// use std::io::{stdin, stdout, stderr};
///
/// let mut input = stdin().lock();
/// handle_play_command(None, Some(500), Some(7), &mut stdout(), &mut stderr(), &mut input).unwrap();
/// ```
pub fn handle_play_command(
    name: Option<String>,
    money: Option<u32>,
    seed: Option<u64>,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let resolved = config::load_with_overrides(Overrides {
        starting_money: money,
        seed,
        player_name: name,
        ai: None,
    })
    .map_err(|e| CliError::Config(format!("Invalid configuration: {}", e)))?;
    let cfg = resolved.config;
    let seed = cfg.seed.unwrap_or_else(rand::random);

    writeln!(
        out,
        "play: player={} money={} seed={}",
        cfg.player_name, cfg.starting_money, seed
    )?;

    let mut engine = Engine::new(Some(seed), cfg.player_name, cfg.starting_money);
    let quit = run_session(&mut engine, out, err, stdin)?;
    write_summary(&engine, quit, out)
}

// Returns true when the player quit instead of finishing the session.
fn run_session(
    engine: &mut Engine,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<bool, CliError> {
    loop {
        let parsed = match engine.phase() {
            Phase::Betting => {
                let money = engine.player().money();
                writeln!(out, "\nRound {} | Money: {}", engine.round() + 1, money)?;
                ui::prompt(out, &format!("Place your bet (1-{}, q to quit): ", money))?;
                read_stdin_line(stdin).map(|line| parse_bet(&line))
            }
            Phase::PlayerTurn => {
                let menu = format_action_menu(&engine.legal_actions());
                ui::prompt(out, &format!("Action ({}): ", menu))?;
                read_stdin_line(stdin).map(|line| parse_player_action(&line))
            }
            Phase::RoundEnd(SessionStatus::AwaitingReplay) => {
                ui::prompt(out, "Play another round? (yes/no): ")?;
                read_stdin_line(stdin).map(|line| parse_play_again(&line))
            }
            Phase::RoundEnd(_) => return Ok(false),
            other => {
                return Err(CliError::Engine(format!(
                    "engine stopped in {:?} without waiting for input",
                    other
                )));
            }
        };

        let command = match parsed {
            None | Some(ParseResult::Quit) => return Ok(true),
            Some(ParseResult::Invalid(msg)) => {
                ui::write_error(err, &msg)?;
                continue;
            }
            Some(ParseResult::Action(command)) => command,
        };

        match engine.apply(command) {
            Ok(phase) => {
                if matches!(command, Command::PlayAgain(_)) {
                    continue;
                }
                write_table(engine, out)?;
                if let Phase::RoundEnd(status) = phase {
                    write_outcome(engine, out)?;
                    if status == SessionStatus::Bankrupt {
                        writeln!(out, "You are out of money.")?;
                    }
                }
            }
            Err(e) => {
                debug!(?command, error = %e, "command rejected");
                ui::write_error(err, &e.to_string())?;
            }
        }
    }
}

fn write_table(engine: &Engine, out: &mut dyn Write) -> Result<(), CliError> {
    let table = engine.snapshot();
    writeln!(
        out,
        "Dealer: {} ({})",
        format_hand(&table.dealer_cards),
        table.dealer_points
    )?;
    writeln!(
        out,
        "{}: {} ({})",
        table.player_name,
        format_hand(&table.player_cards),
        table.player_points
    )?;
    if table.current_bet > 0 {
        write!(out, "Bet: {}", table.current_bet)?;
        if table.insurance_bet > 0 {
            write!(out, " | Insurance: {}", table.insurance_bet)?;
        }
        writeln!(out, " | Money: {}", table.money)?;
    }
    Ok(())
}

fn write_outcome(engine: &Engine, out: &mut dyn Write) -> Result<(), CliError> {
    let Some(settlement) = engine.last_settlement() else {
        return Ok(());
    };
    let player = engine.player();
    writeln!(out, "{}", format_resolution(&settlement.resolution))?;
    writeln!(
        out,
        "Paid: {} | Net: {:+} | Money: {}",
        settlement.credit,
        settlement.net(),
        player.money()
    )?;
    writeln!(
        out,
        "Record: {} won, {} tied, {} lost",
        player.wins(),
        player.ties(),
        player.losses()
    )?;
    Ok(())
}

fn write_summary(engine: &Engine, quit: bool, out: &mut dyn Write) -> Result<(), CliError> {
    let player = engine.player();
    if quit {
        writeln!(out, "\nQuit.")?;
    }
    writeln!(
        out,
        "Session over: {} leaves with {} (started with {})",
        player.name(),
        player.money(),
        player.starting_money()
    )?;
    if player.finished_ahead() {
        writeln!(out, "You left with more money than you started with!")?;
    } else {
        writeln!(out, "Better luck next time.")?;
    }
    writeln!(out, "Rounds played: {}", engine.round())?;
    Ok(())
}
