//! Command-line argument definitions.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "blackjack",
    version,
    about = "Single-table Blackjack against the dealer"
)]
pub struct BlackjackCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play an interactive session on stdin
    Play {
        /// Name shown at the table
        #[arg(long)]
        name: Option<String>,
        /// Starting bankroll
        #[arg(long)]
        money: Option<u32>,
        /// Shuffle seed; random when omitted
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Let an automatic player play a number of rounds
    Sim {
        #[arg(long)]
        rounds: u64,
        #[arg(long)]
        seed: Option<u64>,
        /// Automatic player to seat (e.g. "baseline")
        #[arg(long)]
        ai: Option<String>,
        #[arg(long)]
        money: Option<u32>,
        /// Write one JSON line per settled round to this file
        #[arg(long)]
        output: Option<String>,
    },
    /// Summarize a JSONL round log (file or directory)
    Stats {
        #[arg(long)]
        input: String,
    },
    /// Print the resolved configuration and where each value came from
    Cfg,
}

/// Subcommand names, in the order `--help` lists them.
pub const COMMANDS: &[&str] = &["play", "sim", "stats", "cfg"];

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_list_matches_subcommands() {
        let cmd = BlackjackCli::command();
        let names: Vec<&str> = cmd.get_subcommands().map(|c| c.get_name()).collect();
        assert_eq!(names, COMMANDS);
    }

    #[test]
    fn sim_requires_rounds() {
        assert!(BlackjackCli::try_parse_from(["blackjack", "sim"]).is_err());
        let parsed = BlackjackCli::try_parse_from(["blackjack", "sim", "--rounds", "5"]).unwrap();
        assert!(matches!(parsed.cmd, Commands::Sim { rounds: 5, .. }));
    }
}
