use serde::{Deserialize, Serialize};

use crate::rules::Action;

/// How a round ended for the session as a whole.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    /// Bankroll left; waiting for the play-again answer.
    AwaitingReplay,
    /// The player chose to leave the table.
    Left,
    /// Bankroll reached zero.
    Bankrupt,
}

/// States of a single round.
///
/// `Betting` and `PlayerTurn` wait for player commands, as does
/// `RoundEnd(AwaitingReplay)`. The other states are passed through by the
/// engine on its own.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Betting,
    Dealing,
    PlayerTurn,
    DealerReveal,
    DealerDraw,
    Resolution,
    RoundEnd(SessionStatus),
}

impl Phase {
    /// Whether the engine is waiting on the player in this state.
    pub fn awaits_input(self) -> bool {
        matches!(
            self,
            Phase::Betting | Phase::PlayerTurn | Phase::RoundEnd(SessionStatus::AwaitingReplay)
        )
    }

    pub fn is_session_over(self) -> bool {
        matches!(
            self,
            Phase::RoundEnd(SessionStatus::Left) | Phase::RoundEnd(SessionStatus::Bankrupt)
        )
    }
}

/// Everything a front end can ask of the engine.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Command {
    PlaceBet(u32),
    Insurance(u32),
    Hit,
    Stand,
    DoubleDown,
    PlayAgain(bool),
}

impl Command {
    /// The player-turn action this command corresponds to, if any.
    pub fn action(self) -> Option<Action> {
        match self {
            Command::Hit => Some(Action::Hit),
            Command::Stand => Some(Action::Stand),
            Command::DoubleDown => Some(Action::DoubleDown),
            Command::Insurance(_) => Some(Action::Insurance),
            Command::PlaceBet(_) | Command::PlayAgain(_) => None,
        }
    }
}
