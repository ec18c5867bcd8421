use thiserror::Error;

use crate::game::Phase;
use crate::rules::Action;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid bet amount: {amount}, must be between {minimum} and {maximum}")]
    InvalidBet {
        amount: u32,
        minimum: u32,
        maximum: u32,
    },
    #[error("Action {action:?} is not available during {phase:?}")]
    IllegalAction { action: Action, phase: Phase },
    #[error("Command expects phase {expected:?}, but the round is in {actual:?}")]
    WrongPhase { expected: Phase, actual: Phase },
    #[error("Shoe is empty")]
    EmptyShoe,
    #[error("Session is over")]
    SessionOver,
}
