//! # blackjack-ai: Automatic Players for Blackjack
//!
//! Provides scripted players that can sit at the table in place of a human.
//! The simulator drives the engine through the [`AutoPlayer`] trait, so any
//! strategy implementing it can be benchmarked over many seeded rounds.
//!
//! ## Core Components
//!
//! - [`AutoPlayer`] - Trait answering the three questions a round asks
//! - [`baseline`] - Dealer-mimicking strategy used as the reference player
//! - [`create_ai`] - Factory function for building players by name
//!
//! ## Quick Start
//!
//! ```rust
//! use blackjack_ai::create_ai;
//! use blackjack_engine::engine::Engine;
//! use blackjack_engine::game::Phase;
//!
//! let ai = create_ai("baseline").expect("known player");
//! let mut engine = Engine::new(Some(42), ai.name(), 500);
//!
//! engine.place_bet(ai.bet(&engine)).expect("bet within bankroll");
//! while engine.phase() == Phase::PlayerTurn {
//!     let command = ai.decide(&engine);
//!     engine.apply(command).expect("legal command");
//! }
//! assert!(engine.last_settlement().is_some());
//! ```

use std::fmt;

use blackjack_engine::engine::Engine;
use blackjack_engine::game::Command;

pub mod baseline;

/// A player that answers the engine without a keyboard.
///
/// Implementations only read the table; the caller applies the returned
/// commands, so an answer outside the legal set is reported by the engine
/// like any other rejected command.
pub trait AutoPlayer: Send + Sync {
    /// Main bet for the next round. Called in the betting phase.
    fn bet(&self, engine: &Engine) -> u32;

    /// Next command during the player's turn: hit, stand, double down or
    /// insurance.
    fn decide(&self, engine: &Engine) -> Command;

    /// Answer to the play-again question once a round has been settled.
    fn play_again(&self, engine: &Engine) -> bool;

    fn name(&self) -> &str;
}

/// Returned by [`create_ai`] for a name it does not know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAi(pub String);

impl fmt::Display for UnknownAi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown AI type: {} (available: {})",
            self.0,
            AI_TYPES.join(", ")
        )
    }
}

impl std::error::Error for UnknownAi {}

/// Names accepted by [`create_ai`].
pub const AI_TYPES: &[&str] = &["baseline"];

/// Builds an automatic player by type name.
///
/// # Example
///
/// ```rust
/// use blackjack_ai::create_ai;
///
/// let ai = create_ai("baseline").unwrap();
/// assert_eq!(ai.name(), "BaselineAI");
/// assert!(create_ai("card-counter").is_err());
/// ```
pub fn create_ai(ai_type: &str) -> Result<Box<dyn AutoPlayer>, UnknownAi> {
    match ai_type.trim().to_ascii_lowercase().as_str() {
        "baseline" => Ok(Box::new(baseline::BaselineAI::new())),
        _ => Err(UnknownAi(ai_type.to_string())),
    }
}
