//! Baseline automatic player.
//!
//! Plays the way the house does, with one concession to the player's
//! options: it doubles a hard 10 or 11.

use crate::AutoPlayer;
use blackjack_engine::engine::Engine;
use blackjack_engine::game::Command;
use blackjack_engine::rules::Action;

/// Flat bet used when no other unit is given.
pub const DEFAULT_UNIT: u32 = 10;

/// Reference strategy for simulations.
///
/// - Bets the same unit every round, or the whole bankroll when less is left
/// - Hits below 17 and stands on 17 or more, like the dealer
/// - Doubles down on a hard 10 or 11 when the engine allows it
/// - Never takes insurance
/// - Always plays another round while it has money
///
/// # Example
///
/// ```rust
/// use blackjack_ai::baseline::BaselineAI;
/// use blackjack_ai::AutoPlayer;
/// use blackjack_engine::engine::Engine;
///
/// let ai = BaselineAI::with_unit(25);
/// let engine = Engine::new(Some(1), "Bot", 1000);
/// assert_eq!(ai.bet(&engine), 25);
/// ```
#[derive(Debug, Clone)]
pub struct BaselineAI {
    unit: u32,
}

impl BaselineAI {
    pub fn new() -> Self {
        Self::with_unit(DEFAULT_UNIT)
    }

    /// Uses `unit` as the flat bet. A zero unit is raised to 1.
    pub fn with_unit(unit: u32) -> Self {
        Self { unit: unit.max(1) }
    }

    pub fn unit(&self) -> u32 {
        self.unit
    }
}

impl Default for BaselineAI {
    fn default() -> Self {
        Self::new()
    }
}

impl AutoPlayer for BaselineAI {
    fn bet(&self, engine: &Engine) -> u32 {
        self.unit.min(engine.player().money())
    }

    fn decide(&self, engine: &Engine) -> Command {
        let hand = engine.player().hand();
        let points = hand.points();
        let legal = engine.legal_actions();

        if !hand.is_soft() && (points == 10 || points == 11) && legal.contains(&Action::DoubleDown)
        {
            return Command::DoubleDown;
        }
        if points < 17 {
            Command::Hit
        } else {
            Command::Stand
        }
    }

    fn play_again(&self, engine: &Engine) -> bool {
        engine.player().money() > 0
    }

    fn name(&self) -> &str {
        "BaselineAI"
    }
}
