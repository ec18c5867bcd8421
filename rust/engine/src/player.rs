use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::errors::GameError;
use crate::hand::Hand;
use crate::rules::{insurance_cap, validate_bet, RoundResult};

/// Default bankroll for a new player
pub const STARTING_MONEY: u32 = 1_000;

/// The seated player: bankroll, wagers for the current round, session
/// counters and one hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    starting_money: u32,
    money: u32,
    current_bet: u32,
    insurance_bet: u32,
    wins: u32,
    ties: u32,
    losses: u32,
    standing: bool,
    doubled_down: bool,
    at_table: bool,
    hand: Hand,
}

impl Player {
    pub fn new(name: impl Into<String>, money: u32) -> Self {
        Self {
            name: name.into(),
            starting_money: money,
            money,
            current_bet: 0,
            insurance_bet: 0,
            wins: 0,
            ties: 0,
            losses: 0,
            standing: false,
            doubled_down: false,
            at_table: true,
            hand: Hand::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn money(&self) -> u32 {
        self.money
    }
    /// Bankroll the player sat down with.
    pub fn starting_money(&self) -> u32 {
        self.starting_money
    }
    pub fn current_bet(&self) -> u32 {
        self.current_bet
    }
    pub fn insurance_bet(&self) -> u32 {
        self.insurance_bet
    }
    pub fn wins(&self) -> u32 {
        self.wins
    }
    pub fn ties(&self) -> u32 {
        self.ties
    }
    pub fn losses(&self) -> u32 {
        self.losses
    }
    pub fn is_standing(&self) -> bool {
        self.standing
    }
    pub fn has_doubled_down(&self) -> bool {
        self.doubled_down
    }
    pub fn is_at_table(&self) -> bool {
        self.at_table
    }
    pub fn hand(&self) -> &Hand {
        &self.hand
    }
    pub fn points(&self) -> u32 {
        self.hand.points()
    }

    /// Whether the bankroll is above what the player sat down with.
    pub fn finished_ahead(&self) -> bool {
        self.money > self.starting_money
    }

    /// Reserves the main bet. Nothing changes when the amount is rejected.
    pub fn place_bet(&mut self, amount: u32) -> Result<(), GameError> {
        validate_bet(amount, self.money)?;
        self.money -= amount;
        self.current_bet = amount;
        Ok(())
    }

    /// Reserves the insurance side bet, capped at half the main bet.
    ///
    /// Only the amount is checked here; whether insurance is on offer at all
    /// is decided by [`crate::rules::legal_actions`].
    pub fn place_insurance(&mut self, amount: u32) -> Result<(), GameError> {
        validate_bet(amount, insurance_cap(self.money, self.current_bet))?;
        self.money -= amount;
        self.insurance_bet = amount;
        Ok(())
    }

    /// Takes a second stake equal to the main bet and doubles it.
    pub(crate) fn commit_double_down(&mut self) -> Result<(), GameError> {
        let stake = self.current_bet;
        self.money = self
            .money
            .checked_sub(stake)
            .ok_or(GameError::InvalidBet {
                amount: stake,
                minimum: stake,
                maximum: self.money,
            })?;
        self.current_bet = stake.saturating_mul(2);
        self.doubled_down = true;
        Ok(())
    }

    pub(crate) fn take(&mut self, card: Card) {
        self.hand.add_card(card);
    }

    pub(crate) fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    pub(crate) fn stand(&mut self) {
        self.standing = true;
    }

    pub(crate) fn credit(&mut self, amount: u32) {
        self.money = self.money.saturating_add(amount);
    }

    pub(crate) fn record(&mut self, result: RoundResult) {
        match result {
            RoundResult::Win => self.wins += 1,
            RoundResult::Tie => self.ties += 1,
            RoundResult::Loss => self.losses += 1,
        }
    }

    pub fn reset_bets(&mut self) {
        self.current_bet = 0;
        self.insurance_bet = 0;
    }

    pub fn reset_cards(&mut self) {
        self.hand.clear();
        self.standing = false;
        self.doubled_down = false;
    }

    pub fn leave_table(&mut self) {
        self.at_table = false;
    }

    /// Starts over with the same name and starting bankroll.
    pub fn full_reset(&mut self) {
        *self = Player::new(std::mem::take(&mut self.name), self.starting_money);
    }
}
