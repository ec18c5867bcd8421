use serde::{Deserialize, Serialize};

use crate::cards::Rank;
use crate::dealer::Dealer;
use crate::errors::GameError;
use crate::hand::Hand;
use crate::player::Player;

/// Smallest wager accepted for the main bet and for insurance.
pub const MIN_BET: u32 = 1;

/// Decisions available to the player during their turn.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Action {
    Hit,
    Stand,
    DoubleDown,
    Insurance,
}

/// Checks `MIN_BET <= amount <= maximum`.
///
/// # Examples
///
/// ```
/// use blackjack_engine::rules::validate_bet;
/// use blackjack_engine::errors::GameError;
///
/// assert!(validate_bet(50, 1000).is_ok());
/// assert!(matches!(validate_bet(0, 1000), Err(GameError::InvalidBet { .. })));
/// assert!(matches!(validate_bet(1001, 1000), Err(GameError::InvalidBet { .. })));
/// ```
pub fn validate_bet(amount: u32, maximum: u32) -> Result<(), GameError> {
    if amount < MIN_BET || amount > maximum {
        return Err(GameError::InvalidBet {
            amount,
            minimum: MIN_BET,
            maximum,
        });
    }
    Ok(())
}

/// Largest insurance wager: half the main bet, rounded down, limited by the
/// bankroll.
pub fn insurance_cap(money: u32, current_bet: u32) -> u32 {
    money.min(current_bet / 2)
}

/// Actions the player may take right now, in menu order.
///
/// Hit and Stand are always present. Double down needs exactly two cards and
/// enough money to match the bet. Insurance is offered once, on a two-card
/// hand, when the dealer shows an Ace and the bet is large enough to halve.
pub fn legal_actions(player: &Player, dealer: &Dealer) -> Vec<Action> {
    let mut actions = vec![Action::Hit, Action::Stand];
    let two_cards = player.hand().len() == 2;

    if two_cards && player.money() >= player.current_bet() {
        actions.push(Action::DoubleDown);
    }

    let dealer_shows_ace = dealer.up_card().is_some_and(|c| c.rank == Rank::Ace);
    if dealer_shows_ace
        && two_cards
        && player.insurance_bet() == 0
        && player.current_bet() > 1
        && player.money() > 0
    {
        actions.push(Action::Insurance);
    }
    actions
}

/// Win/tie/loss bucket used for the session counters.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundResult {
    Win,
    Tie,
    Loss,
}

/// Which row of the payout table decided the round.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resolution {
    PlayerBust,
    DealerBustNatural,
    DealerBust,
    Push,
    PlayerNatural,
    PlayerHigher,
    DealerNaturalInsured,
    DealerNatural,
    DealerHigher,
}

impl Resolution {
    pub fn result(self) -> RoundResult {
        match self {
            Resolution::DealerBustNatural
            | Resolution::DealerBust
            | Resolution::PlayerNatural
            | Resolution::PlayerHigher => RoundResult::Win,
            Resolution::Push => RoundResult::Tie,
            Resolution::PlayerBust
            | Resolution::DealerNaturalInsured
            | Resolution::DealerNatural
            | Resolution::DealerHigher => RoundResult::Loss,
        }
    }
}

/// Outcome of a finished round and the amount returned to the bankroll.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Settlement {
    pub resolution: Resolution,
    pub bet: u32,
    pub insurance: u32,
    /// Paid back to the bankroll; stakes were already deducted.
    pub credit: u32,
}

impl Settlement {
    pub fn result(&self) -> RoundResult {
        self.resolution.result()
    }

    /// Bankroll change over the whole round.
    pub fn net(&self) -> i64 {
        i64::from(self.credit) - i64::from(self.bet) - i64::from(self.insurance)
    }
}

/// Resolves a round from the final hands.
///
/// Rows are checked in this order: player bust, dealer bust, equal totals,
/// player higher, dealer natural (insured or not), dealer higher. A natural
/// win pays 2.5x the bet, rounded down; a plain win pays 2x; a push returns
/// the bet, plus the insurance when both hands are naturals. Insurance
/// against a dealer natural pays 2x the insurance bet.
pub fn settle(player: &Hand, dealer: &Hand, bet: u32, insurance: u32) -> Settlement {
    let player_points = player.points();
    let dealer_points = dealer.points();

    let resolution = if player.is_bust() {
        Resolution::PlayerBust
    } else if dealer.is_bust() {
        if player.is_natural() {
            Resolution::DealerBustNatural
        } else {
            Resolution::DealerBust
        }
    } else if player_points == dealer_points {
        Resolution::Push
    } else if player_points > dealer_points {
        if player.is_natural() {
            Resolution::PlayerNatural
        } else {
            Resolution::PlayerHigher
        }
    } else if dealer.is_natural() {
        if insurance > 0 {
            Resolution::DealerNaturalInsured
        } else {
            Resolution::DealerNatural
        }
    } else {
        Resolution::DealerHigher
    };

    let bet64 = u64::from(bet);
    let credit = match resolution {
        Resolution::DealerBustNatural | Resolution::PlayerNatural => bet64 * 5 / 2,
        Resolution::DealerBust | Resolution::PlayerHigher => bet64 * 2,
        Resolution::Push if player.is_natural() && dealer.is_natural() => {
            bet64 + u64::from(insurance)
        }
        Resolution::Push => bet64,
        Resolution::DealerNaturalInsured => u64::from(insurance) * 2,
        Resolution::PlayerBust | Resolution::DealerNatural | Resolution::DealerHigher => 0,
    };

    Settlement {
        resolution,
        bet,
        insurance,
        credit: u32::try_from(credit).unwrap_or(u32::MAX),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, Suit};

    fn hand(ranks: &[Rank]) -> Hand {
        let mut h = Hand::new();
        for &r in ranks {
            h.add_card(Card::new(Suit::Spades, r));
        }
        h.adjust_aces();
        h
    }

    #[test]
    fn payout_rows() {
        use Rank::*;
        let natural = hand(&[Ace, King]);
        let twenty = hand(&[Ten, Queen]);
        let eighteen = hand(&[Ten, Eight]);
        let bust = hand(&[Ten, Six, Nine]);

        let cases = [
            (&bust, &bust, 0, Resolution::PlayerBust, 0),
            (&natural, &bust, 0, Resolution::DealerBustNatural, 25),
            (&eighteen, &bust, 0, Resolution::DealerBust, 20),
            (&twenty, &twenty, 0, Resolution::Push, 10),
            (&natural, &natural, 5, Resolution::Push, 15),
            (&natural, &twenty, 0, Resolution::PlayerNatural, 25),
            (&twenty, &eighteen, 0, Resolution::PlayerHigher, 20),
            (&twenty, &natural, 5, Resolution::DealerNaturalInsured, 10),
            (&twenty, &natural, 0, Resolution::DealerNatural, 0),
            (&eighteen, &twenty, 0, Resolution::DealerHigher, 0),
        ];
        for (player, dealer, insurance, resolution, credit) in cases {
            let s = settle(player, dealer, 10, insurance);
            assert_eq!(s.resolution, resolution);
            assert_eq!(s.credit, credit, "{resolution:?}");
        }
    }

    #[test]
    fn natural_payout_rounds_down() {
        let s = settle(&hand(&[Rank::Ace, Rank::Jack]), &hand(&[Rank::Nine, Rank::Eight]), 7, 0);
        assert_eq!(s.credit, 17);
        assert_eq!(s.net(), 10);
    }

    #[test]
    fn insurance_cap_is_half_the_bet_within_bankroll() {
        assert_eq!(insurance_cap(1000, 100), 50);
        assert_eq!(insurance_cap(1000, 3), 1);
        assert_eq!(insurance_cap(20, 100), 20);
    }
}
