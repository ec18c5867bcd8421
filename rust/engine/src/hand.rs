use serde::{Deserialize, Serialize};

use crate::cards::Card;

pub const BLACKJACK: u32 = 21;

/// Result of lowering Aces after a hand went over 21.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum AceAdjustment {
    /// Hand total is 21 or less.
    Settled(u32),
    /// Every Ace is already worth 1 and the hand is still over 21.
    Bust(u32),
}

impl AceAdjustment {
    pub fn points(self) -> u32 {
        match self {
            AceAdjustment::Settled(p) | AceAdjustment::Bust(p) => p,
        }
    }

    pub fn is_bust(self) -> bool {
        matches!(self, AceAdjustment::Bust(_))
    }
}

/// Cards held by the dealer or the player, in the order they were dealt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Sum of the current card values; face-down cards count 0.
    pub fn points(&self) -> u32 {
        self.cards.iter().map(|c| u32::from(c.value())).sum()
    }

    /// Lowers Aces worth 11 to 1, in hand order, until the total is 21 or less.
    ///
    /// Stops at the first conversion that brings the hand back under the
    /// limit, so later Aces keep 11. Does nothing when the hand is not over 21.
    pub fn adjust_aces(&mut self) -> AceAdjustment {
        let mut points = self.points();
        for card in self.cards.iter_mut() {
            if points <= BLACKJACK {
                break;
            }
            if card.soften() {
                points -= 10;
            }
        }
        if points > BLACKJACK {
            AceAdjustment::Bust(points)
        } else {
            AceAdjustment::Settled(points)
        }
    }

    pub fn is_bust(&self) -> bool {
        self.points() > BLACKJACK
    }

    /// Two cards totalling 21.
    pub fn is_natural(&self) -> bool {
        self.cards.len() == 2 && self.points() == BLACKJACK
    }

    /// An Ace is still counted as 11.
    pub fn is_soft(&self) -> bool {
        self.cards.iter().any(|c| c.value() == 11)
    }

    /// Two cards of the same rank.
    pub fn is_pair(&self) -> bool {
        self.cards.len() == 2 && self.cards[0].rank == self.cards[1].rank
    }

    /// Turns every face-down card up and returns how many were flipped.
    pub fn reveal_all(&mut self) -> usize {
        let mut flipped = 0;
        for card in self.cards.iter_mut().filter(|c| !c.is_face_up()) {
            card.flip();
            flipped += 1;
        }
        flipped
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }
}
