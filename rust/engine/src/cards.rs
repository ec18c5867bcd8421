use serde::{Deserialize, Serialize};

/// Represents one of the four suits in a standard 52-card deck.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Suit {
    /// Hearts suit (♥)
    Hearts,
    /// Diamonds suit (♦)
    Diamonds,
    /// Spades suit (♠)
    Spades,
    /// Clubs suit (♣)
    Clubs,
}

/// Represents the rank of a playing card from Ace through King.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Rank {
    Ace = 1,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    /// Table value of the rank. Aces count 11 until a hand adjusts them down.
    pub fn base_value(self) -> u8 {
        match self {
            Rank::Ace => 11,
            Rank::Two => 2,
            Rank::Three => 3,
            Rank::Four => 4,
            Rank::Five => 5,
            Rank::Six => 6,
            Rank::Seven => 7,
            Rank::Eight => 8,
            Rank::Nine => 9,
            Rank::Ten | Rank::Jack | Rank::Queen | Rank::King => 10,
        }
    }
}

/// A single card in the shoe.
///
/// Suit and rank never change. Visibility and the per-card value do: a
/// face-down card is worth 0, and an Ace may be lowered from 11 to 1 by
/// [`crate::hand::Hand::adjust_aces`].
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// The suit of the card
    pub suit: Suit,
    /// The rank of the card
    pub rank: Rank,
    face_up: bool,
    value: u8,
}

impl Card {
    /// Creates a face-up card carrying its rank's table value.
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Self {
            suit,
            rank,
            face_up: true,
            value: rank.base_value(),
        }
    }

    pub fn is_face_up(&self) -> bool {
        self.face_up
    }

    /// Points this card currently contributes to a hand.
    pub fn value(&self) -> u8 {
        self.value
    }

    pub fn is_ace(&self) -> bool {
        self.rank == Rank::Ace
    }

    /// Toggles visibility.
    ///
    /// Turning face-down zeroes the value. Turning face-up restores the table
    /// value, so an Ace always comes back as 11 even if it had been lowered.
    pub fn flip(&mut self) {
        if self.face_up {
            self.face_up = false;
            self.value = 0;
        } else {
            self.face_up = true;
            self.value = self.rank.base_value();
        }
    }

    /// Lowers an Ace still worth 11 to 1. Returns whether anything changed.
    pub(crate) fn soften(&mut self) -> bool {
        if self.value == 11 {
            self.value = 1;
            true
        } else {
            false
        }
    }
}

pub fn all_suits() -> [Suit; 4] {
    [Suit::Hearts, Suit::Diamonds, Suit::Spades, Suit::Clubs]
}

pub fn all_ranks() -> [Rank; 13] {
    [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ]
}

/// All 52 cards face-up in suit-major order.
pub fn full_deck() -> Vec<Card> {
    let mut v = Vec::with_capacity(52);
    for &s in &all_suits() {
        for &r in &all_ranks() {
            v.push(Card::new(s, r));
        }
    }
    v
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn face_down_card_is_worth_nothing() {
        let mut c = Card::new(Suit::Spades, Rank::King);
        c.flip();
        assert!(!c.is_face_up());
        assert_eq!(c.value(), 0);
        c.flip();
        assert_eq!(c.value(), 10);
    }

    #[test]
    fn flipping_restores_ace_to_eleven() {
        let mut ace = Card::new(Suit::Hearts, Rank::Ace);
        assert!(ace.soften());
        assert_eq!(ace.value(), 1);
        ace.flip();
        ace.flip();
        assert_eq!(ace.value(), 11);
    }

    #[test]
    fn soften_ignores_non_aces() {
        let mut nine = Card::new(Suit::Clubs, Rank::Nine);
        assert!(!nine.soften());
        assert_eq!(nine.value(), 9);
    }

    #[test]
    fn full_deck_is_suit_major() {
        let deck = full_deck();
        assert_eq!(deck.len(), 52);
        assert_eq!(deck[0], Card::new(Suit::Hearts, Rank::Ace));
        assert_eq!(deck[12], Card::new(Suit::Hearts, Rank::King));
        assert_eq!(deck[13], Card::new(Suit::Diamonds, Rank::Ace));
        assert_eq!(deck[51], Card::new(Suit::Clubs, Rank::King));
        assert!(deck.iter().all(Card::is_face_up));
    }
}
