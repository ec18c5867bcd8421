use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::hand::{AceAdjustment, Hand};

/// The dealer draws while at or below this total.
pub const DEALER_DRAWS_TO: u32 = 16;

/// The house hand. The first card it receives is the hole card and is dealt
/// face-down.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dealer {
    hand: Hand,
}

impl Dealer {
    pub fn new() -> Self {
        Self { hand: Hand::new() }
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Visible total; the hole card counts 0 until revealed.
    pub fn points(&self) -> u32 {
        self.hand.points()
    }

    /// Whether the next card dealt to the dealer goes face-up.
    pub fn next_card_face_up(&self) -> bool {
        !self.hand.is_empty()
    }

    /// First face-up card, i.e. what the player sees before the reveal.
    pub fn up_card(&self) -> Option<&Card> {
        self.hand.cards().iter().find(|c| c.is_face_up())
    }

    pub fn has_hidden_card(&self) -> bool {
        self.hand.cards().iter().any(|c| !c.is_face_up())
    }

    pub(crate) fn take(&mut self, card: Card) {
        self.hand.add_card(card);
    }

    /// Turns the hole card up and settles any Aces.
    pub(crate) fn reveal_hole_card(&mut self) -> AceAdjustment {
        self.hand.reveal_all();
        self.hand.adjust_aces()
    }

    pub(crate) fn adjust_aces(&mut self) -> AceAdjustment {
        self.hand.adjust_aces()
    }

    /// Fixed house policy: draw at 16 or less, stand on any 17.
    pub fn must_draw(&self) -> bool {
        self.points() <= DEALER_DRAWS_TO
    }

    pub fn reset(&mut self) {
        self.hand.clear();
    }
}
