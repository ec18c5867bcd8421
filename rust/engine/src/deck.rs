use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};
use crate::errors::GameError;

/// Ordered stack of undealt cards. The top of the shoe is the end of the
/// sequence, so an unshuffled shoe deals the King of Clubs first.
#[derive(Debug)]
pub struct Shoe {
    cards: Vec<Card>,
    rng: ChaCha20Rng,
}

impl Shoe {
    pub fn new_with_seed(seed: u64) -> Self {
        let rng = ChaCha20Rng::seed_from_u64(seed);
        // Keep canonical order until shuffle is called explicitly
        Self {
            cards: full_deck(),
            rng,
        }
    }

    /// A shoe holding exactly `cards`, dealt in the given order.
    ///
    /// Used to replay fixed scenarios. The shoe still rebuilds a full 52-card
    /// deck on [`Shoe::reset`].
    pub fn stacked(cards: Vec<Card>, seed: u64) -> Self {
        let mut cards = cards;
        cards.reverse();
        Self {
            cards,
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    /// Replaces the contents with all 52 cards face-up in canonical order.
    pub fn build(&mut self) {
        self.cards = full_deck();
    }

    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
    }

    /// Removes the top card, turning it to the requested side first.
    pub fn draw(&mut self, face_up: bool) -> Result<Card, GameError> {
        let mut card = self.cards.pop().ok_or(GameError::EmptyShoe)?;
        if card.is_face_up() != face_up {
            card.flip();
        }
        Ok(card)
    }

    pub fn reset(&mut self) {
        self.build();
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
