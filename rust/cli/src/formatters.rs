//! Card, hand, and outcome formatters for terminal display.
//!
//! This module provides pure functions for formatting table elements
//! (cards, hands, actions, round outcomes) for terminal output. It supports
//! Unicode suit symbols with ASCII fallback for terminal environments that
//! don't support Unicode rendering.
//!
//! Everything the player sees is rendered from [`CardView`]s, so a face-down
//! hole card prints as `??` and never leaks its rank.
//!
//! ## Example
//!
//! ```rust
//! use blackjack_engine::cards::{Card, Rank, Suit};
//! use blackjack_engine::engine::CardView;
//! use blackjack_cli::formatters::{format_card, format_hand};
//!
//! let ace_spades = Card::new(Suit::Spades, Rank::Ace);
//! assert!(format_card(&ace_spades) == "A♠" || format_card(&ace_spades) == "As");
//!
//! let hand = vec![CardView::of(&ace_spades)];
//! assert!(format_hand(&hand).starts_with("[A"));
//! ```

use blackjack_engine::cards::{Card, Rank, Suit};
use blackjack_engine::engine::CardView;
use blackjack_engine::rules::{Action, Resolution};

/// Check if the terminal supports Unicode card symbols by detecting modern terminal environments.
///
/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals (TERM_PROGRAM),
/// or VS Code (VSCODE_INJECTION). On Unix-like systems, assumes Unicode support.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

/// Format a Suit as ♥ ♦ ♠ ♣, or h d s c without Unicode support.
pub fn format_suit(suit: &Suit) -> String {
    if supports_unicode() {
        match suit {
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Spades => "♠",
            Suit::Clubs => "♣",
        }
        .to_string()
    } else {
        match suit {
            Suit::Hearts => "h",
            Suit::Diamonds => "d",
            Suit::Spades => "s",
            Suit::Clubs => "c",
        }
        .to_string()
    }
}

/// Format a Rank as A, 2-10, J, Q or K.
pub fn format_rank(rank: &Rank) -> String {
    match rank {
        Rank::Ace => "A",
        Rank::Two => "2",
        Rank::Three => "3",
        Rank::Four => "4",
        Rank::Five => "5",
        Rank::Six => "6",
        Rank::Seven => "7",
        Rank::Eight => "8",
        Rank::Nine => "9",
        Rank::Ten => "10",
        Rank::Jack => "J",
        Rank::Queen => "Q",
        Rank::King => "K",
    }
    .to_string()
}

/// Format a Card as rank then suit, regardless of visibility.
///
/// Use [`format_card_view`] for anything shown during a round.
pub fn format_card(card: &Card) -> String {
    format!("{}{}", format_rank(&card.rank), format_suit(&card.suit))
}

/// Format a card as the player sees it; face-down cards print as `??`.
pub fn format_card_view(card: &CardView) -> String {
    match (card.rank, card.suit) {
        (Some(rank), Some(suit)) if card.face_up => {
            format!("{}{}", format_rank(&rank), format_suit(&suit))
        }
        _ => "??".to_string(),
    }
}

/// Format a hand in bracket notation, e.g. `[A♠ ??]`, or `[]` if empty.
pub fn format_hand(cards: &[CardView]) -> String {
    let formatted: Vec<String> = cards.iter().map(format_card_view).collect();
    format!("[{}]", formatted.join(" "))
}

/// Format an Action as the word the player types for it.
///
/// # Example
///
/// ```rust
/// use blackjack_engine::rules::Action;
/// # use blackjack_cli::formatters::format_action;
///
/// assert_eq!(format_action(&Action::Hit), "hit");
/// assert_eq!(format_action(&Action::Insurance), "insurance <amount>");
/// ```
pub fn format_action(action: &Action) -> String {
    match action {
        Action::Hit => "hit",
        Action::Stand => "stand",
        Action::DoubleDown => "double",
        Action::Insurance => "insurance <amount>",
    }
    .to_string()
}

/// Menu line for the legal actions, always ending with the quit option.
pub fn format_action_menu(actions: &[Action]) -> String {
    let mut items: Vec<String> = actions.iter().map(format_action).collect();
    items.push("q".to_string());
    items.join("/")
}

/// Short message announcing how a round was decided.
pub fn format_resolution(resolution: &Resolution) -> &'static str {
    match resolution {
        Resolution::PlayerBust => "Bust! You lose.",
        Resolution::DealerBustNatural => "Dealer busts and you have Blackjack! You win.",
        Resolution::DealerBust => "Dealer busts! You win.",
        Resolution::Push => "Push. Your bet is returned.",
        Resolution::PlayerNatural => "Blackjack! You win.",
        Resolution::PlayerHigher => "You beat the dealer! You win.",
        Resolution::DealerNaturalInsured => "Dealer has Blackjack. Insurance pays out.",
        Resolution::DealerNatural => "Dealer has Blackjack. You lose.",
        Resolution::DealerHigher => "Dealer wins.",
    }
}
