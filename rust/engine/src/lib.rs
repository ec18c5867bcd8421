//! # blackjack-engine: Single-Table Blackjack Rules Core
//!
//! A deterministic Blackjack engine for one player against the dealer.
//! Models the shoe, both hands, the betting ledger and the round state
//! machine; rendering and keyboard input are left to the caller.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) with visibility and value
//! - [`deck`] - The 52-card shoe with seeded ChaCha20 shuffling
//! - [`hand`] - Hand totals and the soft/hard Ace adjustment
//! - [`player`] - Bankroll, bets, insurance, double down and session counters
//! - [`dealer`] - Hole card handling and the stand-on-17 drawing policy
//! - [`rules`] - Legal actions, bet validation and the payout table
//! - [`game`] - Round phases and the command set
//! - [`engine`] - The round state machine
//! - [`logger`] - JSONL round history
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use blackjack_engine::engine::Engine;
//! use blackjack_engine::game::{Command, Phase};
//!
//! let mut engine = Engine::new(Some(42), "Ada", 1000);
//! engine.apply(Command::PlaceBet(50)).expect("bet within bankroll");
//!
//! while engine.phase() == Phase::PlayerTurn {
//!     let command = if engine.player().points() < 17 {
//!         Command::Hit
//!     } else {
//!         Command::Stand
//!     };
//!     assert!(engine.legal_actions().contains(&command.action().unwrap()));
//!     engine.apply(command).expect("legal action");
//! }
//!
//! let settlement = engine.last_settlement().expect("round settled");
//! println!("{:?} -> {}", settlement.resolution, settlement.net());
//! ```
//!
//! ## Deterministic Gameplay
//!
//! Shuffles are reproducible from a seed:
//!
//! ```rust
//! use blackjack_engine::deck::Shoe;
//!
//! let mut a = Shoe::new_with_seed(7);
//! let mut b = Shoe::new_with_seed(7);
//! a.shuffle();
//! b.shuffle();
//! assert_eq!(a.draw(true).unwrap(), b.draw(true).unwrap());
//! ```

pub mod cards;
pub mod dealer;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod game;
pub mod hand;
pub mod logger;
pub mod player;
pub mod rules;
