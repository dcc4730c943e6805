//! # blackjack-engine: Blackjack Rules Engine
//!
//! Single-player blackjack against a dealer: card valuation, action
//! validation, dealer play and settlement, plus a step/reset environment for
//! training and evaluating decision policies. Decks are built from a seed so
//! every round can be replayed.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and shoe construction
//! - [`deck`] - Seeded multi-deck shoe with random draws
//! - [`hand`] - Hand valuation with soft/hard Ace handling
//! - [`player`] - Player actions
//! - [`rules`] - Table rules, dealer policy and action preconditions
//! - [`round`] - Dealing, player actions, dealer play and settlement
//! - [`env`] - Step/reset environment over a round
//! - [`logger`] - RoundRecord serialization to JSONL
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use blackjack_engine::cards::{Card, Rank, Suit};
//! use blackjack_engine::hand::hand_value;
//!
//! let cards = [
//!     Card::new(Rank::Ace, Suit::Spades),
//!     Card::new(Rank::Ace, Suit::Hearts),
//!     Card::new(Rank::Ten, Suit::Clubs),
//! ];
//! assert_eq!(hand_value(&cards), (12, false));
//! ```
//!
//! ## Playing Through the Environment
//!
//! ```rust
//! use blackjack_engine::env::BlackjackEnv;
//! use blackjack_engine::player::PlayerAction;
//! use blackjack_engine::rules::TableRules;
//!
//! let mut env = BlackjackEnv::new(TableRules::default(), Some(42)).unwrap();
//! let obs = env.reset().unwrap();
//! assert!(obs.player_total >= 4);
//! while !env.is_terminated() {
//!     let step = env.step(PlayerAction::Stand).unwrap();
//!     assert!(step.terminated);
//! }
//! assert!(env.step(PlayerAction::Hit).is_err());
//! ```

pub mod cards;
pub mod deck;
pub mod env;
pub mod errors;
pub mod hand;
pub mod logger;
pub mod player;
pub mod round;
pub mod rules;
