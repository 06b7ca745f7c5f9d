//! # parlor-engine: Card/Strategy Game Engines
//!
//! Deterministic, single-player-vs-house game engines behind a thin
//! presentation layer: casino blackjack with split and double-down, and
//! rock-paper-scissors against a pluggable (typically adaptive) opponent.
//! Both engines are pure data-in/data-out state machines with reproducible
//! seeded RNG; any pacing or animation belongs to the caller.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and deck construction
//! - [`shoe`] - Multi-deck shoe with deterministic ChaCha20 shuffling
//! - [`hand`] - Blackjack hand evaluation with derived value and flags
//! - [`table`] - Blackjack round lifecycle, bets, dealer play, settlement
//! - [`rules`] - Pure bet/split/double validation and the dealer rule
//! - [`player`] - The player's bankroll
//! - [`roshambo`] - Rock-paper-scissors rounds, history window, scoring
//! - [`logger`] - JSONL round history records
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use parlor_engine::table::{BlackjackTable, RoundState, TableConfig};
//!
//! let mut table = BlackjackTable::new(TableConfig {
//!     seed: Some(42),
//!     ..TableConfig::default()
//! });
//! table.place_bet(50).unwrap();
//! let state = table.deal().unwrap();
//! assert!(matches!(state, RoundState::PlayerTurn | RoundState::Settled));
//! ```
//!
//! ## Deterministic Shuffling
//!
//! All shuffles are reproducible from a seed:
//!
//! ```rust
//! use parlor_engine::shoe::Shoe;
//!
//! let mut a = Shoe::new_with_seed(6, 42);
//! let mut b = Shoe::new_with_seed(6, 42);
//! a.shuffle();
//! b.shuffle();
//! assert_eq!(a.draw(), b.draw());
//! ```
//!
//! ## Caller Contract
//!
//! Engine operations are atomic, synchronous, and non-reentrant. A UI that
//! inserts presentation delays (revealing the dealer's hole card, animating
//! the opponent's move) must disable further input until it has finished
//! rendering the previous result; the engine does not guard against
//! interleaved calls because there is nothing asynchronous to interleave.

pub mod cards;
pub mod errors;
pub mod hand;
pub mod logger;
pub mod player;
pub mod roshambo;
pub mod rules;
pub mod shoe;
pub mod table;
