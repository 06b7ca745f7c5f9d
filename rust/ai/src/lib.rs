//! # parlor-ai: Opponent Policies
//!
//! House-side move policies for the roshambo engine. The engine owns the
//! player's move history and the scoring; a policy only has to answer one
//! question: given the recent history, what does the house throw?
//!
//! ## Core Components
//!
//! - [`frequency`] - The adaptive frequency predictor ([`FrequencyOpponent`])
//! - [`create_opponent`] - Factory for policies by name
//! - [`Opponent`] / [`UniformOpponent`] - Re-exported from the engine
//!
//! ## Quick Start
//!
//! ```rust
//! use parlor_ai::create_opponent;
//! use parlor_engine::roshambo::{Move, RoshamboConfig, RoshamboGame};
//!
//! let opponent = create_opponent("frequency", 0.7, Some(42));
//! let mut game = RoshamboGame::new(RoshamboConfig::default(), opponent);
//! let result = game.play_round(Move::Rock);
//! println!("house threw {:?}", result.opponent);
//! ```
//!
//! ## Policy Types
//!
//! - `"frequency"` - predicts the player's most frequent recent move and
//!   counters it with probability `edge` (beatable by varying your moves)
//! - `"uniform"` - plain uniform-random play

pub use parlor_engine::roshambo::{Opponent, UniformOpponent};

pub mod frequency;

pub use frequency::FrequencyOpponent;

/// Factory function to create an opponent policy by name.
///
/// `edge` only affects the `"frequency"` policy; `seed` makes either policy
/// reproducible.
///
/// # Panics
///
/// Panics on an unknown policy name. Callers parse user input into a known
/// name first.
///
/// # Example
///
/// ```rust
/// use parlor_ai::{create_opponent, Opponent};
///
/// let policy = create_opponent("uniform", 0.0, None);
/// assert_eq!(policy.name(), "uniform");
/// ```
pub fn create_opponent(kind: &str, edge: f64, seed: Option<u64>) -> Box<dyn Opponent> {
    match kind {
        "frequency" => Box::new(FrequencyOpponent::new(edge, seed)),
        "uniform" => Box::new(UniformOpponent::new(seed)),
        _ => panic!("Unknown opponent policy: {}", kind),
    }
}
