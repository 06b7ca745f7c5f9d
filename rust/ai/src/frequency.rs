//! Frequency-based adaptive opponent.
//!
//! Counts the player's recent moves and plays the counter of the most
//! frequent one most of the time. Players who repeat themselves get
//! punished; players who mix their throws face close to uniform play.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use parlor_engine::roshambo::{MOVES, Move, Opponent};
use parlor_engine::table::DEFAULT_SEED;

/// Probability of playing the counter to the predicted move, rather than a
/// uniform-random throw.
pub const DEFAULT_EDGE: f64 = 0.7;

/// Adaptive policy with a statistical edge against predictable players.
///
/// With probability `edge` (default 0.7) the policy plays the move that
/// beats the mode of the history window; otherwise, and whenever the
/// history is empty, it throws uniformly at random. The edge makes the
/// house favored against a repetitive player while staying beatable by one
/// who varies; that imbalance is the point of the policy, not a flaw in
/// it.
#[derive(Debug)]
pub struct FrequencyOpponent {
    edge: f64,
    rng: ChaCha20Rng,
}

impl FrequencyOpponent {
    /// Create a policy with the given edge (clamped to 0.0..=1.0) and an
    /// optional seed for reproducible rolls.
    pub fn new(edge: f64, seed: Option<u64>) -> Self {
        Self {
            edge: edge.clamp(0.0, 1.0),
            rng: ChaCha20Rng::seed_from_u64(seed.unwrap_or(DEFAULT_SEED)),
        }
    }

    pub fn edge(&self) -> f64 {
        self.edge
    }

    /// The mode of the history window, or `None` when there is no history.
    /// Frequency ties resolve to the earliest move in the fixed rock,
    /// paper, scissors enumeration order, so the prediction is
    /// deterministic.
    pub fn predict(history: &[Move]) -> Option<Move> {
        if history.is_empty() {
            return None;
        }
        let mut counts = [0usize; 3];
        for &m in history {
            counts[m as usize] += 1;
        }
        let mut best = MOVES[0];
        let mut best_count = counts[0];
        for (i, &count) in counts.iter().enumerate().skip(1) {
            if count > best_count {
                best = MOVES[i];
                best_count = count;
            }
        }
        Some(best)
    }

    fn uniform(&mut self) -> Move {
        MOVES[self.rng.random_range(0..MOVES.len())]
    }
}

impl Opponent for FrequencyOpponent {
    fn choose(&mut self, history: &[Move]) -> Move {
        if let Some(predicted) = Self::predict(history) {
            if self.rng.random::<f64>() < self.edge {
                return predicted.beaten_by();
            }
        }
        self.uniform()
    }

    fn name(&self) -> &str {
        "frequency"
    }
}
