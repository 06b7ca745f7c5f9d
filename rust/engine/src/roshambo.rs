use std::collections::VecDeque;
use std::str::FromStr;

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};

use crate::errors::GameError;
use crate::table::DEFAULT_SEED;

/// All three moves in a fixed enumeration order. Frequency ties in the
/// predictor resolve to the earliest move in this order.
pub const MOVES: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

/// Number of player moves the history window retains by default.
pub const DEFAULT_WINDOW: usize = 5;

/// A rock-paper-scissors move.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    Rock,
    Paper,
    Scissors,
}

impl Move {
    /// The move this one defeats: rock crushes scissors, paper covers rock,
    /// scissors cut paper.
    pub fn beats(self) -> Move {
        match self {
            Move::Rock => Move::Scissors,
            Move::Paper => Move::Rock,
            Move::Scissors => Move::Paper,
        }
    }

    /// The counter-move: the move that defeats this one.
    pub fn beaten_by(self) -> Move {
        match self {
            Move::Rock => Move::Paper,
            Move::Paper => Move::Scissors,
            Move::Scissors => Move::Rock,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Move::Rock => "rock",
            Move::Paper => "paper",
            Move::Scissors => "scissors",
        }
    }
}

impl FromStr for Move {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rock" => Ok(Move::Rock),
            "paper" => Ok(Move::Paper),
            "scissors" => Ok(Move::Scissors),
            other => Err(GameError::InvalidMove {
                input: other.to_string(),
            }),
        }
    }
}

/// Who took a round.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    Player,
    House,
    Tie,
}

/// Result of one settled round.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundResult {
    pub player: Move,
    pub opponent: Move,
    pub winner: Winner,
}

/// Running score counters; monotonically non-decreasing except through
/// [`RoshamboGame::reset`].
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct ScoreTally {
    pub player: u32,
    pub house: u32,
    pub ties: u32,
}

impl ScoreTally {
    fn record(&mut self, winner: Winner) {
        match winner {
            Winner::Player => self.player += 1,
            Winner::House => self.house += 1,
            Winner::Tie => self.ties += 1,
        }
    }

    pub fn total(&self) -> u32 {
        self.player + self.house + self.ties
    }
}

/// Settle a single round by the fixed cyclic relation.
pub fn duel(player: Move, opponent: Move) -> Winner {
    if player == opponent {
        Winner::Tie
    } else if player.beats() == opponent {
        Winner::Player
    } else {
        Winner::House
    }
}

/// A move-choosing policy for the house side of a round.
///
/// The game shows the policy the player's recent move history *before* the
/// current round's move is appended, which is all the adaptive predictor
/// needs. Implementations live in the `parlor-ai` crate; the engine ships
/// [`UniformOpponent`] as the plain-random baseline.
pub trait Opponent {
    /// Choose the house move given the player's recent history, oldest
    /// first.
    fn choose(&mut self, history: &[Move]) -> Move;

    /// Identifier for display and logging.
    fn name(&self) -> &str;
}

/// Uniform-random policy; also the behavior every predictor falls back to
/// when it has nothing to predict from.
#[derive(Debug)]
pub struct UniformOpponent {
    rng: ChaCha20Rng,
}

impl UniformOpponent {
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed.unwrap_or(DEFAULT_SEED)),
        }
    }
}

impl Opponent for UniformOpponent {
    fn choose(&mut self, _history: &[Move]) -> Move {
        MOVES[self.rng.random_range(0..MOVES.len())]
    }

    fn name(&self) -> &str {
        "uniform"
    }
}

/// Roshambo engine configuration fixed at construction.
#[derive(Debug, Copy, Clone, Serialize, Deserialize)]
pub struct RoshamboConfig {
    /// Sliding window of player moves kept for prediction.
    pub window: usize,
}

impl Default for RoshamboConfig {
    fn default() -> Self {
        Self {
            window: DEFAULT_WINDOW,
        }
    }
}

/// Repeated rock-paper-scissors against a pluggable house policy.
///
/// The game owns the bounded player-move history and the score tally;
/// every round is independent beyond those two accumulators, so there is
/// no state machine and no invalid-operation case for a typed [`Move`].
/// (Parsing text into a move is where [`GameError::InvalidMove`] lives.)
///
/// # Examples
///
/// ```
/// use parlor_engine::roshambo::{Move, RoshamboConfig, RoshamboGame, Winner};
///
/// let mut game = RoshamboGame::with_seed(RoshamboConfig::default(), Some(7));
/// let result = game.play_round(Move::Rock);
/// assert_eq!(result.player, Move::Rock);
/// assert_eq!(game.scores().total(), 1);
/// ```
pub struct RoshamboGame {
    config: RoshamboConfig,
    history: VecDeque<Move>,
    scores: ScoreTally,
    opponent: Box<dyn Opponent>,
}

impl RoshamboGame {
    pub fn new(config: RoshamboConfig, opponent: Box<dyn Opponent>) -> Self {
        Self {
            config,
            history: VecDeque::with_capacity(config.window),
            scores: ScoreTally::default(),
            opponent,
        }
    }

    /// A game against the built-in uniform-random opponent.
    pub fn with_seed(config: RoshamboConfig, seed: Option<u64>) -> Self {
        Self::new(config, Box::new(UniformOpponent::new(seed)))
    }

    /// Play one round: the opponent chooses against the pre-round history,
    /// the player's move is appended (evicting the oldest beyond the
    /// window), the round is settled, and the tally updated.
    pub fn play_round(&mut self, player: Move) -> RoundResult {
        let opponent = {
            let history = self.history.make_contiguous();
            self.opponent.choose(history)
        };

        self.history.push_back(player);
        while self.history.len() > self.config.window {
            self.history.pop_front();
        }

        let winner = duel(player, opponent);
        self.scores.record(winner);
        RoundResult {
            player,
            opponent,
            winner,
        }
    }

    /// Clear the history and zero every counter. The window size and the
    /// opponent policy are untouched.
    pub fn reset(&mut self) {
        self.history.clear();
        self.scores = ScoreTally::default();
    }

    pub fn history(&self) -> &VecDeque<Move> {
        &self.history
    }

    pub fn scores(&self) -> ScoreTally {
        self.scores
    }

    pub fn window(&self) -> usize {
        self.config.window
    }

    pub fn opponent_name(&self) -> &str {
        self.opponent.name()
    }
}

impl std::fmt::Debug for RoshamboGame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoshamboGame")
            .field("config", &self.config)
            .field("history", &self.history)
            .field("scores", &self.scores)
            .field("opponent", &self.opponent.name())
            .finish()
    }
}
