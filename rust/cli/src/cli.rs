//! Command-line surface: the clap parser and the argument enums.

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "parlor",
    version,
    about = "Casino card and strategy games at the terminal"
)]
pub struct ParlorCli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Play blackjack interactively against the house
    Blackjack {
        /// Shuffle seed (random when omitted)
        #[arg(long)]
        seed: Option<u64>,
        /// Chips to sit down with
        #[arg(long)]
        balance: Option<u64>,
        /// Decks in the shoe (1..=8)
        #[arg(long)]
        decks: Option<u8>,
        /// Table minimum bet
        #[arg(long)]
        min_bet: Option<u64>,
        /// Append one JSONL record per settled round to this file
        #[arg(long)]
        log: Option<String>,
    },
    /// Play rock-paper-scissors against an adaptive opponent
    Roshambo {
        /// Opponent seed (random when omitted)
        #[arg(long)]
        seed: Option<u64>,
        /// Moves of history the predictor sees
        #[arg(long)]
        window: Option<usize>,
        /// Probability the opponent counters its prediction (0.0..=1.0)
        #[arg(long)]
        edge: Option<f64>,
        /// Opponent policy
        #[arg(long, value_enum, default_value_t = OpponentKind::Frequency)]
        opponent: OpponentKind,
    },
    /// Simulate rounds in batch and optionally record them
    Sim {
        /// Which game to simulate
        #[arg(long, value_enum)]
        game: GameKind,
        /// Number of rounds
        #[arg(long, default_value_t = 100)]
        rounds: u32,
        /// Base seed for the whole run
        #[arg(long)]
        seed: Option<u64>,
        /// Output path (.jsonl, or .jsonl.zst for compressed)
        #[arg(long)]
        output: Option<String>,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
pub enum GameKind {
    Blackjack,
    Roshambo,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
pub enum OpponentKind {
    Frequency,
    Uniform,
}

impl OpponentKind {
    pub fn as_str(self) -> &'static str {
        match self {
            OpponentKind::Frequency => "frequency",
            OpponentKind::Uniform => "uniform",
        }
    }
}

impl std::fmt::Display for OpponentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
