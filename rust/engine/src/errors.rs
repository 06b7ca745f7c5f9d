use thiserror::Error;

use crate::table::RoundState;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum GameError {
    #[error("Invalid bet amount: {amount}, minimum: {minimum}")]
    InvalidBet { amount: u64, minimum: u64 },
    #[error("No bet placed")]
    NoBetPlaced,
    #[error("Insufficient funds: need {needed}, have {available}")]
    InsufficientFunds { needed: u64, available: u64 },
    #[error("Split requires a two-card pair of equal rank value and fewer than four hands")]
    SplitNotAllowed,
    #[error("Double down requires a fresh two-card hand")]
    DoubleNotAllowed,
    #[error("Invalid move: {input:?}")]
    InvalidMove { input: String },
    #[error("{op} is not valid in the {state:?} state")]
    IllegalState {
        op: &'static str,
        state: RoundState,
    },
}
