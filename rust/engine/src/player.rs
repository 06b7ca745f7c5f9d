use serde::{Deserialize, Serialize};

use crate::errors::GameError;

/// The player's chip balance, mutated only by bet placement (debit) and
/// payout (credit). Debits are checked so the balance can never go
/// negative; credits saturate at the type bound.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct Bankroll {
    balance: u64,
}

impl Bankroll {
    pub fn new(balance: u64) -> Self {
        Self { balance }
    }

    pub fn balance(&self) -> u64 {
        self.balance
    }

    pub fn credit(&mut self, amount: u64) {
        self.balance = self.balance.saturating_add(amount);
    }

    pub fn debit(&mut self, amount: u64) -> Result<(), GameError> {
        if amount > self.balance {
            return Err(GameError::InsufficientFunds {
                needed: amount,
                available: self.balance,
            });
        }
        self.balance -= amount;
        Ok(())
    }
}
