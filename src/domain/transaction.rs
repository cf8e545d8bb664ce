use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{AccountKind, Balance, Units};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Money added to an account
    Deposit,
    /// Money removed from an account
    Withdrawal,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Deposit => "deposit",
            Direction::Withdrawal => "withdrawal",
        }
    }

    /// Flag representation used by the transaction file (true = deposit).
    pub fn is_deposit(&self) -> bool {
        matches!(self, Direction::Deposit)
    }

    pub fn from_deposit_flag(deposit: bool) -> Self {
        if deposit {
            Direction::Deposit
        } else {
            Direction::Withdrawal
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single recorded deposit or withdrawal against one account.
/// Transactions are immutable; the ledger only ever appends them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Amount in whole units (never negative)
    pub amount: Units,
    pub account: AccountKind,
    pub direction: Direction,
    /// When the transaction was recorded
    pub timestamp: DateTime<Utc>,
}

impl Transaction {
    pub fn new(
        account: AccountKind,
        direction: Direction,
        amount: Units,
        timestamp: DateTime<Utc>,
    ) -> Self {
        assert!(amount >= 0, "Transaction amount must not be negative");
        Self {
            amount,
            account,
            direction,
            timestamp,
        }
    }

    pub fn deposit(account: AccountKind, amount: Units, timestamp: DateTime<Utc>) -> Self {
        Self::new(account, Direction::Deposit, amount, timestamp)
    }

    pub fn withdrawal(account: AccountKind, amount: Units, timestamp: DateTime<Utc>) -> Self {
        Self::new(account, Direction::Withdrawal, amount, timestamp)
    }

    /// Effect of this transaction on its account's balance.
    pub fn signed_amount(&self) -> Balance {
        match self.direction {
            Direction::Deposit => self.amount,
            Direction::Withdrawal => -self.amount,
        }
    }
}
