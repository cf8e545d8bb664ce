use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::{AccountKind, Balance, Clock, SystemClock, Transaction, Units};

/// Compute the balance for a single account from a list of transactions.
/// Balance = sum of deposits - sum of withdrawals
pub fn compute_balance(account: AccountKind, transactions: &[Transaction]) -> Balance {
    transactions
        .iter()
        .filter(|tx| tx.account == account)
        .fold(0, |balance, tx| balance + tx.signed_amount())
}

/// Compute both account balances in a single pass.
pub fn compute_totals(transactions: &[Transaction]) -> Totals {
    transactions
        .iter()
        .fold(Totals::default(), |mut totals, tx| {
            match tx.account {
                AccountKind::Checking => totals.checking += tx.signed_amount(),
                AccountKind::Savings => totals.savings += tx.signed_amount(),
            }
            totals
        })
}

/// Balances of both accounts at the same point in the transaction sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    pub checking: Balance,
    pub savings: Balance,
}

impl Totals {
    pub fn for_account(&self, account: AccountKind) -> Balance {
        match account {
            AccountKind::Checking => self.checking,
            AccountKind::Savings => self.savings,
        }
    }

    pub fn combined(&self) -> Balance {
        self.checking + self.savings
    }
}

/// Result of a withdrawal request. A decline is a normal outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WithdrawalOutcome {
    Applied(Transaction),
    Declined { balance: Balance, requested: Units },
}

impl WithdrawalOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, WithdrawalOutcome::Applied(_))
    }
}

/// Result of moving money from one account to the other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransferOutcome {
    Completed {
        withdrawal: Transaction,
        deposit: Transaction,
    },
    Declined {
        from: AccountKind,
        balance: Balance,
        requested: Units,
    },
}

impl TransferOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, TransferOutcome::Completed { .. })
    }
}

/// Append-only record of every deposit and withdrawal across both accounts.
///
/// Balances are never cached: each query folds over the full sequence, so there
/// is no running total that could drift out of sync with the transactions.
/// Mutating operations take `&mut self`, which makes the balance check and the
/// append of a withdrawal a single step for any caller.
#[derive(Debug)]
pub struct Ledger {
    transactions: Vec<Transaction>,
    clock: Box<dyn Clock>,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new(Box::new(SystemClock))
    }
}

impl Ledger {
    /// Create an empty ledger stamping transactions with the given clock.
    pub fn new(clock: Box<dyn Clock>) -> Self {
        Self::from_transactions(Vec::new(), clock)
    }

    /// Reconstitute a ledger from previously persisted transactions.
    pub fn from_transactions(transactions: Vec<Transaction>, clock: Box<dyn Clock>) -> Self {
        Self {
            transactions,
            clock,
        }
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Record a deposit. Always succeeds.
    pub fn deposit(&mut self, account: AccountKind, amount: Units) -> Transaction {
        let tx = Transaction::deposit(account, amount, self.clock.now());
        self.append(tx.clone());
        tx
    }

    /// Record a withdrawal if the account holds at least `amount`.
    pub fn withdraw(&mut self, account: AccountKind, amount: Units) -> WithdrawalOutcome {
        let balance = self.balance(account);
        if amount > balance {
            info!(%account, balance, requested = amount, "withdrawal declined: insufficient funds");
            return WithdrawalOutcome::Declined {
                balance,
                requested: amount,
            };
        }

        let tx = Transaction::withdrawal(account, amount, self.clock.now());
        self.append(tx.clone());
        WithdrawalOutcome::Applied(tx)
    }

    /// Move `amount` from `from` into the other account.
    /// The deposit leg only runs once the withdrawal leg has been applied.
    pub fn transfer(&mut self, from: AccountKind, amount: Units) -> TransferOutcome {
        match self.withdraw(from, amount) {
            WithdrawalOutcome::Applied(withdrawal) => {
                let deposit = self.deposit(from.other(), amount);
                TransferOutcome::Completed {
                    withdrawal,
                    deposit,
                }
            }
            WithdrawalOutcome::Declined { balance, requested } => TransferOutcome::Declined {
                from,
                balance,
                requested,
            },
        }
    }

    pub fn balance(&self, account: AccountKind) -> Balance {
        compute_balance(account, &self.transactions)
    }

    /// Transactions for one account, most recent first.
    pub fn history(&self, account: AccountKind) -> Vec<&Transaction> {
        self.transactions
            .iter()
            .rev()
            .filter(|tx| tx.account == account)
            .collect()
    }

    pub fn totals(&self) -> Totals {
        compute_totals(&self.transactions)
    }

    fn append(&mut self, tx: Transaction) {
        debug!(
            account = %tx.account,
            direction = %tx.direction,
            amount = tx.amount,
            "appending transaction"
        );
        self.transactions.push(tx);
    }
}
