use crate::domain::{
    AccountKind, Balance, Clock, Ledger, Transaction, TransferOutcome, Units, WithdrawalOutcome,
};
use crate::storage::Store;

use super::{AccountStatement, AppError, TotalsReport};

/// Application service providing the banking operations over a ledger.
/// This is the primary interface for any client (interactive shell or one-shot CLI).
///
/// The service owns both the ledger and its store; after each deposit, withdrawal
/// or transfer the full transaction list is written back to the store.
#[derive(Debug)]
pub struct BankService<S: Store> {
    ledger: Ledger,
    store: S,
}

impl<S: Store> BankService<S> {
    /// Create a service around an existing ledger.
    pub fn new(ledger: Ledger, store: S) -> Self {
        Self { ledger, store }
    }

    /// Load the persisted transactions from `store` and build the ledger.
    pub fn open(store: S, clock: Box<dyn Clock>) -> Result<Self, AppError> {
        let transactions = store.load()?;
        Ok(Self::new(Ledger::from_transactions(transactions, clock), store))
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    // ========================
    // Mutating operations
    // ========================

    /// Deposit money into an account.
    pub fn deposit(&mut self, account: AccountKind, amount: Units) -> Result<Transaction, AppError> {
        validate_amount(amount)?;
        let tx = self.ledger.deposit(account, amount);
        self.flush()?;
        Ok(tx)
    }

    /// Withdraw money from an account. Insufficient funds yield a declined outcome.
    pub fn withdraw(
        &mut self,
        account: AccountKind,
        amount: Units,
    ) -> Result<WithdrawalOutcome, AppError> {
        validate_amount(amount)?;
        let outcome = self.ledger.withdraw(account, amount);
        self.flush()?;
        Ok(outcome)
    }

    /// Move money from `from` into the other account.
    pub fn transfer(
        &mut self,
        from: AccountKind,
        amount: Units,
    ) -> Result<TransferOutcome, AppError> {
        validate_amount(amount)?;
        let outcome = self.ledger.transfer(from, amount);
        self.flush()?;
        Ok(outcome)
    }

    // ========================
    // Queries
    // ========================

    pub fn balance(&self, account: AccountKind) -> Balance {
        self.ledger.balance(account)
    }

    /// History of an account, most recent first, with its balance.
    pub fn statement(&self, account: AccountKind) -> AccountStatement {
        AccountStatement {
            account,
            balance: self.ledger.balance(account),
            transactions: self.ledger.history(account).into_iter().cloned().collect(),
        }
    }

    /// Balances of both accounts.
    pub fn totals(&self) -> TotalsReport {
        self.ledger.totals().into()
    }

    fn flush(&mut self) -> Result<(), AppError> {
        self.store.save(self.ledger.transactions())?;
        Ok(())
    }
}

fn validate_amount(amount: Units) -> Result<(), AppError> {
    if amount < 0 {
        return Err(AppError::InvalidInput(format!(
            "amount must not be negative, got {}",
            amount
        )));
    }
    Ok(())
}
