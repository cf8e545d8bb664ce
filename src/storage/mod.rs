mod csv_store;

pub use csv_store::*;

use anyhow::Result;
use std::fmt::Debug;

use crate::domain::Transaction;

/// Persistence capability for the ledger. Stores always load and save the complete
/// transaction sequence; there is no incremental append.
pub trait Store: Debug {
    fn load(&self) -> Result<Vec<Transaction>>;

    fn save(&mut self, transactions: &[Transaction]) -> Result<()>;
}

impl<S: Store + ?Sized> Store for Box<S> {
    fn load(&self) -> Result<Vec<Transaction>> {
        (**self).load()
    }

    fn save(&mut self, transactions: &[Transaction]) -> Result<()> {
        (**self).save(transactions)
    }
}

/// Store for sessions that keep transactions in memory only.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullStore;

impl Store for NullStore {
    fn load(&self) -> Result<Vec<Transaction>> {
        Ok(Vec::new())
    }

    fn save(&mut self, _transactions: &[Transaction]) -> Result<()> {
        Ok(())
    }
}
