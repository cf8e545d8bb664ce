//! Runtime settings for a ledger session
//!
//! Settings decide where transactions are persisted (or whether they are at all)
//! and which clock stamps new transactions.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

use crate::application::{AppError, BankService};
use crate::domain::{Clock, FixedClock, SystemClock};
use crate::storage::{CsvStore, NullStore, Store};

/// Default transaction file, relative to the working directory
pub const DEFAULT_DATA_FILE: &str = "transactions.csv";

/// Timestamp source for new transactions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ClockMode {
    /// Current wall-clock time
    #[default]
    System,
    /// Every transaction is stamped 0001-01-01T00:00:00Z
    Fixed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// CSV file holding every transaction
    pub data_file: PathBuf,

    /// When false, transactions live only for the current session
    pub persist: bool,

    pub clock: ClockMode,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            persist: true,
            clock: ClockMode::default(),
        }
    }
}

impl Settings {
    /// Build the persistence backend these settings select.
    pub fn store(&self) -> Box<dyn Store> {
        if self.persist {
            debug!(path = %self.data_file.display(), "using csv store");
            Box::new(CsvStore::new(&self.data_file))
        } else {
            debug!("persistence disabled, using in-memory session");
            Box::new(NullStore)
        }
    }

    pub fn clock(&self) -> Box<dyn Clock> {
        match self.clock {
            ClockMode::System => Box::new(SystemClock),
            ClockMode::Fixed => Box::new(FixedClock::default()),
        }
    }

    /// Open a service over the configured store, loading any persisted history.
    pub fn open_service(&self) -> Result<BankService<Box<dyn Store>>, AppError> {
        BankService::open(self.store(), self.clock())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::domain::AccountKind;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.data_file, PathBuf::from("transactions.csv"));
        assert!(settings.persist);
        assert_eq!(settings.clock, ClockMode::System);
    }

    #[test]
    fn test_persistent_service_writes_data_file() {
        let dir = TempDir::new().unwrap();
        let settings = Settings {
            data_file: dir.path().join("ledger.csv"),
            ..Settings::default()
        };

        let mut service = settings.open_service().unwrap();
        service.deposit(AccountKind::Checking, 10).unwrap();

        assert!(settings.data_file.exists());
        let reopened = settings.open_service().unwrap();
        assert_eq!(reopened.balance(AccountKind::Checking), 10);
    }

    #[test]
    fn test_non_persistent_service_leaves_no_file() {
        let dir = TempDir::new().unwrap();
        let settings = Settings {
            data_file: dir.path().join("ledger.csv"),
            persist: false,
            clock: ClockMode::Fixed,
        };

        let mut service = settings.open_service().unwrap();
        service.deposit(AccountKind::Savings, 10).unwrap();

        assert!(!settings.data_file.exists());
        assert_eq!(
            service.ledger().transactions()[0].timestamp,
            FixedClock::default().0
        );
    }
}
