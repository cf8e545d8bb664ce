// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use anyhow::Result;
use std::path::PathBuf;
use suncoast::application::BankService;
use suncoast::domain::{AccountKind, FixedClock, Units};
use suncoast::storage::CsvStore;
use tempfile::TempDir;

/// Helper to create a test service backed by a CSV file in a temporary directory
pub fn test_service() -> Result<(BankService<CsvStore>, TempDir)> {
    let temp_dir = TempDir::new()?;
    let service = open_service(data_file(&temp_dir))?;
    Ok((service, temp_dir))
}

/// Open (or reopen) a service over the given transaction file
pub fn open_service(path: PathBuf) -> Result<BankService<CsvStore>> {
    Ok(BankService::open(
        CsvStore::new(path),
        Box::new(FixedClock::default()),
    )?)
}

pub fn data_file(dir: &TempDir) -> PathBuf {
    dir.path().join("transactions.csv")
}

/// Test fixture: deposit the given amounts into one account
pub fn fund(service: &mut BankService<CsvStore>, account: AccountKind, amounts: &[Units]) -> Result<()> {
    for &amount in amounts {
        service.deposit(account, amount)?;
    }
    Ok(())
}
