use anyhow::{Context, Result, bail};
use chrono::{DateTime, NaiveDateTime, Utc};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::domain::{AccountKind, Direction, Transaction, Units};

use super::Store;

/// Column layout of the transaction file.
pub const HEADER: [&str; 4] = ["Amount", "Checking", "Deposit", "Date"];

/// Timestamp layout written by older versions of the ledger file,
/// e.g. `1/1/0001 12:00:00 AM`.
const LEGACY_TIMESTAMP_FORMAT: &str = "%m/%d/%Y %I:%M:%S %p";

/// Stores the whole transaction list in a single CSV file, rewritten on every save.
#[derive(Debug, Clone)]
pub struct CsvStore {
    path: PathBuf,
}

impl CsvStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Store for CsvStore {
    /// A missing file is an empty ledger.
    fn load(&self) -> Result<Vec<Transaction>> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no transaction file yet, starting empty");
            return Ok(Vec::new());
        }

        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(&self.path)
            .with_context(|| format!("Failed to open {}", self.path.display()))?;

        let mut transactions = Vec::new();
        for (line_num, result) in reader.records().enumerate() {
            let line = line_num + 2; // +2 for header and 0-indexing
            let record = result
                .with_context(|| format!("{}: line {}", self.path.display(), line))?;
            let tx = parse_record(&record)
                .with_context(|| format!("{}: line {}", self.path.display(), line))?;
            transactions.push(tx);
        }

        debug!(path = %self.path.display(), rows = transactions.len(), "loaded transactions");
        Ok(transactions)
    }

    fn save(&mut self, transactions: &[Transaction]) -> Result<()> {
        let mut writer = csv::Writer::from_path(&self.path)
            .with_context(|| format!("Failed to create {}", self.path.display()))?;

        writer.write_record(HEADER)?;
        for tx in transactions {
            writer.write_record([
                tx.amount.to_string(),
                tx.account.is_checking().to_string(),
                tx.direction.is_deposit().to_string(),
                tx.timestamp.to_rfc3339(),
            ])?;
        }

        writer
            .flush()
            .with_context(|| format!("Failed to write {}", self.path.display()))?;
        debug!(path = %self.path.display(), rows = transactions.len(), "saved transactions");
        Ok(())
    }
}

fn parse_record(record: &csv::StringRecord) -> Result<Transaction> {
    if record.len() != HEADER.len() {
        bail!("expected {} fields, found {}", HEADER.len(), record.len());
    }

    let amount: Units = record[0]
        .parse()
        .with_context(|| format!("Invalid amount '{}'", &record[0]))?;
    if amount < 0 {
        bail!("Invalid amount '{}': must not be negative", amount);
    }
    let checking = parse_flag(&record[1])
        .with_context(|| format!("Invalid checking flag '{}'", &record[1]))?;
    let deposit = parse_flag(&record[2])
        .with_context(|| format!("Invalid deposit flag '{}'", &record[2]))?;
    let timestamp = parse_timestamp(&record[3])?;

    Ok(Transaction::new(
        AccountKind::from_checking_flag(checking),
        Direction::from_deposit_flag(deposit),
        amount,
        timestamp,
    ))
}

fn parse_flag(s: &str) -> Option<bool> {
    if s.eq_ignore_ascii_case("true") {
        Some(true)
    } else if s.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

fn parse_timestamp(s: &str) -> Result<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(s, LEGACY_TIMESTAMP_FORMAT) {
        return Ok(naive.and_utc());
    }

    bail!("Invalid timestamp format: {}", s)
}

#[cfg(test)]
mod tests {
    use chrono::{Datelike, Timelike};
    use tempfile::TempDir;

    use super::*;
    use crate::domain::FixedClock;

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let store = CsvStore::new(dir.path().join("transactions.csv"));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_writes_header_and_rows() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("transactions.csv");
        let mut store = CsvStore::new(&path);
        let when = FixedClock::default().0;

        store
            .save(&[
                Transaction::deposit(AccountKind::Checking, 100, when),
                Transaction::withdrawal(AccountKind::Savings, 7, when),
            ])
            .unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines[0], "Amount,Checking,Deposit,Date");
        assert_eq!(lines[1], "100,true,true,0001-01-01T00:00:00+00:00");
        assert_eq!(lines[2], "7,false,false,0001-01-01T00:00:00+00:00");
    }

    #[test]
    fn test_save_then_load_preserves_sequence() {
        let dir = TempDir::new().unwrap();
        let mut store = CsvStore::new(dir.path().join("transactions.csv"));
        let transactions = vec![
            Transaction::deposit(AccountKind::Savings, 50, Utc::now()),
            Transaction::deposit(AccountKind::Checking, 10, Utc::now()),
            Transaction::withdrawal(AccountKind::Savings, 20, Utc::now()),
        ];

        store.save(&transactions).unwrap();
        assert_eq!(store.load().unwrap(), transactions);
    }

    #[test]
    fn test_load_accepts_legacy_rows() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("transactions.csv");
        std::fs::write(
            &path,
            "Amount,Checking,Deposit,Date\n250,True,True,1/1/0001 12:00:00 AM\n40,True,False,3/14/2021 4:05:09 PM\n",
        )
        .unwrap();

        let transactions = CsvStore::new(&path).load().unwrap();

        assert_eq!(transactions.len(), 2);
        assert_eq!(transactions[0].amount, 250);
        assert_eq!(transactions[0].account, AccountKind::Checking);
        assert_eq!(transactions[0].direction, Direction::Deposit);
        assert_eq!(transactions[0].timestamp, FixedClock::default().0);
        assert_eq!(transactions[1].direction, Direction::Withdrawal);
        assert_eq!(transactions[1].timestamp.year(), 2021);
        assert_eq!(transactions[1].timestamp.hour(), 16);
    }

    #[test]
    fn test_load_reports_line_of_bad_row() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("transactions.csv");
        std::fs::write(
            &path,
            "Amount,Checking,Deposit,Date\n10,true,true,2024-01-01T00:00:00Z\nten,true,true,2024-01-01T00:00:00Z\n",
        )
        .unwrap();

        let err = CsvStore::new(&path).load().unwrap_err();
        assert!(format!("{:#}", err).contains("line 3"));
    }

    #[test]
    fn test_load_rejects_negative_amount() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("transactions.csv");
        std::fs::write(
            &path,
            "Amount,Checking,Deposit,Date\n-5,true,true,2024-01-01T00:00:00Z\n",
        )
        .unwrap();

        assert!(CsvStore::new(&path).load().is_err());
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("True"), Some(true));
        assert_eq!(parse_flag("false"), Some(false));
        assert_eq!(parse_flag("yes"), None);
    }
}
