use chrono::{DateTime, NaiveDate, Utc};
use std::fmt::Debug;

/// Source of transaction timestamps.
pub trait Clock: Debug {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Stamps every transaction with the same instant. History is then ordered by
/// insertion alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// Midnight on 0001-01-01, the default date of the older ledger files.
    pub fn year_one() -> Self {
        let instant = NaiveDate::from_ymd_opt(1, 1, 1)
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|naive| naive.and_utc())
            .unwrap_or_default();
        Self(instant)
    }
}

impl Default for FixedClock {
    fn default() -> Self {
        Self::year_one()
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
