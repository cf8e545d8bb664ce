use serde::{Deserialize, Serialize};

use crate::domain::{AccountKind, Balance, Totals, Transaction};

/// One account's history (most recent first) together with its balance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountStatement {
    pub account: AccountKind,
    pub balance: Balance,
    pub transactions: Vec<Transaction>,
}

/// Summary of both accounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TotalsReport {
    pub checking: Balance,
    pub savings: Balance,
    pub combined: Balance,
}

impl From<Totals> for TotalsReport {
    fn from(totals: Totals) -> Self {
        Self {
            checking: totals.checking,
            savings: totals.savings,
            combined: totals.combined(),
        }
    }
}

impl TotalsReport {
    pub fn for_account(&self, account: AccountKind) -> Balance {
        match account {
            AccountKind::Checking => self.checking,
            AccountKind::Savings => self.savings,
        }
    }
}
