use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the two money pools a customer holds at the bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountKind {
    Checking,
    Savings,
}

impl AccountKind {
    pub const ALL: [AccountKind; 2] = [AccountKind::Checking, AccountKind::Savings];

    pub fn as_str(&self) -> &'static str {
        match self {
            AccountKind::Checking => "checking",
            AccountKind::Savings => "savings",
        }
    }

    /// The counterpart account, used as the destination of a transfer.
    pub fn other(&self) -> Self {
        match self {
            AccountKind::Checking => AccountKind::Savings,
            AccountKind::Savings => AccountKind::Checking,
        }
    }

    /// Flag representation used by the transaction file (true = checking).
    pub fn is_checking(&self) -> bool {
        matches!(self, AccountKind::Checking)
    }

    pub fn from_checking_flag(checking: bool) -> Self {
        if checking {
            AccountKind::Checking
        } else {
            AccountKind::Savings
        }
    }
}

impl fmt::Display for AccountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AccountKind {
    type Err = ParseAccountError;

    /// Accepts `checking` or `savings` in any case, ignoring surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "checking" => Ok(AccountKind::Checking),
            "savings" => Ok(AccountKind::Savings),
            _ => Err(ParseAccountError(s.trim().to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseAccountError(pub String);

impl fmt::Display for ParseAccountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid account type '{}' (expected checking or savings)",
            self.0
        )
    }
}

impl std::error::Error for ParseAccountError {}
