use std::str::FromStr;
use thiserror::Error;

/// Top-level menu entries of the interactive shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Remove,
    Transfer,
    View,
    Exit,
}

/// Sub-menu entries for VIEW.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ViewChoice {
    Checking,
    Savings,
    Total,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("'{0}' is not an option")]
pub struct ParseChoiceError(pub String);

impl FromStr for MenuChoice {
    type Err = ParseChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "ADD" => Ok(MenuChoice::Add),
            "REMOVE" => Ok(MenuChoice::Remove),
            "TRANSFER" => Ok(MenuChoice::Transfer),
            "VIEW" => Ok(MenuChoice::View),
            "EXIT" => Ok(MenuChoice::Exit),
            _ => Err(ParseChoiceError(s.trim().to_string())),
        }
    }
}

impl FromStr for ViewChoice {
    type Err = ParseChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "CHECKING" => Ok(ViewChoice::Checking),
            "SAVINGS" => Ok(ViewChoice::Savings),
            "TOTAL" => Ok(ViewChoice::Total),
            _ => Err(ParseChoiceError(s.trim().to_string())),
        }
    }
}

pub const MENU: &str = "\nADD - Deposit money to checking or savings
REMOVE - Withdraw money from checking or savings
TRANSFER - Transfer money between checking and savings
VIEW - View checking history, saving history, or total balances
EXIT - Exit The First Bank of Suncoast's application\n";

pub const VIEW_MENU: &str = "\nCHECKING - Checking account with transaction history
SAVINGS - Savings account with transaction history
TOTAL - Summary of balances in both accounts";
