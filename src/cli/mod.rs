mod menu;
mod render;
mod shell;

pub use menu::{MenuChoice, ParseChoiceError, ViewChoice};
pub use render::{OutputFormat, history_line, write_statement, write_totals};
pub use shell::Shell;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;

use crate::config::{ClockMode, DEFAULT_DATA_FILE, Settings};
use crate::domain::{AccountKind, TransferOutcome, Units, WithdrawalOutcome, format_units};

/// Suncoast - personal banking ledger
#[derive(Parser, Debug)]
#[command(name = "suncoast")]
#[command(about = "Track deposits and withdrawals across checking and savings")]
#[command(version)]
pub struct Cli {
    /// Transaction file path
    #[arg(short, long, env = "SUNCOAST_DATA_FILE", default_value = DEFAULT_DATA_FILE)]
    pub data_file: PathBuf,

    /// Keep transactions in memory only; nothing is read from or written to disk
    #[arg(long, env = "SUNCOAST_NO_PERSIST")]
    pub no_persist: bool,

    /// Timestamp source for new transactions
    #[arg(long, env = "SUNCOAST_CLOCK", value_enum, default_value_t = ClockMode::System)]
    pub clock: ClockMode,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Omit to start the interactive menu
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Deposit money into checking or savings
    Add {
        /// checking or savings
        account: AccountKind,

        /// Whole amount, e.g. "100"
        amount: Units,
    },

    /// Withdraw money from checking or savings
    Remove {
        /// checking or savings
        account: AccountKind,

        /// Whole amount, e.g. "100"
        amount: Units,
    },

    /// Move money from one account into the other
    Transfer {
        /// Source account; the destination is the other account
        #[arg(long)]
        from: AccountKind,

        /// Whole amount, e.g. "100"
        amount: Units,
    },

    /// Show an account's history or the balances of both accounts
    View {
        /// checking, savings or total
        #[arg(value_enum)]
        which: ViewChoice,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
}

impl Cli {
    pub fn settings(&self) -> Settings {
        Settings {
            data_file: self.data_file.clone(),
            persist: !self.no_persist,
            clock: self.clock,
        }
    }

    pub fn run(self) -> Result<()> {
        let settings = self.settings();
        let mut service = settings.open_service().with_context(|| {
            format!(
                "Failed to load transactions from {}",
                settings.data_file.display()
            )
        })?;

        let stdout = io::stdout();
        let mut out = stdout.lock();

        match self.command {
            None => {
                let stdin = io::stdin();
                let mut shell = Shell::new(stdin.lock(), out, service);
                shell.run()?;
            }

            Some(Commands::Add { account, amount }) => {
                check_amount(amount)?;
                service.deposit(account, amount)?;
                writeln!(out, "{} successfully added to your {}", format_units(amount), account)?;
            }

            Some(Commands::Remove { account, amount }) => {
                check_amount(amount)?;
                match service.withdraw(account, amount)? {
                    WithdrawalOutcome::Applied(_) => writeln!(
                        out,
                        "{} successfully removed from your {}",
                        format_units(amount),
                        account
                    )?,
                    WithdrawalOutcome::Declined { balance, .. } => writeln!(
                        out,
                        "Insufficient funds. Transaction declined ({} has {})",
                        account,
                        format_units(balance)
                    )?,
                }
            }

            Some(Commands::Transfer { from, amount }) => {
                check_amount(amount)?;
                match service.transfer(from, amount)? {
                    TransferOutcome::Completed { .. } => writeln!(
                        out,
                        "{} transferred from your {} to your {}",
                        format_units(amount),
                        from,
                        from.other()
                    )?,
                    TransferOutcome::Declined { balance, .. } => writeln!(
                        out,
                        "Insufficient funds. Transaction declined ({} has {})",
                        from,
                        format_units(balance)
                    )?,
                }
            }

            Some(Commands::View { which, format }) => match which {
                ViewChoice::Checking => {
                    write_statement(&mut out, &service.statement(AccountKind::Checking), format)?
                }
                ViewChoice::Savings => {
                    write_statement(&mut out, &service.statement(AccountKind::Savings), format)?
                }
                ViewChoice::Total => write_totals(&mut out, &service.totals(), format)?,
            },
        }

        Ok(())
    }
}

fn check_amount(amount: Units) -> Result<()> {
    if amount < 0 {
        anyhow::bail!("Invalid amount {}: please enter a positive number only", amount);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_starts_shell() {
        let cli = Cli::try_parse_from(["suncoast"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.no_persist);
    }

    #[test]
    fn test_parse_add() {
        let cli = Cli::try_parse_from(["suncoast", "add", "Checking", "100"]).unwrap();
        match cli.command {
            Some(Commands::Add { account, amount }) => {
                assert_eq!(account, AccountKind::Checking);
                assert_eq!(amount, 100);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_rejects_unknown_account() {
        assert!(Cli::try_parse_from(["suncoast", "remove", "brokerage", "5"]).is_err());
    }

    #[test]
    fn test_parse_rejects_non_numeric_amount() {
        assert!(Cli::try_parse_from(["suncoast", "add", "savings", "ten"]).is_err());
    }

    #[test]
    fn test_settings_from_flags() {
        let cli = Cli::try_parse_from([
            "suncoast",
            "--data-file",
            "ledger.csv",
            "--no-persist",
            "--clock",
            "fixed",
            "view",
            "total",
            "--format",
            "json",
        ])
        .unwrap();

        let settings = cli.settings();
        assert_eq!(settings.data_file, PathBuf::from("ledger.csv"));
        assert!(!settings.persist);
        assert_eq!(settings.clock, ClockMode::Fixed);
        assert!(matches!(
            cli.command,
            Some(Commands::View {
                which: ViewChoice::Total,
                format: OutputFormat::Json
            })
        ));
    }
}
