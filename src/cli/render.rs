use anyhow::Result;
use std::io::Write;

use crate::application::{AccountStatement, TotalsReport};
use crate::domain::{AccountKind, Balance, Direction, Transaction, format_units};

/// Output format for one-shot VIEW commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn write_statement<W: Write>(
    out: &mut W,
    statement: &AccountStatement,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Table => {
            for tx in &statement.transactions {
                writeln!(out, "\n{}", history_line(tx))?;
            }
            write_balance_line(out, statement.account, statement.balance)?;
        }
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(statement)?)?;
        }
        OutputFormat::Csv => {
            let mut csv_writer = csv::Writer::from_writer(out);
            csv_writer.write_record(["timestamp", "direction", "amount"])?;
            for tx in &statement.transactions {
                csv_writer.write_record([
                    tx.timestamp.to_rfc3339(),
                    tx.direction.to_string(),
                    tx.amount.to_string(),
                ])?;
            }
            csv_writer.flush()?;
        }
    }
    Ok(())
}

pub fn write_totals<W: Write>(out: &mut W, totals: &TotalsReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => {
            for account in AccountKind::ALL {
                write_balance_line(out, account, totals.for_account(account))?;
            }
            writeln!(out, "Combined you have {}\n", format_units(totals.combined))?;
        }
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(totals)?)?;
        }
        OutputFormat::Csv => {
            let mut csv_writer = csv::Writer::from_writer(out);
            csv_writer.write_record(["account", "balance"])?;
            for account in AccountKind::ALL {
                csv_writer.write_record([
                    account.as_str().to_string(),
                    totals.for_account(account).to_string(),
                ])?;
            }
            csv_writer.write_record(["total".to_string(), totals.combined.to_string()])?;
            csv_writer.flush()?;
        }
    }
    Ok(())
}

pub fn write_balance_line<W: Write>(out: &mut W, account: AccountKind, balance: Balance) -> Result<()> {
    writeln!(out, "\nYou have {} in your {}\n", format_units(balance), account)?;
    Ok(())
}

/// "2024-01-15 09:30:00 - You added $100"
pub fn history_line(tx: &Transaction) -> String {
    let verb = match tx.direction {
        Direction::Deposit => "added",
        Direction::Withdrawal => "removed",
    };
    format!(
        "{} - You {} {}",
        tx.timestamp.format(TIMESTAMP_FORMAT),
        verb,
        format_units(tx.amount)
    )
}
