use anyhow::Result;
use std::io::{BufRead, Write};

use crate::application::BankService;
use crate::domain::{
    AccountKind, ParseUnitsError, TransferOutcome, Units, WithdrawalOutcome, format_units,
    parse_units,
};
use crate::storage::Store;

use super::menu::{MENU, MenuChoice, VIEW_MENU, ViewChoice};
use super::render::{OutputFormat, write_statement, write_totals};

const RULE: &str = "~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~";

/// Interactive menu loop around a [`BankService`].
///
/// Invalid input never ends the session: every prompt repeats until it gets a
/// usable answer. Reaching the end of input behaves like EXIT.
pub struct Shell<R, W, S: Store> {
    input: R,
    output: W,
    service: BankService<S>,
}

impl<R: BufRead, W: Write, S: Store> Shell<R, W, S> {
    pub fn new(input: R, output: W, service: BankService<S>) -> Self {
        Self {
            input,
            output,
            service,
        }
    }

    pub fn into_parts(self) -> (W, BankService<S>) {
        (self.output, self.service)
    }

    pub fn run(&mut self) -> Result<()> {
        self.banner("    Welcome to The First Bank of Suncoast!")?;

        while let Some(line) = self.prompt_menu()? {
            match line.parse::<MenuChoice>() {
                Ok(MenuChoice::Add) => self.add()?,
                Ok(MenuChoice::Remove) => self.remove()?,
                Ok(MenuChoice::Transfer) => self.transfer()?,
                Ok(MenuChoice::View) => self.view()?,
                Ok(MenuChoice::Exit) => break,
                Err(_) => writeln!(
                    self.output,
                    "\nThat's not a menu option, please try again\n"
                )?,
            }
        }

        self.banner("Thank you for using The First Bank of Suncoast!")
    }

    fn add(&mut self) -> Result<()> {
        let Some(account) = self.prompt_account("adding")? else {
            return Ok(());
        };
        let Some(amount) = self.prompt_amount("add")? else {
            return Ok(());
        };

        self.service.deposit(account, amount)?;
        self.report_added(account, amount)
    }

    fn remove(&mut self) -> Result<()> {
        let Some(account) = self.prompt_account("removing")? else {
            return Ok(());
        };
        let Some(amount) = self.prompt_amount("remove")? else {
            return Ok(());
        };

        match self.service.withdraw(account, amount)? {
            WithdrawalOutcome::Applied(_) => self.report_removed(account, amount),
            WithdrawalOutcome::Declined { .. } => self.report_declined(),
        }
    }

    fn transfer(&mut self) -> Result<()> {
        let Some(from) = self.prompt_account("transferring")? else {
            return Ok(());
        };
        let Some(amount) = self.prompt_amount("transfer")? else {
            return Ok(());
        };

        match self.service.transfer(from, amount)? {
            TransferOutcome::Completed { .. } => {
                self.report_removed(from, amount)?;
                self.report_added(from.other(), amount)
            }
            TransferOutcome::Declined { .. } => self.report_declined(),
        }
    }

    fn view(&mut self) -> Result<()> {
        writeln!(self.output, "{}", VIEW_MENU)?;
        write!(self.output, "\nWhich would you like to view? ")?;
        self.output.flush()?;

        let Some(line) = self.read_line()? else {
            return Ok(());
        };
        match line.parse::<ViewChoice>() {
            Ok(ViewChoice::Checking) => {
                let statement = self.service.statement(AccountKind::Checking);
                write_statement(&mut self.output, &statement, OutputFormat::Table)
            }
            Ok(ViewChoice::Savings) => {
                let statement = self.service.statement(AccountKind::Savings);
                write_statement(&mut self.output, &statement, OutputFormat::Table)
            }
            Ok(ViewChoice::Total) => {
                let totals = self.service.totals();
                write_totals(&mut self.output, &totals, OutputFormat::Table)
            }
            Err(_) => {
                writeln!(self.output, "\nThat was not an option\n")?;
                Ok(())
            }
        }
    }

    fn prompt_menu(&mut self) -> Result<Option<String>> {
        writeln!(self.output, "{}", MENU)?;
        write!(self.output, "What would you like to do? ")?;
        self.output.flush()?;
        let line = self.read_line()?;
        writeln!(self.output)?;
        Ok(line)
    }

    fn prompt_account(&mut self, verbing: &str) -> Result<Option<AccountKind>> {
        writeln!(self.output, "\nFrom which account will you be {} funds?", verbing)?;
        loop {
            write!(self.output, "'CHECKING' or 'SAVINGS': ")?;
            self.output.flush()?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match line.parse::<AccountKind>() {
                Ok(account) => return Ok(Some(account)),
                Err(_) => writeln!(self.output, "\nPlease enter a valid account type!")?,
            }
        }
    }

    fn prompt_amount(&mut self, verb: &str) -> Result<Option<Units>> {
        write!(self.output, "\nHow much money would you like to {}? ", verb)?;
        loop {
            self.output.flush()?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match parse_units(&line) {
                Ok(amount) => return Ok(Some(amount)),
                Err(ParseUnitsError::NotANumber) => {
                    write!(self.output, "\nNot a number. Please enter a number only: ")?
                }
                Err(ParseUnitsError::Negative) => {
                    write!(self.output, "\nPlease enter a positive number only: ")?
                }
            }
        }
    }

    fn report_added(&mut self, account: AccountKind, amount: Units) -> Result<()> {
        writeln!(
            self.output,
            "\n{} successfully added to your {}",
            format_units(amount),
            account
        )?;
        Ok(())
    }

    fn report_removed(&mut self, account: AccountKind, amount: Units) -> Result<()> {
        writeln!(
            self.output,
            "\n{} successfully removed from your {}",
            format_units(amount),
            account
        )?;
        Ok(())
    }

    fn report_declined(&mut self) -> Result<()> {
        writeln!(self.output, "\nInsufficient funds. Transaction declined")?;
        Ok(())
    }

    fn banner(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "\n{}\n{}\n{}\n", RULE, message, RULE)?;
        Ok(())
    }

    /// Next input line without its terminator, or `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}
