mod common;

use anyhow::Result;
use common::{data_file, fund, open_service, test_service};
use suncoast::domain::{AccountKind, Direction};

#[test]
fn test_reopened_ledger_has_identical_balances() -> Result<()> {
    let (mut service, temp) = test_service()?;
    fund(&mut service, AccountKind::Checking, &[100, 250])?;
    fund(&mut service, AccountKind::Savings, &[75])?;
    service.withdraw(AccountKind::Checking, 60)?;
    service.transfer(AccountKind::Savings, 25)?;

    let reopened = open_service(data_file(&temp))?;

    assert_eq!(reopened.totals(), service.totals());
    assert_eq!(reopened.ledger().transactions(), service.ledger().transactions());
    Ok(())
}

#[test]
fn test_transfer_legs_are_persisted() -> Result<()> {
    let (mut service, temp) = test_service()?;
    fund(&mut service, AccountKind::Checking, &[100])?;
    service.transfer(AccountKind::Checking, 40)?;

    let reopened = open_service(data_file(&temp))?;
    let transactions = reopened.ledger().transactions();

    assert_eq!(transactions.len(), 3);
    assert_eq!(transactions[1].direction, Direction::Withdrawal);
    assert_eq!(transactions[2].direction, Direction::Deposit);
    assert_eq!(transactions[2].account, AccountKind::Savings);
    Ok(())
}

#[test]
fn test_ledger_continues_from_persisted_history() -> Result<()> {
    let (mut service, temp) = test_service()?;
    fund(&mut service, AccountKind::Savings, &[50])?;
    drop(service);

    let mut reopened = open_service(data_file(&temp))?;
    assert!(!reopened.withdraw(AccountKind::Savings, 51)?.is_applied());
    assert!(reopened.withdraw(AccountKind::Savings, 50)?.is_applied());

    let again = open_service(data_file(&temp))?;
    assert_eq!(again.balance(AccountKind::Savings), 0);
    assert_eq!(again.ledger().len(), 2);
    Ok(())
}

#[test]
fn test_legacy_file_is_readable() -> Result<()> {
    let temp = tempfile::TempDir::new()?;
    let path = data_file(&temp);
    std::fs::write(
        &path,
        "Amount,Checking,Deposit,Date\n\
         100,True,True,1/1/0001 12:00:00 AM\n\
         50,False,True,1/1/0001 12:00:00 AM\n\
         30,True,False,1/1/0001 12:00:00 AM\n",
    )?;

    let service = open_service(path)?;

    assert_eq!(service.balance(AccountKind::Checking), 70);
    assert_eq!(service.balance(AccountKind::Savings), 50);
    Ok(())
}

#[test]
fn test_corrupt_file_is_an_error() -> Result<()> {
    let temp = tempfile::TempDir::new()?;
    let path = data_file(&temp);
    std::fs::write(&path, "Amount,Checking,Deposit,Date\n100,maybe,True,2024-01-01T00:00:00Z\n")?;

    assert!(open_service(path).is_err());
    Ok(())
}
