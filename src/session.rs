//! Session orchestration
//!
//! Drives one ledger session from a command file: builds an empty
//! [`Ledger`], streams commands through [`SessionReader`], applies each
//! one, and writes receipts plus the final report to the given output.
//!
//! Error policy mirrors the command model: only failing to open the input
//! file aborts the session. Malformed rows and rejected commands are
//! reported on stderr and the session continues with the next row.

use crate::core::{Customer, Ledger};
use crate::io::{
    write_ledger_report, write_receipt, write_transaction_history, SessionCommand, SessionReader,
};
use crate::types::{Account, AccountKind, IdentityCode, WithdrawalReceipt};
use std::io::Write;
use std::path::Path;

/// Run a full session against a command file
///
/// Accepted withdrawals print a receipt (followed by a blank line) as they
/// happen; the ledger report is written last. With `include_history` set,
/// the per-account transaction log follows the report.
///
/// # Arguments
/// * `input_path` - Path to the session command file
/// * `output` - Destination for receipts and reports
/// * `include_history` - Whether to append the transaction history
///
/// # Errors
/// Returns an error if the input file cannot be opened or the output
/// cannot be written.
pub fn run(input_path: &Path, output: &mut dyn Write, include_history: bool) -> Result<(), String> {
    let mut ledger = Ledger::new();
    let reader = SessionReader::new(input_path)?;

    for result in reader {
        match result.and_then(|command| execute(&mut ledger, command)) {
            Ok(Some(receipt)) => {
                write_receipt(&receipt, output)
                    .and_then(|_| writeln!(output))
                    .map_err(|e| format!("Failed to write receipt: {}", e))?;
            }
            Ok(None) => {}
            Err(message) => eprintln!("{}", message),
        }
    }

    write_ledger_report(&ledger, output)
        .map_err(|e| format!("Failed to write report: {}", e))?;

    if include_history {
        writeln!(output).map_err(|e| format!("Failed to write history: {}", e))?;
        write_transaction_history(&ledger, output)
            .map_err(|e| format!("Failed to write history: {}", e))?;
    }

    Ok(())
}

/// Apply one command to the ledger
///
/// Returns the withdrawal receipt when a withdrawal is accepted, `None`
/// for commands that succeed silently, and an error message when the
/// command is refused.
pub fn execute(
    ledger: &mut Ledger,
    command: SessionCommand,
) -> Result<Option<WithdrawalReceipt>, String> {
    match command {
        SessionCommand::RegisterCustomer { name, identity } => {
            let identity = IdentityCode::parse(&identity).map_err(|e| e.to_string())?;
            if ledger.add_customer(Customer::new(name, identity.clone())) {
                Ok(None)
            } else {
                Err(format!(
                    "Customer with identity code {} is already registered",
                    identity
                ))
            }
        }
        SessionCommand::OpenAccount {
            identity,
            number,
            kind,
            opening_amount,
        } => {
            if ledger.find_customer(&identity).is_none() {
                return Err(format!("No customer with identity code {}", identity));
            }
            if ledger.is_account_number_taken(&number) {
                return Err(format!("Account number {} is already in use", number));
            }
            let account = match kind {
                AccountKind::Basic => Account::basic(&number, opening_amount),
                AccountKind::Savings => Account::savings(&number, opening_amount),
                AccountKind::Loan => Account::loan(&number, opening_amount),
            }
            .map_err(|e| e.to_string())?;

            if ledger.open_account(&identity, account) {
                Ok(None)
            } else {
                Err(format!("Failed to open account {}", number))
            }
        }
        SessionCommand::Withdraw {
            identity,
            number,
            amount,
        } => {
            let customer = ledger
                .find_customer(&identity)
                .ok_or_else(|| format!("No customer with identity code {}", identity))?;
            let account = customer
                .find_account(&number)
                .ok_or_else(|| format!("Customer {} has no account {}", identity, number))?;
            if !account.supports_withdrawal() {
                return Err(format!("Account {} does not support withdrawals", number));
            }

            match ledger.withdraw(&identity, &number, amount) {
                Some(receipt) => Ok(Some(receipt)),
                None => Err(format!(
                    "Withdrawal of {} from account {} rejected",
                    amount.normalize(),
                    number
                )),
            }
        }
    }
}
