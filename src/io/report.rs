//! Plain-text receipts and reports
//!
//! Rendering for the read-only snapshots the core hands back: withdrawal
//! receipts, per-customer reports, the whole-ledger report, and the
//! per-account transaction history. All functions write to a
//! `&mut dyn Write` so output is testable and the caller decides the
//! destination.
//!
//! Monetary values are printed through [`Decimal::normalize`] so fee
//! arithmetic never leaks trailing zeros into the output.

use crate::core::{Customer, Ledger};
use crate::types::WithdrawalReceipt;
use rust_decimal::Decimal;
use std::io::{self, Write};

const RECEIPT_BORDER: &str = "+--------------------------------+";

/// Render a monetary value without trailing zeros
fn fmt_amount(amount: Decimal) -> String {
    amount.normalize().to_string()
}

/// Write a withdrawal receipt box
pub fn write_receipt(receipt: &WithdrawalReceipt, output: &mut dyn Write) -> io::Result<()> {
    match receipt {
        WithdrawalReceipt::Savings {
            account_number,
            amount,
            remaining_balance,
        } => {
            writeln!(output, "{}", RECEIPT_BORDER)?;
            writeln!(output, "| {:<30} |", "Savings withdrawal receipt")?;
            writeln!(output, "{}", RECEIPT_BORDER)?;
            writeln!(output, "| account  : {}", account_number)?;
            writeln!(output, "| amount   : {}", fmt_amount(*amount))?;
            writeln!(output, "| balance  : {}", fmt_amount(*remaining_balance))?;
            writeln!(output, "{}", RECEIPT_BORDER)?;
        }
        WithdrawalReceipt::Loan {
            account_number,
            amount,
            fee,
            fee_rate,
            remaining_limit,
        } => {
            let percent = *fee_rate * Decimal::ONE_HUNDRED;
            writeln!(output, "{}", RECEIPT_BORDER)?;
            writeln!(output, "| {:<30} |", "Loan withdrawal receipt")?;
            writeln!(output, "{}", RECEIPT_BORDER)?;
            writeln!(output, "| account  : {}", account_number)?;
            writeln!(output, "| amount   : {}", fmt_amount(*amount))?;
            writeln!(
                output,
                "| fee      : {} ({}%)",
                fmt_amount(*fee),
                fmt_amount(percent)
            )?;
            writeln!(output, "| headroom : {}", fmt_amount(*remaining_limit))?;
            writeln!(output, "{}", RECEIPT_BORDER)?;
        }
    }
    Ok(())
}

/// Write one customer's report: identity details, tier, total, accounts
pub fn write_customer_report(customer: &Customer, output: &mut dyn Write) -> io::Result<()> {
    let identity = customer.identity();
    let born = match identity.sex_and_birth_year() {
        Some((sex, year)) => format!("{}, {}", sex, year),
        None => "unknown".to_string(),
    };

    writeln!(output, "=== Customer ===")?;
    writeln!(output, "identity : {}", identity)?;
    writeln!(output, "region   : {}", identity.region().unwrap_or("unknown"))?;
    writeln!(output, "born     : {}", born)?;
    writeln!(output, "name     : {}", customer.name())?;
    writeln!(output, "tier     : {}", customer.tier())?;
    writeln!(output, "total    : {}", fmt_amount(customer.total_balance()))?;
    writeln!(output, "--- accounts ---")?;
    if customer.accounts().is_empty() {
        writeln!(output, "(no accounts)")?;
    } else {
        for account in customer.accounts() {
            writeln!(
                output,
                "{} | {} | {} | {}",
                account.number(),
                account.kind(),
                account.tier(),
                fmt_amount(account.amount())
            )?;
        }
    }
    Ok(())
}

/// Write the report for every registered customer, in registration order
pub fn write_ledger_report(ledger: &Ledger, output: &mut dyn Write) -> io::Result<()> {
    if ledger.customers().is_empty() {
        writeln!(output, "(no customers)")?;
        return Ok(());
    }
    for (index, customer) in ledger.customers().iter().enumerate() {
        if index > 0 {
            writeln!(output)?;
        }
        write_customer_report(customer, output)?;
    }
    Ok(())
}

/// Write every account's withdrawal-attempt log
pub fn write_transaction_history(ledger: &Ledger, output: &mut dyn Write) -> io::Result<()> {
    writeln!(output, "=== Transaction history ===")?;
    for customer in ledger.customers() {
        for account in customer.accounts() {
            writeln!(output, "--- {} ---", account.number())?;
            if account.transactions().is_empty() {
                writeln!(output, "(none)")?;
            } else {
                for transaction in account.transactions() {
                    writeln!(output, "{}", transaction)?;
                }
            }
        }
    }
    Ok(())
}
