//! CSV format for session command files
//!
//! A session file drives one ledger session. Columns:
//! `op,name,identity,account,kind,amount`, with unused columns left empty:
//!
//! ```csv
//! op,name,identity,account,kind,amount
//! register,Alice Nguyen,001203000001,,,
//! open,,001203000001,600001,savings,20000000
//! withdraw,,001203000001,600001,,5000000
//! ```
//!
//! All conversion functions are pure (no I/O) for easy testing.

use crate::types::AccountKind;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::str::FromStr;

/// Raw CSV row before validation
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SessionRow {
    pub op: String,
    pub name: Option<String>,
    pub identity: String,
    pub account: Option<String>,
    pub kind: Option<String>,
    pub amount: Option<String>,
}

/// A validated session command
///
/// Identity codes and account numbers are passed through as strings; the
/// core constructors re-validate their shape and fail fast, so the CLI
/// layer never needs to duplicate those rules.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionCommand {
    /// Register a new customer
    RegisterCustomer { name: String, identity: String },

    /// Open an account for a registered customer
    OpenAccount {
        identity: String,
        number: String,
        kind: AccountKind,
        opening_amount: Decimal,
    },

    /// Request a withdrawal
    Withdraw {
        identity: String,
        number: String,
        amount: Decimal,
    },
}

/// Convert a SessionRow to a SessionCommand
///
/// Checks that the columns each operation requires are present and parse,
/// and maps the operation and kind names case-insensitively.
pub fn convert_session_row(row: SessionRow) -> Result<SessionCommand, String> {
    match row.op.to_lowercase().as_str() {
        "register" => {
            let name = require(row.name, "name", "register")?;
            Ok(SessionCommand::RegisterCustomer {
                name,
                identity: row.identity,
            })
        }
        "open" => {
            let number = require(row.account, "account", "open")?;
            let kind = parse_kind(&require(row.kind, "kind", "open")?)?;
            let opening_amount = parse_amount(row.amount, "open")?;
            Ok(SessionCommand::OpenAccount {
                identity: row.identity,
                number,
                kind,
                opening_amount,
            })
        }
        "withdraw" => {
            let number = require(row.account, "account", "withdraw")?;
            let amount = parse_amount(row.amount, "withdraw")?;
            Ok(SessionCommand::Withdraw {
                identity: row.identity,
                number,
                amount,
            })
        }
        other => Err(format!("Invalid operation '{}'", other)),
    }
}

fn require(field: Option<String>, column: &str, op: &str) -> Result<String, String> {
    match field {
        Some(value) if !value.trim().is_empty() => Ok(value.trim().to_string()),
        _ => Err(format!("'{}' requires the {} column", op, column)),
    }
}

fn parse_kind(kind: &str) -> Result<AccountKind, String> {
    match kind.to_lowercase().as_str() {
        "basic" => Ok(AccountKind::Basic),
        "savings" => Ok(AccountKind::Savings),
        "loan" => Ok(AccountKind::Loan),
        other => Err(format!("Invalid account kind '{}'", other)),
    }
}

fn parse_amount(field: Option<String>, op: &str) -> Result<Decimal, String> {
    let raw = require(field, "amount", op)?;
    Decimal::from_str(&raw).map_err(|_| format!("Invalid amount '{}'", raw))
}
