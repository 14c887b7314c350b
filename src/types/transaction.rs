//! Withdrawal attempt records and receipts
//!
//! Every withdrawal attempt, accepted or rejected, produces exactly one
//! [`Transaction`]. Records are append-only: they are never mutated or
//! deleted for the lifetime of the session.
//!
//! An accepted withdrawal additionally yields a [`WithdrawalReceipt`],
//! the value the core hands back to the caller instead of printing
//! anything itself.

use chrono::{DateTime, Local};
use rand::{distr::Alphanumeric, Rng};
use rust_decimal::Decimal;
use std::fmt;

/// Length of a generated transaction id
const ID_LENGTH: usize = 8;

/// Immutable record of one withdrawal attempt
///
/// The id is a random 8-character alphanumeric token. Uniqueness is not
/// enforced; the log is per-account and session-scoped, so collisions are
/// tolerated rather than checked for.
#[derive(Debug, Clone)]
pub struct Transaction {
    id: String,
    account_number: String,
    amount: Decimal,
    timestamp: DateTime<Local>,
    accepted: bool,
}

impl Transaction {
    /// Record a withdrawal attempt against an account
    pub fn new(account_number: &str, amount: Decimal, accepted: bool) -> Self {
        Transaction {
            id: generate_id(),
            account_number: account_number.to_string(),
            amount,
            timestamp: Local::now(),
            accepted,
        }
    }

    /// The generated transaction id
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Number of the account the attempt was made against
    pub fn account_number(&self) -> &str {
        &self.account_number
    }

    /// Requested withdrawal amount (excluding any fee)
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Local time the attempt was recorded
    pub fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }

    /// Whether the attempt was accepted
    pub fn is_accepted(&self) -> bool {
        self.accepted
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | {} | {} | {}",
            self.id,
            self.account_number,
            self.amount.normalize(),
            self.timestamp.format("%Y-%m-%d %H:%M:%S"),
            if self.accepted { "accepted" } else { "rejected" }
        )
    }
}

/// Generate a random 8-character alphanumeric id
fn generate_id() -> String {
    rand::rng()
        .sample_iter(Alphanumeric)
        .take(ID_LENGTH)
        .map(char::from)
        .collect()
}

/// Data for printing a withdrawal receipt
///
/// Returned by an accepted withdrawal; rendering is the report layer's
/// concern. Loan receipts carry the fee and fee rate that were actually
/// charged, captured before the drawn amount was updated.
#[derive(Debug, Clone, PartialEq)]
pub enum WithdrawalReceipt {
    /// Receipt for a savings account withdrawal
    Savings {
        account_number: String,
        amount: Decimal,
        /// Balance left on the account after the withdrawal
        remaining_balance: Decimal,
    },

    /// Receipt for a loan account drawdown
    Loan {
        account_number: String,
        amount: Decimal,
        /// Fee charged on top of the amount
        fee: Decimal,
        /// Rate the fee was computed with (e.g. 0.05 for 5%)
        fee_rate: Decimal,
        /// Credit left below the limit after the drawdown
        remaining_limit: Decimal,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_records_inputs() {
        let tx = Transaction::new("600001", Decimal::from(50_000), true);
        assert_eq!(tx.account_number(), "600001");
        assert_eq!(tx.amount(), Decimal::from(50_000));
        assert!(tx.is_accepted());
    }

    #[test]
    fn test_id_is_eight_alphanumeric_chars() {
        let tx = Transaction::new("600001", Decimal::from(50_000), false);
        assert_eq!(tx.id().len(), 8);
        assert!(tx.id().chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_ids_vary_between_records() {
        // Not a uniqueness guarantee, just a sanity check that the
        // generator is not constant.
        let ids: Vec<String> = (0..16)
            .map(|_| Transaction::new("600001", Decimal::ONE, true).id().to_string())
            .collect();
        assert!(ids.iter().any(|id| id != &ids[0]));
    }

    #[test]
    fn test_display_marks_rejected_attempts() {
        let tx = Transaction::new("600001", Decimal::from(55_000), false);
        let rendered = tx.to_string();
        assert!(rendered.contains("600001"));
        assert!(rendered.contains("55000"));
        assert!(rendered.ends_with("rejected"));
    }
}
