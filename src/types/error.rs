//! Error types for the bank ledger engine
//!
//! Construction errors only: a malformed account number, a negative opening
//! amount, or an invalid identity code must never produce a half-valid
//! object, so the constructors fail fast with one of these variants.
//!
//! Operation rejections (duplicate customer, duplicate account number,
//! refused withdrawal, unknown lookup target) are expected outcomes and are
//! signalled as `bool` / `Option` in normal control flow, never as errors.

use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for the ledger core
///
/// Every variant is raised at construction time. Once a value exists it is
/// valid; callers that receive an `Ok` never need to re-check shape.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    /// Account number does not match the required 6-digit shape
    #[error("Invalid account number '{number}': expected exactly 6 digits")]
    InvalidAccountNumber {
        /// The rejected account number
        number: String,
    },

    /// Opening amount (balance or drawn amount) is negative
    #[error("Invalid opening amount {amount}: must not be negative")]
    NegativeOpeningAmount {
        /// The rejected amount
        amount: Decimal,
    },

    /// Identity code is not 12 digits or carries an unknown region prefix
    #[error("Invalid identity code '{code}': expected 12 digits with a known region prefix")]
    InvalidIdentityCode {
        /// The rejected identity code
        code: String,
    },
}

// Helper functions for creating common errors

impl LedgerError {
    /// Create an InvalidAccountNumber error
    pub fn invalid_account_number(number: &str) -> Self {
        LedgerError::InvalidAccountNumber {
            number: number.to_string(),
        }
    }

    /// Create a NegativeOpeningAmount error
    pub fn negative_opening_amount(amount: Decimal) -> Self {
        LedgerError::NegativeOpeningAmount { amount }
    }

    /// Create an InvalidIdentityCode error
    pub fn invalid_identity_code(code: &str) -> Self {
        LedgerError::InvalidIdentityCode {
            code: code.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal::Decimal;

    #[rstest]
    #[case::invalid_account_number(
        LedgerError::invalid_account_number("12345"),
        "Invalid account number '12345': expected exactly 6 digits"
    )]
    #[case::negative_opening_amount(
        LedgerError::negative_opening_amount(Decimal::from(-1)),
        "Invalid opening amount -1: must not be negative"
    )]
    #[case::invalid_identity_code(
        LedgerError::invalid_identity_code("00000000000"),
        "Invalid identity code '00000000000': expected 12 digits with a known region prefix"
    )]
    fn test_error_display(#[case] error: LedgerError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    #[case::invalid_account_number(
        LedgerError::invalid_account_number("abc"),
        LedgerError::InvalidAccountNumber { number: "abc".to_string() }
    )]
    #[case::negative_opening_amount(
        LedgerError::negative_opening_amount(Decimal::from(-500)),
        LedgerError::NegativeOpeningAmount { amount: Decimal::from(-500) }
    )]
    fn test_helper_functions(#[case] result: LedgerError, #[case] expected: LedgerError) {
        assert_eq!(result, expected);
    }
}
