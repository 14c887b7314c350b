//! Account types and withdrawal policy
//!
//! An [`Account`] is a 6-digit-numbered, balance-bearing entity of one of
//! three kinds:
//!
//! - **Basic**: plain deposit account, no withdrawal facility
//! - **Savings**: funds on deposit, withdrawals subject to a minimum
//!   amount, a 10,000 step, a non-premium per-withdrawal cap, and a
//!   balance floor
//! - **Loan**: a credit line; the stored amount is what has been *drawn*
//!   so far, and withdrawals add the amount plus a tier-dependent fee,
//!   subject to the credit limit and a headroom floor
//!
//! The single `amount` field deliberately serves both meanings (funds held
//! for basic/savings, amount drawn for loan); premium classification and
//! customer totals compare the same numeric value regardless of kind.
//!
//! `is_accepted` answers eligibility without mutating anything; `withdraw`
//! applies it and appends one [`Transaction`] per attempt, accepted or not.

use crate::types::{LedgerError, Transaction, WithdrawalReceipt};
use rust_decimal::Decimal;
use std::fmt;

/// Balance (or drawn amount) at or above which an account is premium
pub const PREMIUM_THRESHOLD: Decimal = Decimal::from_parts(10_000_000, 0, 0, false, 0);

/// Smallest withdrawal a savings account accepts
pub const SAVINGS_MIN_WITHDRAWAL: Decimal = Decimal::from_parts(50_000, 0, 0, false, 0);

/// Savings withdrawals must be a multiple of this step
pub const SAVINGS_WITHDRAWAL_STEP: Decimal = Decimal::from_parts(10_000, 0, 0, false, 0);

/// Per-withdrawal cap for non-premium savings accounts
pub const SAVINGS_WITHDRAWAL_CAP: Decimal = Decimal::from_parts(5_000_000, 0, 0, false, 0);

/// Balance that must remain on a savings account after a withdrawal
pub const SAVINGS_BALANCE_FLOOR: Decimal = Decimal::from_parts(50_000, 0, 0, false, 0);

/// Total credit available on a loan account
pub const LOAN_CREDIT_LIMIT: Decimal = Decimal::from_parts(100_000_000, 0, 0, false, 0);

/// Headroom that must remain below the credit limit after a drawdown
pub const LOAN_HEADROOM_FLOOR: Decimal = Decimal::from_parts(50_000, 0, 0, false, 0);

/// Drawdown fee rate for non-premium loan accounts (5%)
pub const LOAN_FEE_RATE: Decimal = Decimal::from_parts(5, 0, 0, false, 2);

/// Drawdown fee rate for premium loan accounts (1%)
pub const LOAN_PREMIUM_FEE_RATE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Product kind of an account
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountKind {
    /// Plain deposit account without a withdrawal facility
    Basic,
    /// Savings account; `amount` is funds on deposit
    Savings,
    /// Loan account (credit line); `amount` is the amount drawn
    Loan,
}

impl fmt::Display for AccountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccountKind::Basic => write!(f, "basic"),
            AccountKind::Savings => write!(f, "savings"),
            AccountKind::Loan => write!(f, "loan"),
        }
    }
}

/// A balance-bearing account with an append-only transaction log
#[derive(Debug, Clone)]
pub struct Account {
    number: String,
    kind: AccountKind,
    /// Funds on deposit (basic/savings) or amount drawn (loan)
    amount: Decimal,
    transactions: Vec<Transaction>,
}

impl Account {
    /// Create a basic deposit account
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::InvalidAccountNumber`] if `number` is not
    /// exactly 6 digits, or [`LedgerError::NegativeOpeningAmount`] if
    /// `opening_balance` is negative.
    pub fn basic(number: &str, opening_balance: Decimal) -> Result<Self, LedgerError> {
        Self::with_kind(number, AccountKind::Basic, opening_balance)
    }

    /// Create a savings account with an opening balance
    ///
    /// # Errors
    ///
    /// Same conditions as [`Account::basic`].
    pub fn savings(number: &str, opening_balance: Decimal) -> Result<Self, LedgerError> {
        Self::with_kind(number, AccountKind::Savings, opening_balance)
    }

    /// Create a loan account with an already-drawn amount
    ///
    /// # Errors
    ///
    /// Same conditions as [`Account::basic`].
    pub fn loan(number: &str, opening_drawn: Decimal) -> Result<Self, LedgerError> {
        Self::with_kind(number, AccountKind::Loan, opening_drawn)
    }

    fn with_kind(number: &str, kind: AccountKind, amount: Decimal) -> Result<Self, LedgerError> {
        if number.len() != 6 || !number.bytes().all(|b| b.is_ascii_digit()) {
            return Err(LedgerError::invalid_account_number(number));
        }
        if amount < Decimal::ZERO {
            return Err(LedgerError::negative_opening_amount(amount));
        }
        Ok(Account {
            number: number.to_string(),
            kind,
            amount,
            transactions: Vec::new(),
        })
    }

    /// The 6-digit account number
    pub fn number(&self) -> &str {
        &self.number
    }

    /// Product kind
    pub fn kind(&self) -> AccountKind {
        self.kind
    }

    /// Funds on deposit (basic/savings) or amount drawn (loan)
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Whether the account is premium (amount at or above 10,000,000)
    ///
    /// Kind-independent: a heavily drawn loan account classifies as
    /// premium exactly like a well-funded savings account.
    pub fn is_premium(&self) -> bool {
        self.amount >= PREMIUM_THRESHOLD
    }

    /// Tier label used in reports
    pub fn tier(&self) -> &'static str {
        if self.is_premium() {
            "PREMIUM"
        } else {
            "NORMAL"
        }
    }

    /// Whether this account kind has a withdrawal facility
    pub fn supports_withdrawal(&self) -> bool {
        self.kind != AccountKind::Basic
    }

    /// Fee rate charged on a loan drawdown at the current tier
    fn fee_rate(&self) -> Decimal {
        if self.is_premium() {
            LOAN_PREMIUM_FEE_RATE
        } else {
            LOAN_FEE_RATE
        }
    }

    /// Fee for drawing `amount` against the loan at the current tier
    pub fn fee(&self, amount: Decimal) -> Decimal {
        amount * self.fee_rate()
    }

    /// Whether a withdrawal of `amount` would be accepted
    ///
    /// Pure query: evaluating it never changes state, so callers may probe
    /// eligibility before committing. The same state and amount always
    /// produce the same answer.
    pub fn is_accepted(&self, amount: Decimal) -> bool {
        match self.kind {
            AccountKind::Basic => false,
            AccountKind::Savings => {
                if amount < SAVINGS_MIN_WITHDRAWAL {
                    return false;
                }
                if amount % SAVINGS_WITHDRAWAL_STEP != Decimal::ZERO {
                    return false;
                }
                if !self.is_premium() && amount > SAVINGS_WITHDRAWAL_CAP {
                    return false;
                }
                self.amount - amount >= SAVINGS_BALANCE_FLOOR
            }
            AccountKind::Loan => {
                if amount <= Decimal::ZERO {
                    return false;
                }
                let projected = self.amount + amount + self.fee(amount);
                if projected > LOAN_CREDIT_LIMIT {
                    return false;
                }
                LOAN_CREDIT_LIMIT - projected >= LOAN_HEADROOM_FLOOR
            }
        }
    }

    /// Execute a withdrawal attempt
    ///
    /// Evaluates [`Account::is_accepted`]. On acceptance the balance
    /// (savings) or drawn amount (loan, amount plus fee) is updated, an
    /// accepted [`Transaction`] is appended, and the receipt is returned.
    /// On rejection only a rejected [`Transaction`] is appended.
    ///
    /// Either way, exactly one transaction is recorded per call.
    pub fn withdraw(&mut self, amount: Decimal) -> Option<WithdrawalReceipt> {
        if !self.is_accepted(amount) {
            self.transactions
                .push(Transaction::new(&self.number, amount, false));
            return None;
        }

        let receipt = match self.kind {
            AccountKind::Savings => {
                self.amount -= amount;
                WithdrawalReceipt::Savings {
                    account_number: self.number.clone(),
                    amount,
                    remaining_balance: self.amount,
                }
            }
            AccountKind::Loan => {
                // Rate and fee are fixed by the tier at the moment of the
                // drawdown, before the drawn amount moves.
                let fee_rate = self.fee_rate();
                let fee = self.fee(amount);
                self.amount += amount + fee;
                WithdrawalReceipt::Loan {
                    account_number: self.number.clone(),
                    amount,
                    fee,
                    fee_rate,
                    remaining_limit: LOAN_CREDIT_LIMIT - self.amount,
                }
            }
            // Basic accounts never pass is_accepted.
            AccountKind::Basic => return None,
        };

        self.transactions
            .push(Transaction::new(&self.number, amount, true));
        Some(receipt)
    }

    /// Append-only log of every withdrawal attempt against this account
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }
}
