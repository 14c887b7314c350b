//! Bank Ledger Engine Library
//! # Overview
//!
//! This library models a small retail banking ledger: customers identified
//! by a 12-digit national identity code, accounts with kind-specific
//! withdrawal policies, and an append-only log of withdrawal attempts.
//! Sessions are driven from streaming CSV command files.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (IdentityCode, Account, Transaction, etc.)
//! - [`cli`] - CLI argument parsing
//! - [`core`] - Business logic components:
//!   - [`core::customer`] - Customer aggregate and account ownership
//!   - [`core::ledger`] - Root registry, uniqueness rules, withdrawal routing
//! - [`io`] - Session file reading and report rendering
//! - [`session`] - Session orchestration tying the layers together
//!
//! # Account Kinds
//!
//! Three account kinds share one balance-like `amount` field with
//! different meanings:
//!
//! - **Basic**: deposit-only; no withdrawal facility
//! - **Savings**: `amount` is the balance; withdrawals are stepped,
//!   capped for non-premium accounts, and must leave a minimum balance
//! - **Loan**: `amount` is the drawn total; drawdowns incur a fee and are
//!   bounded by a credit limit with a minimum headroom
//!
//! # Premium Tier
//!
//! An account holding at least 10,000,000 is premium; premium status
//! lifts the savings withdrawal cap and lowers the loan fee rate. A
//! customer is premium if any of their accounts is.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod session;
pub mod types;

pub use core::{Customer, Ledger};
pub use io::{write_customer_report, write_ledger_report, write_receipt, SessionReader};
pub use types::{
    Account, AccountKind, IdentityCode, LedgerError, Sex, Transaction, WithdrawalReceipt,
};
