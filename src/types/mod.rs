//! Types module
//!
//! Core data structures of the ledger, organized into logical submodules:
//! - `identity`: national identity code validation and decoding
//! - `account`: account kinds, policy constants, withdrawal rules
//! - `transaction`: withdrawal attempt records and receipts
//! - `error`: construction error types

pub mod account;
pub mod error;
pub mod identity;
pub mod transaction;

pub use account::{Account, AccountKind};
pub use error::LedgerError;
pub use identity::{IdentityCode, Sex};
pub use transaction::{Transaction, WithdrawalReceipt};
