//! Core business logic module
//!
//! Aggregates built on top of the data types:
//! - `customer` - customer aggregate with account ownership queries
//! - `ledger` - root registry enforcing global uniqueness and routing
//!   withdrawals

pub mod customer;
pub mod ledger;

pub use customer::Customer;
pub use ledger::Ledger;
