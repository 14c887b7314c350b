//! Input/output module
//!
//! Handles the boundary between the core and the outside world:
//! - `session_format` - CSV row shape and command conversion
//! - `session_reader` - streaming iterator over a session file
//! - `report` - receipts, customer/ledger reports, transaction history

pub mod report;
pub mod session_format;
pub mod session_reader;

pub use report::{
    write_customer_report, write_ledger_report, write_receipt, write_transaction_history,
};
pub use session_format::{convert_session_row, SessionCommand, SessionRow};
pub use session_reader::SessionReader;
