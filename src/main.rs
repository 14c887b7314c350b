//! Bank Ledger Engine CLI
//!
//! Command-line interface for running a ledger session from a CSV command
//! file.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- session.csv > report.txt
//! cargo run -- --history session.csv > report.txt
//! ```
//!
//! The program reads session commands from the input CSV file, applies
//! them to a fresh ledger, and writes withdrawal receipts followed by the
//! final customer report to stdout. Rejected commands and malformed rows
//! are reported on stderr without stopping the session.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (missing arguments, file not found, file not readable, etc.)

use bank_ledger_engine::cli;
use bank_ledger_engine::session;
use std::process;

fn main() {
    let args = cli::parse_args();

    let mut output = std::io::stdout();
    if let Err(e) = session::run(&args.input_file, &mut output, args.history) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
