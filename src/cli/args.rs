use clap::Parser;
use std::path::PathBuf;

/// Run a retail banking ledger session from a command file
#[derive(Parser, Debug)]
#[command(name = "bank-ledger-engine")]
#[command(about = "Run a retail banking ledger session from a command file", long_about = None)]
pub struct CliArgs {
    /// Input CSV file path containing session commands
    #[arg(value_name = "INPUT", help = "Path to the input CSV file")]
    pub input_file: PathBuf,

    /// Append the per-account transaction history after the report
    #[arg(
        long = "history",
        help = "Append the per-account transaction history after the report"
    )]
    pub history: bool,
}
