//! Streaming reader for session command files
//!
//! Yields one [`SessionCommand`] per CSV row without loading the whole
//! file into memory. Fatal errors (file not found) are returned from
//! `new()`; per-row parse and conversion errors are yielded as `Err`
//! items with the line number, so a caller can log and continue.

use crate::io::session_format::{convert_session_row, SessionRow};
use crate::io::SessionCommand;
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::path::Path;

/// Iterator over the commands of one session file
#[derive(Debug)]
pub struct SessionReader {
    reader: csv::Reader<File>,
    line_num: usize,
}

impl SessionReader {
    /// Open a session file for streaming iteration
    ///
    /// The CSV reader trims whitespace from every field and tolerates
    /// rows that omit trailing empty columns.
    pub fn new(path: &Path) -> Result<Self, String> {
        let file = File::open(path)
            .map_err(|e| format!("Failed to open file '{}': {}", path.display(), e))?;

        let reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(file);

        Ok(Self {
            reader,
            line_num: 0,
        })
    }
}

impl Iterator for SessionReader {
    type Item = Result<SessionCommand, String>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut deserializer = self.reader.deserialize::<SessionRow>();

        match deserializer.next()? {
            Ok(row) => {
                self.line_num += 1;
                // Line numbers are 1-based and offset by the header row.
                Some(convert_session_row(row).map_err(|e| format!("Line {}: {}", self.line_num + 1, e)))
            }
            Err(e) => {
                self.line_num += 1;
                Some(Err(format!(
                    "Line {}: CSV parse error: {}",
                    self.line_num + 1,
                    e
                )))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AccountKind;
    use rust_decimal::Decimal;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    const HEADER: &str = "op,name,identity,account,kind,amount\n";

    #[test]
    fn test_reader_fails_on_missing_file() {
        let result = SessionReader::new(Path::new("nonexistent.csv"));
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Failed to open file"));
    }

    #[test]
    fn test_reader_yields_commands_in_order() {
        let content = format!(
            "{}register,Alice Nguyen,001203000001,,,\n\
             open,,001203000001,600001,savings,20000000\n\
             withdraw,,001203000001,600001,,5000000\n",
            HEADER
        );
        let file = create_temp_csv(&content);

        let reader = SessionReader::new(file.path()).unwrap();
        let commands: Vec<_> = reader.filter_map(Result::ok).collect();

        assert_eq!(commands.len(), 3);
        assert!(matches!(
            &commands[0],
            SessionCommand::RegisterCustomer { name, .. } if name == "Alice Nguyen"
        ));
        assert!(matches!(
            &commands[1],
            SessionCommand::OpenAccount { kind: AccountKind::Savings, .. }
        ));
        assert!(matches!(
            &commands[2],
            SessionCommand::Withdraw { amount, .. } if *amount == Decimal::from(5_000_000)
        ));
    }

    #[test]
    fn test_reader_trims_whitespace() {
        let content = format!(
            "{}  register  ,  Alice Nguyen  ,  001203000001  ,,,\n",
            HEADER
        );
        let file = create_temp_csv(&content);

        let reader = SessionReader::new(file.path()).unwrap();
        let commands: Vec<_> = reader.filter_map(Result::ok).collect();

        assert_eq!(commands.len(), 1);
        assert!(matches!(
            &commands[0],
            SessionCommand::RegisterCustomer { name, .. } if name == "Alice Nguyen"
        ));
    }

    #[test]
    fn test_reader_reports_line_numbers_and_continues() {
        let content = format!(
            "{}register,Alice Nguyen,001203000001,,,\n\
             transfer,,001203000001,600001,,1000\n\
             withdraw,,001203000001,600001,,50000\n",
            HEADER
        );
        let file = create_temp_csv(&content);

        let reader = SessionReader::new(file.path()).unwrap();
        let results: Vec<_> = reader.collect();

        assert_eq!(results.len(), 3);
        assert!(results[0].is_ok());
        assert!(results[1].is_err());
        assert!(results[2].is_ok());

        let error = results[1].as_ref().unwrap_err();
        assert!(error.contains("Line 3"));
        assert!(error.contains("Invalid operation"));
    }

    #[test]
    fn test_reader_handles_empty_file_after_header() {
        let file = create_temp_csv(HEADER);
        let reader = SessionReader::new(file.path()).unwrap();
        assert_eq!(reader.count(), 0);
    }
}
