//! LaTeX export use case

use super::load_entries;
use crate::domain::{Entry, EntryParser};
use crate::error::{Result, TrackError};
use crate::infrastructure::InputSource;
use std::io::BufRead;

/// Service reading a log for rendering as a LaTeX table
pub struct LatexService {
    parser: EntryParser,
}

impl LatexService {
    pub fn new(date_format: &str) -> Self {
        LatexService {
            parser: EntryParser::new(date_format),
        }
    }

    pub fn execute(&self, source: &InputSource) -> Result<Vec<Entry>> {
        let reader = source.open()?;
        self.execute_from(&source.name(), reader)
    }

    /// Parse all entries; an empty log is an error since there is no table
    /// to render.
    pub fn execute_from<R: BufRead>(&self, source_name: &str, reader: R) -> Result<Vec<Entry>> {
        let entries = load_entries(&self.parser, source_name, reader)?;
        if entries.is_empty() {
            return Err(TrackError::NoEntries(
                "no entries in given file".to_string(),
            ));
        }
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_entries_in_order() {
        let service = LatexService::new("%d.%m.%Y");
        let log = "24.12.2010\t1000\t1500\tFoobar\n01.05.1992\t1012\t1013\tfoo.\n";
        let entries = service.execute_from("log", Cursor::new(log)).unwrap();

        let descriptions: Vec<&str> = entries.iter().map(|e| e.description.as_str()).collect();
        assert_eq!(descriptions, vec!["Foobar", "foo."]);
    }

    #[test]
    fn test_empty_log_is_error() {
        let service = LatexService::new("%d.%m.%Y");
        let err = service.execute_from("log", Cursor::new("")).unwrap_err();
        assert_eq!(err.to_string(), "no entries in given file");
    }
}
