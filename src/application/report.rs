//! Interval report use case

use super::load_entries;
use crate::domain::{aggregate, AggregateReport, DeltaFormat, EntryParser, ReportOptions};
use crate::error::Result;
use crate::infrastructure::{InputSource, Settings};
use std::io::BufRead;

/// Service producing per-interval reports from a log
pub struct ReportService {
    settings: Settings,
}

impl ReportService {
    pub fn new(settings: Settings) -> Self {
        ReportService { settings }
    }

    /// Aggregation options derived from the settings
    pub fn options(&self) -> ReportOptions {
        ReportOptions {
            layout: self.settings.date_format.clone(),
            delta_format: if self.settings.seconds {
                DeltaFormat::Seconds
            } else {
                DeltaFormat::Duration
            },
            include_total: self.settings.total,
            bonus: self.settings.bonus,
        }
    }

    /// Read the log from `source` and aggregate it
    pub fn execute(&self, source: &InputSource) -> Result<AggregateReport> {
        let reader = source.open()?;
        self.execute_from(&source.name(), reader)
    }

    /// Aggregate a log read from an arbitrary reader
    pub fn execute_from<R: BufRead>(
        &self,
        source_name: &str,
        reader: R,
    ) -> Result<AggregateReport> {
        let parser = EntryParser::new(self.settings.date_format.as_str());
        let entries = load_entries(&parser, source_name, reader)?;

        aggregate(
            &entries,
            self.settings.interval,
            self.settings.hours,
            &self.options(),
        )
    }
}
