//! Domain layer - Log parsing and interval aggregation

pub mod duration;
pub mod entry;
pub mod interval;
pub mod parser;
pub mod report;

pub use entry::Entry;
pub use interval::Interval;
pub use parser::{EntryParser, Parsed, DEFAULT_DATE_FORMAT};
pub use report::{
    aggregate, AggregateReport, BonusPolicy, DeltaFormat, ReportOptions, ReportRow,
};
