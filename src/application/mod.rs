//! Application layer - Use cases and orchestration

pub mod latex;
pub mod report;

pub use latex::LatexService;
pub use report::ReportService;

use crate::domain::{Entry, EntryParser};
use crate::error::Result;
use std::io::BufRead;

/// Parse a whole log, failing on the first invalid line
fn load_entries<R: BufRead>(
    parser: &EntryParser,
    source_name: &str,
    reader: R,
) -> Result<Vec<Entry>> {
    let parsed = parser.parse(source_name, reader);
    if parsed.error.is_some() && !parsed.entries.is_empty() {
        tracing::warn!(
            source = source_name,
            discarded = parsed.entries.len(),
            "discarding entries parsed before the error"
        );
    }
    parsed.into_result()
}
