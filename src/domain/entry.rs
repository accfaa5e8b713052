//! Work entries and military time

use crate::error::{ParseErrorKind, Side};
use chrono::{Duration, NaiveDateTime};

/// A single validated line of the time-tracking log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Day of the entry advanced to its start time
    pub date: NaiveDateTime,
    /// Time worked, always a positive whole number of minutes
    pub duration: Duration,
    pub description: String,
    /// Work done outside normally counted time (line prefixed with `+`)
    pub bonus_work: bool,
}

impl Entry {
    /// Absolute end time of the entry, `None` past chrono's date range
    pub fn end(&self) -> Option<NaiveDateTime> {
        self.date.checked_add_signed(self.duration)
    }
}

/// Convert an `HHMM` value to minutes since midnight.
///
/// Hours up to 24 are accepted so that `2400` can close a day.
pub fn military_time(value: u32, side: Side) -> Result<u32, ParseErrorKind> {
    let hours = value / 100;
    let minutes = value % 100;

    if hours > 24 {
        return Err(ParseErrorKind::InvalidHour(side));
    }
    if minutes >= 60 {
        return Err(ParseErrorKind::InvalidMinute(side));
    }

    Ok(hours * 60 + minutes)
}
