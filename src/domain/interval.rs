//! Reporting intervals

use crate::error::{Result, TrackError};
use chrono::{Datelike, NaiveDateTime};
use std::fmt::{self, Write};
use std::str::FromStr;

/// Granularity at which entries are grouped in a report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Interval {
    /// One bucket per calendar day, labelled with the log's date layout
    #[default]
    Day,
    /// One bucket per ISO week (`W51 2010`)
    Week,
    /// One bucket per month (`December 2010`)
    Month,
}

impl Interval {
    /// Label of the bucket `date` falls into.
    ///
    /// `layout` is only used for day intervals.
    pub fn key(&self, date: NaiveDateTime, layout: &str) -> Result<String> {
        match self {
            Interval::Day => {
                let mut key = String::new();
                write!(key, "{}", date.format(layout)).map_err(|_| {
                    TrackError::Config(format!("Cannot format dates with layout '{}'", layout))
                })?;
                Ok(key)
            }
            Interval::Week => {
                let week = date.iso_week();
                Ok(format!("W{} {}", week.week(), week.year()))
            }
            Interval::Month => Ok(date.format("%B %Y").to_string()),
        }
    }
}

impl FromStr for Interval {
    type Err = TrackError;

    /// Only the first character is significant, so `w`, `week` and
    /// `weekly` all select weeks.
    fn from_str(s: &str) -> Result<Self> {
        match s.chars().next() {
            None => Err(TrackError::Config("invalid interval".to_string())),
            Some('d') => Ok(Interval::Day),
            Some('w') => Ok(Interval::Week),
            Some('m') => Ok(Interval::Month),
            Some(_) => Err(TrackError::Config(format!(
                "unsupported interval: {:?}",
                s
            ))),
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Interval::Day => f.write_str("day"),
            Interval::Week => f.write_str("week"),
            Interval::Month => f.write_str("month"),
        }
    }
}
