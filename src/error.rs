//! Error types for tracktime

use std::fmt;
use std::num::ParseIntError;
use thiserror::Error;

/// Which end of an entry's time span a validation failure refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Start,
    End,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Start => f.write_str("start"),
            Side::End => f.write_str("end"),
        }
    }
}

/// Reason a single log line was rejected
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseErrorKind {
    #[error("malformed line")]
    MalformedLine,

    #[error("invalid number: {0}")]
    InvalidNumber(#[from] ParseIntError),

    #[error("invalid date: {0}")]
    InvalidDate(#[from] chrono::ParseError),

    #[error("invalid duration")]
    InvalidDuration,

    #[error("invalid {0} duration: invalid hour")]
    InvalidHour(Side),

    #[error("invalid {0} duration: invalid minute")]
    InvalidMinute(Side),

    #[error("start time out of range")]
    OutOfRange,
}

/// A line-level failure located in its source
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{source_name}:{line} {kind}")]
pub struct ParseError {
    pub source_name: String,
    pub line: usize,
    pub kind: ParseErrorKind,
}

/// Main error type for tracktime
#[derive(Debug, Error)]
pub enum TrackError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("{0}")]
    NoEntries(String),
}

impl TrackError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            TrackError::Parse(_) => 2,
            TrackError::Config(_) | TrackError::TomlDeserialize(_) => 3,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            TrackError::Parse(err) => match &err.kind {
                ParseErrorKind::MalformedLine => format!(
                    "{}\n\n\
                    Each line must look like:\n\
                    [+]<date><TAB><HHMM start><TAB><HHMM end><TAB><description>\n\
                    Example: 24.12.2010\t1000\t1500\tWrapping presents",
                    err
                ),
                ParseErrorKind::InvalidDate(_) => format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Check the date against the configured layout\n\
                    • Set TRACKTIME_FORMAT to a chrono layout (e.g., %Y-%m-%d)\n\
                    • Pass --date-format to override it for a single run",
                    err
                ),
                ParseErrorKind::InvalidDuration
                | ParseErrorKind::InvalidHour(_)
                | ParseErrorKind::InvalidMinute(_)
                | ParseErrorKind::OutOfRange => format!(
                    "{}\n\n\
                    Times are military time (HHMM): hours 00-24, minutes 00-59,\n\
                    and the start time must be earlier than the end time.",
                    err
                ),
                ParseErrorKind::InvalidNumber(_) => err.to_string(),
            },
            TrackError::Config(msg) => {
                if msg.contains("interval") {
                    format!(
                        "{}\n\n\
                        Valid intervals: d (day), w (week), m (month)\n\
                        Example: tracktime report -i w log.txt",
                        msg
                    )
                } else if msg.contains("bonus") {
                    format!(
                        "{}\n\n\
                        Valid bonus policies: include, exclude, only",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using TrackError
pub type Result<T> = std::result::Result<T, TrackError>;
