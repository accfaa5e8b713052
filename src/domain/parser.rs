//! Log line parsing
//!
//! Every line of a time-tracking log has the shape
//!
//! ```text
//! [+]<date>\t<HHMM start>\t<HHMM end>\t<description>
//! ```
//!
//! A leading `+` marks bonus work. The date is parsed with a configurable
//! chrono layout; start and end are military time.

use super::entry::{military_time, Entry};
use crate::error::{ParseError, ParseErrorKind, Result, Side, TrackError};
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;
use std::borrow::Cow;
use std::io::BufRead;
use std::sync::OnceLock;

/// Layout used when no date format is configured (e.g. `24.12.2010`)
pub const DEFAULT_DATE_FORMAT: &str = "%d.%m.%Y";

fn line_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(r"^(\+)?(.+)\t([0-9]{4})\t([0-9]{4})\t(.+)$").unwrap()
    })
}

/// Raw fields of a line that matched the expected shape
#[derive(Debug, PartialEq, Eq)]
struct Fields<'a> {
    bonus: bool,
    date: &'a str,
    start: u32,
    end: u32,
    description: &'a str,
}

fn split_fields(line: &str) -> std::result::Result<Fields<'_>, ParseErrorKind> {
    let caps = line_regex()
        .captures(line)
        .ok_or(ParseErrorKind::MalformedLine)?;

    Ok(Fields {
        bonus: caps.get(1).is_some(),
        date: caps.get(2).map_or("", |m| m.as_str()),
        start: caps[3].parse::<u32>()?,
        end: caps[4].parse::<u32>()?,
        description: caps.get(5).map_or("", |m| m.as_str()),
    })
}

/// Strip the line terminator (`\n` or `\r\n`) and decode lossily
fn decode_line(raw: &[u8]) -> Cow<'_, str> {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    String::from_utf8_lossy(raw)
}

/// Result of parsing a whole log.
///
/// Entries read before a failing line are kept so callers may still use
/// them.
#[derive(Debug)]
pub struct Parsed {
    pub entries: Vec<Entry>,
    pub error: Option<TrackError>,
}

impl Parsed {
    /// Discard partial results if parsing failed
    pub fn into_result(self) -> Result<Vec<Entry>> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.entries),
        }
    }
}

/// Parser for time-tracking logs.
///
/// Holds no per-run state: line numbers are counted inside each call to
/// [`EntryParser::parse`], so one parser can be reused for many inputs.
#[derive(Debug, Clone)]
pub struct EntryParser {
    layout: String,
}

impl EntryParser {
    pub fn new(layout: impl Into<String>) -> Self {
        EntryParser {
            layout: layout.into(),
        }
    }

    pub fn layout(&self) -> &str {
        &self.layout
    }

    /// Parse a single log line into an entry
    ///
    /// # Examples
    ///
    /// ```
    /// use tracktime::domain::EntryParser;
    /// use chrono::Duration;
    ///
    /// let parser = EntryParser::new("%d.%m.%Y");
    /// let entry = parser.parse_line("13.12.2023\t2112\t2342\tbla").unwrap();
    /// assert_eq!(entry.duration, Duration::minutes(150));
    /// assert_eq!(entry.description, "bla");
    /// ```
    pub fn parse_line(&self, line: &str) -> std::result::Result<Entry, ParseErrorKind> {
        let fields = split_fields(line)?;
        let day = self.parse_date(fields.date)?;

        if fields.start >= fields.end {
            return Err(ParseErrorKind::InvalidDuration);
        }
        let start = military_time(fields.start, Side::Start)?;
        let end = military_time(fields.end, Side::End)?;

        // The start offset is folded into the date so that the absolute
        // start and end of the entry can be reconstructed.
        let date = day
            .checked_add_signed(Duration::minutes(i64::from(start)))
            .ok_or(ParseErrorKind::OutOfRange)?;

        Ok(Entry {
            date,
            duration: Duration::minutes(i64::from(end - start)),
            description: fields.description.to_string(),
            bonus_work: fields.bonus,
        })
    }

    /// Layouts with a time component are honoured; date-only layouts
    /// start at midnight.
    fn parse_date(&self, text: &str) -> std::result::Result<NaiveDateTime, ParseErrorKind> {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(text, &self.layout) {
            return Ok(datetime);
        }
        let date = NaiveDate::parse_from_str(text, &self.layout)?;
        Ok(date.and_time(NaiveTime::MIN))
    }

    /// Parse every line of `reader`, stopping at the first invalid line.
    ///
    /// `source_name` only labels errors. Whitespace-only lines at the end of
    /// the input are ignored; anywhere else they are malformed. Bytes that
    /// are not valid UTF-8 are replaced rather than rejected.
    pub fn parse<R: BufRead>(&self, source_name: &str, mut reader: R) -> Parsed {
        let mut entries = Vec::new();
        let mut blank_run_start: Option<usize> = None;
        let mut buf = Vec::new();
        let mut line_num = 0;

        loop {
            buf.clear();
            match reader.read_until(b'\n', &mut buf) {
                Ok(0) => break,
                Ok(_) => line_num += 1,
                Err(err) => {
                    return Parsed {
                        entries,
                        error: Some(TrackError::Io(err)),
                    }
                }
            }
            let line = decode_line(&buf);

            if line.trim().is_empty() {
                blank_run_start.get_or_insert(line_num);
                continue;
            }

            let result = match blank_run_start.take() {
                Some(blank_line) => Err((blank_line, ParseErrorKind::MalformedLine)),
                None => self.parse_line(&line).map_err(|kind| (line_num, kind)),
            };

            match result {
                Ok(entry) => entries.push(entry),
                Err((line, kind)) => {
                    tracing::debug!(
                        source = source_name,
                        line,
                        parsed = entries.len(),
                        "stopping at invalid line"
                    );
                    return Parsed {
                        entries,
                        error: Some(TrackError::Parse(ParseError {
                            source_name: source_name.to_string(),
                            line,
                            kind,
                        })),
                    };
                }
            }
        }

        tracing::debug!(source = source_name, parsed = entries.len(), "parsed log");
        Parsed {
            entries,
            error: None,
        }
    }
}

impl Default for EntryParser {
    fn default() -> Self {
        EntryParser::new(DEFAULT_DATE_FORMAT)
    }
}
