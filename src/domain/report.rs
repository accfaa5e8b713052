//! Interval aggregation
//!
//! Buckets entries by interval, sums their durations and tracks how far the
//! work done so far is ahead of (or behind) a per-interval goal.

use super::duration::{goal_duration, saturating_add, saturating_sub};
use super::{Entry, Interval};
use crate::error::{Result, TrackError};
use chrono::Duration;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Which entries count towards a report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BonusPolicy {
    /// Bonus work counts like any other work
    #[default]
    Include,
    /// Bonus work is left out
    Exclude,
    /// Only bonus work is counted
    Only,
}

impl BonusPolicy {
    pub fn admits(&self, entry: &Entry) -> bool {
        match self {
            BonusPolicy::Include => true,
            BonusPolicy::Exclude => !entry.bonus_work,
            BonusPolicy::Only => entry.bonus_work,
        }
    }
}

impl FromStr for BonusPolicy {
    type Err = TrackError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "include" => Ok(BonusPolicy::Include),
            "exclude" => Ok(BonusPolicy::Exclude),
            "only" => Ok(BonusPolicy::Only),
            _ => Err(TrackError::Config(format!(
                "Invalid bonus policy: '{}'",
                s
            ))),
        }
    }
}

impl fmt::Display for BonusPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BonusPolicy::Include => f.write_str("include"),
            BonusPolicy::Exclude => f.write_str("exclude"),
            BonusPolicy::Only => f.write_str("only"),
        }
    }
}

/// How delta values are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeltaFormat {
    /// Hours, minutes and seconds (`-1h30m0s`)
    #[default]
    Duration,
    /// Plain seconds (`-5400`)
    Seconds,
}

/// Options for a single aggregation run
#[derive(Debug, Clone, Default)]
pub struct ReportOptions {
    /// Date layout for day keys
    pub layout: String,
    pub delta_format: DeltaFormat,
    /// Append the overall delta after the last row
    pub include_total: bool,
    pub bonus: BonusPolicy,
}

/// One interval of a report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub key: String,
    /// Time worked in this interval
    pub accumulated: Duration,
    /// Sum of `accumulated - goal` over this and all earlier rows
    pub running_delta: Duration,
}

/// Aggregated work per interval, in order of first appearance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateReport {
    pub rows: Vec<ReportRow>,
    /// Final running delta, present when requested
    pub total: Option<Duration>,
    pub delta_format: DeltaFormat,
}

/// Aggregate `entries` into per-interval rows.
///
/// Rows follow the order in which each interval first occurs in `entries`,
/// never sorted order. `goal_hours` is accepted as given.
///
/// # Examples
///
/// ```
/// use tracktime::domain::{aggregate, EntryParser, Interval, ReportOptions};
/// use chrono::Duration;
///
/// let parser = EntryParser::default();
/// let entries = vec![
///     parser.parse_line("24.12.2010\t0800\t1300\tMorning").unwrap(),
///     parser.parse_line("24.12.2010\t1400\t1700\tAfternoon").unwrap(),
/// ];
/// let options = ReportOptions {
///     layout: parser.layout().to_string(),
///     ..Default::default()
/// };
///
/// let report = aggregate(&entries, Interval::Day, 8.0, &options).unwrap();
/// assert_eq!(report.rows.len(), 1);
/// assert_eq!(report.rows[0].accumulated, Duration::hours(8));
/// assert_eq!(report.rows[0].running_delta, Duration::zero());
/// ```
pub fn aggregate(
    entries: &[Entry],
    interval: Interval,
    goal_hours: f64,
    options: &ReportOptions,
) -> Result<AggregateReport> {
    let goal = goal_duration(goal_hours);

    let mut keys: Vec<String> = Vec::new();
    let mut worked: HashMap<String, Duration> = HashMap::new();

    for entry in entries.iter().filter(|e| options.bonus.admits(e)) {
        let key = interval.key(entry.date, &options.layout)?;
        let slot = worked.entry(key.clone()).or_insert_with(|| {
            keys.push(key);
            Duration::zero()
        });
        *slot = saturating_add(*slot, entry.duration);
    }

    let mut running = Duration::zero();
    let mut rows = Vec::with_capacity(keys.len());
    for key in keys {
        let accumulated = worked.get(&key).copied().unwrap_or_else(Duration::zero);
        running = saturating_add(running, saturating_sub(accumulated, goal));
        rows.push(ReportRow {
            key,
            accumulated,
            running_delta: running,
        });
    }

    tracing::debug!(
        %interval,
        rows = rows.len(),
        bonus = %options.bonus,
        "aggregated entries"
    );

    Ok(AggregateReport {
        rows,
        total: options.include_total.then_some(running),
        delta_format: options.delta_format,
    })
}
