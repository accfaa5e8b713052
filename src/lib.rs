//! tracktime - Time-tracking log reports
//!
//! Parses a tab-separated work log and reports the time worked per day,
//! week or month against an hourly goal.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::TrackError;
