//! Configuration management
//!
//! Settings come from three places, in increasing priority: an optional
//! TOML file, the `TRACKTIME_FORMAT` environment variable (date layout
//! only) and command-line flags.

use crate::domain::{BonusPolicy, Interval, DEFAULT_DATE_FORMAT};
use crate::error::{Result, TrackError};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Environment variable holding the date layout of the log
pub const DATE_FORMAT_ENV: &str = "TRACKTIME_FORMAT";

const DEFAULT_INTERVAL: &str = "d";
const DEFAULT_HOURS: f64 = 8.0;

/// Contents of a settings file. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hours: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seconds: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bonus: Option<String>,
}

impl Config {
    /// Load a settings file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                TrackError::Config(format!("Config file not found: {}", path.display()))
            } else {
                TrackError::Io(e)
            }
        })?;

        Ok(toml::from_str(&contents)?)
    }

    /// Load a settings file if one was given, otherwise use an empty config
    pub fn load_optional(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Config::default()),
        }
    }

    /// Render as TOML
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Date layout from the environment, if set and non-empty
pub fn date_format_from_env() -> Option<String> {
    std::env::var(DATE_FORMAT_ENV)
        .ok()
        .filter(|value| !value.is_empty())
}

/// Values given on the command line
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub date_format: Option<String>,
    pub interval: Option<String>,
    pub hours: Option<f64>,
    pub seconds: bool,
    pub total: bool,
    pub bonus: Option<String>,
}

/// Fully resolved and validated settings for one run
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub date_format: String,
    pub interval: Interval,
    pub hours: f64,
    pub seconds: bool,
    pub total: bool,
    pub bonus: BonusPolicy,
}

impl Settings {
    /// Merge command-line overrides, environment and file config.
    ///
    /// Interval and bonus policy are validated here, before any input is
    /// read. Day intervals also need a date layout that can format keys.
    pub fn resolve(config: &Config, env_format: Option<String>, cli: &Overrides) -> Result<Self> {
        let date_format = cli
            .date_format
            .clone()
            .or(env_format)
            .or_else(|| config.date_format.clone())
            .unwrap_or_else(|| DEFAULT_DATE_FORMAT.to_string());

        let interval = cli
            .interval
            .as_deref()
            .or(config.interval.as_deref())
            .unwrap_or(DEFAULT_INTERVAL);

        let bonus = match cli.bonus.as_deref().or(config.bonus.as_deref()) {
            Some(value) => BonusPolicy::from_str(value)?,
            None => BonusPolicy::default(),
        };

        let interval = Interval::from_str(interval)?;
        if interval == Interval::Day {
            interval.key(NaiveDateTime::default(), &date_format)?;
        }

        Ok(Settings {
            date_format,
            interval,
            hours: cli.hours.or(config.hours).unwrap_or(DEFAULT_HOURS),
            seconds: cli.seconds || config.seconds.unwrap_or(false),
            total: cli.total || config.total.unwrap_or(false),
            bonus,
        })
    }

    /// The settings expressed as a complete settings file
    pub fn to_config(&self) -> Config {
        Config {
            date_format: Some(self.date_format.clone()),
            interval: Some(self.interval.to_string()),
            hours: Some(self.hours),
            seconds: Some(self.seconds),
            total: Some(self.total),
            bonus: Some(self.bonus.to_string()),
        }
    }
}
