//! Duration arithmetic and rendering

use chrono::Duration;

/// Convert a goal expressed in (possibly fractional) hours to whole seconds.
///
/// Out-of-range and non-finite goals saturate.
pub fn goal_duration(hours: f64) -> Duration {
    let seconds = (hours * 3600.0).round() as i64;
    Duration::try_seconds(seconds).unwrap_or(if seconds < 0 {
        Duration::MIN
    } else {
        Duration::MAX
    })
}

pub fn saturating_add(lhs: Duration, rhs: Duration) -> Duration {
    lhs.checked_add(&rhs).unwrap_or(if rhs < Duration::zero() {
        Duration::MIN
    } else {
        Duration::MAX
    })
}

pub fn saturating_sub(lhs: Duration, rhs: Duration) -> Duration {
    lhs.checked_sub(&rhs).unwrap_or(if rhs > Duration::zero() {
        Duration::MIN
    } else {
        Duration::MAX
    })
}

/// Render a duration as hours, minutes and seconds, e.g. `5h0m0s`, `30m0s`
/// or `-1h15m0s`. Leading zero units are omitted and zero is `0s`.
pub fn format_duration(duration: Duration) -> String {
    let total = duration.num_seconds();
    if total == 0 {
        return "0s".to_string();
    }

    let sign = if total < 0 { "-" } else { "" };
    let abs = total.unsigned_abs();
    let hours = abs / 3600;
    let minutes = (abs % 3600) / 60;
    let seconds = abs % 60;

    if hours > 0 {
        format!("{}{}h{}m{}s", sign, hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}{}m{}s", sign, minutes, seconds)
    } else {
        format!("{}{}s", sign, seconds)
    }
}

/// Render a duration as a plain count of seconds, e.g. `-3600` or `1800`
pub fn format_seconds(duration: Duration) -> String {
    let seconds = duration.num_milliseconds() as f64 / 1000.0;
    format!("{}", seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration_units() {
        assert_eq!(format_duration(Duration::hours(5)), "5h0m0s");
        assert_eq!(format_duration(Duration::minutes(1)), "1m0s");
        assert_eq!(format_duration(Duration::minutes(150)), "2h30m0s");
        assert_eq!(format_duration(Duration::seconds(42)), "42s");
        assert_eq!(format_duration(Duration::zero()), "0s");
    }

    #[test]
    fn test_format_negative_duration() {
        assert_eq!(format_duration(Duration::hours(-1)), "-1h0m0s");
        assert_eq!(format_duration(Duration::minutes(-45)), "-45m0s");
    }

    #[test]
    fn test_format_seconds() {
        assert_eq!(format_seconds(Duration::hours(-1)), "-3600");
        assert_eq!(format_seconds(Duration::minutes(30)), "1800");
        assert_eq!(format_seconds(Duration::zero()), "0");
    }

    #[test]
    fn test_goal_duration_accepts_fractions() {
        assert_eq!(goal_duration(8.0), Duration::hours(8));
        assert_eq!(goal_duration(7.5), Duration::minutes(450));
        assert_eq!(goal_duration(-2.0), Duration::hours(-2));
    }

    #[test]
    fn test_goal_duration_saturates() {
        assert_eq!(goal_duration(f64::INFINITY), Duration::MAX);
        assert_eq!(goal_duration(f64::NEG_INFINITY), Duration::MIN);
    }

    #[test]
    fn test_saturating_arithmetic() {
        assert_eq!(saturating_add(Duration::MAX, Duration::hours(1)), Duration::MAX);
        assert_eq!(saturating_sub(Duration::MIN, Duration::hours(1)), Duration::MIN);
        assert_eq!(
            saturating_sub(Duration::hours(3), Duration::hours(8)),
            Duration::hours(-5)
        );
    }
}
