//! Human-readable formatting of durations and timestamps.
//!
//! Totals and credited durations are stored as whole units; these helpers
//! turn them into clock-style strings for tables and messages:
//!
//! - minutes: `"HH:MM"` (90 → `"01:30"`)
//! - seconds: `"HH:MM:SS"` (90 → `"00:01:30"`)
//!
//! Negative durations are displayed as zero.

use crate::libs::accounting::TimeUnit;
use chrono::{DateTime, Utc};

/// Formats a whole-unit amount according to the configured unit.
///
/// Works on the integer amount directly, so any stored total renders,
/// however large.
///
/// # Examples
///
/// ```rust
/// use pomolog::libs::accounting::TimeUnit;
/// use pomolog::libs::formatter::format_units;
///
/// assert_eq!(format_units(90, TimeUnit::Minutes), "01:30");
/// assert_eq!(format_units(-60, TimeUnit::Minutes), "00:00");
/// ```
pub fn format_units(amount: i64, unit: TimeUnit) -> String {
    match unit {
        TimeUnit::Minutes => {
            let mins = amount.max(0);
            format!("{:02}:{:02}", mins / 60, mins % 60)
        }
        TimeUnit::Seconds => {
            let secs = amount.max(0);
            format!("{:02}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60)
        }
    }
}

/// Formats an optional amount, using `"--:--"` while it is not yet known.
pub fn format_optional_units(amount: Option<i64>, unit: TimeUnit) -> String {
    amount.map_or_else(|| "--:--".to_string(), |a| format_units(a, unit))
}

pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M:%S").to_string()
}

pub fn format_optional_timestamp(ts: &Option<DateTime<Utc>>) -> String {
    ts.as_ref().map_or_else(|| "-".to_string(), format_timestamp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_minutes() {
        assert_eq!(format_units(0, TimeUnit::Minutes), "00:00");
        assert_eq!(format_units(25, TimeUnit::Minutes), "00:25");
        assert_eq!(format_units(135, TimeUnit::Minutes), "02:15");
        assert_eq!(format_units(-5, TimeUnit::Minutes), "00:00");
    }

    #[test]
    fn test_format_huge_totals() {
        assert_eq!(format_units(200_000_000_000_000, TimeUnit::Minutes), "3333333333333:20");
        assert_eq!(format_units(i64::MAX, TimeUnit::Minutes), "153722867280912930:07");
        assert_eq!(format_units(i64::MAX, TimeUnit::Seconds), "2562047788015215:30:07");
    }

    #[test]
    fn test_format_seconds() {
        assert_eq!(format_units(59, TimeUnit::Seconds), "00:00:59");
        assert_eq!(format_units(3725, TimeUnit::Seconds), "01:02:05");
    }

    #[test]
    fn test_format_optional() {
        assert_eq!(format_optional_units(None, TimeUnit::Minutes), "--:--");
        assert_eq!(format_optional_units(Some(5), TimeUnit::Minutes), "00:05");
        assert_eq!(format_optional_timestamp(&None), "-");

        let ts = Utc.with_ymd_and_hms(2025, 1, 15, 9, 5, 0).unwrap();
        assert_eq!(format_optional_timestamp(&Some(ts)), "2025-01-15 09:05:00");
    }
}
