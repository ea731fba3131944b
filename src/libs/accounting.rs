//! Time accounting rules shared by pomodoros and pauses.
//!
//! Elapsed time is measured between two UTC instants and converted to whole
//! units by truncation toward zero. What gets credited to a session then
//! depends on the record:
//!
//! - **Pomodoro** (complete or cancel): elapsed units clamped to `[1, planned]`
//! - **Pause** (finalize): elapsed units floored at 1, no upper bound

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Whole unit in which durations are planned and credited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    #[default]
    Minutes,
    Seconds,
}

impl TimeUnit {
    pub fn seconds(self) -> i64 {
        match self {
            TimeUnit::Minutes => 60,
            TimeUnit::Seconds => 1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TimeUnit::Minutes => "minutes",
            TimeUnit::Seconds => "seconds",
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "minutes" | "minute" | "min" | "m" => Ok(TimeUnit::Minutes),
            "seconds" | "second" | "sec" | "s" => Ok(TimeUnit::Seconds),
            other => Err(format!("unknown time unit '{}' (expected minutes or seconds)", other)),
        }
    }
}

/// Whole units between `start` and `now`, truncated toward zero.
///
/// A `now` earlier than `start` yields a negative or zero value; the credit
/// functions below floor it at 1.
pub fn elapsed_units(start: DateTime<Utc>, now: DateTime<Utc>, unit: TimeUnit) -> i64 {
    (now - start).num_seconds() / unit.seconds()
}

/// Credit for a finished pomodoro: elapsed clamped to `[1, planned]`.
pub fn credit_interval(elapsed: i64, planned: i64) -> i64 {
    elapsed.min(planned).max(1)
}

/// Credit for a finalized pause: elapsed floored at 1.
pub fn credit_pause(elapsed: i64) -> i64 {
    elapsed.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn at(h: u32, m: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 15, h, m, s).unwrap()
    }

    #[test]
    fn test_elapsed_truncates_toward_zero() {
        assert_eq!(elapsed_units(at(9, 0, 0), at(9, 0, 59), TimeUnit::Minutes), 0);
        assert_eq!(elapsed_units(at(9, 0, 0), at(9, 1, 59), TimeUnit::Minutes), 1);
        assert_eq!(elapsed_units(at(9, 0, 0), at(9, 0, 59), TimeUnit::Seconds), 59);
        // clock skew: truncation toward zero, not floor
        assert_eq!(elapsed_units(at(9, 0, 30), at(9, 0, 0), TimeUnit::Minutes), 0);
    }

    #[test]
    fn test_elapsed_ignores_subsecond_remainder() {
        let start = at(9, 0, 0);
        let now = start + Duration::milliseconds(1999);
        assert_eq!(elapsed_units(start, now, TimeUnit::Seconds), 1);
    }

    #[test]
    fn test_interval_clamp() {
        assert_eq!(credit_interval(0, 25), 1);
        assert_eq!(credit_interval(-3, 25), 1);
        assert_eq!(credit_interval(10, 25), 10);
        assert_eq!(credit_interval(25, 25), 25);
        assert_eq!(credit_interval(40, 25), 25);
    }

    #[test]
    fn test_pause_floor_without_ceiling() {
        assert_eq!(credit_pause(0), 1);
        assert_eq!(credit_pause(1), 1);
        assert_eq!(credit_pause(500), 500);
    }

    #[test]
    fn test_time_unit_parsing() {
        assert_eq!("minutes".parse::<TimeUnit>().unwrap(), TimeUnit::Minutes);
        assert_eq!("Seconds".parse::<TimeUnit>().unwrap(), TimeUnit::Seconds);
        assert!("hours".parse::<TimeUnit>().is_err());
    }
}
