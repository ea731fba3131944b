//! Timestamp encoding for SQLite text columns.
//!
//! Values are written as RFC 3339 in UTC. Reading also accepts the legacy
//! `YYYY-MM-DD HH:MM:SS[.fff]` form without an offset, which is taken as UTC.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use rusqlite::types::Type;
use rusqlite::Row;

const NAIVE_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

pub fn to_sql(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub fn parse(value: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Ok(ts.with_timezone(&Utc));
    }
    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(naive.and_utc());
        }
    }
    DateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S%.f%:z").map(|ts| ts.with_timezone(&Utc))
}

pub fn column(row: &Row, idx: usize) -> rusqlite::Result<DateTime<Utc>> {
    let raw: String = row.get(idx)?;
    parse(&raw).map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

pub fn optional_column(row: &Row, idx: usize) -> rusqlite::Result<Option<DateTime<Utc>>> {
    let raw: Option<String> = row.get(idx)?;
    raw.map(|s| parse(&s).map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e))))
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_round_trip_keeps_utc_instant() {
        let ts = Utc.with_ymd_and_hms(2025, 1, 15, 9, 30, 15).unwrap();
        assert_eq!(parse(&to_sql(&ts)).unwrap(), ts);
    }

    #[test]
    fn test_offsets_are_normalized() {
        let parsed = parse("2025-01-15T11:30:15+02:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2025, 1, 15, 9, 30, 15).unwrap());

        let parsed = parse("2025-01-15 11:30:15+02:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2025, 1, 15, 9, 30, 15).unwrap());
    }

    #[test]
    fn test_legacy_values_without_offset_are_utc() {
        let expected = Utc.with_ymd_and_hms(2025, 1, 15, 9, 30, 15).unwrap();
        assert_eq!(parse("2025-01-15 09:30:15").unwrap(), expected);
        assert_eq!(parse("2025-01-15T09:30:15").unwrap(), expected);
        assert!(parse("2025-01-15 09:30:15.250").is_ok());
    }

    #[test]
    fn test_garbage_is_rejected() {
        assert!(parse("yesterday").is_err());
    }
}
