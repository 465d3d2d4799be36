//! Parsing helpers for the calendar dates and timestamps callers pass in as text.

use chrono::{DateTime, NaiveDate, Utc};

use crate::error::{Error, Result};

/// Parse an ISO-8601 calendar date (`2025-09-01`).
///
/// A full RFC 3339 timestamp is also accepted; its date part is used.
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    let trimmed = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date);
    }
    DateTime::parse_from_rfc3339(trimmed)
        .map(|ts| ts.date_naive())
        .map_err(|_| Error::invalid_input(format!("malformed date '{value}', expected YYYY-MM-DD")))
}

/// Parse an RFC 3339 timestamp (`2025-09-21T00:00:00Z`) into UTC.
///
/// A bare calendar date is accepted and taken as midnight UTC.
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>> {
    let trimmed = value.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(ts.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| {
            Error::invalid_input(format!(
                "malformed timestamp '{value}', expected RFC 3339 (e.g. 2025-09-21T00:00:00Z)"
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn parses_plain_and_timestamp_dates() {
        let plain = parse_date("2025-12-03").expect("plain date");
        assert_eq!((plain.year(), plain.month(), plain.day()), (2025, 12, 3));

        let from_ts = parse_date("2025-12-03T18:00:00+02:00").expect("timestamp date");
        assert_eq!(from_ts, plain);
    }

    #[test]
    fn rejects_malformed_dates() {
        let err = parse_date("03/12/2025").expect_err("wrong format");
        assert!(matches!(err, Error::InvalidInput { .. }));
        assert!(parse_date("2025-02-30").is_err());
    }

    #[test]
    fn timestamps_normalize_to_utc() {
        let ts = parse_timestamp("2025-09-21T02:00:00+02:00").expect("timestamp");
        assert_eq!(ts.hour(), 0);

        let midnight = parse_timestamp("2025-09-21").expect("date only");
        assert_eq!(midnight.to_rfc3339(), "2025-09-21T00:00:00+00:00");
    }
}
