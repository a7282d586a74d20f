//! # Payment Dates
//!
//! Orders carry a `paid_on_date` timestamp without a timezone. Clients send
//! it in a handful of shapes; an offset, when present, is dropped and the
//! wall-clock value kept.
//!
//! ```text
//! "2025-05-23T10:00:00"        ─┐
//! "2025-05-23 10:00:00"         ├──► NaiveDateTime 2025-05-23 10:00:00
//! "2025-05-23T10:00:00-04:00"  ─┘
//! "2025-05-23"                 ────► NaiveDateTime 2025-05-23 00:00:00
//! ```
//!
//! Filtering by calendar day uses the half-open range
//! `[day 00:00:00, next day 00:00:00)`.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::ValidationError;

/// Format used when writing timestamps to JSON.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

const DATE_FORMAT: &str = "%Y-%m-%d";
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

/// Parses a payment timestamp, stripping any timezone offset.
pub fn parse_timestamp(field: &str, raw: &str) -> Result<NaiveDateTime, ValidationError> {
    let raw = raw.trim();

    if let Ok(with_offset) = DateTime::parse_from_rfc3339(raw) {
        return Ok(with_offset.naive_local());
    }

    for format in NAIVE_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(parsed);
        }
    }

    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .map(|date| date.and_time(NaiveTime::MIN))
        .map_err(|_| {
            ValidationError::invalid_format(field, format!("'{raw}' is not a date or timestamp"))
        })
}

/// Parses a calendar day filter. A full timestamp is accepted and truncated
/// to its date.
pub fn parse_calendar_day(field: &str, raw: &str) -> Result<NaiveDate, ValidationError> {
    parse_timestamp(field, raw).map(|ts| ts.date())
}

/// Returns `[start of day, start of next day)` for a calendar day.
pub fn day_bounds(day: NaiveDate) -> Result<(NaiveDateTime, NaiveDateTime), ValidationError> {
    let next = day.succ_opt().ok_or_else(|| ValidationError::OutOfRange {
        field: "orderDate".to_string(),
        value: day.to_string(),
    })?;
    Ok((day.and_time(NaiveTime::MIN), next.and_time(NaiveTime::MIN)))
}

/// Serde adapter for `Option<NaiveDateTime>` payment dates.
///
/// Missing and `null` both read as `None`; use with `#[serde(default)]`.
pub mod paid_on_date {
    use chrono::NaiveDateTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    use super::{parse_timestamp, TIMESTAMP_FORMAT};

    pub fn serialize<S: Serializer>(
        value: &Option<NaiveDateTime>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(ts) => serializer.serialize_some(&ts.format(TIMESTAMP_FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveDateTime>, D::Error> {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        raw.map(|s| parse_timestamp("paidOnDate", &s).map_err(de::Error::custom))
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn test_parse_accepts_common_shapes() {
        let expected = ts(2025, 5, 23, 10, 0, 0);
        assert_eq!(parse_timestamp("paidOnDate", "2025-05-23T10:00:00").unwrap(), expected);
        assert_eq!(parse_timestamp("paidOnDate", "2025-05-23 10:00:00").unwrap(), expected);
        assert_eq!(parse_timestamp("paidOnDate", "2025-05-23T10:00").unwrap(), expected);
        assert_eq!(
            parse_timestamp("paidOnDate", "2025-05-23").unwrap(),
            ts(2025, 5, 23, 0, 0, 0)
        );
    }

    #[test]
    fn test_parse_strips_offset_keeping_wall_clock() {
        assert_eq!(
            parse_timestamp("paidOnDate", "2025-05-23T10:00:00-04:00").unwrap(),
            ts(2025, 5, 23, 10, 0, 0)
        );
        assert_eq!(
            parse_timestamp("paidOnDate", "2025-05-23T23:30:00Z").unwrap(),
            ts(2025, 5, 23, 23, 30, 0)
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = parse_timestamp("orderDate", "yesterday").unwrap_err();
        assert!(matches!(err, ValidationError::InvalidFormat { .. }));
    }

    #[test]
    fn test_calendar_day_truncates_time() {
        let day = parse_calendar_day("orderDate", "2025-05-20T17:45:00").unwrap();
        assert_eq!(day, NaiveDate::from_ymd_opt(2025, 5, 20).unwrap());
    }

    #[test]
    fn test_day_bounds_are_half_open() {
        let day = NaiveDate::from_ymd_opt(2025, 5, 20).unwrap();
        let (start, end) = day_bounds(day).unwrap();
        assert_eq!(start, ts(2025, 5, 20, 0, 0, 0));
        assert_eq!(end, ts(2025, 5, 21, 0, 0, 0));

        let late = ts(2025, 5, 20, 23, 59, 59);
        assert!(late >= start && late < end);
        assert_eq!(end - start, chrono::Duration::days(1));
    }

    #[test]
    fn test_day_bounds_last_day_is_out_of_range() {
        assert!(matches!(
            day_bounds(NaiveDate::MAX),
            Err(ValidationError::OutOfRange { .. })
        ));
    }
}
