use std::cmp::Ordering;

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use thiserror::Error;

#[derive(Debug, PartialEq, Eq, Error)]
pub enum DateParseError {
    #[error("the value matches no supported date or timestamp layout")]
    UnrecognizedFormat,

    #[error("the value is a numeric timestamp outside the representable range")]
    TimestampOutOfRange,
}

/// Comparison granularity, from coarsest to finest.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TimePrecision {
    Year,
    Month,
    Week,
    Day,
    Hour,
    Minute,
    Second,
}

/// Which endpoints of a date range count as inside, in bracket notation.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Display, EnumString)]
pub enum Inclusivity {
    #[default]
    #[serde(rename = "()")]
    #[strum(serialize = "()")]
    Exclusive,

    #[serde(rename = "[)")]
    #[strum(serialize = "[)")]
    IncludeStart,

    #[serde(rename = "(]")]
    #[strum(serialize = "(]")]
    IncludeEnd,

    #[serde(rename = "[]")]
    #[strum(serialize = "[]")]
    Inclusive,
}

impl Inclusivity {
    fn includes_start(&self) -> bool {
        matches!(self, Inclusivity::IncludeStart | Inclusivity::Inclusive)
    }

    fn includes_end(&self) -> bool {
        matches!(self, Inclusivity::IncludeEnd | Inclusivity::Inclusive)
    }
}

const DATE_TIME_LAYOUTS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y/%m/%d %H:%M:%S",
    "%d/%m/%Y %H:%M:%S",
];

const DATE_LAYOUTS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%d/%m/%Y", "%d-%m-%Y"];

/// Parses a date, a date-time or a numeric epoch-millisecond timestamp.
/// Calendar-invalid dates are rejected.
pub fn parse_date(value: &str) -> Result<NaiveDateTime, DateParseError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(DateParseError::UnrecognizedFormat);
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Ok(parsed.naive_utc());
    }
    for layout in DATE_TIME_LAYOUTS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(value, layout) {
            return Ok(parsed);
        }
    }
    for layout in DATE_LAYOUTS {
        if let Ok(parsed) = NaiveDate::parse_from_str(value, layout) {
            return Ok(parsed.and_time(NaiveTime::MIN));
        }
    }

    // Bare integers are epoch milliseconds.
    if let Ok(millis) = value.parse::<i64>() {
        return DateTime::from_timestamp_millis(millis)
            .map(|timestamp| timestamp.naive_utc())
            .ok_or(DateParseError::TimestampOutOfRange);
    }

    Err(DateParseError::UnrecognizedFormat)
}

pub fn is_valid_date(value: &str) -> bool {
    parse_date(value).is_ok()
}

/// Strict validation against one explicit format string.
pub fn is_valid_date_format(value: &str, format: &str) -> bool {
    NaiveDateTime::parse_from_str(value, format).is_ok()
        || NaiveDate::parse_from_str(value, format).is_ok()
}

fn truncate(instant: NaiveDateTime, precision: TimePrecision) -> NaiveDateTime {
    let date = instant.date();
    match precision {
        TimePrecision::Year => NaiveDate::from_ymd_opt(date.year(), 1, 1)
            .unwrap()
            .and_time(NaiveTime::MIN),
        TimePrecision::Month => NaiveDate::from_ymd_opt(date.year(), date.month(), 1)
            .unwrap()
            .and_time(NaiveTime::MIN),
        // Weeks start on Sunday.
        TimePrecision::Week => {
            (date - Duration::days(date.weekday().num_days_from_sunday() as i64))
                .and_time(NaiveTime::MIN)
        }
        TimePrecision::Day => date.and_time(NaiveTime::MIN),
        TimePrecision::Hour => date.and_hms_opt(instant.hour(), 0, 0).unwrap(),
        TimePrecision::Minute => date
            .and_hms_opt(instant.hour(), instant.minute(), 0)
            .unwrap(),
        TimePrecision::Second => instant.with_nanosecond(0).unwrap(),
    }
}

/// Compares two parseable dates, truncated to the precision start when one is
/// given. `None` when either side fails to parse.
pub fn compare_dates(a: &str, b: &str, precision: Option<TimePrecision>) -> Option<Ordering> {
    let a = parse_date(a).ok()?;
    let b = parse_date(b).ok()?;

    Some(match precision {
        Some(precision) => truncate(a, precision).cmp(&truncate(b, precision)),
        None => a.cmp(&b),
    })
}

pub fn is_after_date(value: &str, compare: &str, precision: Option<TimePrecision>) -> bool {
    compare_dates(value, compare, precision) == Some(Ordering::Greater)
}

pub fn is_before_date(value: &str, compare: &str, precision: Option<TimePrecision>) -> bool {
    compare_dates(value, compare, precision) == Some(Ordering::Less)
}

pub fn is_same_date(value: &str, compare: &str, precision: Option<TimePrecision>) -> bool {
    compare_dates(value, compare, precision) == Some(Ordering::Equal)
}

pub fn is_same_or_after_date(value: &str, compare: &str, precision: Option<TimePrecision>) -> bool {
    matches!(
        compare_dates(value, compare, precision),
        Some(Ordering::Greater | Ordering::Equal)
    )
}

pub fn is_same_or_before_date(value: &str, compare: &str, precision: Option<TimePrecision>) -> bool {
    matches!(
        compare_dates(value, compare, precision),
        Some(Ordering::Less | Ordering::Equal)
    )
}

pub fn is_between_dates(
    value: &str,
    start: &str,
    end: &str,
    precision: Option<TimePrecision>,
    inclusivity: Inclusivity,
) -> bool {
    let after_start = match compare_dates(value, start, precision) {
        Some(Ordering::Greater) => true,
        Some(Ordering::Equal) => inclusivity.includes_start(),
        _ => false,
    };
    let before_end = match compare_dates(value, end, precision) {
        Some(Ordering::Less) => true,
        Some(Ordering::Equal) => inclusivity.includes_end(),
        _ => false,
    };

    after_start && before_end
}
