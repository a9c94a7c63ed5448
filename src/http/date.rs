//! HTTP date handling.
//!
//! Dates travel in the layout `EEE MMM dd HH:mm:ss zzz yyyy`, for example
//! `Sat Jan 01 12:57:06 GMT 2023`. The zone token is required but ignored:
//! every value is read and written as GMT.

use std::fmt;
use std::str::FromStr;
use std::time::SystemTime;

use chrono::{DateTime, Month, NaiveDate, NaiveTime, SubsecRound, Utc, Weekday};

const FORMAT: &str = "%a %b %d %H:%M:%S GMT %Y";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateParseError {
    /// Not exactly six whitespace separated tokens
    WrongTokenCount(usize),
    InvalidWeekday,
    InvalidMonth,
    InvalidDay,
    InvalidTime,
    InvalidYear,
    /// Fields parsed but do not form a calendar date (e.g. Feb 30)
    OutOfRange,
}

impl fmt::Display for DateParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateParseError::WrongTokenCount(n) => write!(f, "expected 6 date fields, got {}", n),
            DateParseError::InvalidWeekday => f.write_str("invalid weekday"),
            DateParseError::InvalidMonth => f.write_str("invalid month"),
            DateParseError::InvalidDay => f.write_str("invalid day of month"),
            DateParseError::InvalidTime => f.write_str("invalid time of day"),
            DateParseError::InvalidYear => f.write_str("invalid year"),
            DateParseError::OutOfRange => f.write_str("date out of range"),
        }
    }
}

impl std::error::Error for DateParseError {}

/// Parses `<weekday> <month> <day> <HH:MM:SS> <zone> <year>` as a GMT instant.
///
/// The weekday must be a weekday name but is not checked against the date.
pub fn parse_http_date(value: &str) -> Result<DateTime<Utc>, DateParseError> {
    let fields: Vec<&str> = value.split_whitespace().collect();
    let [weekday, month, day, time, _zone, year] = fields.as_slice() else {
        return Err(DateParseError::WrongTokenCount(fields.len()));
    };

    Weekday::from_str(weekday).map_err(|_| DateParseError::InvalidWeekday)?;
    let month = Month::from_str(month).map_err(|_| DateParseError::InvalidMonth)?;
    let day: u32 = day.parse().map_err(|_| DateParseError::InvalidDay)?;
    let time =
        NaiveTime::parse_from_str(time, "%H:%M:%S").map_err(|_| DateParseError::InvalidTime)?;
    let year: i32 = year.parse().map_err(|_| DateParseError::InvalidYear)?;

    let date = NaiveDate::from_ymd_opt(year, month.number_from_month(), day)
        .ok_or(DateParseError::OutOfRange)?;

    Ok(date.and_time(time).and_utc())
}

pub fn format_http_date(at: DateTime<Utc>) -> String {
    at.format(FORMAT).to_string()
}

/// Converts a file timestamp to the whole-second precision of the header format.
pub fn to_http_precision(at: SystemTime) -> DateTime<Utc> {
    DateTime::<Utc>::from(at).trunc_subsecs(0)
}
