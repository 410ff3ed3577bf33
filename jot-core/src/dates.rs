//! Date parsing for user input and for stored journal lines.

use crate::error::JournalError;
use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime};
use std::str::FromStr;
use strum_macros::EnumString;

/// Layout written by `save`. No offset; the fraction of a second is written
/// only when it is non-zero and is optional when parsing.
pub const STORED_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Full timestamp layouts, tried before any date-only format.
const TIMESTAMP_FORMATS: [&str; 3] = [STORED_DATE_FORMAT, "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%d %H:%M"];

/// Relative days accepted at the date prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum DayKeyword {
    Today,
    Yesterday,
    Tomorrow,
}

impl DayKeyword {
    pub fn resolve(self, reference_date: NaiveDate) -> Option<NaiveDate> {
        match self {
            DayKeyword::Today => Some(reference_date),
            DayKeyword::Yesterday => reference_date.checked_sub_days(Days::new(1)),
            DayKeyword::Tomorrow => reference_date.checked_add_days(Days::new(1)),
        }
    }
}

/// Parses a stored or typed timestamp.
///
/// Full timestamps are tried first, then each of `date_formats`. A date-only
/// match lands on midnight.
///
/// # Examples
///
/// ```
/// # use jot_core::dates::parse_timestamp;
/// let dt = parse_timestamp("2023-10-21T08:30:00", &["%Y-%m-%d"]).unwrap();
/// assert_eq!(dt.to_string(), "2023-10-21 08:30:00");
///
/// let d = parse_timestamp("21/10/2023", &["%Y-%m-%d", "%d/%m/%Y"]).unwrap();
/// assert_eq!(d.to_string(), "2023-10-21 00:00:00");
///
/// assert!(parse_timestamp("last tuesday", &["%Y-%m-%d"]).is_none());
/// ```
pub fn parse_timestamp<S: AsRef<str>>(input: &str, date_formats: &[S]) -> Option<NaiveDateTime> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if let Some(dt) = TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
    {
        return Some(dt);
    }

    date_formats
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(input, fmt.as_ref()).ok())
        .map(|d| d.and_time(NaiveTime::MIN))
}

/// Parses what the user typed at the date prompt.
///
/// Accepts `today`, `yesterday` and `tomorrow` relative to `reference_date`,
/// then falls back to [`parse_timestamp`].
pub fn parse_user_date<S: AsRef<str>>(
    input: &str,
    date_formats: &[S],
    reference_date: NaiveDate,
) -> Result<NaiveDateTime, JournalError> {
    let trimmed = input.trim();
    let from_keyword = DayKeyword::from_str(trimmed)
        .ok()
        .and_then(|k| k.resolve(reference_date))
        .map(|d| d.and_time(NaiveTime::MIN));

    from_keyword
        .or_else(|| parse_timestamp(trimmed, date_formats))
        .ok_or_else(|| JournalError::InvalidDate {
            input: trimmed.to_string(),
        })
}
