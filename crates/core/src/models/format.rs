//! Wire formats for dates and times.
//!
//! Callers exchange dates as `dd/mm/yyyy` and times as 24-hour `HH:MM`. Any
//! field may carry the sentinel `"any"` (case-insensitive) or be left empty to
//! mean "no constraint".

use chrono::{NaiveDate, NaiveTime};

use crate::errors::{SchedulingError, SchedulingResult};

pub const DATE_FORMAT: &str = "%d/%m/%Y";
pub const TIME_FORMAT: &str = "%H:%M";
pub const ANY: &str = "any";

/// Returns the trimmed value unless it is absent, blank or the `"any"` sentinel.
pub fn specified(value: Option<&str>) -> Option<&str> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty() && !v.eq_ignore_ascii_case(ANY))
}

pub fn parse_date(field: &str, value: &str) -> SchedulingResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| {
        SchedulingError::validation(format!(
            "{field} '{value}' is not a valid date, expected dd/mm/yyyy"
        ))
    })
}

pub fn parse_time(field: &str, value: &str) -> SchedulingResult<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), TIME_FORMAT).map_err(|_| {
        SchedulingError::validation(format!(
            "{field} '{value}' is not a valid time, expected HH:MM (24-hour)"
        ))
    })
}

/// Parses a `;`-separated list of dates, skipping empty entries.
pub fn parse_date_list(field: &str, value: &str) -> SchedulingResult<Vec<NaiveDate>> {
    value
        .split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| parse_date(field, s))
        .collect()
}

pub fn format_date(date: &NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn format_time(time: &NaiveTime) -> String {
    time.format(TIME_FORMAT).to_string()
}

/// `#[serde(with = "...")]` adapter for `dd/mm/yyyy` dates.
pub mod date {
    use chrono::NaiveDate;
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    use super::DATE_FORMAT;

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&date.format(DATE_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&raw, DATE_FORMAT).map_err(D::Error::custom)
    }
}

/// `#[serde(with = "...")]` adapter for `HH:MM` times.
pub mod time {
    use chrono::NaiveTime;
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    use super::TIME_FORMAT;

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&time.format(TIME_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&raw, TIME_FORMAT).map_err(D::Error::custom)
    }
}

/// `#[serde(with = "...")]` adapter for lists of `dd/mm/yyyy` dates.
pub mod date_list {
    use chrono::NaiveDate;
    use serde::{de::Error, ser::SerializeSeq, Deserialize, Deserializer, Serializer};

    use super::DATE_FORMAT;

    pub fn serialize<S: Serializer>(dates: &[NaiveDate], serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(dates.len()))?;
        for date in dates {
            seq.serialize_element(&date.format(DATE_FORMAT).to_string())?;
        }
        seq.end()
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Vec<NaiveDate>, D::Error> {
        Vec::<String>::deserialize(deserializer)?
            .iter()
            .map(|raw| NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(D::Error::custom))
            .collect()
    }
}
