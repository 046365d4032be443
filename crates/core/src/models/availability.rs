use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::models::format;

/// Raw availability query as sent by the orchestration layer.
///
/// Every field is optional; blank values and `"any"` fall back to the
/// defaults applied by [`crate::scheduling::SlotQuery::resolve`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityRequest {
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(default)]
    pub preferred_doctor: Option<String>,
    /// Dates the caller cannot attend, `;`-separated.
    #[serde(default, alias = "non_available_days")]
    pub excluded_dates: Option<String>,
}

/// The resolved query echoed back alongside the slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchCriteria {
    #[serde(with = "format::date")]
    pub start_date: NaiveDate,
    #[serde(with = "format::date")]
    pub end_date: NaiveDate,
    #[serde(with = "format::time")]
    pub start_time: NaiveTime,
    #[serde(with = "format::time")]
    pub end_time: NaiveTime,
    pub preferred_doctor: String,
    #[serde(with = "format::date_list")]
    pub excluded_dates: Vec<NaiveDate>,
}
