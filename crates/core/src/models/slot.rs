use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::{errors::SchedulingError, models::availability::SearchCriteria, models::format};

/// A candidate appointment. Carries no reservation state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentSlot {
    #[serde(with = "format::date")]
    pub date: NaiveDate,
    #[serde(with = "format::time")]
    pub start_time: NaiveTime,
    #[serde(with = "format::time")]
    pub end_time: NaiveTime,
    pub doctor_id: String,
}

impl AppointmentSlot {
    /// Chronological sort key.
    pub fn key(&self) -> (NaiveDate, NaiveTime) {
        (self.date, self.start_time)
    }
}

/// Response of the availability tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotResult {
    pub success: bool,
    pub slots: Vec<AppointmentSlot>,
    pub total_slots: usize,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_criteria: Option<SearchCriteria>,
}

impl SlotResult {
    pub fn found(slots: Vec<AppointmentSlot>, message: String, criteria: SearchCriteria) -> Self {
        Self {
            success: true,
            total_slots: slots.len(),
            slots,
            message,
            search_criteria: Some(criteria),
        }
    }

    /// A successful answer with nothing to offer.
    pub fn empty(message: impl Into<String>, criteria: SearchCriteria) -> Self {
        Self {
            success: true,
            slots: Vec::new(),
            total_slots: 0,
            message: message.into(),
            search_criteria: Some(criteria),
        }
    }

    pub fn failure(error: &SchedulingError) -> Self {
        Self {
            success: false,
            slots: Vec::new(),
            total_slots: 0,
            message: error.to_string(),
            search_criteria: None,
        }
    }
}
