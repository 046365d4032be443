use std::collections::BTreeSet;

use chrono::{Days, NaiveDate, NaiveTime};

use crate::{
    errors::{SchedulingError, SchedulingResult},
    models::{
        availability::{AvailabilityRequest, SearchCriteria},
        format::{self, ANY},
    },
    scheduling::SchedulingPolicy,
};

/// A fully resolved availability query. Built per request and discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotQuery {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub preferred_doctor: Option<String>,
    pub excluded_dates: BTreeSet<NaiveDate>,
}

impl SlotQuery {
    /// Applies defaults to every unset field, parses the rest and validates.
    ///
    /// Defaults: `start_date` is `today`, `end_date` is `start_date` plus the
    /// policy's default window, times fall back to the policy's default daily
    /// window, and an unset doctor means "any".
    ///
    /// # Errors
    ///
    /// * `SchedulingError::Validation` - malformed date or time, an inverted
    ///   date or time range, or a default end date past the calendar's range
    pub fn resolve(
        request: &AvailabilityRequest,
        today: NaiveDate,
        policy: &SchedulingPolicy,
    ) -> SchedulingResult<Self> {
        let start_date = match format::specified(request.start_date.as_deref()) {
            Some(raw) => format::parse_date("start_date", raw)?,
            None => today,
        };

        let end_date = match format::specified(request.end_date.as_deref()) {
            Some(raw) => format::parse_date("end_date", raw)?,
            None => start_date
                .checked_add_days(Days::new(policy.default_window_days))
                .ok_or_else(|| {
                    SchedulingError::validation(format!(
                        "start_date {} is too far in the future",
                        format::format_date(&start_date)
                    ))
                })?,
        };

        let start_time = match format::specified(request.start_time.as_deref()) {
            Some(raw) => format::parse_time("start_time", raw)?,
            None => policy.default_start_time,
        };

        let end_time = match format::specified(request.end_time.as_deref()) {
            Some(raw) => format::parse_time("end_time", raw)?,
            None => policy.default_end_time,
        };

        let excluded_dates = match format::specified(request.excluded_dates.as_deref()) {
            Some(raw) => format::parse_date_list("excluded_dates", raw)?
                .into_iter()
                .collect(),
            None => BTreeSet::new(),
        };

        let query = Self {
            start_date,
            end_date,
            start_time,
            end_time,
            preferred_doctor: format::specified(request.preferred_doctor.as_deref())
                .map(str::to_string),
            excluded_dates,
        };
        query.validate()?;

        Ok(query)
    }

    pub fn validate(&self) -> SchedulingResult<()> {
        if self.start_date > self.end_date {
            return Err(SchedulingError::validation(format!(
                "start_date {} is after end_date {}",
                format::format_date(&self.start_date),
                format::format_date(&self.end_date)
            )));
        }
        if self.start_time >= self.end_time {
            return Err(SchedulingError::validation(format!(
                "start_time {} must be earlier than end_time {}",
                format::format_time(&self.start_time),
                format::format_time(&self.end_time)
            )));
        }
        Ok(())
    }

    /// The requested doctor, or `None` when any doctor will do.
    pub fn doctor(&self) -> Option<&str> {
        format::specified(self.preferred_doctor.as_deref())
    }

    pub fn criteria(&self) -> SearchCriteria {
        SearchCriteria {
            start_date: self.start_date,
            end_date: self.end_date,
            start_time: self.start_time,
            end_time: self.end_time,
            preferred_doctor: self.doctor().unwrap_or(ANY).to_string(),
            excluded_dates: self.excluded_dates.iter().copied().collect(),
        }
    }
}
