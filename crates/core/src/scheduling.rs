//! # Scheduling
//!
//! Turns an availability request into a capped, chronologically ordered list
//! of 30-minute appointment slots.
//!
//! 1. [`SlotQuery::resolve`] fills unset fields with defaults, parses and
//!    validates the request in one step.
//! 2. [`SchedulingPolicy::daily_window`] clamps the requested time window to
//!    business hours and aligns its start to a quarter hour.
//! 3. [`SlotGenerator::generate`] walks the weekdays of the date window,
//!    emits slot starts at a fixed step and assigns doctors.
//!
//! Everything here is a pure function of its input and safe to share across
//! threads without coordination.

mod booking;
mod doctors;
mod generator;
mod policy;
mod query;

pub use doctors::DoctorPool;
pub use generator::{SlotGenerator, NO_SLOTS_MESSAGE};
pub use policy::{DailyWindow, SchedulingPolicy};
pub use query::SlotQuery;

use chrono::{Datelike, NaiveDate, Weekday};

/// Appointments are only offered Monday through Friday.
pub fn is_working_day(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}
