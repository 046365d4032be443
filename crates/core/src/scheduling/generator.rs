use chrono::NaiveDate;
use tracing::debug;

use crate::{
    models::{
        availability::AvailabilityRequest,
        format,
        slot::{AppointmentSlot, SlotResult},
    },
    scheduling::{is_working_day, DoctorPool, SchedulingPolicy, SlotQuery},
};

pub const NO_SLOTS_MESSAGE: &str =
    "No appointments are available in your specified time range. Please try a different date or time.";

/// Stateless slot generator bound to a policy and a doctor pool.
#[derive(Debug, Clone, Default)]
pub struct SlotGenerator {
    pub(super) policy: SchedulingPolicy,
    pub(super) doctors: DoctorPool,
}

impl SlotGenerator {
    pub fn new(policy: SchedulingPolicy, doctors: DoctorPool) -> Self {
        Self { policy, doctors }
    }

    pub fn doctors(&self) -> &DoctorPool {
        &self.doctors
    }

    /// Resolves a raw request against `today` and generates its slots.
    ///
    /// Never fails: invalid input comes back as a `SlotResult` with
    /// `success == false` and a message describing the problem.
    pub fn query(&self, request: &AvailabilityRequest, today: NaiveDate) -> SlotResult {
        match SlotQuery::resolve(request, today, &self.policy) {
            Ok(query) => self.generate(&query),
            Err(err) => {
                debug!(error = %err, "rejected availability request");
                SlotResult::failure(&err)
            }
        }
    }

    /// Enumerates up to `max_slots` slots for an already resolved query.
    ///
    /// Slots are ordered by date then start time. An empty result is still a
    /// success and carries an explanatory message.
    pub fn generate(&self, query: &SlotQuery) -> SlotResult {
        if let Err(err) = query.validate() {
            return SlotResult::failure(&err);
        }
        let criteria = query.criteria();

        let Some(window) = self.policy.daily_window(query.start_time, query.end_time) else {
            return SlotResult::empty(
                format!(
                    "The requested time window {}-{} leaves no room for an appointment within business hours ({}-{}).",
                    format::format_time(&query.start_time),
                    format::format_time(&query.end_time),
                    format::format_time(&self.policy.business_open),
                    format::format_time(&self.policy.business_close),
                ),
                criteria,
            );
        };

        let doctor = query.doctor();
        let slots: Vec<AppointmentSlot> = self
            .candidate_dates(query)
            .flat_map(|date| window.starts().map(move |start| (date, start)))
            .take(self.policy.max_slots)
            .enumerate()
            .map(|(index, (date, start_time))| AppointmentSlot {
                date,
                start_time,
                end_time: window.end_of(start_time),
                doctor_id: doctor
                    .unwrap_or_else(|| self.doctors.assign(index))
                    .to_string(),
            })
            .collect();

        debug!(
            start_date = %query.start_date,
            end_date = %query.end_date,
            count = slots.len(),
            "generated appointment slots"
        );

        if slots.is_empty() {
            return SlotResult::empty(NO_SLOTS_MESSAGE, criteria);
        }

        let message = match doctor {
            Some(doctor) => format!(
                "Found {} available appointment slots with {}",
                slots.len(),
                doctor
            ),
            None => format!("Found {} available appointment slots", slots.len()),
        };
        SlotResult::found(slots, message, criteria)
    }

    /// Working days of the query window that the caller has not excluded.
    fn candidate_dates<'a>(&'a self, query: &'a SlotQuery) -> impl Iterator<Item = NaiveDate> + 'a {
        query
            .start_date
            .iter_days()
            .take_while(move |date| *date <= query.end_date)
            .take(self.policy.max_scan_days)
            .filter(move |date| is_working_day(*date) && !query.excluded_dates.contains(date))
    }
}
