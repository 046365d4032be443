use tracing::info;
use uuid::Uuid;

use crate::{
    errors::{SchedulingError, SchedulingResult},
    models::{
        booking::{BookAppointmentRequest, BookAppointmentResponse},
        format,
        slot::AppointmentSlot,
    },
    scheduling::{is_working_day, SlotGenerator},
};

impl SlotGenerator {
    /// Confirms a slot the caller picked. Nothing is stored.
    ///
    /// # Errors
    ///
    /// * `SchedulingError::Validation` - malformed date or time, a weekend
    ///   date, or a start time that is not a bookable slot under the policy
    pub fn book(&self, request: &BookAppointmentRequest) -> SchedulingResult<BookAppointmentResponse> {
        let date = format::parse_date("date", &request.date)?;
        let start_time = format::parse_time("start_time", &request.start_time)?;

        if !is_working_day(date) {
            return Err(SchedulingError::validation(format!(
                "{} falls on a weekend",
                format::format_date(&date)
            )));
        }

        let end_time = self.policy.bookable_end(start_time).ok_or_else(|| {
            SchedulingError::validation(format!(
                "{} is not a bookable start time; appointments start on the quarter hour between {} and {}",
                format::format_time(&start_time),
                format::format_time(&self.policy.business_open),
                format::format_time(&self.policy.business_close),
            ))
        })?;

        let doctor_id = format::specified(request.doctor_id.as_deref())
            .unwrap_or_else(|| self.doctors.first())
            .to_string();

        let slot = AppointmentSlot {
            date,
            start_time,
            end_time,
            doctor_id,
        };
        let confirmation_id = Uuid::new_v4();
        info!(%confirmation_id, date = %slot.date, start_time = %slot.start_time, doctor_id = %slot.doctor_id, "appointment confirmed");

        Ok(BookAppointmentResponse {
            success: true,
            appointment_confirmed: true,
            confirmation_id,
            message: format!(
                "Appointment booked for {} at {} with {}",
                format::format_date(&slot.date),
                format::format_time(&slot.start_time),
                slot.doctor_id
            ),
            slot,
        })
    }
}
