//! # Appointment Handlers
//!
//! The two tools exposed to the orchestration layer:
//!
//! - `query_available_appointments` resolves the caller's preferences against
//!   today's date and returns up to ten candidate slots
//! - `book_appointment` confirms a slot the caller picked; nothing is stored
//!
//! Availability answers always use the `SlotResult` shape, including for
//! invalid input, so a tool caller can read `success` and `message` without
//! special-casing the status code.

use appointments_core::{
    errors::SchedulingError,
    models::{
        availability::AvailabilityRequest,
        booking::{BookAppointmentRequest, BookAppointmentResponse},
        slot::SlotResult,
    },
};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use tracing::{debug, info};

use crate::{middleware::error_handling::AppError, ApiState};

/// Lists available appointment slots
///
/// # Endpoint
///
/// ```text
/// POST /api/appointments/available
/// {"start_date": "15/01/2024", "end_date": "any", "start_time": "09:00",
///  "end_time": "12:00", "preferred_doctor": "any", "excluded_dates": "16/01/2024"}
/// ```
///
/// # Returns
///
/// * `200 OK` with a `SlotResult`, possibly with zero slots and an explanation
/// * `400 Bad Request` with a `SlotResult` whose `success` is false when a
///   date or time cannot be understood, a range is inverted, or the body is
///   not a JSON object of strings
#[axum::debug_handler]
pub async fn query_available_appointments(
    State(state): State<Arc<ApiState>>,
    payload: Result<Json<AvailabilityRequest>, JsonRejection>,
) -> (StatusCode, Json<SlotResult>) {
    let payload = match payload {
        Ok(Json(payload)) => payload,
        Err(rejection) => {
            debug!(error = %rejection.body_text(), "rejected availability body");
            let err = SchedulingError::validation(rejection.body_text());
            return (StatusCode::BAD_REQUEST, Json(SlotResult::failure(&err)));
        }
    };

    let today = state.clock.today();
    let result = state.generator.query(&payload, today);

    info!(
        success = result.success,
        total_slots = result.total_slots,
        "answered availability query"
    );

    let status = if result.success {
        StatusCode::OK
    } else {
        StatusCode::BAD_REQUEST
    };
    (status, Json(result))
}

/// Confirms an appointment slot
///
/// # Errors
///
/// * `SchedulingError::Validation` - malformed date or time, a weekend, or a
///   start time that is not a bookable slot
#[axum::debug_handler]
pub async fn book_appointment(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<BookAppointmentRequest>,
) -> Result<Json<BookAppointmentResponse>, AppError> {
    let response = state.generator.book(&payload)?;

    Ok(Json(response))
}
