use appointments_core::{
    errors::SchedulingError,
    models::{
        availability::{AvailabilityRequest, SearchCriteria},
        booking::BookAppointmentRequest,
        slot::{AppointmentSlot, SlotResult},
    },
};
use chrono::{NaiveDate, NaiveTime};
use pretty_assertions::assert_eq;
use serde_json::{from_str, json, to_value};
use serde_test::{assert_de_tokens_error, assert_tokens, Token};

fn slot() -> AppointmentSlot {
    AppointmentSlot {
        date: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
        start_time: NaiveTime::from_hms_opt(9, 30, 0).unwrap(),
        end_time: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
        doctor_id: "dr-lee".to_string(),
    }
}

#[test]
fn test_slot_tokens_use_day_first_dates_and_short_times() {
    assert_tokens(
        &slot(),
        &[
            Token::Struct {
                name: "AppointmentSlot",
                len: 4,
            },
            Token::Str("date"),
            Token::Str("05/01/2024"),
            Token::Str("start_time"),
            Token::Str("09:30"),
            Token::Str("end_time"),
            Token::Str("10:00"),
            Token::Str("doctor_id"),
            Token::Str("dr-lee"),
            Token::StructEnd,
        ],
    );
}

#[test]
fn test_slot_rejects_iso_dates() {
    assert_de_tokens_error::<AppointmentSlot>(
        &[
            Token::Struct {
                name: "AppointmentSlot",
                len: 4,
            },
            Token::Str("date"),
            Token::Str("2024-01-05"),
        ],
        "input contains invalid characters",
    );
}

#[test]
fn test_found_result_serialization() {
    let criteria = SearchCriteria {
        start_date: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
        end_date: NaiveDate::from_ymd_opt(2024, 1, 19).unwrap(),
        start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
        end_time: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
        preferred_doctor: "any".to_string(),
        excluded_dates: vec![NaiveDate::from_ymd_opt(2024, 1, 8).unwrap()],
    };
    let result = SlotResult::found(vec![slot()], "Found 1 available appointment slots".to_string(), criteria);

    let value = to_value(&result).expect("Failed to serialize result");

    assert_eq!(
        value,
        json!({
            "success": true,
            "slots": [{
                "date": "05/01/2024",
                "start_time": "09:30",
                "end_time": "10:00",
                "doctor_id": "dr-lee"
            }],
            "total_slots": 1,
            "message": "Found 1 available appointment slots",
            "search_criteria": {
                "start_date": "05/01/2024",
                "end_date": "19/01/2024",
                "start_time": "09:00",
                "end_time": "17:00",
                "preferred_doctor": "any",
                "excluded_dates": ["08/01/2024"]
            }
        })
    );

    let round_trip: SlotResult = serde_json::from_value(value).expect("Failed to deserialize result");
    assert_eq!(round_trip, result);
}

#[test]
fn test_failure_result_omits_criteria() {
    let error = SchedulingError::validation("start_date '31/13/2024' is not a valid date, expected dd/mm/yyyy");

    let value = to_value(SlotResult::failure(&error)).unwrap();

    assert_eq!(
        value,
        json!({
            "success": false,
            "slots": [],
            "total_slots": 0,
            "message": "Validation error: start_date '31/13/2024' is not a valid date, expected dd/mm/yyyy"
        })
    );
}

#[test]
fn test_availability_request_accepts_missing_fields() {
    let request: AvailabilityRequest = from_str("{}").expect("Failed to deserialize request");

    assert_eq!(request, AvailabilityRequest::default());
}

#[test]
fn test_availability_request_accepts_non_available_days_alias() {
    let request: AvailabilityRequest = from_str(
        r#"{"start_date": "any", "preferred_doctor": "dr-smith", "non_available_days": "08/01/2024;09/01/2024"}"#,
    )
    .unwrap();

    assert_eq!(request.start_date.as_deref(), Some("any"));
    assert_eq!(request.preferred_doctor.as_deref(), Some("dr-smith"));
    assert_eq!(request.excluded_dates.as_deref(), Some("08/01/2024;09/01/2024"));
}

#[test]
fn test_book_request_doctor_is_optional() {
    let request: BookAppointmentRequest =
        from_str(r#"{"date": "08/01/2024", "start_time": "10:15"}"#).unwrap();

    assert_eq!(request.date, "08/01/2024");
    assert_eq!(request.start_time, "10:15");
    assert_eq!(request.doctor_id, None);
}
