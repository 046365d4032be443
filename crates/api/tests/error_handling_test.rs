use appointments_api::middleware::error_handling::{map_error, AppError};
use appointments_core::errors::SchedulingError;
use axum::http::StatusCode;

#[test]
fn test_validation_maps_to_bad_request() {
    let response = map_error(SchedulingError::validation("Invalid input"));

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[test]
fn test_configuration_maps_to_internal_error() {
    let response = map_error(SchedulingError::Configuration("Empty pool".to_string()));

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn test_from_scheduling_error() {
    let error: AppError = SchedulingError::validation("Invalid input").into();

    assert_eq!(error.status(), StatusCode::BAD_REQUEST);
    assert_eq!(error.0.to_string(), "Validation error: Invalid input");
}
