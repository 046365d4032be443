use appointments_core::errors::{SchedulingError, SchedulingResult};

#[test]
fn test_scheduling_error_display() {
    let validation = SchedulingError::Validation("Invalid input".to_string());
    let configuration = SchedulingError::Configuration("Empty pool".to_string());

    assert_eq!(validation.to_string(), "Validation error: Invalid input");
    assert_eq!(configuration.to_string(), "Configuration error: Empty pool");
}

#[test]
fn test_validation_shorthand() {
    let error = SchedulingError::validation(format!("bad value {}", 42));

    assert_eq!(error, SchedulingError::Validation("bad value 42".to_string()));
}

#[test]
fn test_scheduling_result() {
    let result: SchedulingResult<i32> = Ok(42);
    assert_eq!(result.unwrap(), 42);

    let result: SchedulingResult<i32> = Err(SchedulingError::validation("Not valid"));
    assert!(result.is_err());
}
