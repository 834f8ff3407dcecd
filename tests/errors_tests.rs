use std::error::Error;

use jobsvc::errors::EventError;
use serde_json::json;

#[test]
fn event_error_implements_error_trait() {
    fn assert_error<T: Error>(_: &T) {}

    let error = EventError::Gateway("missing request method".to_string());
    assert_error(&error);
}

#[test]
fn event_error_display() {
    let error = EventError::Gateway("missing request path".to_string());
    assert_eq!(
        format!("{error}"),
        "Failed to decode API Gateway event: missing request path"
    );
}

#[test]
fn queue_errors_convert_from_serde() {
    let serde_err = serde_json::from_value::<jobsvc::engine::event::SqsEvent>(json!("nope"))
        .expect_err("a string is not an SQS event");

    let error = EventError::from(serde_err);
    assert!(format!("{error}").starts_with("Failed to decode SQS event:"));
}
