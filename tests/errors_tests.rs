use std::error::Error;

use heydj::errors::DjError;
use heydj::queue::QueueError;

#[test]
fn test_dj_error_implements_error_trait() {
    fn assert_error<T: Error + Send + Sync + 'static>(_: &T) {}

    let error = DjError::ParseError("test error".to_string());
    assert_error(&error);
}

#[test]
fn test_dj_error_display() {
    let error = DjError::TriggerMismatch {
        expected: "heydj".to_string(),
        received: "yo".to_string(),
    };
    assert_eq!(
        format!("{error}"),
        "Invalid trigger word. Wanted heydj received yo"
    );

    let error = DjError::Config("SLACK_TOKEN is not set".to_string());
    assert_eq!(
        format!("{error}"),
        "Configuration error: SLACK_TOKEN is not set"
    );

    // Queue errors display as themselves.
    let error = DjError::from(QueueError::NotFound("heydj.fifo".to_string()));
    assert_eq!(format!("{error}"), "SQS queue heydj.fifo was not found");
}

#[test]
fn test_status_codes() {
    assert_eq!(DjError::MissingToken.status_code(), 401);
    assert_eq!(DjError::InvalidToken.status_code(), 401);
    assert_eq!(DjError::MissingBody.status_code(), 500);
    assert_eq!(
        DjError::TriggerMismatch {
            expected: "heydj".into(),
            received: "yo".into()
        }
        .status_code(),
        500
    );
    assert_eq!(DjError::ParseError("bad".into()).status_code(), 500);
    assert_eq!(DjError::MissingUser.status_code(), 500);
    assert_eq!(DjError::UnknownCommand("dance".into()).status_code(), 200);
}

#[test]
fn test_decode_errors_are_malformed_messages() {
    let err: DjError = serde_json::from_str::<serde_json::Value>("{")
        .unwrap_err()
        .into();
    assert!(matches!(err, DjError::MalformedMessage(_)));
}
