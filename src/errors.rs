use thiserror::Error;

use crate::queue::QueueError;

#[derive(Debug, Error)]
pub enum DjError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Request missing body")]
    MissingBody,

    #[error("No token was provided")]
    MissingToken,

    #[error("Invalid token was provided")]
    InvalidToken,

    #[error("Invalid trigger word. Wanted {expected} received {received}")]
    TriggerMismatch { expected: String, received: String },

    #[error("No user_name was provided")]
    MissingUser,

    #[error("Malformed command: {0}")]
    MalformedCommand(String),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Failed to parse Slack event: {0}")]
    ParseError(String),

    #[error("Malformed queue message: {0}")]
    MalformedMessage(String),

    #[error(transparent)]
    Queue(#[from] QueueError),
}

impl DjError {
    /// HTTP status returned to the caller when this error ends a request.
    ///
    /// A trigger-word mismatch is client input but keeps the 500 that Slack
    /// integrations already expect from this endpoint.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            DjError::MissingToken | DjError::InvalidToken => 401,
            DjError::MissingBody
            | DjError::MissingUser
            | DjError::ParseError(_)
            | DjError::TriggerMismatch { .. }
            | DjError::Config(_) => 500,
            DjError::MalformedCommand(_)
            | DjError::UnknownCommand(_)
            | DjError::MalformedMessage(_)
            | DjError::Queue(_) => 200,
        }
    }
}

impl From<base64::DecodeError> for DjError {
    fn from(error: base64::DecodeError) -> Self {
        DjError::MalformedMessage(format!("invalid base64: {error}"))
    }
}

impl From<serde_json::Error> for DjError {
    fn from(error: serde_json::Error) -> Self {
        DjError::MalformedMessage(format!("invalid envelope JSON: {error}"))
    }
}
