//! Response builders for Lambda proxy integrations.

use serde_json::{Value, json};

use crate::core::models::CommandEnvelope;

/// Returns a 200 OK response carrying a Slack chat message.
#[must_use]
pub fn ok_text(text: &str) -> Value {
    json!({
        "statusCode": 200,
        "body": json!({ "text": text }).to_string()
    })
}

/// Returns a 200 OK response with an empty JSON body.
#[must_use]
pub fn ok_empty() -> Value {
    empty_response(200)
}

/// Returns a response with the given status code and an empty JSON object.
#[must_use]
pub fn empty_response(status_code: u16) -> Value {
    json!({ "statusCode": status_code, "body": "{}" })
}

/// Returns a 200 OK response listing drained envelopes.
#[must_use]
pub fn ok_envelopes(envelopes: &[CommandEnvelope]) -> Value {
    let body = serde_json::to_string(envelopes).unwrap_or_else(|_| "[]".to_string());
    json!({ "statusCode": 200, "body": body })
}

/// Returns a response with the given status code and an empty JSON array.
#[must_use]
pub fn empty_list_response(status_code: u16) -> Value {
    json!({ "statusCode": status_code, "body": "[]" })
}
