use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde_json::Value;

use crate::errors::DjError;
use crate::slack::command_parser::decode_url_component;

pub fn v_path<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut cur = root;
    for key in path {
        cur = cur.get(*key)?;
    }
    Some(cur)
}

pub fn v_str<'a>(root: &'a Value, path: &[&str]) -> Option<&'a str> {
    v_path(root, path).and_then(|v| v.as_str())
}

/// Pull the request body out of a proxy event, undoing API Gateway's base64
/// wrapping when `isBase64Encoded` is set.
pub fn extract_body(payload: &Value) -> Result<String, DjError> {
    let Some(body) = v_str(payload, &["body"]) else {
        return Err(DjError::MissingBody);
    };

    let encoded = payload
        .get("isBase64Encoded")
        .and_then(Value::as_bool)
        .unwrap_or(false);
    if !encoded {
        return Ok(body.to_string());
    }

    let bytes = STANDARD
        .decode(body)
        .map_err(|e| DjError::ParseError(format!("Invalid base64 body: {e}")))?;
    String::from_utf8(bytes).map_err(|e| DjError::ParseError(format!("Body is not UTF-8: {e}")))
}

/// Look up a query string parameter, preferring the parsed
/// `queryStringParameters` map and falling back to `rawQueryString`.
pub fn query_param(payload: &Value, name: &str) -> Option<String> {
    if let Some(v) = v_str(payload, &["queryStringParameters", name]) {
        return Some(v.to_string());
    }

    let raw = v_str(payload, &["rawQueryString"])?;
    raw.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        (decode_url_component(key) == name).then(|| decode_url_component(value))
    })
}
