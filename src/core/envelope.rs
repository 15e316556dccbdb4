//! Queue wire format: `base64(JSON({command, user, arg?}))`.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use super::models::CommandEnvelope;
use crate::errors::DjError;

/// Serialize an envelope into a queue message body.
///
/// # Errors
///
/// Returns an error if the envelope cannot be serialized to JSON.
pub fn encode_envelope(envelope: &CommandEnvelope) -> Result<String, DjError> {
    let json = serde_json::to_vec(envelope)?;
    Ok(STANDARD.encode(json))
}

/// Decode a queue message body back into an envelope.
///
/// # Errors
///
/// Returns `DjError::MalformedMessage` if the body is not base64, not JSON,
/// or lacks `command` or `user`. Because `command` is a closed set and the
/// fields are typed, this is stricter than a presence check: an unknown
/// command name, a null or non-string `user`, and a non-string `arg` are
/// malformed too.
pub fn decode_envelope(body: &str) -> Result<CommandEnvelope, DjError> {
    let bytes = STANDARD.decode(body.trim())?;
    let envelope: CommandEnvelope = serde_json::from_slice(&bytes)?;
    Ok(envelope)
}
