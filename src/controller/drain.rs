use tracing::{error, info, warn};

use crate::core::config::MalformedMessagePolicy;
use crate::core::envelope::decode_envelope;
use crate::core::models::CommandEnvelope;
use crate::errors::DjError;
use crate::queue::{CommandQueue, QueueError, ReceivedMessage};

/// Pull one batch of commands off the queue.
///
/// Well-formed messages are always deleted once read. Malformed ones are
/// logged, left out of the result, and deleted or kept according to
/// `policy`. A queue that cannot be reached yields an empty batch.
pub async fn drain_commands<Q>(
    queue: &Q,
    max_messages: i32,
    policy: MalformedMessagePolicy,
) -> Vec<CommandEnvelope>
where
    Q: CommandQueue + ?Sized,
{
    info!("Polling queue for commands");

    let messages = match queue.receive(max_messages).await {
        Ok(messages) => messages,
        Err(QueueError::NotConfigured) => {
            error!("No QUEUE_NAME is configured");
            return Vec::new();
        }
        Err(e) => {
            error!("Could not read from queue: {}", e);
            return Vec::new();
        }
    };

    let mut envelopes = Vec::with_capacity(messages.len());
    for message in messages.iter().take(usize::try_from(max_messages).unwrap_or(0)) {
        let keep_on_queue = match decode_message(message) {
            Ok(envelope) => {
                envelopes.push(envelope);
                false
            }
            Err(e) => {
                error!(message_id = ?message.message_id, "Dropping queue message: {}", e);
                policy == MalformedMessagePolicy::Retain
            }
        };

        if keep_on_queue {
            warn!(message_id = ?message.message_id, "Leaving malformed message on the queue");
            continue;
        }

        if let Err(e) = queue.delete(message).await {
            error!(message_id = ?message.message_id, "{}", e);
        }
    }

    info!(count = envelopes.len(), "Drained commands from queue");
    envelopes
}

fn decode_message(message: &ReceivedMessage) -> Result<CommandEnvelope, DjError> {
    let body = message
        .body
        .as_deref()
        .ok_or_else(|| DjError::MalformedMessage("message has no body".to_string()))?;
    decode_envelope(body)
}
