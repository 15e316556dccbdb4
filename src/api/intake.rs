//! Turns an authorized Slack command into a queued envelope and a chat reply.

use tracing::{error, info};

use super::token::validate_shared_token;
use crate::core::config::IntakeConfig;
use crate::core::envelope::encode_envelope;
use crate::core::models::{Command, CommandEnvelope};
use crate::errors::DjError;
use crate::queue::{CommandQueue, QueueError, SentMessage};
use crate::slack::command_parser::{OutgoingWebhookEvent, parse_command_text};
use crate::slack::response_builder;

/// Reply for a handled command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntakeReply {
    Text(String),
    Empty,
}

/// Validate, parse and act on one outgoing-webhook post.
///
/// # Errors
///
/// - `DjError::MissingToken` / `DjError::InvalidToken` for a bad shared token
/// - `DjError::TriggerMismatch` if the message was not addressed to this bot
/// - `DjError::MissingUser` if the post carries no `user_name`
/// - `DjError::MalformedCommand` if no command word follows the trigger
/// - `DjError::UnknownCommand` for a command outside the known set
///
/// Queue failures are not errors; they select the "unable" reply.
pub async fn process_command<Q>(
    config: &IntakeConfig,
    queue: &Q,
    event: &OutgoingWebhookEvent,
) -> Result<IntakeReply, DjError>
where
    Q: CommandQueue + ?Sized,
{
    validate_shared_token(&config.slack_token, event.token.as_deref())?;
    info!("Valid slack token provided - processing command");

    let trigger = event
        .trigger_word
        .as_deref()
        .or_else(|| event.text.split_whitespace().next())
        .unwrap_or_default();
    if trigger != config.trigger_word {
        return Err(DjError::TriggerMismatch {
            expected: config.trigger_word.clone(),
            received: trigger.to_string(),
        });
    }
    info!("Valid trigger word detected");

    if event.user_name.trim().is_empty() {
        return Err(DjError::MissingUser);
    }

    let parsed = parse_command_text(&event.text)?;

    let command: Command = parsed.command.parse()?;
    let user = event.user_name.as_str();
    let arg = parsed.arg;
    info!(%command, user, arg = ?arg, "Received command");

    if command.is_local() {
        return Ok(IntakeReply::Text(response_builder::help_text(
            &config.trigger_word,
        )));
    }

    if command == Command::Request && !arg.as_deref().is_some_and(|a| a.contains(" by")) {
        info!("Not submitting request command - does not match correct format");
        return Ok(IntakeReply::Text(response_builder::request_format_error(
            user,
        )));
    }

    let envelope = CommandEnvelope::new(command, user, arg);
    let outcome = enqueue_command(queue, &config.message_group_id, &envelope).await;

    Ok(
        match response_builder::acknowledgment(command, user, envelope.arg.as_deref(), &outcome) {
            Some(text) => IntakeReply::Text(text),
            None => IntakeReply::Empty,
        },
    )
}

/// Encode and submit an envelope, logging the outcome.
pub async fn enqueue_command<Q>(
    queue: &Q,
    group_id: &str,
    envelope: &CommandEnvelope,
) -> Result<SentMessage, QueueError>
where
    Q: CommandQueue + ?Sized,
{
    let body = encode_envelope(envelope)
        .map_err(|e| QueueError::Send(format!("Failed to encode envelope: {e}")))?;

    match queue.send(body, group_id).await {
        Ok(sent) => {
            info!(
                message_id = ?sent.message_id,
                md5 = ?sent.md5_of_body,
                "Successfully sent message to queue"
            );
            Ok(sent)
        }
        Err(e) => {
            error!(command = %envelope.command, "Failed to enqueue command: {}", e);
            Err(e)
        }
    }
}
