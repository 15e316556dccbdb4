//! Intake Lambda handler - thin router from the proxy event to `intake`.

use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{error, info, warn};

use super::intake::{IntakeReply, process_command};
use super::{helpers, parsing};
use crate::core::config::IntakeConfig;
use crate::errors::DjError;
use crate::queue::CommandQueue;
use crate::slack::command_parser::parse_form_data;
use crate::slack::response_builder;

pub use self::function_handler as handler;

/// Lambda handler for the intake entrypoint.
///
/// # Errors
///
/// Never fails; every outcome is expressed as a proxy response.
#[tracing::instrument(level = "info", skip_all, fields(request_id = %event.context.request_id))]
pub async fn function_handler<Q>(
    config: &IntakeConfig,
    queue: &Q,
    event: LambdaEvent<Value>,
) -> Result<Value, Error>
where
    Q: CommandQueue + ?Sized,
{
    info!("Intake Lambda received request");
    Ok(handle_request(config, queue, &event.payload).await)
}

/// Build the proxy response for one intake request.
pub async fn handle_request<Q>(config: &IntakeConfig, queue: &Q, payload: &Value) -> Value
where
    Q: CommandQueue + ?Sized,
{
    let body = match parsing::extract_body(payload) {
        Ok(b) => b,
        Err(e) => return reject(&e),
    };

    let event = parse_form_data(&body);

    match process_command(config, queue, &event).await {
        Ok(IntakeReply::Text(text)) => helpers::ok_text(&text),
        Ok(IntakeReply::Empty) => helpers::ok_empty(),
        Err(DjError::MalformedCommand(detail)) => {
            warn!(%detail, "Malformed command text");
            helpers::ok_text(&response_builder::malformed_command(
                &event.user_name,
                &config.trigger_word,
            ))
        }
        Err(e @ DjError::UnknownCommand(_)) => {
            error!("Command handler called with unknown command: {}", e);
            helpers::ok_empty()
        }
        Err(e) => reject(&e),
    }
}

fn reject(e: &DjError) -> Value {
    error!("Rejecting intake request: {}", e);
    helpers::empty_list_response(e.status_code())
}
