use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::info;

use super::drain::drain_commands;
use crate::api::token::validate_shared_token;
use crate::api::{helpers, parsing};
use crate::core::config::ControllerConfig;
use crate::queue::CommandQueue;

pub use self::function_handler as handler;

/// Lambda handler for the controller entrypoint. Checks the controller token
/// and returns whatever commands are waiting.
#[tracing::instrument(level = "info", skip_all, fields(request_id = %event.context.request_id))]
pub async fn function_handler<Q>(
    config: &ControllerConfig,
    queue: &Q,
    event: LambdaEvent<Value>,
) -> Result<Value, Error>
where
    Q: CommandQueue + ?Sized,
{
    Ok(handle_request(config, queue, &event.payload).await)
}

pub async fn handle_request<Q>(config: &ControllerConfig, queue: &Q, payload: &Value) -> Value
where
    Q: CommandQueue + ?Sized,
{
    let token = parsing::query_param(payload, "token");
    if validate_shared_token(&config.controller_token, token.as_deref()).is_err() {
        return helpers::empty_list_response(401);
    }
    info!("Controller token is valid - checking for commands");

    let envelopes = drain_commands(queue, config.max_messages, config.malformed_policy).await;
    helpers::ok_envelopes(&envelopes)
}
