/// heydj - relays Slack "heydj" commands to a DJ controller through SQS.
///
/// This crate implements a two-Lambda architecture:
/// 1. An intake Lambda that receives Slack outgoing-webhook posts, checks the
///    shared token and trigger word, and enqueues a command envelope
/// 2. A controller Lambda that the DJ controller polls to drain pending
///    commands from the queue
///
/// # Architecture
///
/// The system uses:
/// - AWS Lambda for serverless execution
/// - An SQS FIFO queue as the only coupling between the two Lambdas
/// - Tokio for async runtime
///
/// # Example
///
/// ```no_run
/// use heydj::core::config::IntakeConfig;
/// use heydj::queue::sqs::SqsCommandQueue;
///
/// #[tokio::main]
/// async fn main() -> Result<(), lambda_runtime::Error> {
///     heydj::setup_logging();
///
///     let config = IntakeConfig::from_env()?;
///     let queue = SqsCommandQueue::from_env(config.queue_name.clone()).await;
///
///     let config = &config;
///     let queue = &queue;
///     lambda_runtime::run(lambda_runtime::service_fn(
///         move |event: lambda_runtime::LambdaEvent<serde_json::Value>| async move {
///             heydj::api::handler(config, queue, event).await
///         },
///     ))
///     .await
/// }
/// ```
// Module declarations
pub mod api;
pub mod controller;
pub mod core;
pub mod errors;
pub mod queue;
pub mod slack;

pub use errors::DjError;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// Log level comes from `RUST_LOG` and defaults to `info`. Safe to call more
/// than once; later calls are no-ops.
///
/// # Example
///
/// ```
/// heydj::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
