// Lambda bootstrap entry point for the intake function

use heydj::core::config::IntakeConfig;
use heydj::queue::sqs::SqsCommandQueue;
use lambda_runtime::{Error, LambdaEvent, run, service_fn};
use serde_json::Value;

#[tokio::main]
async fn main() -> Result<(), Error> {
    heydj::setup_logging();

    let config = IntakeConfig::from_env()?;
    let queue = SqsCommandQueue::from_env(config.queue_name.clone()).await;

    let config = &config;
    let queue = &queue;
    run(service_fn(move |event: LambdaEvent<Value>| async move {
        heydj::api::handler(config, queue, event).await
    }))
    .await
}
