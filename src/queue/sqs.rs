use async_trait::async_trait;
use aws_sdk_sqs::Client as SqsClient;
use tokio::sync::OnceCell;
use tracing::{error, info};

use super::{CommandQueue, QueueError, ReceivedMessage, SentMessage};

/// SQS-backed [`CommandQueue`].
///
/// The queue URL is looked up by name on first use and kept for the life of
/// the warm container. A lookup failure is not cached.
pub struct SqsCommandQueue {
    client: SqsClient,
    queue_name: Option<String>,
    queue_url: OnceCell<String>,
}

impl SqsCommandQueue {
    #[must_use]
    pub fn new(client: SqsClient, queue_name: Option<String>) -> Self {
        Self {
            client,
            queue_name,
            queue_url: OnceCell::new(),
        }
    }

    /// Build a client from the Lambda's ambient AWS configuration.
    pub async fn from_env(queue_name: Option<String>) -> Self {
        let shared_config = aws_config::from_env().load().await;
        Self::new(SqsClient::new(&shared_config), queue_name)
    }

    async fn queue_url(&self) -> Result<&str, QueueError> {
        let Some(queue_name) = self.queue_name.as_deref() else {
            return Err(QueueError::NotConfigured);
        };

        let url = self
            .queue_url
            .get_or_try_init(|| async {
                let output = self
                    .client
                    .get_queue_url()
                    .queue_name(queue_name)
                    .send()
                    .await
                    .map_err(|e| {
                        let not_found = e
                            .as_service_error()
                            .is_some_and(|se| se.is_queue_does_not_exist());
                        if not_found {
                            QueueError::NotFound(queue_name.to_string())
                        } else {
                            QueueError::Resolve(format!("{queue_name}: {e}"))
                        }
                    })?;

                output
                    .queue_url()
                    .map(ToString::to_string)
                    .ok_or_else(|| QueueError::Resolve(format!("{queue_name}: no URL returned")))
            })
            .await?;

        Ok(url.as_str())
    }
}

#[async_trait]
impl CommandQueue for SqsCommandQueue {
    async fn send(&self, body: String, group_id: &str) -> Result<SentMessage, QueueError> {
        let queue_url = self.queue_url().await?;

        let output = self
            .client
            .send_message()
            .queue_url(queue_url)
            .message_body(body)
            .message_group_id(group_id)
            .send()
            .await
            .map_err(|e| {
                error!("SQS send_message failed: {}", e);
                QueueError::Send(e.to_string())
            })?;

        Ok(SentMessage {
            message_id: output.message_id().map(ToString::to_string),
            md5_of_body: output.md5_of_message_body().map(ToString::to_string),
        })
    }

    async fn receive(&self, max_messages: i32) -> Result<Vec<ReceivedMessage>, QueueError> {
        let queue_url = self.queue_url().await?;

        let output = self
            .client
            .receive_message()
            .queue_url(queue_url)
            .max_number_of_messages(max_messages)
            .send()
            .await
            .map_err(|e| QueueError::Receive(e.to_string()))?;

        let mut received = Vec::new();
        for message in output.messages() {
            let Some(receipt_handle) = message.receipt_handle() else {
                // Without a receipt handle the message can't be deleted; it
                // becomes visible again after the visibility timeout.
                error!(message_id = ?message.message_id(), "Received message without a receipt handle");
                continue;
            };
            received.push(ReceivedMessage {
                message_id: message.message_id().map(ToString::to_string),
                body: message.body().map(ToString::to_string),
                receipt_handle: receipt_handle.to_string(),
            });
        }

        info!(count = received.len(), "Received messages from SQS");
        Ok(received)
    }

    async fn delete(&self, message: &ReceivedMessage) -> Result<(), QueueError> {
        let queue_url = self.queue_url().await?;

        self.client
            .delete_message()
            .queue_url(queue_url)
            .receipt_handle(&message.receipt_handle)
            .send()
            .await
            .map_err(|e| QueueError::Delete(e.to_string()))?;
        Ok(())
    }
}
