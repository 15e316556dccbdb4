//! Queue port shared by the intake and controller Lambdas.
//!
//! Both handlers talk to the managed queue only through [`CommandQueue`], so
//! they can be exercised against an in-memory queue in tests.

pub mod sqs;

use async_trait::async_trait;
use thiserror::Error;

/// Upper bound on messages returned by a single receive call.
pub const MAX_RECEIVE_BATCH: i32 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueueError {
    #[error("No queue name is configured")]
    NotConfigured,

    #[error("SQS queue {0} was not found")]
    NotFound(String),

    #[error("Failed to resolve queue URL: {0}")]
    Resolve(String),

    #[error("Failed to send message to queue: {0}")]
    Send(String),

    #[error("Failed to receive messages from queue: {0}")]
    Receive(String),

    #[error("Failed to delete message from queue: {0}")]
    Delete(String),
}

/// Acknowledgment returned by the queue for an accepted message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SentMessage {
    pub message_id: Option<String>,
    pub md5_of_body: Option<String>,
}

/// A message pulled off the queue, still owned by the queue until deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceivedMessage {
    pub message_id: Option<String>,
    pub body: Option<String>,
    pub receipt_handle: String,
}

#[async_trait]
pub trait CommandQueue: Send + Sync {
    /// Submit one message body tagged with `group_id`.
    ///
    /// # Errors
    /// - `QueueError::NotConfigured` / `QueueError::NotFound` when there is no queue to send to
    /// - `QueueError::Send` if the queue rejects the message
    async fn send(&self, body: String, group_id: &str) -> Result<SentMessage, QueueError>;

    /// Fetch at most `max_messages` messages in a single call.
    ///
    /// # Errors
    /// - `QueueError::NotConfigured` / `QueueError::NotFound` when there is no queue to read
    /// - `QueueError::Receive` if the receive call fails
    async fn receive(&self, max_messages: i32) -> Result<Vec<ReceivedMessage>, QueueError>;

    /// Remove a previously received message.
    ///
    /// # Errors
    /// Returns `QueueError::Delete` if the queue refuses the receipt handle.
    async fn delete(&self, message: &ReceivedMessage) -> Result<(), QueueError>;
}
