#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use heydj::queue::{CommandQueue, QueueError, ReceivedMessage, SentMessage};

/// In-memory stand-in for the SQS queue.
#[derive(Default)]
pub struct InMemoryQueue {
    pending: Mutex<VecDeque<ReceivedMessage>>,
    sent: Mutex<Vec<(String, String)>>,
    deleted: Mutex<Vec<String>>,
    fail_with: Option<QueueError>,
    next_id: Mutex<usize>,
}

impl InMemoryQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(error: QueueError) -> Self {
        Self {
            fail_with: Some(error),
            ..Self::default()
        }
    }

    /// Queue a raw message body as if another producer had sent it.
    pub fn push_raw(&self, body: &str) -> String {
        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;
        let receipt_handle = format!("receipt-{next_id}");
        self.pending.lock().unwrap().push_back(ReceivedMessage {
            message_id: Some(format!("msg-{next_id}")),
            body: Some(body.to_string()),
            receipt_handle: receipt_handle.clone(),
        });
        receipt_handle
    }

    /// Queue a JSON document using the producer's base64 wrapping.
    pub fn push_json(&self, json: &str) -> String {
        self.push_raw(&STANDARD.encode(json))
    }

    pub fn sent(&self) -> Vec<(String, String)> {
        self.sent.lock().unwrap().clone()
    }

    pub fn deleted(&self) -> Vec<String> {
        self.deleted.lock().unwrap().clone()
    }

    pub fn pending_len(&self) -> usize {
        self.pending.lock().unwrap().len()
    }
}

#[async_trait]
impl CommandQueue for InMemoryQueue {
    async fn send(&self, body: String, group_id: &str) -> Result<SentMessage, QueueError> {
        if let Some(e) = &self.fail_with {
            return Err(e.clone());
        }
        self.sent
            .lock()
            .unwrap()
            .push((body.clone(), group_id.to_string()));
        let receipt = self.push_raw(&body);
        Ok(SentMessage {
            message_id: Some(receipt.replace("receipt", "msg")),
            md5_of_body: None,
        })
    }

    async fn receive(&self, max_messages: i32) -> Result<Vec<ReceivedMessage>, QueueError> {
        if let Some(e) = &self.fail_with {
            return Err(e.clone());
        }
        let pending = self.pending.lock().unwrap();
        let max = usize::try_from(max_messages).unwrap_or(0);
        Ok(pending.iter().take(max).cloned().collect())
    }

    async fn delete(&self, message: &ReceivedMessage) -> Result<(), QueueError> {
        let mut pending = self.pending.lock().unwrap();
        let before = pending.len();
        pending.retain(|m| m.receipt_handle != message.receipt_handle);
        if pending.len() == before {
            return Err(QueueError::Delete(format!(
                "unknown receipt handle {}",
                message.receipt_handle
            )));
        }
        self.deleted
            .lock()
            .unwrap()
            .push(message.receipt_handle.clone());
        Ok(())
    }
}
