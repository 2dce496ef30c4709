//! In-Memory Point-to-Point Queue
//!
//! Queue adapter over an unbounded Tokio mpsc channel. Messages are
//! stored until the single consumer drains them; there is no fan-out.

use std::sync::Mutex;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use uuid::Uuid;

use crate::application::ports::{EnqueueError, EnqueueReceipt, QueueEnqueuerPort};
use crate::domain::quoting::value_objects::NotificationPayload;

/// One stored message as handed to the consumer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueuedMessage {
    /// Sink-assigned message ID.
    pub message_id: String,
    /// Queue the message was enqueued on.
    pub queue: String,
    /// The notification itself.
    pub payload: NotificationPayload,
}

/// Point-to-point queue backed by [`tokio::sync::mpsc`].
#[derive(Debug)]
pub struct InMemoryQueue {
    sender: mpsc::UnboundedSender<QueuedMessage>,
    consumer: Mutex<Option<mpsc::UnboundedReceiver<QueuedMessage>>>,
}

impl InMemoryQueue {
    /// Create an empty queue.
    #[must_use]
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        Self {
            sender,
            consumer: Mutex::new(Some(receiver)),
        }
    }

    /// Take the consumer half of the queue.
    ///
    /// Returns `None` after the first call; a point-to-point queue has
    /// exactly one consumer.
    pub fn take_consumer(&self) -> Option<mpsc::UnboundedReceiver<QueuedMessage>> {
        self.consumer.lock().ok().and_then(|mut guard| guard.take())
    }
}

impl Default for InMemoryQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl QueueEnqueuerPort for InMemoryQueue {
    async fn enqueue(
        &self,
        queue: &str,
        payload: &NotificationPayload,
    ) -> Result<EnqueueReceipt, EnqueueError> {
        let message_id = Uuid::new_v4().to_string();
        let message = QueuedMessage {
            message_id: message_id.clone(),
            queue: queue.to_string(),
            payload: payload.clone(),
        };

        self.sender
            .send(message)
            .map_err(|_| EnqueueError::Unreachable {
                message: "queue consumer dropped".to_string(),
            })?;

        tracing::trace!(queue, message_id = %message_id, "Message enqueued");
        Ok(EnqueueReceipt { message_id })
    }
}
