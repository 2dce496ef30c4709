//! Queue Enqueuer Port (Driven Port)
//!
//! Interface for enqueuing notification messages on a point-to-point
//! queue: each message is stored for exactly one logical consumer group
//! to dequeue later. No fan-out.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::quoting::value_objects::NotificationPayload;

/// Queue enqueue error.
#[derive(Debug, Clone, thiserror::Error)]
pub enum EnqueueError {
    /// The sink could not be reached.
    #[error("queue sink unreachable: {message}")]
    Unreachable {
        /// Error details.
        message: String,
    },

    /// The serialized payload exceeds the sink's size limit.
    #[error("payload of {actual_bytes} bytes exceeds the sink limit of {limit_bytes} bytes")]
    PayloadTooLarge {
        /// The sink's limit in bytes.
        limit_bytes: usize,
        /// The serialized payload size in bytes.
        actual_bytes: usize,
    },

    /// The producer is not authorized for the queue.
    #[error("not authorized to enqueue on '{queue}'")]
    Unauthorized {
        /// The rejected queue.
        queue: String,
    },
}

/// Acknowledgment that the queue stored the message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnqueueReceipt {
    /// Sink-assigned message ID.
    pub message_id: String,
}

/// Port for enqueuing on a point-to-point queue.
#[async_trait]
pub trait QueueEnqueuerPort: Send + Sync {
    /// Enqueue the payload on the named queue.
    ///
    /// # Errors
    ///
    /// Returns an [`EnqueueError`] with a distinct reason code per failure
    /// condition. The workflow treats every variant as non-fatal.
    async fn enqueue(
        &self,
        queue: &str,
        payload: &NotificationPayload,
    ) -> Result<EnqueueReceipt, EnqueueError>;
}

/// No-op queue enqueuer for testing and wiring defaults.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpQueueEnqueuer;

#[async_trait]
impl QueueEnqueuerPort for NoOpQueueEnqueuer {
    async fn enqueue(
        &self,
        _queue: &str,
        _payload: &NotificationPayload,
    ) -> Result<EnqueueReceipt, EnqueueError> {
        Ok(EnqueueReceipt {
            message_id: Uuid::new_v4().to_string(),
        })
    }
}
