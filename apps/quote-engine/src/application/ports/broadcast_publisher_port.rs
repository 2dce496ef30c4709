//! Broadcast Publisher Port (Driven Port)
//!
//! Interface for publishing notification messages to a fan-out topic.
//! Zero or more subscribers may receive each message; the publisher does
//! not know or guarantee subscriber count or downstream delivery. The
//! call blocks only until the sink acknowledges ingestion.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::quoting::value_objects::NotificationPayload;

/// Broadcast publish error.
#[derive(Debug, Clone, thiserror::Error)]
pub enum PublishError {
    /// The sink could not be reached.
    #[error("broadcast sink unreachable: {message}")]
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

    /// The publisher is not authorized for the topic.
    #[error("not authorized to publish to '{topic}'")]
    Unauthorized {
        /// The rejected topic.
        topic: String,
    },
}

/// Acknowledgment that the sink ingested the message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishReceipt {
    /// Sink-assigned message ID.
    pub message_id: String,
}

/// Port for publishing to a broadcast topic.
#[async_trait]
pub trait BroadcastPublisherPort: Send + Sync {
    /// Publish the payload to the named topic.
    ///
    /// `subject` is sink-specific framing; the payload content itself is
    /// identical across sinks.
    ///
    /// # Errors
    ///
    /// Returns a [`PublishError`] with a distinct reason code per failure
    /// condition. The workflow treats every variant as non-fatal.
    async fn publish(
        &self,
        topic: &str,
        subject: Option<&str>,
        payload: &NotificationPayload,
    ) -> Result<PublishReceipt, PublishError>;
}

/// No-op broadcast publisher for testing and wiring defaults.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpBroadcastPublisher;

#[async_trait]
impl BroadcastPublisherPort for NoOpBroadcastPublisher {
    async fn publish(
        &self,
        _topic: &str,
        _subject: Option<&str>,
        _payload: &NotificationPayload,
    ) -> Result<PublishReceipt, PublishError> {
        Ok(PublishReceipt {
            message_id: Uuid::new_v4().to_string(),
        })
    }
}
