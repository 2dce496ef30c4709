//! In-Memory Broadcast Topic
//!
//! Fan-out adapter over a Tokio broadcast channel. Every active
//! subscriber receives its own copy of each published envelope. A topic
//! with no subscribers accepts publishes and drops them, matching the
//! fire-and-forget contract of the port.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use uuid::Uuid;

use crate::application::ports::{BroadcastPublisherPort, PublishError, PublishReceipt};
use crate::domain::quoting::value_objects::NotificationPayload;

/// Default broadcast channel capacity per subscriber.
const DEFAULT_CAPACITY: usize = 1024;

/// Default serialized payload ceiling (256 KiB).
const DEFAULT_MAX_PAYLOAD_BYTES: usize = 256 * 1024;

/// Configuration for the in-memory topic.
#[derive(Debug, Clone)]
pub struct InMemoryTopicConfig {
    /// Ring-buffer capacity of the underlying broadcast channel.
    pub capacity: usize,
    /// Largest serialized payload the topic accepts, in bytes.
    pub max_payload_bytes: usize,
}

impl Default for InMemoryTopicConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            max_payload_bytes: DEFAULT_MAX_PAYLOAD_BYTES,
        }
    }
}

/// One published message as delivered to subscribers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BroadcastEnvelope {
    /// Sink-assigned message ID.
    pub message_id: String,
    /// Topic the envelope was published on.
    pub topic: String,
    /// Optional subject line.
    pub subject: Option<String>,
    /// The notification itself.
    pub payload: NotificationPayload,
}

/// Broadcast topic backed by [`tokio::sync::broadcast`].
#[derive(Debug)]
pub struct InMemoryTopic {
    sender: broadcast::Sender<BroadcastEnvelope>,
    max_payload_bytes: usize,
}

impl InMemoryTopic {
    /// Create a topic with the given configuration.
    #[must_use]
    pub fn new(config: InMemoryTopicConfig) -> Self {
        let (sender, _) = broadcast::channel(config.capacity);
        Self {
            sender,
            max_payload_bytes: config.max_payload_bytes,
        }
    }

    /// Attach a new subscriber to the topic.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<BroadcastEnvelope> {
        self.sender.subscribe()
    }

    /// Number of currently attached subscribers.
    #[must_use]
    pub fn receiver_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for InMemoryTopic {
    fn default() -> Self {
        Self::new(InMemoryTopicConfig::default())
    }
}

#[async_trait]
impl BroadcastPublisherPort for InMemoryTopic {
    async fn publish(
        &self,
        topic: &str,
        subject: Option<&str>,
        payload: &NotificationPayload,
    ) -> Result<PublishReceipt, PublishError> {
        let serialized = serde_json::to_vec(payload).map_err(|e| PublishError::Unreachable {
            message: format!("payload serialization failed: {e}"),
        })?;
        if serialized.len() > self.max_payload_bytes {
            return Err(PublishError::PayloadTooLarge {
                limit_bytes: self.max_payload_bytes,
                actual_bytes: serialized.len(),
            });
        }

        let message_id = Uuid::new_v4().to_string();
        let envelope = BroadcastEnvelope {
            message_id: message_id.clone(),
            topic: topic.to_string(),
            subject: subject.map(ToString::to_string),
            payload: payload.clone(),
        };

        // send() only errors when no receiver is attached; a subscriber-less
        // topic still accepts the publish.
        match self.sender.send(envelope) {
            Ok(receivers) => {
                tracing::trace!(topic, receivers, message_id = %message_id, "Envelope broadcast");
            }
            Err(_) => {
                tracing::trace!(topic, message_id = %message_id, "No subscribers, envelope dropped");
            }
        }

        Ok(PublishReceipt { message_id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::quoting::value_objects::QuoteRequest;
    use crate::domain::shared::Money;
    use rust_decimal_macros::dec;

    fn payload() -> NotificationPayload {
        let request = QuoteRequest::new("Ann", "a@x.com", Money::new(dec!(1000))).unwrap();
        NotificationPayload::new(&request, Money::new(dec!(10.00)))
    }

    #[tokio::test]
    async fn delivers_to_every_subscriber() {
        let topic = InMemoryTopic::default();
        let mut first = topic.subscribe();
        let mut second = topic.subscribe();

        let receipt = topic
            .publish("quote-notifications", Some("New quote"), &payload())
            .await
            .unwrap();

        let a = first.recv().await.unwrap();
        let b = second.recv().await.unwrap();
        assert_eq!(a, b);
        assert_eq!(a.message_id, receipt.message_id);
        assert_eq!(a.topic, "quote-notifications");
        assert_eq!(a.subject.as_deref(), Some("New quote"));
        assert_eq!(a.payload.premium, dec!(10.00));
    }

    #[tokio::test]
    async fn publish_without_subscribers_succeeds() {
        let topic = InMemoryTopic::default();
        assert_eq!(topic.receiver_count(), 0);

        let receipt = topic
            .publish("quote-notifications", None, &payload())
            .await
            .unwrap();
        assert!(!receipt.message_id.is_empty());
    }

    #[tokio::test]
    async fn oversized_payload_is_rejected() {
        let topic = InMemoryTopic::new(InMemoryTopicConfig {
            capacity: 8,
            max_payload_bytes: 16,
        });

        let err = topic
            .publish("quote-notifications", None, &payload())
            .await
            .unwrap_err();
        assert!(matches!(err, PublishError::PayloadTooLarge { limit_bytes: 16, .. }));
    }

    #[tokio::test]
    async fn each_publish_gets_a_fresh_message_id() {
        let topic = InMemoryTopic::default();
        let first = topic
            .publish("quote-notifications", None, &payload())
            .await
            .unwrap();
        let second = topic
            .publish("quote-notifications", None, &payload())
            .await
            .unwrap();
        assert_ne!(first.message_id, second.message_id);
    }
}
