//! In-process messaging adapters.
//!
//! Implement the notification ports over Tokio channels: a broadcast
//! topic that fans out to every subscriber, and a point-to-point queue
//! drained by a single consumer.

mod in_memory_queue;
mod in_memory_topic;

pub use in_memory_queue::{InMemoryQueue, QueuedMessage};
pub use in_memory_topic::{BroadcastEnvelope, InMemoryTopic, InMemoryTopicConfig};
