//! Application Ports (Driver and Driven)
//!
//! Ports define interfaces for interacting with external systems.
//! - **Driver Ports** (Primary/Inbound): How the world uses our application
//! - **Driven Ports** (Secondary/Outbound): How our application uses external systems

mod broadcast_publisher_port;
mod queue_enqueuer_port;

pub use broadcast_publisher_port::{
    BroadcastPublisherPort, NoOpBroadcastPublisher, PublishError, PublishReceipt,
};
pub use queue_enqueuer_port::{EnqueueError, EnqueueReceipt, NoOpQueueEnqueuer, QueueEnqueuerPort};
