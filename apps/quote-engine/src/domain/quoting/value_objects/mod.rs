//! Value objects for the quoting context.

mod notification_payload;
mod quote_request;
mod quote_result;
mod workflow_outcome;

pub use notification_payload::NotificationPayload;
pub use quote_request::QuoteRequest;
pub use quote_result::QuoteResult;
pub use workflow_outcome::{
    NotificationReport, SinkAttempt, WorkflowErrorKind, WorkflowOutcome, WorkflowStage,
};
