//! Application use cases.

mod run_quote;

pub use run_quote::{RunQuoteUseCase, WorkflowConfig};
