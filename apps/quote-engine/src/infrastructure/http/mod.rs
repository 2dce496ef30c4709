//! HTTP gateway for the quote workflow.

mod controller;
mod request;
mod response;

pub use controller::{AppState, create_router};
pub use request::SubmitQuoteRequest;
pub use response::{ApiErrorResponse, HealthResponse, QuoteResponse};
