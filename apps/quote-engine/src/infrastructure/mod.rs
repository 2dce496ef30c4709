//! Infrastructure layer - adapters and external integrations.

pub mod http;
pub mod messaging;
