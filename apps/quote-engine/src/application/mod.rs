//! Application layer.
//!
//! Ports, use cases, and data transfer objects.

pub mod dto;
pub mod ports;
pub mod use_cases;
