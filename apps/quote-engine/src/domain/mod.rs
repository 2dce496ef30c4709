//! Domain layer.
//!
//! Core business logic with no infrastructure dependencies.

pub mod quoting;
pub mod shared;
