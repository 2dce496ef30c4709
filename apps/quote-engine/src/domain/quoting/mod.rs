//! Quoting bounded context.
//!
//! Value objects and services for the quote workflow: request validation,
//! premium calculation, notification payload construction, and the
//! workflow outcome model.

pub mod errors;
pub mod services;
pub mod value_objects;
