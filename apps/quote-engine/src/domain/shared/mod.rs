//! Shared domain building blocks.

pub mod value_objects;

pub use value_objects::Money;
