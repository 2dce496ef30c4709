//! Shared value objects.

mod money;

pub use money::Money;
