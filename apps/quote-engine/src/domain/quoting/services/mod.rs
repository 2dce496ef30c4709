//! Domain services for the quoting context.

mod premium_calculator;

pub use premium_calculator::{FlatRateCalculator, PremiumCalculator};
