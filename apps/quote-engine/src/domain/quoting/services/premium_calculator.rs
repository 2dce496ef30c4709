//! Premium calculation.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::domain::quoting::errors::QuoteError;
use crate::domain::shared::Money;

/// Computes the premium for an insured item value.
///
/// Pure function of the item value alone: no hidden state, no randomness,
/// no side effects. A trait so the orchestrator can be tested against a
/// deterministic faulty implementation.
pub trait PremiumCalculator: Send + Sync {
    /// Compute the premium for the given item value, rounded to the
    /// currency's minor unit with half-up rounding.
    ///
    /// # Errors
    ///
    /// Returns [`QuoteError::InvalidInput`] for a negative item value and
    /// [`QuoteError::CalculatorFault`] on numeric overflow.
    fn premium_for(&self, item_value: Money) -> Result<Money, QuoteError>;
}

/// Default flat-rate premium calculator: `premium = value * rate`.
#[derive(Debug, Clone, Copy)]
pub struct FlatRateCalculator {
    rate: Decimal,
}

impl FlatRateCalculator {
    /// The standard 1% flat rate.
    pub const DEFAULT_RATE: Decimal = dec!(0.01);

    /// Create a calculator with a custom rate.
    #[must_use]
    pub const fn new(rate: Decimal) -> Self {
        Self { rate }
    }

    /// The configured rate.
    #[must_use]
    pub const fn rate(&self) -> Decimal {
        self.rate
    }
}

impl Default for FlatRateCalculator {
    fn default() -> Self {
        Self::new(Self::DEFAULT_RATE)
    }
}

impl PremiumCalculator for FlatRateCalculator {
    fn premium_for(&self, item_value: Money) -> Result<Money, QuoteError> {
        if item_value.is_negative() {
            return Err(QuoteError::invalid_input(
                "value",
                "item value must not be negative",
            ));
        }

        let premium = item_value
            .checked_mul(self.rate)
            .ok_or_else(|| QuoteError::CalculatorFault {
                message: format!("overflow multiplying {item_value} by rate {}", self.rate),
            })?;

        Ok(premium.round_to_cents())
    }
}
