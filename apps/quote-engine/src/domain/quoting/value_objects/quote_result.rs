//! Quote result value object.

use serde::{Deserialize, Serialize};

use crate::domain::shared::Money;

/// The result of a successful quote workflow run.
///
/// The premium is projected from the calculator's output only, never from
/// sink responses. Produced once per successful run; the sole value
/// returned to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteResult {
    premium: Money,
}

impl QuoteResult {
    /// Create a quote result from a computed premium.
    #[must_use]
    pub const fn new(premium: Money) -> Self {
        Self { premium }
    }

    /// The computed premium.
    #[must_use]
    pub const fn premium(&self) -> Money {
        self.premium
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn result_carries_premium() {
        let result = QuoteResult::new(Money::new(dec!(10.00)));
        assert_eq!(result.premium(), Money::new(dec!(10.00)));
    }
}
