//! Quote request value object.

use crate::domain::quoting::errors::QuoteError;
use crate::domain::shared::Money;

/// A validated quote request.
///
/// Created per inbound call and owned solely by one workflow invocation;
/// never shared across invocations. Construction enforces the structural
/// invariants: all fields present and the item value non-negative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteRequest {
    name: String,
    email: String,
    item_value: Money,
}

impl QuoteRequest {
    /// Validate and create a quote request.
    ///
    /// # Errors
    ///
    /// Returns [`QuoteError::InvalidInput`] if the name or email is empty,
    /// the email is malformed, or the item value is negative.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        item_value: Money,
    ) -> Result<Self, QuoteError> {
        let name = name.into();
        let email = email.into();

        if name.trim().is_empty() {
            return Err(QuoteError::invalid_input("name", "must not be empty"));
        }
        if email.trim().is_empty() {
            return Err(QuoteError::invalid_input("email", "must not be empty"));
        }
        if !email.contains('@') {
            return Err(QuoteError::invalid_input(
                "email",
                "must be a valid email address",
            ));
        }
        if item_value.is_negative() {
            return Err(QuoteError::invalid_input(
                "value",
                "item value must not be negative",
            ));
        }

        Ok(Self {
            name,
            email,
            item_value,
        })
    }

    /// Customer name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Customer email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Declared value of the insured item.
    #[must_use]
    pub const fn item_value(&self) -> Money {
        self.item_value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn valid_request() {
        let request =
            QuoteRequest::new("Ann", "a@x.com", Money::new(dec!(1000))).unwrap();
        assert_eq!(request.name(), "Ann");
        assert_eq!(request.email(), "a@x.com");
        assert_eq!(request.item_value(), Money::new(dec!(1000)));
    }

    #[test]
    fn zero_value_is_valid() {
        assert!(QuoteRequest::new("Bob", "b@x.com", Money::ZERO).is_ok());
    }

    #[test]
    fn negative_value_rejected() {
        let err = QuoteRequest::new("Ann", "a@x.com", Money::new(dec!(-5))).unwrap_err();
        assert!(matches!(err, QuoteError::InvalidInput { ref field, .. } if field == "value"));
    }

    #[test]
    fn empty_name_rejected() {
        let err = QuoteRequest::new("  ", "a@x.com", Money::ZERO).unwrap_err();
        assert!(matches!(err, QuoteError::InvalidInput { ref field, .. } if field == "name"));
    }

    #[test]
    fn empty_email_rejected() {
        let err = QuoteRequest::new("Ann", "", Money::ZERO).unwrap_err();
        assert!(matches!(err, QuoteError::InvalidInput { ref field, .. } if field == "email"));
    }

    #[test]
    fn malformed_email_rejected() {
        let err = QuoteRequest::new("Ann", "not-an-email", Money::ZERO).unwrap_err();
        assert!(matches!(err, QuoteError::InvalidInput { ref field, .. } if field == "email"));
    }
}
