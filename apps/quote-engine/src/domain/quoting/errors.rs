//! Domain errors for the quoting context.

use thiserror::Error;

/// Errors raised by quote validation and premium calculation.
///
/// These errors are independent of infrastructure concerns.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuoteError {
    /// A request field is missing, malformed, or out of range.
    ///
    /// Detected before any side effect; surfaced to the caller as a
    /// client error.
    #[error("invalid value for '{field}': {message}")]
    InvalidInput {
        /// Field name.
        field: String,
        /// Error message.
        message: String,
    },

    /// Internal failure computing the premium.
    ///
    /// Should be unreachable given pure arithmetic, but reserved for
    /// unexpected numeric overflow.
    #[error("premium computation failed: {message}")]
    CalculatorFault {
        /// Error details.
        message: String,
    },
}

impl QuoteError {
    /// Shorthand for an invalid-input error.
    pub fn invalid_input(field: &str, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.to_string(),
            message: message.into(),
        }
    }
}
