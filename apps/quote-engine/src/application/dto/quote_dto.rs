//! Quote DTOs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Inbound quote request, prior to domain validation.
///
/// Deserialization rejects non-numeric values; the workflow's start stage
/// rejects everything else (empty fields, negative values).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteRequestDto {
    /// Customer name.
    pub name: String,
    /// Customer email address.
    pub email: String,
    /// Declared value of the insured item.
    pub value: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn deserializes_numeric_value() {
        let dto: QuoteRequestDto =
            serde_json::from_str(r#"{"name":"Ann","email":"a@x.com","value":1000}"#).unwrap();
        assert_eq!(dto.value, dec!(1000));
    }

    #[test]
    fn rejects_non_numeric_value() {
        let result: Result<QuoteRequestDto, _> =
            serde_json::from_str(r#"{"name":"Ann","email":"a@x.com","value":"lots"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn rejects_missing_value() {
        let result: Result<QuoteRequestDto, _> =
            serde_json::from_str(r#"{"name":"Ann","email":"a@x.com"}"#);
        assert!(result.is_err());
    }
}
