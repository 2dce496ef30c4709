//! HTTP request types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::application::dto::QuoteRequestDto;

/// Body of `POST /api/v1/quotes`.
///
/// The `value` field must be numeric; deserialization rejects
/// non-numeric values and missing fields before the workflow runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitQuoteRequest {
    /// Customer name.
    pub name: String,
    /// Customer email address.
    pub email: String,
    /// Declared value of the insured item.
    pub value: Decimal,
}

impl From<SubmitQuoteRequest> for QuoteRequestDto {
    fn from(request: SubmitQuoteRequest) -> Self {
        Self {
            name: request.name,
            email: request.email,
            value: request.value,
        }
    }
}
