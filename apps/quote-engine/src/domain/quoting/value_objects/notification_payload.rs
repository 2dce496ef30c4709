//! Notification payload value object.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::quoting::value_objects::QuoteRequest;
use crate::domain::shared::Money;

/// The message forwarded to both notification sinks.
///
/// Identical content is sent to the broadcast topic and the queue; any
/// sink-specific framing (such as a broadcast subject line) is applied by
/// the adapters, never here. Immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationPayload {
    /// Correlation ID for this quote.
    pub quote_id: Uuid,
    /// Customer name.
    pub name: String,
    /// Customer email address.
    pub email: String,
    /// Declared value of the insured item.
    pub value: Decimal,
    /// Computed premium.
    pub premium: Decimal,
    /// When the premium was computed.
    pub quoted_at: DateTime<Utc>,
}

impl NotificationPayload {
    /// Build the payload from a validated request and its computed premium.
    #[must_use]
    pub fn new(request: &QuoteRequest, premium: Money) -> Self {
        Self {
            quote_id: Uuid::new_v4(),
            name: request.name().to_string(),
            email: request.email().to_string(),
            value: request.item_value().amount(),
            premium: premium.amount(),
            quoted_at: Utc::now(),
        }
    }
}
