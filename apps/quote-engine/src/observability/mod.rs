//! Observability - metrics recording helpers.

mod metrics;

pub use metrics::{
    MetricsConfig, MetricsError, init_metrics, record_premium, record_quote_outcome,
    record_quote_request,
};
