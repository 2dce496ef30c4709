//! Metrics recording.
//!
//! Thin wrappers over the `metrics` macros. Without an installed
//! recorder every helper is a silent no-op, so the workflow never
//! depends on a metrics backend being present.

use std::net::SocketAddr;

use metrics::{counter, gauge};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

/// Value of the `app` tag on every metric.
const APP_TAG: &str = "quote-engine";

/// Prometheus exporter configuration.
#[derive(Debug, Clone)]
pub struct MetricsConfig {
    /// Address the scrape endpoint listens on.
    pub listen_addr: SocketAddr,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 9090)),
        }
    }
}

/// Metrics initialization error.
#[derive(Debug, thiserror::Error)]
pub enum MetricsError {
    /// The Prometheus exporter could not be installed.
    #[error("failed to install metrics exporter: {0}")]
    Exporter(#[from] BuildError),
}

/// Install the Prometheus recorder and scrape endpoint.
///
/// Call at most once per process, before any metric is recorded.
///
/// # Errors
///
/// Returns a [`MetricsError`] when the exporter cannot bind or a
/// recorder is already installed.
pub fn init_metrics(config: &MetricsConfig) -> Result<(), MetricsError> {
    PrometheusBuilder::new()
        .with_http_listener(config.listen_addr)
        .install()?;
    tracing::info!(addr = %config.listen_addr, "Prometheus scrape endpoint listening");
    Ok(())
}

/// Count one inbound quote request.
pub fn record_quote_request() {
    counter!("quote.request", "app" => APP_TAG).increment(1);
}

/// Record the premium produced for a customer.
pub fn record_premium(customer: &str, premium: Decimal) {
    let value = premium.to_f64().unwrap_or(0.0);
    gauge!(
        "quote.premium",
        "app" => APP_TAG,
        "customer" => customer.to_string(),
    )
    .set(value);
}

/// Count one terminal workflow outcome by kind (`done` or an error kind).
pub fn record_quote_outcome(kind: &'static str) {
    counter!("quote.outcome", "app" => APP_TAG, "kind" => kind).increment(1);
}
