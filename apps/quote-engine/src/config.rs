//! Engine configuration.
//!
//! Settings are read once at startup; every value has a working default
//! so the engine runs with an empty environment.

use std::net::SocketAddr;
use std::time::Duration;

use crate::application::use_cases::WorkflowConfig;

/// Default HTTP listen port.
pub const DEFAULT_HTTP_PORT: u16 = 8080;

/// Default Prometheus scrape address.
pub const DEFAULT_METRICS_ADDR: &str = "0.0.0.0:9090";

/// Default workflow time budget in milliseconds.
pub const DEFAULT_WORKFLOW_TIMEOUT_MS: u64 = 5_000;

/// Engine settings assembled from the environment.
#[derive(Debug, Clone)]
pub struct EngineSettings {
    /// HTTP listen port (`HTTP_PORT`).
    pub http_port: u16,
    /// Whether to install the Prometheus exporter (`METRICS_ENABLED`).
    pub metrics_enabled: bool,
    /// Prometheus scrape address (`METRICS_ADDR`).
    pub metrics_addr: SocketAddr,
    /// Workflow configuration (`QUOTE_TOPIC`, `NOTIFICATION_QUEUE`,
    /// `BROADCAST_SUBJECT`, `WORKFLOW_TIMEOUT_MS`).
    pub workflow: WorkflowConfig,
}

impl EngineSettings {
    /// Read settings from the process environment.
    ///
    /// Unset or unparseable variables fall back to their defaults.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = WorkflowConfig::default();
        let workflow = WorkflowConfig {
            broadcast_topic: env_string("QUOTE_TOPIC", &defaults.broadcast_topic),
            notification_queue: env_string("NOTIFICATION_QUEUE", &defaults.notification_queue),
            broadcast_subject: std::env::var("BROADCAST_SUBJECT")
                .ok()
                .or(defaults.broadcast_subject),
            timeout: Duration::from_millis(env_parse(
                "WORKFLOW_TIMEOUT_MS",
                DEFAULT_WORKFLOW_TIMEOUT_MS,
            )),
        };

        Self {
            http_port: env_parse("HTTP_PORT", DEFAULT_HTTP_PORT),
            metrics_enabled: env_parse("METRICS_ENABLED", true),
            metrics_addr: env_parse(
                "METRICS_ADDR",
                DEFAULT_METRICS_ADDR
                    .parse()
                    .unwrap_or_else(|_| SocketAddr::from(([0, 0, 0, 0], 9090))),
            ),
            workflow,
        }
    }
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            http_port: DEFAULT_HTTP_PORT,
            metrics_enabled: true,
            metrics_addr: SocketAddr::from(([0, 0, 0, 0], 9090)),
            workflow: WorkflowConfig::default(),
        }
    }
}

fn env_string(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sensible() {
        let settings = EngineSettings::default();
        assert_eq!(settings.http_port, DEFAULT_HTTP_PORT);
        assert!(settings.metrics_enabled);
        assert_eq!(settings.workflow.broadcast_topic, "quote-notifications");
        assert_eq!(settings.workflow.notification_queue, "quote-queue");
        assert_eq!(settings.workflow.timeout, Duration::from_secs(5));
    }

    #[test]
    fn env_parse_falls_back_on_garbage() {
        // Key is unset in the test environment.
        assert_eq!(env_parse("QUOTE_ENGINE_UNSET_TEST_KEY", 42u16), 42);
    }

    #[test]
    fn metrics_addr_default_parses() {
        assert_eq!(
            DEFAULT_METRICS_ADDR.parse::<SocketAddr>().unwrap().port(),
            9090
        );
    }
}
