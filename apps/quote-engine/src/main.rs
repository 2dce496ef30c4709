//! Quote Engine binary.
//!
//! Wires the in-memory messaging adapters, the flat-rate calculator and
//! the workflow orchestrator behind the HTTP gateway, then serves until
//! SIGINT or SIGTERM.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use quote_engine::config::EngineSettings;
use quote_engine::infrastructure::http::{AppState, create_router};
use quote_engine::infrastructure::messaging::{InMemoryQueue, InMemoryTopic};
use quote_engine::observability::{self, MetricsConfig};
use quote_engine::{FlatRateCalculator, RunQuoteUseCase};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present; a missing file is not an error.
    dotenvy::dotenv().ok();

    init_tracing();

    let settings = EngineSettings::from_env();
    tracing::info!(
        http_port = settings.http_port,
        topic = %settings.workflow.broadcast_topic,
        queue = %settings.workflow.notification_queue,
        timeout_ms = settings.workflow.timeout.as_millis() as u64,
        "Starting quote engine"
    );

    if settings.metrics_enabled {
        observability::init_metrics(&MetricsConfig {
            listen_addr: settings.metrics_addr,
        })
        .context("failed to start metrics exporter")?;
    }

    let topic = Arc::new(InMemoryTopic::default());
    let queue = Arc::new(InMemoryQueue::new());

    spawn_broadcast_logger(&topic);
    spawn_queue_logger(&queue);

    let run_quote = Arc::new(RunQuoteUseCase::new(
        Arc::new(FlatRateCalculator::default()),
        Arc::clone(&topic),
        Arc::clone(&queue),
        settings.workflow.clone(),
    ));

    let router = create_router(AppState {
        run_quote,
        version: env!("CARGO_PKG_VERSION").to_string(),
    });

    let addr = SocketAddr::from(([0, 0, 0, 0], settings.http_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, "HTTP gateway listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    tracing::info!("Quote engine stopped");
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,quote_engine=debug"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Log every broadcast envelope; stands in for real downstream consumers.
fn spawn_broadcast_logger(topic: &Arc<InMemoryTopic>) {
    let mut subscriber = topic.subscribe();
    tokio::spawn(async move {
        while let Ok(envelope) = subscriber.recv().await {
            tracing::info!(
                topic = %envelope.topic,
                message_id = %envelope.message_id,
                customer = %envelope.payload.name,
                premium = %envelope.payload.premium,
                "Broadcast notification"
            );
        }
    });
}

/// Drain the point-to-point queue, logging each message.
fn spawn_queue_logger(queue: &Arc<InMemoryQueue>) {
    let Some(mut consumer) = queue.take_consumer() else {
        return;
    };
    tokio::spawn(async move {
        while let Some(message) = consumer.recv().await {
            tracing::info!(
                queue = %message.queue,
                message_id = %message.message_id,
                customer = %message.payload.name,
                premium = %message.payload.premium,
                "Queued notification"
            );
        }
    });
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if tokio::signal::ctrl_c().await.is_err() {
            tracing::error!("Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(_) => {
                tracing::error!("Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("Received Ctrl+C, shutting down"),
        () = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
