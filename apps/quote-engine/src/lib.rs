// Allow unwrap/expect in tests - tests should panic on unexpected errors
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::float_cmp,
        clippy::too_many_lines,
        clippy::needless_pass_by_value,
        clippy::default_trait_access
    )
)]

//! Quote Engine - Rust Core Library
//!
//! Synchronous quote workflow engine: computes an insurance premium for a
//! submitted item value, notifies two independent downstream channels, and
//! returns the premium to the blocking caller within a bounded time budget.
//!
//! # Architecture (Clean Architecture + DDD + Hexagonal)
//!
//! ## Layers (inside → outside)
//!
//! - **Domain**: Core business logic (value objects, domain services)
//!   - `quoting`: Quote request/result, notification payload, workflow outcome,
//!     premium calculation
//!
//! - **Application**: Use cases and orchestration
//!   - `ports`: Interfaces for external systems (`BroadcastPublisherPort`,
//!     `QueueEnqueuerPort`)
//!   - `use_cases`: `RunQuote` — the workflow orchestrator
//!   - `dto`: Data transfer objects for API boundaries
//!
//! - **Infrastructure**: Adapters (implementations)
//!   - `http`: Axum request gateway
//!   - `messaging`: In-memory broadcast topic and point-to-point queue

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Clean Architecture Layers
// =============================================================================

/// Domain layer - Core business logic with no external dependencies.
pub mod domain;

/// Application layer - Use cases and port definitions.
pub mod application;

/// Infrastructure layer - Adapters and external integrations.
pub mod infrastructure;

/// Observability - metrics recording helpers.
pub mod observability;

/// Engine configuration from environment variables.
pub mod config;

// =============================================================================
// Re-exports from Clean Architecture
// =============================================================================

// Domain re-exports
pub use domain::quoting::services::{FlatRateCalculator, PremiumCalculator};
pub use domain::quoting::value_objects::{
    NotificationPayload, NotificationReport, QuoteRequest, QuoteResult, SinkAttempt,
    WorkflowErrorKind, WorkflowOutcome, WorkflowStage,
};
pub use domain::shared::Money;

// Application re-exports
pub use application::dto::QuoteRequestDto;
pub use application::ports::{
    BroadcastPublisherPort, EnqueueError, EnqueueReceipt, NoOpBroadcastPublisher,
    NoOpQueueEnqueuer, PublishError, PublishReceipt, QueueEnqueuerPort,
};
pub use application::use_cases::{RunQuoteUseCase, WorkflowConfig};

// Infrastructure re-exports
pub use infrastructure::http::{AppState, create_router};
pub use infrastructure::messaging::{InMemoryQueue, InMemoryTopic, InMemoryTopicConfig};
