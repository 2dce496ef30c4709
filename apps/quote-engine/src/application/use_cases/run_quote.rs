//! Run Quote Use Case
//!
//! The workflow orchestrator: sequences premium computation, the two
//! notification sink attempts, and result projection inside one bounded
//! synchronous call.
//!
//! Sink failures are non-fatal: the two sinks are independent observers
//! and the caller still receives their premium when a notification
//! channel is degraded. Only invalid input, a calculator fault, or the
//! overall timeout abort the workflow, and no sink is invoked once the
//! premium itself cannot be computed.

use std::sync::Arc;
use std::sync::atomic::{AtomicU8, Ordering};
use std::time::Duration;

use crate::application::dto::QuoteRequestDto;
use crate::application::ports::{BroadcastPublisherPort, QueueEnqueuerPort};
use crate::domain::quoting::errors::QuoteError;
use crate::domain::quoting::services::PremiumCalculator;
use crate::domain::quoting::value_objects::{
    NotificationPayload, NotificationReport, QuoteRequest, QuoteResult, SinkAttempt,
    WorkflowErrorKind, WorkflowOutcome, WorkflowStage,
};
use crate::domain::shared::Money;
use crate::observability;

/// Workflow configuration, passed in at construction.
///
/// Destination identifiers and the time budget are never read from
/// ambient process state inside the orchestrator.
#[derive(Debug, Clone)]
pub struct WorkflowConfig {
    /// Broadcast topic name.
    pub broadcast_topic: String,
    /// Point-to-point queue name.
    pub notification_queue: String,
    /// Optional subject line for broadcast framing.
    pub broadcast_subject: Option<String>,
    /// Overall time budget for one invocation.
    pub timeout: Duration,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            broadcast_topic: "quote-notifications".to_string(),
            notification_queue: "quote-queue".to_string(),
            broadcast_subject: Some("New jewellery quote".to_string()),
            timeout: Duration::from_secs(5),
        }
    }
}

/// Tracks the last stage the workflow entered, for timeout attribution.
struct StageCell(AtomicU8);

impl StageCell {
    const fn new() -> Self {
        Self(AtomicU8::new(WorkflowStage::Start as u8))
    }

    fn enter(&self, stage: WorkflowStage) {
        self.0.store(stage as u8, Ordering::Relaxed);
    }

    fn current(&self) -> WorkflowStage {
        match self.0.load(Ordering::Relaxed) {
            0 => WorkflowStage::Start,
            1 => WorkflowStage::Computing,
            2 => WorkflowStage::Broadcasting,
            3 => WorkflowStage::Enqueuing,
            _ => WorkflowStage::Projecting,
        }
    }
}

/// Use case for running the quote workflow.
pub struct RunQuoteUseCase<C, B, Q>
where
    C: PremiumCalculator,
    B: BroadcastPublisherPort,
    Q: QueueEnqueuerPort,
{
    calculator: Arc<C>,
    broadcast: Arc<B>,
    queue: Arc<Q>,
    config: WorkflowConfig,
}

impl<C, B, Q> RunQuoteUseCase<C, B, Q>
where
    C: PremiumCalculator,
    B: BroadcastPublisherPort,
    Q: QueueEnqueuerPort,
{
    /// Create a new RunQuoteUseCase.
    pub fn new(
        calculator: Arc<C>,
        broadcast: Arc<B>,
        queue: Arc<Q>,
        config: WorkflowConfig,
    ) -> Self {
        Self {
            calculator,
            broadcast,
            queue,
            config,
        }
    }

    /// Execute the workflow for one inbound request.
    ///
    /// Returns exactly one terminal [`WorkflowOutcome`] within the
    /// configured time budget. Each invocation is an independent attempt:
    /// identical input re-publishes and re-enqueues notifications.
    pub async fn execute(&self, request: QuoteRequestDto) -> WorkflowOutcome {
        let stage = StageCell::new();

        match tokio::time::timeout(self.config.timeout, self.run(request, &stage)).await {
            Ok(outcome) => outcome,
            Err(_) => {
                let stage = stage.current();
                tracing::warn!(
                    stage = %stage,
                    budget_ms = self.config.timeout.as_millis() as u64,
                    "Quote workflow exceeded its time budget"
                );
                observability::record_quote_outcome(WorkflowErrorKind::Timeout.as_str());
                WorkflowOutcome::Failed {
                    kind: WorkflowErrorKind::Timeout,
                    stage,
                    message: format!(
                        "workflow exceeded its {} ms budget",
                        self.config.timeout.as_millis()
                    ),
                }
            }
        }
    }

    async fn run(&self, request: QuoteRequestDto, stage: &StageCell) -> WorkflowOutcome {
        stage.enter(WorkflowStage::Start);
        let request = match QuoteRequest::new(request.name, request.email, Money::new(request.value))
        {
            Ok(request) => request,
            Err(e) => return Self::fail(e, WorkflowStage::Start),
        };

        stage.enter(WorkflowStage::Computing);
        let premium = match self.calculator.premium_for(request.item_value()) {
            Ok(premium) => premium,
            Err(e) => return Self::fail(e, WorkflowStage::Computing),
        };
        observability::record_premium(request.name(), premium.amount());

        let payload = NotificationPayload::new(&request, premium);

        stage.enter(WorkflowStage::Broadcasting);
        let broadcast = match self
            .broadcast
            .publish(
                &self.config.broadcast_topic,
                self.config.broadcast_subject.as_deref(),
                &payload,
            )
            .await
        {
            Ok(receipt) => {
                tracing::debug!(
                    topic = %self.config.broadcast_topic,
                    message_id = %receipt.message_id,
                    "Broadcast publish acknowledged"
                );
                SinkAttempt::Delivered {
                    message_id: receipt.message_id,
                }
            }
            Err(e) => {
                tracing::warn!(
                    topic = %self.config.broadcast_topic,
                    error = %e,
                    "Broadcast publish failed, continuing"
                );
                SinkAttempt::Failed {
                    reason: e.to_string(),
                }
            }
        };

        stage.enter(WorkflowStage::Enqueuing);
        let queue = match self
            .queue
            .enqueue(&self.config.notification_queue, &payload)
            .await
        {
            Ok(receipt) => {
                tracing::debug!(
                    queue = %self.config.notification_queue,
                    message_id = %receipt.message_id,
                    "Enqueue acknowledged"
                );
                SinkAttempt::Delivered {
                    message_id: receipt.message_id,
                }
            }
            Err(e) => {
                tracing::warn!(
                    queue = %self.config.notification_queue,
                    error = %e,
                    "Enqueue failed, continuing"
                );
                SinkAttempt::Failed {
                    reason: e.to_string(),
                }
            }
        };

        stage.enter(WorkflowStage::Projecting);
        observability::record_quote_outcome("done");
        WorkflowOutcome::Done {
            result: QuoteResult::new(premium),
            notifications: NotificationReport { broadcast, queue },
        }
    }

    fn fail(error: QuoteError, stage: WorkflowStage) -> WorkflowOutcome {
        let kind = match error {
            QuoteError::InvalidInput { .. } => WorkflowErrorKind::InvalidInput,
            QuoteError::CalculatorFault { .. } => WorkflowErrorKind::CalculatorFault,
        };
        tracing::warn!(stage = %stage, kind = %kind, error = %error, "Quote workflow failed");
        observability::record_quote_outcome(kind.as_str());
        WorkflowOutcome::Failed {
            kind,
            stage,
            message: error.to_string(),
        }
    }
}
