//! Workflow outcome model.
//!
//! The workflow is a strictly linear state machine:
//! `Start → Computing → Broadcasting → Enqueuing → Projecting → Done`,
//! plus a terminal failure reachable from any non-terminal stage.

use std::fmt;

use crate::domain::quoting::value_objects::QuoteResult;

/// A stage of the quote workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowStage {
    /// Structural validation of the inbound request.
    Start,
    /// Premium computation.
    Computing,
    /// Broadcast topic publish.
    Broadcasting,
    /// Queue enqueue.
    Enqueuing,
    /// Projection of the final result.
    Projecting,
}

impl WorkflowStage {
    /// Stable lowercase name, used in logs and metric tags.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Computing => "computing",
            Self::Broadcasting => "broadcasting",
            Self::Enqueuing => "enqueuing",
            Self::Projecting => "projecting",
        }
    }
}

impl fmt::Display for WorkflowStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification of a workflow failure.
///
/// Sink failures are deliberately absent: they are recovered locally and
/// never abort the workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowErrorKind {
    /// Malformed, missing, or negative request fields.
    InvalidInput,
    /// Internal failure computing the premium.
    CalculatorFault,
    /// The invocation exceeded its time budget.
    Timeout,
}

impl WorkflowErrorKind {
    /// Stable lowercase name, used in logs and metric tags.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidInput => "invalid_input",
            Self::CalculatorFault => "calculator_fault",
            Self::Timeout => "timeout",
        }
    }
}

impl fmt::Display for WorkflowErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The result of a single notification sink attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkAttempt {
    /// The sink acknowledged ingestion.
    Delivered {
        /// Sink-assigned message ID.
        message_id: String,
    },
    /// The attempt failed; recorded but non-fatal.
    Failed {
        /// Failure reason.
        reason: String,
    },
}

impl SinkAttempt {
    /// Whether the sink acknowledged the message.
    #[must_use]
    pub const fn is_delivered(&self) -> bool {
        matches!(self, Self::Delivered { .. })
    }
}

/// Per-sink attempt results for one workflow invocation.
///
/// Attached to a successful outcome for observability; the caller-facing
/// result never exposes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationReport {
    /// Broadcast topic attempt.
    pub broadcast: SinkAttempt,
    /// Queue attempt.
    pub queue: SinkAttempt,
}

/// Terminal outcome of one workflow invocation.
///
/// Exactly one is produced per invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkflowOutcome {
    /// The workflow ran to completion. Both sink invocations were
    /// attempted (not necessarily succeeded) before this was produced.
    Done {
        /// The projected quote result.
        result: QuoteResult,
        /// Per-sink attempt results.
        notifications: NotificationReport,
    },
    /// The workflow halted. If the failure occurred at or before
    /// `Computing`, no sink was invoked.
    Failed {
        /// Failure classification.
        kind: WorkflowErrorKind,
        /// The stage the workflow had entered when it failed.
        stage: WorkflowStage,
        /// Human-readable message for the gateway.
        message: String,
    },
}

impl WorkflowOutcome {
    /// Whether the workflow completed.
    #[must_use]
    pub const fn is_done(&self) -> bool {
        matches!(self, Self::Done { .. })
    }

    /// The quote result, if the workflow completed.
    #[must_use]
    pub const fn result(&self) -> Option<&QuoteResult> {
        match self {
            Self::Done { result, .. } => Some(result),
            Self::Failed { .. } => None,
        }
    }
}
