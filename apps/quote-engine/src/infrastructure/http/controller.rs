//! HTTP Controller (Driver Adapter)
//!
//! Exposes the quote workflow over HTTP. One POST endpoint accepts a
//! quote request, runs the workflow to its terminal outcome, and maps
//! that outcome onto a status code. The caller blocks for the premium;
//! notification delivery details never leak into the response.

use std::sync::Arc;

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::application::ports::{BroadcastPublisherPort, QueueEnqueuerPort};
use crate::application::use_cases::RunQuoteUseCase;
use crate::domain::quoting::services::PremiumCalculator;
use crate::domain::quoting::value_objects::{WorkflowErrorKind, WorkflowOutcome};
use crate::infrastructure::http::request::SubmitQuoteRequest;
use crate::infrastructure::http::response::{ApiErrorResponse, HealthResponse, QuoteResponse};
use crate::observability;

/// Shared state handed to every request handler.
pub struct AppState<C, B, Q>
where
    C: PremiumCalculator,
    B: BroadcastPublisherPort,
    Q: QueueEnqueuerPort,
{
    /// The workflow orchestrator.
    pub run_quote: Arc<RunQuoteUseCase<C, B, Q>>,
    /// Crate version reported by the health endpoint.
    pub version: String,
}

// Manual impl: deriving Clone would require C, B and Q to be Clone.
impl<C, B, Q> Clone for AppState<C, B, Q>
where
    C: PremiumCalculator,
    B: BroadcastPublisherPort,
    Q: QueueEnqueuerPort,
{
    fn clone(&self) -> Self {
        Self {
            run_quote: Arc::clone(&self.run_quote),
            version: self.version.clone(),
        }
    }
}

/// Build the HTTP router.
pub fn create_router<C, B, Q>(state: AppState<C, B, Q>) -> Router
where
    C: PremiumCalculator + 'static,
    B: BroadcastPublisherPort + 'static,
    Q: QueueEnqueuerPort + 'static,
{
    Router::new()
        .route("/health", get(health))
        .route("/api/v1/quotes", post(submit_quote))
        .with_state(state)
}

async fn health<C, B, Q>(State(state): State<AppState<C, B, Q>>) -> Response
where
    C: PremiumCalculator,
    B: BroadcastPublisherPort,
    Q: QueueEnqueuerPort,
{
    with_cors(
        (
            StatusCode::OK,
            Json(HealthResponse {
                status: "ok".to_string(),
                version: state.version.clone(),
            }),
        )
            .into_response(),
    )
}

async fn submit_quote<C, B, Q>(
    State(state): State<AppState<C, B, Q>>,
    body: Result<Json<SubmitQuoteRequest>, JsonRejection>,
) -> Response
where
    C: PremiumCalculator,
    B: BroadcastPublisherPort,
    Q: QueueEnqueuerPort,
{
    observability::record_quote_request();

    let Json(request) = match body {
        Ok(body) => body,
        Err(rejection) => {
            return with_cors(
                (
                    StatusCode::BAD_REQUEST,
                    Json(ApiErrorResponse::new(
                        WorkflowErrorKind::InvalidInput.as_str(),
                        rejection.body_text(),
                    )),
                )
                    .into_response(),
            );
        }
    };

    tracing::info!(name = %request.name, "Quote requested");

    let outcome = state.run_quote.execute(request.into()).await;
    with_cors(outcome_response(&outcome))
}

fn outcome_response(outcome: &WorkflowOutcome) -> Response {
    match outcome {
        WorkflowOutcome::Done { result, .. } => (
            StatusCode::OK,
            Json(QuoteResponse {
                quote: result.premium().amount(),
            }),
        )
            .into_response(),
        WorkflowOutcome::Failed { kind, message, .. } => {
            let status = match kind {
                WorkflowErrorKind::InvalidInput => StatusCode::BAD_REQUEST,
                WorkflowErrorKind::CalculatorFault => StatusCode::INTERNAL_SERVER_ERROR,
                WorkflowErrorKind::Timeout => StatusCode::GATEWAY_TIMEOUT,
            };
            (
                status,
                Json(ApiErrorResponse::new(kind.as_str(), message.clone())),
            )
                .into_response()
        }
    }
}

fn with_cors(mut response: Response) -> Response {
    response.headers_mut().insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    response
}
