//! End-to-end workflow tests over the real in-memory adapters.

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use rust_decimal_macros::dec;
use tower::ServiceExt;

use quote_engine::infrastructure::http::{AppState, create_router};
use quote_engine::{
    FlatRateCalculator, InMemoryQueue, InMemoryTopic, InMemoryTopicConfig, Money, QuoteRequestDto,
    RunQuoteUseCase, WorkflowConfig, WorkflowErrorKind, WorkflowOutcome,
};

struct Harness {
    topic: Arc<InMemoryTopic>,
    queue: Arc<InMemoryQueue>,
    run_quote: Arc<RunQuoteUseCase<FlatRateCalculator, InMemoryTopic, InMemoryQueue>>,
}

fn harness_with(topic_config: InMemoryTopicConfig) -> Harness {
    let topic = Arc::new(InMemoryTopic::new(topic_config));
    let queue = Arc::new(InMemoryQueue::new());
    let run_quote = Arc::new(RunQuoteUseCase::new(
        Arc::new(FlatRateCalculator::default()),
        Arc::clone(&topic),
        Arc::clone(&queue),
        WorkflowConfig {
            timeout: Duration::from_secs(1),
            ..WorkflowConfig::default()
        },
    ));
    Harness {
        topic,
        queue,
        run_quote,
    }
}

fn harness() -> Harness {
    harness_with(InMemoryTopicConfig::default())
}

fn dto(name: &str, email: &str, value: rust_decimal::Decimal) -> QuoteRequestDto {
    QuoteRequestDto {
        name: name.to_string(),
        email: email.to_string(),
        value,
    }
}

#[tokio::test]
async fn workflow_delivers_the_same_payload_to_both_sinks() {
    let harness = harness();
    let mut subscriber = harness.topic.subscribe();
    let mut consumer = harness.queue.take_consumer().unwrap();

    let outcome = harness
        .run_quote
        .execute(dto("Ann", "a@x.com", dec!(1000)))
        .await;

    assert_eq!(
        outcome.result().unwrap().premium(),
        Money::new(dec!(10.00))
    );

    let envelope = subscriber.recv().await.unwrap();
    let message = consumer.recv().await.unwrap();
    assert_eq!(envelope.payload, message.payload);
    assert_eq!(envelope.payload.name, "Ann");
    assert_eq!(envelope.payload.email, "a@x.com");
    assert_eq!(envelope.payload.value, dec!(1000));
    assert_eq!(envelope.payload.premium, dec!(10.00));
    assert_eq!(envelope.topic, "quote-notifications");
    assert_eq!(message.queue, "quote-queue");
}

#[tokio::test]
async fn zero_value_yields_a_zero_premium() {
    let harness = harness();
    let mut consumer = harness.queue.take_consumer().unwrap();

    let outcome = harness
        .run_quote
        .execute(dto("Bob", "b@x.com", dec!(0)))
        .await;

    assert_eq!(outcome.result().unwrap().premium(), Money::ZERO);
    assert_eq!(consumer.recv().await.unwrap().payload.premium, dec!(0));
}

#[tokio::test]
async fn invalid_input_reaches_neither_sink() {
    let harness = harness();
    let mut subscriber = harness.topic.subscribe();
    let mut consumer = harness.queue.take_consumer().unwrap();

    let outcome = harness
        .run_quote
        .execute(dto("Ann", "a@x.com", dec!(-5)))
        .await;

    assert!(matches!(
        outcome,
        WorkflowOutcome::Failed {
            kind: WorkflowErrorKind::InvalidInput,
            ..
        }
    ));
    assert!(subscriber.try_recv().is_err());
    assert!(consumer.try_recv().is_err());
}

#[tokio::test]
async fn oversized_broadcast_payload_degrades_but_completes() {
    // A 16-byte ceiling fails every publish; the queue still delivers.
    let harness = harness_with(InMemoryTopicConfig {
        capacity: 8,
        max_payload_bytes: 16,
    });
    let mut consumer = harness.queue.take_consumer().unwrap();

    let outcome = harness
        .run_quote
        .execute(dto("Ann", "a@x.com", dec!(1000)))
        .await;

    let WorkflowOutcome::Done { notifications, .. } = outcome else {
        panic!("expected Done outcome");
    };
    assert!(!notifications.broadcast.is_delivered());
    assert!(notifications.queue.is_delivered());
    assert_eq!(consumer.recv().await.unwrap().payload.premium, dec!(10.00));
}

#[tokio::test]
async fn http_gateway_end_to_end() {
    let harness = harness();
    let mut subscriber = harness.topic.subscribe();
    let router = create_router(AppState {
        run_quote: Arc::clone(&harness.run_quote),
        version: "0.0.0-test".to_string(),
    });

    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/quotes")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    r#"{"name":"Ann","email":"a@x.com","value":1000}"#,
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["quote"], 10.0);

    // The notification went out before the response was produced.
    let envelope = subscriber.recv().await.unwrap();
    assert_eq!(envelope.payload.name, "Ann");
}
