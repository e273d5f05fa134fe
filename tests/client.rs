// file: tests/client.rs
// description: model client retry behaviour against a backend that fails on demand
// reference: axum router bound to an ephemeral port

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use quizgen::{Config, GenerationOptions, GenerationRequest, ModelClient, PipelineError};
use serde_json::{Value, json};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Clone)]
struct FlakyBackend {
    calls: Arc<AtomicUsize>,
    failures: usize,
    reply: &'static str,
}

async fn generate(
    State(backend): State<FlakyBackend>,
    Json(_body): Json<Value>,
) -> Result<Json<Value>, (StatusCode, String)> {
    let call = backend.calls.fetch_add(1, Ordering::SeqCst);
    if call < backend.failures {
        return Err((StatusCode::SERVICE_UNAVAILABLE, "model loading".to_string()));
    }
    Ok(Json(json!({"response": backend.reply, "done": true})))
}

async fn spawn(failures: usize, reply: &'static str) -> (String, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let app = Router::new()
        .route("/api/generate", post(generate))
        .with_state(FlakyBackend {
            calls: Arc::clone(&calls),
            failures,
            reply,
        });

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}", addr), calls)
}

fn client(base_url: &str, max_attempts: usize) -> ModelClient {
    let mut model = Config::default_config().model;
    model.base_url = base_url.to_string();
    model.max_attempts = max_attempts;
    model.retry_delay_ms = 1;
    ModelClient::new(&model).unwrap()
}

fn request() -> GenerationRequest {
    GenerationRequest::new("List plant parts.", GenerationOptions::default())
}

#[tokio::test]
async fn test_generate_with_retry_recovers_after_failures() {
    let (base_url, calls) = spawn(2, "roots, stems").await;

    let text = client(&base_url, 3)
        .generate_with_retry(&request())
        .await
        .unwrap();

    assert_eq!(text, "roots, stems");
    assert_eq!(calls.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn test_generate_with_retry_surfaces_last_error() {
    let (base_url, calls) = spawn(usize::MAX, "unused").await;

    let err = client(&base_url, 2)
        .generate_with_retry(&request())
        .await
        .unwrap_err();

    match err {
        PipelineError::BackendError { message, .. } => {
            assert!(message.contains("503"), "{message}");
            assert!(message.contains("model loading"), "{message}");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_generate_json_with_retry_parses_fenced_reply() {
    let (base_url, calls) = spawn(1, "Sure!\n```json\n[{\"word\": \"seed\"}]\n```").await;

    let value = client(&base_url, 2)
        .generate_json_with_retry(&request())
        .await
        .unwrap();

    assert_eq!(value, json!([{"word": "seed"}]));
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_invalid_json_is_retried_then_reported() {
    let (base_url, calls) = spawn(0, "I cannot produce that.").await;

    let err = client(&base_url, 3)
        .generate_json_with_retry(&request())
        .await
        .unwrap_err();

    assert!(matches!(err, PipelineError::InvalidJson { .. }));
    assert_eq!(calls.load(Ordering::SeqCst), 3);
}
