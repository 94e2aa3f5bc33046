//! Integration tests for the HTTP API.
//!
//! These drive the full router (state, store, matcher, reply selection)
//! through tower's `oneshot` without binding a socket. Each
//! test gets its own in-memory store seeded with the stock FAQ set.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use server::reply::{FALLBACK_CONFIDENCE, FALLBACK_REPLY};
use server::{build_router, ServerConfig, ServerState};
use tower::util::ServiceExt;

fn test_app() -> Router {
    let config = ServerConfig {
        database_path: ":memory:".to_string(),
        ..ServerConfig::default()
    };
    let state = Arc::new(ServerState::new(config).expect("state builds"));
    build_router(state)
}

async fn request(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(value) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string()))
            .expect("request builds"),
        None => builder.body(Body::empty()).expect("request builds"),
    };

    let response = app.clone().oneshot(request).await.expect("request runs");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body reads")
        .to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("body is JSON")
    };
    (status, value)
}

#[tokio::test]
async fn health_endpoint_reports_healthy() {
    let app = test_app();
    let (status, body) = request(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "deskbot-server");
}

#[tokio::test]
async fn ready_endpoint_checks_the_store() {
    let app = test_app();
    let (status, body) = request(&app, "GET", "/ready", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ready");
    assert_eq!(body["components"]["store"], "ready");
}

#[tokio::test]
async fn unknown_routes_return_the_error_envelope() {
    let app = test_app();
    let (status, body) = request(&app, "GET", "/does-not-exist", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn refund_message_gets_a_faq_reply() {
    let app = test_app();
    let (status, body) = request(
        &app,
        "POST",
        "/api/messages",
        Some(json!({"text": "How do I request a refund?"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "open");
    assert_eq!(body["user_message"]["sender_type"], "user");
    assert_eq!(body["user_message"]["content"], "How do I request a refund?");
    assert_eq!(body["bot_message"]["sender_type"], "bot");
    let bot_text = body["bot_message"]["content"].as_str().expect("bot text");
    assert!(bot_text.contains("Request refund"));

    // The reply metadata is visible on the conversation read.
    let conversation_id = body["conversation_id"].as_str().expect("conversation id");
    let (status, view) = request(
        &app,
        "GET",
        &format!("/api/conversations/{conversation_id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(view["conversation_id"], conversation_id);
    assert_eq!(view["channel"], "web");
    assert_eq!(view["status"], "open");

    let messages = view["messages"].as_array().expect("messages");
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0]["sender_type"], "user");
    assert_eq!(messages[1]["sender_type"], "bot");

    let metadata = &messages[1]["metadata"];
    assert_eq!(metadata["source"], "faq");
    assert_eq!(metadata["language"], "en");
    assert_eq!(metadata["faq_id"], 1);
    assert!(metadata["confidence"].as_f64().expect("confidence") >= 0.34);
}

#[tokio::test]
async fn unrelated_message_gets_the_stub_reply() {
    let app = test_app();
    let (status, body) = request(
        &app,
        "POST",
        "/api/messages",
        Some(json!({"text": "What's the weather today?"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["bot_message"]["content"], FALLBACK_REPLY);

    let conversation_id = body["conversation_id"].as_str().expect("conversation id");
    let (_, view) = request(
        &app,
        "GET",
        &format!("/api/conversations/{conversation_id}"),
        None,
    )
    .await;

    let metadata = &view["messages"][1]["metadata"];
    assert_eq!(metadata["source"], "stub");
    let confidence = metadata["confidence"].as_f64().expect("confidence");
    assert!((confidence - f64::from(FALLBACK_CONFIDENCE)).abs() < 1e-6);
    assert!(metadata.get("faq_id").is_none());
}

#[tokio::test]
async fn messages_append_to_an_existing_conversation() {
    let app = test_app();
    let (_, first) = request(
        &app,
        "POST",
        "/api/messages",
        Some(json!({"text": "Where is my order?", "session_id": "sess-1"})),
    )
    .await;
    let conversation_id = first["conversation_id"].as_str().expect("id").to_string();

    let (status, second) = request(
        &app,
        "POST",
        "/api/messages",
        Some(json!({
            "conversation_id": conversation_id,
            "text": "How long does delivery take?"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(second["conversation_id"], conversation_id.as_str());

    let (_, view) = request(
        &app,
        "GET",
        &format!("/api/conversations/{conversation_id}"),
        None,
    )
    .await;
    let messages = view["messages"].as_array().expect("messages");
    assert_eq!(messages.len(), 4);
}

#[tokio::test]
async fn missing_conversation_returns_404() {
    let app = test_app();
    let (status, body) = request(&app, "GET", "/api/conversations/nope", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn language_without_entries_falls_back_to_the_stub() {
    let app = test_app();
    let (status, body) = request(
        &app,
        "POST",
        "/api/messages",
        Some(json!({"text": "How do I request a refund?", "language": "fr"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["bot_message"]["content"], FALLBACK_REPLY);
}

#[tokio::test]
async fn empty_text_is_a_defined_no_match_case() {
    let app = test_app();
    let (status, body) = request(&app, "POST", "/api/messages", Some(json!({"text": ""}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["bot_message"]["content"], FALLBACK_REPLY);
}
