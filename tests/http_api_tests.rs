//! Integration tests for the HTTP surface.
//!
//! Each test binds the router to an ephemeral local port and talks to it
//! over real HTTP.

use std::sync::Arc;

use serde_json::{json, Value};
use tokio::net::TcpListener;

use company_insight::connector::adapter::http;
use company_insight::{
    CompletionService, Container, ContainerConfig, ErrorKind, GroqClient, MockCompletion,
    PromptMode,
};

async fn spawn_app(mode: PromptMode, completion: Arc<dyn CompletionService>) -> String {
    let config = ContainerConfig {
        mode,
        ..ContainerConfig::default()
    };
    let container = Arc::new(Container::with_completion_service(config, completion));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, http::app(container)).await.unwrap();
    });

    format!("http://{}", addr)
}

async fn post_result(base: &str, body: Value) -> (u16, Value) {
    let response = reqwest::Client::new()
        .post(format!("{}/api/result", base))
        .json(&body)
        .send()
        .await
        .unwrap();
    let status = response.status().as_u16();
    let body = response.json::<Value>().await.unwrap();
    (status, body)
}

#[tokio::test]
async fn test_health() {
    let base = spawn_app(PromptMode::Synthesis, Arc::new(MockCompletion::new())).await;

    let body: Value = reqwest::get(format!("{}/health", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_retrieval_result_is_returned_verbatim() {
    let reply = r#"<think>looking up</think>{"company_name":"Acme","good_reviews":["x","y"],"bad_reviews":[]}"#;
    let mock = Arc::new(MockCompletion::new().with_responses([reply]));
    let base = spawn_app(PromptMode::Retrieval, mock.clone()).await;

    let (status, body) = post_result(
        &base,
        json!({
            "companyName": "Acme",
            "companyAddress": "1 Main St",
            "reviewType": "good"
        }),
    )
    .await;

    assert_eq!(status, 200);
    assert_eq!(
        body,
        json!({ "company_name": "Acme", "good_reviews": ["x", "y"], "bad_reviews": [] })
    );

    let requests = mock.requests().await;
    assert_eq!(requests[0].mode(), PromptMode::Retrieval);
    assert!(requests[0].system_prompt().contains("mostly good"));
}

#[tokio::test]
async fn test_mode_can_be_chosen_per_request() {
    let mock = Arc::new(MockCompletion::new());
    let base = spawn_app(PromptMode::Retrieval, mock.clone()).await;

    let (status, body) = post_result(
        &base,
        json!({
            "companyName": "Acme",
            "companyAddress": "1 Main St",
            "mode": "synthesis"
        }),
    )
    .await;

    assert_eq!(status, 200);
    assert!(body["summary"]["overallRating"].is_number());
    assert_eq!(mock.requests().await[0].mode(), PromptMode::Synthesis);
}

#[tokio::test]
async fn test_blank_company_name_is_bad_request() {
    let mock = Arc::new(MockCompletion::new());
    let base = spawn_app(PromptMode::Retrieval, mock.clone()).await;

    let (status, body) = post_result(
        &base,
        json!({ "companyName": "  ", "companyAddress": "1 Main St" }),
    )
    .await;

    assert_eq!(status, 400);
    assert!(body["error"].as_str().unwrap().contains("company name"));
    // Validation happens before the completion service is reached.
    assert_eq!(mock.call_count().await, 0);
}

#[tokio::test]
async fn test_unknown_mode_is_bad_request() {
    let base = spawn_app(PromptMode::Synthesis, Arc::new(MockCompletion::new())).await;

    let (status, body) = post_result(
        &base,
        json!({ "companyName": "Acme", "companyAddress": "1 Main St", "mode": "invent" }),
    )
    .await;

    assert_eq!(status, 400);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_unparseable_body_is_bad_request() {
    let base = spawn_app(PromptMode::Synthesis, Arc::new(MockCompletion::new())).await;

    let response = reqwest::Client::new()
        .post(format!("{}/api/result", base))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 400);
    let body: Value = response.json().await.unwrap();
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_missing_key_reports_configuration_message() {
    let client = Arc::new(GroqClient::new("", "model", "http://127.0.0.1:9"));
    let base = spawn_app(PromptMode::Synthesis, client).await;

    let (status, body) = post_result(
        &base,
        json!({ "companyName": "Acme", "companyAddress": "1 Main St" }),
    )
    .await;

    assert_eq!(status, 500);
    assert_eq!(
        body,
        json!({ "error": "API key not configured. Set GROQ_API_KEY in the server environment." })
    );
}

#[tokio::test]
async fn test_retrieval_failure_echoes_placeholder() {
    let mock = Arc::new(MockCompletion::new().with_responses(["no json here"]));
    let base = spawn_app(PromptMode::Retrieval, mock.clone()).await;

    let (status, body) = post_result(
        &base,
        json!({ "companyName": "Acme", "companyAddress": "1 Main St" }),
    )
    .await;

    assert_eq!(status, 500);
    assert_eq!(
        body,
        json!({
            "error": "Failed to process request",
            "company_name": "Error",
            "good_reviews": [],
            "bad_reviews": []
        })
    );
    // One retry for the unparseable reply, then give up.
    assert_eq!(mock.call_count().await, 2);
}

#[tokio::test]
async fn test_synthesis_upstream_failure_is_generic() {
    let mock = Arc::new(MockCompletion::new().with_failure(ErrorKind::Upstream));
    let base = spawn_app(PromptMode::Synthesis, mock).await;

    let (status, body) = post_result(
        &base,
        json!({ "companyName": "Acme", "companyAddress": "1 Main St" }),
    )
    .await;

    assert_eq!(status, 500);
    assert_eq!(body, json!({ "error": "Failed to process request" }));
}
