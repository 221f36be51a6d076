mod common;

use axum::routing::post;
use axum::{Json, Router};
use serde_json::json;

use common::spawn_server;
use vehicle_chatbot_backend::services::classifier::{
    Classifier, QueryType, RemoteClassifier, keyword_classify,
};

fn completion_router(answer: &'static str) -> Router {
    Router::new().route(
        "/v1/chat/completions",
        post(move || async move {
            Json(json!({
                "choices": [{ "message": { "content": answer } }]
            }))
        }),
    )
}

fn remote(url: String) -> Classifier {
    Classifier::Remote(RemoteClassifier::new(
        url,
        "test-key".to_string(),
        "test-model".to_string(),
    ))
}

#[test]
fn keyword_vocabulary_matches_are_in_domain() {
    assert_eq!(keyword_classify("What was the average speed on trip 4?"), QueryType::VehicleData);
    assert_eq!(keyword_classify("SHOW ME TELEMETRY"), QueryType::VehicleData);
    assert_eq!(keyword_classify("throttle and brake history"), QueryType::VehicleData);
    assert_eq!(keyword_classify("how are you today?"), QueryType::Unrelated);
    assert_eq!(keyword_classify("capital of France"), QueryType::Unrelated);
}

#[tokio::test]
async fn remote_answer_is_trimmed_and_lowercased() {
    let base = spawn_server(completion_router("  VEHICLE_DATA  ")).await;
    let classifier = remote(format!("{base}/v1/chat/completions"));
    assert_eq!(classifier.classify("anything").await, QueryType::VehicleData);
}

#[tokio::test]
async fn near_miss_remote_answer_is_unrelated() {
    // Strict equality: a trailing period does not count as in-domain.
    let base = spawn_server(completion_router("vehicle_data.")).await;
    let classifier = remote(format!("{base}/v1/chat/completions"));
    assert_eq!(classifier.classify("average speed").await, QueryType::Unrelated);
}

#[tokio::test]
async fn remote_unrelated_answer_is_unrelated() {
    let base = spawn_server(completion_router("unrelated")).await;
    let classifier = remote(format!("{base}/v1/chat/completions"));
    assert_eq!(classifier.classify("average speed").await, QueryType::Unrelated);
}

#[tokio::test]
async fn remote_failure_falls_back_to_keywords() {
    // Nothing listens at this port; the request fails and the keyword
    // heuristic decides.
    let classifier = remote("http://127.0.0.1:9/v1/chat/completions".to_string());
    assert_eq!(classifier.classify("average speed").await, QueryType::VehicleData);
    assert_eq!(classifier.classify("capital of France").await, QueryType::Unrelated);
}

#[tokio::test]
async fn remote_error_status_falls_back_to_keywords() {
    let router = Router::new().route(
        "/v1/chat/completions",
        post(|| async { (axum::http::StatusCode::INTERNAL_SERVER_ERROR, "overloaded") }),
    );
    let base = spawn_server(router).await;
    let classifier = remote(format!("{base}/v1/chat/completions"));
    assert_eq!(classifier.classify("show me the rpm").await, QueryType::VehicleData);
}

#[tokio::test]
async fn keyword_only_variant_ignores_remote_config() {
    let classifier = Classifier::Keyword;
    assert_eq!(classifier.classify("min speed").await, QueryType::VehicleData);
    assert_eq!(classifier.classify("hello there").await, QueryType::Unrelated);
}
