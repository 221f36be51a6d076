// Shared helpers for the integration suites: in-process axum servers that
// stand in for the telemetry endpoint and the error-log collector.
#![allow(dead_code)]

use std::sync::Arc;

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};
use tokio::sync::Mutex;

use vehicle_chatbot_backend::config::{ClassifierConfig, Config, TelemetryConfig};

/// Serves the router on an ephemeral local port and returns its base URL.
pub async fn spawn_server(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

/// Captures every JSON body POSTed to the collector.
#[derive(Clone, Default)]
pub struct LogStore {
    entries: Arc<Mutex<Vec<Value>>>,
}

impl LogStore {
    pub async fn entries(&self) -> Vec<Value> {
        self.entries.lock().await.clone()
    }

    /// Polls until at least `n` entries arrive or a second passes.
    pub async fn wait_for(&self, n: usize) -> Vec<Value> {
        for _ in 0..50 {
            let entries = self.entries().await;
            if entries.len() >= n {
                return entries;
            }
            tokio::time::sleep(std::time::Duration::from_millis(20)).await;
        }
        self.entries().await
    }
}

pub async fn spawn_log_collector() -> (String, LogStore) {
    let store = LogStore::default();
    let router = Router::new()
        .route(
            "/log",
            post(
                |State(store): State<LogStore>, Json(body): Json<Value>| async move {
                    store.entries.lock().await.push(body);
                    Json(json!({"success": true}))
                },
            ),
        )
        .with_state(store.clone());
    let base = spawn_server(router).await;
    (format!("{base}/log"), store)
}

/// Telemetry endpoint that answers every GET with the given response.
pub async fn spawn_telemetry(
    status: axum::http::StatusCode,
    body: Value,
) -> String {
    let router = Router::new().route(
        "/signals",
        get(move || {
            let body = body.clone();
            async move { (status, Json(body)) }
        }),
    );
    let base = spawn_server(router).await;
    format!("{base}/signals")
}

/// Telemetry endpoint that sleeps before answering, for in-flight tests.
pub async fn spawn_slow_telemetry(delay: std::time::Duration, body: Value) -> String {
    let router = Router::new().route(
        "/signals",
        get(move || {
            let body = body.clone();
            async move {
                tokio::time::sleep(delay).await;
                Json(body)
            }
        }),
    );
    let base = spawn_server(router).await;
    format!("{base}/signals")
}

pub fn speed_payload(values: &[f64]) -> Value {
    json!({
        "signals": { "mobile_speed": values },
        "timestamps": values.iter().enumerate().map(|(i, _)| i as f64).collect::<Vec<_>>(),
    })
}

/// Config wired to the given mock endpoints, keyword-only classifier.
pub fn test_config(telemetry_url: String, error_log_url: String) -> Config {
    Config {
        bind_addr: "127.0.0.1:0".to_string(),
        telemetry: TelemetryConfig {
            api_url: telemetry_url,
            api_token: "test-token".to_string(),
            vehicle_id: "gr24-main".to_string(),
            trip_id: "4".to_string(),
            signal: "mobile_speed".to_string(),
        },
        classifier: ClassifierConfig {
            api_url: "http://127.0.0.1:9/unused".to_string(),
            api_key: None,
            model: "test-model".to_string(),
        },
        error_log_url,
    }
}
