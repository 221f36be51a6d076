// src/services/error_log.rs
//
// Best-effort failure reporting to the backend collector. The caller never
// waits on the request; a delivery failure only shows up in local logs.

use chrono::Utc;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::warn;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ErrorLogEntry {
    pub error: String,
    pub query: String,
    pub timestamp: String,
}

#[derive(Clone, Debug)]
pub struct ErrorLogger {
    http: Client,
    url: String,
}

impl ErrorLogger {
    pub fn new(url: String) -> Self {
        Self { http: Client::new(), url }
    }

    /// Fire-and-forget: spawns the POST and returns immediately.
    pub fn log_error(&self, error: &str, query: &str) {
        let entry = ErrorLogEntry {
            error: error.to_string(),
            query: query.to_string(),
            timestamp: Utc::now().to_rfc3339(),
        };
        let http = self.http.clone();
        let url = self.url.clone();
        tokio::spawn(async move {
            match http.post(&url).json(&entry).send().await {
                Ok(response) if !response.status().is_success() => {
                    warn!("Error collector returned status {}", response.status());
                }
                Ok(_) => {}
                Err(e) => warn!("Failed to deliver error log: {e}"),
            }
        });
    }
}
