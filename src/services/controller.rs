// src/services/controller.rs
//
// Orchestrates one query at a time: append the user message, classify,
// then either reject or fetch + aggregate and resolve the loading
// placeholder. All pipeline failures end in the fixed apology text plus a
// single error-log dispatch.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::timeout;
use tracing::info;

use crate::config::Config;
use crate::message::{ChatMessage, Sender};
use crate::services::aggregator::format_summary;
use crate::services::classifier::{Classifier, QueryType};
use crate::services::error_log::ErrorLogger;
use crate::services::telemetry::{TelemetryClient, TelemetryResponse};

pub const REJECTION_TEXT: &str =
    "Sorry, I can't help you with that. I can only assist with vehicle data queries.";
pub const APOLOGY_TEXT: &str = "Sorry, I couldn't fetch the data";

const DEFAULT_QUERY_TIMEOUT: Duration = Duration::from_secs(20);

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Replied(String),
    Busy,
}

pub struct ConversationController {
    messages: Mutex<Vec<ChatMessage>>,
    in_flight: AtomicBool,
    classifier: Classifier,
    telemetry: TelemetryClient,
    error_log: ErrorLogger,
    query_timeout: Duration,
}

impl ConversationController {
    pub fn new(config: &Config) -> Self {
        Self {
            messages: Mutex::new(Vec::new()),
            in_flight: AtomicBool::new(false),
            classifier: Classifier::from_config(&config.classifier),
            telemetry: TelemetryClient::new(config.telemetry.clone()),
            error_log: ErrorLogger::new(config.error_log_url.clone()),
            query_timeout: DEFAULT_QUERY_TIMEOUT,
        }
    }

    /// Overrides the 20-second bound on the telemetry path.
    pub fn with_query_timeout(mut self, query_timeout: Duration) -> Self {
        self.query_timeout = query_timeout;
        self
    }

    /// Processes one submission end to end. While a prior query is in
    /// flight this is a no-op: nothing is appended and `Busy` is returned
    /// (reject, never queue).
    pub async fn submit_query(&self, query: &str) -> SubmitOutcome {
        if self.in_flight.swap(true, Ordering::SeqCst) {
            return SubmitOutcome::Busy;
        }
        let reply = self.run_pipeline(query).await;
        self.in_flight.store(false, Ordering::SeqCst);
        SubmitOutcome::Replied(reply)
    }

    /// Snapshot of the transcript, in insertion order.
    pub async fn messages(&self) -> Vec<ChatMessage> {
        self.messages.lock().await.clone()
    }

    async fn run_pipeline(&self, query: &str) -> String {
        // User message lands before any network activity.
        self.append(query, Sender::User, false).await;

        match self.classifier.classify(query).await {
            QueryType::Unrelated => {
                // Out-of-domain is not an error and is never logged.
                info!("Query rejected as unrelated");
                self.append(REJECTION_TEXT, Sender::Bot, false).await;
                REJECTION_TEXT.to_string()
            }
            QueryType::VehicleData => self.answer_vehicle_query(query).await,
        }
    }

    async fn answer_vehicle_query(&self, query: &str) -> String {
        let placeholder_id = self.append("", Sender::Bot, true).await;

        let failure = match timeout(self.query_timeout, self.telemetry.fetch_vehicle_data()).await {
            Err(_) => format!("Telemetry request timed out after {:?}", self.query_timeout),
            Ok(TelemetryResponse { success: true, data: Some(data), .. }) => {
                let reply = format_summary(&data.signals.mobile_speed);
                self.resolve(&placeholder_id, &reply).await;
                return reply;
            }
            Ok(response) => response.error.unwrap_or_else(|| "Unknown error".to_string()),
        };

        self.resolve(&placeholder_id, APOLOGY_TEXT).await;
        self.error_log.log_error(&failure, query);
        APOLOGY_TEXT.to_string()
    }

    async fn append(&self, content: &str, sender: Sender, is_loading: bool) -> String {
        let message = ChatMessage::new(content, sender, is_loading);
        let id = message.id.clone();
        self.messages.lock().await.push(message);
        id
    }

    /// Replaces a placeholder's content in place, keyed by id, and clears
    /// its loading flag. Insertion order is untouched.
    async fn resolve(&self, id: &str, content: &str) {
        let mut messages = self.messages.lock().await;
        if let Some(message) = messages.iter_mut().find(|m| m.id == id) {
            message.content = content.to_string();
            message.is_loading = false;
        }
    }
}
