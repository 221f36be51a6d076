// src/services/classifier.rs
//
// Routes a free-text query to the telemetry path or the rejection path.
// Classification never fails: the remote variant absorbs every failure by
// falling back to the keyword heuristic.

use anyhow::Context;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::ClassifierConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QueryType {
    VehicleData,
    Unrelated,
}

const VEHICLE_KEYWORDS: &[&str] = &[
    "speed",
    "mobile_speed",
    "average",
    "max",
    "min",
    "mean",
    "median",
    "vehicle",
    "data",
    "telemetry",
    "trip",
    "signal",
    "sensor",
    "acceleration",
    "brake",
    "throttle",
    "rpm",
    "fuel",
    "temperature",
];

const REMOTE_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(10);

const SYSTEM_PROMPT: &str = "You are a query classifier for a vehicle telemetry assistant. \
     Respond with exactly one word: 'vehicle_data' if the user's question is about vehicle \
     telemetry, speed, or sensor data, or 'unrelated' otherwise. Do not add punctuation or \
     any other text.";

/// Case-insensitive substring match against the fixed vocabulary.
pub fn keyword_classify(query: &str) -> QueryType {
    let lowered = query.to_lowercase();
    if VEHICLE_KEYWORDS.iter().any(|k| lowered.contains(k)) {
        QueryType::VehicleData
    } else {
        QueryType::Unrelated
    }
}

pub enum Classifier {
    Remote(RemoteClassifier),
    Keyword,
}

impl Classifier {
    /// Selects the remote-backed variant when a credential is configured,
    /// keyword-only otherwise.
    pub fn from_config(config: &ClassifierConfig) -> Self {
        match &config.api_key {
            Some(key) => Classifier::Remote(RemoteClassifier::new(
                config.api_url.clone(),
                key.clone(),
                config.model.clone(),
            )),
            None => Classifier::Keyword,
        }
    }

    pub async fn classify(&self, query: &str) -> QueryType {
        match self {
            Classifier::Keyword => keyword_classify(query),
            Classifier::Remote(remote) => match remote.classify_remote(query).await {
                // Strict policy: only the exact label counts as in-domain.
                Ok(label) => {
                    if label == "vehicle_data" {
                        QueryType::VehicleData
                    } else {
                        QueryType::Unrelated
                    }
                }
                Err(e) => {
                    warn!("Remote classification failed, using keyword fallback: {e}");
                    keyword_classify(query)
                }
            },
        }
    }
}

pub struct RemoteClassifier {
    http: Client,
    api_url: String,
    api_key: String,
    model: String,
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: Vec<CompletionMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Serialize)]
struct CompletionMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct CompletionResponse {
    choices: Vec<CompletionChoice>,
}

#[derive(Deserialize)]
struct CompletionChoice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}

impl RemoteClassifier {
    pub fn new(api_url: String, api_key: String, model: String) -> Self {
        // A stalled classification endpoint must not hold the single-flight
        // query slot; a timed-out request degrades to the keyword fallback.
        let http = Client::builder()
            .timeout(REMOTE_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self { http, api_url, api_key, model }
    }

    /// Returns the model's answer, trimmed and lower-cased.
    async fn classify_remote(&self, query: &str) -> anyhow::Result<String> {
        let body = CompletionRequest {
            model: &self.model,
            messages: vec![
                CompletionMessage { role: "system", content: SYSTEM_PROMPT },
                CompletionMessage { role: "user", content: query },
            ],
            max_tokens: 5,
            temperature: 0.0,
        };

        let response = self
            .http
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?
            .error_for_status()?
            .json::<CompletionResponse>()
            .await?;

        let choice = response
            .choices
            .into_iter()
            .next()
            .context("classifier response contained no choices")?;
        Ok(choice.message.content.trim().to_lowercase())
    }
}
