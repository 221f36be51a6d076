// src/config.rs
use std::env;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_TELEMETRY_URL: &str = "https://mapache.gauchoracing.com/api/query/signals";
const DEFAULT_VEHICLE_ID: &str = "gr24-main";
const DEFAULT_TRIP_ID: &str = "4";
const DEFAULT_SIGNAL: &str = "mobile_speed";
const DEFAULT_CLASSIFIER_URL: &str = "https://api.openai.com/v1/chat/completions";
const DEFAULT_CLASSIFIER_MODEL: &str = "gpt-4o-mini";
const DEFAULT_ERROR_LOG_URL: &str = "http://localhost:8080/log";

#[derive(Clone, Debug)]
pub struct Config {
    pub bind_addr: String,
    pub telemetry: TelemetryConfig,
    pub classifier: ClassifierConfig,
    pub error_log_url: String,
}

#[derive(Clone, Debug)]
pub struct TelemetryConfig {
    pub api_url: String,
    pub api_token: String,
    pub vehicle_id: String,
    pub trip_id: String,
    pub signal: String,
}

/// `api_key` is optional; when absent the classifier runs keyword-only.
#[derive(Clone, Debug)]
pub struct ClassifierConfig {
    pub api_url: String,
    pub api_key: Option<String>,
    pub model: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            bind_addr: var_or("BIND_ADDR", DEFAULT_BIND_ADDR),
            telemetry: TelemetryConfig {
                api_url: var_or("TELEMETRY_API_URL", DEFAULT_TELEMETRY_URL),
                api_token: var_or("TELEMETRY_API_TOKEN", ""),
                vehicle_id: var_or("VEHICLE_ID", DEFAULT_VEHICLE_ID),
                trip_id: var_or("TRIP_ID", DEFAULT_TRIP_ID),
                signal: var_or("TELEMETRY_SIGNAL", DEFAULT_SIGNAL),
            },
            classifier: ClassifierConfig {
                api_url: var_or("CLASSIFIER_API_URL", DEFAULT_CLASSIFIER_URL),
                api_key: env::var("CLASSIFIER_API_KEY")
                    .ok()
                    .filter(|k| !k.trim().is_empty()),
                model: var_or("CLASSIFIER_MODEL", DEFAULT_CLASSIFIER_MODEL),
            },
            error_log_url: var_or("ERROR_LOG_URL", DEFAULT_ERROR_LOG_URL),
        }
    }
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
