// src/services/telemetry.rs
//
// Client for the vehicle signals endpoint. The vehicle, trip, and signal
// selector are fixed at construction; every query fetches the same series
// fresh (no caching).

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::TelemetryConfig;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TelemetryResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<TelemetryData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TelemetryData {
    #[serde(default)]
    pub signals: SignalSet,
    #[serde(default)]
    pub timestamps: Vec<f64>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SignalSet {
    #[serde(default)]
    pub mobile_speed: Vec<f64>,
}

impl TelemetryResponse {
    fn ok(data: TelemetryData) -> Self {
        Self { success: true, data: Some(data), error: None }
    }

    fn failed(error: impl Into<String>) -> Self {
        Self { success: false, data: None, error: Some(error.into()) }
    }
}

#[derive(Clone, Debug)]
pub struct TelemetryClient {
    http: Client,
    config: TelemetryConfig,
}

impl TelemetryClient {
    pub fn new(config: TelemetryConfig) -> Self {
        Self { http: Client::new(), config }
    }

    /// Fetches the configured signal series. Never returns `Err`: status,
    /// network, and parse failures all fold into `success: false`.
    pub async fn fetch_vehicle_data(&self) -> TelemetryResponse {
        let request = self
            .http
            .get(&self.config.api_url)
            .query(&[
                ("vehicle_id", self.config.vehicle_id.as_str()),
                ("trip_id", self.config.trip_id.as_str()),
                ("signals", self.config.signal.as_str()),
                ("token", self.config.api_token.as_str()),
            ]);

        let response = match request.send().await {
            Ok(r) => r,
            Err(e) => return TelemetryResponse::failed(format!("Telemetry request failed: {e}")),
        };

        let status = response.status();
        if !status.is_success() {
            return TelemetryResponse::failed(format!(
                "Telemetry endpoint returned status {status}"
            ));
        }

        match response.json::<TelemetryData>().await {
            Ok(data) => TelemetryResponse::ok(data),
            Err(e) => TelemetryResponse::failed(format!("Invalid telemetry payload: {e}")),
        }
    }
}
