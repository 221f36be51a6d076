// src/services/mod.rs
pub mod aggregator;
pub mod classifier;
pub mod controller;
pub mod error_log;
pub mod telemetry;
