// src/state.rs
use std::sync::Arc;

use crate::config::Config;
use crate::services::controller::ConversationController;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub controller: ConversationController,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            controller: ConversationController::new(config),
        }
    }
}
