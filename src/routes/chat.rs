// src/routes/chat.rs
use axum::{Json, extract::State};

use crate::{
    error::AppError,
    message::{ChatMessage, QueryRequest, QueryResponse},
    services::controller::SubmitOutcome,
    state::SharedState,
};

pub async fn query_handler(
    State(state): State<SharedState>,
    Json(payload): Json<QueryRequest>,
) -> Result<Json<QueryResponse>, AppError> {
    let trimmed = payload.message.trim();
    if trimmed.is_empty() {
        return Err(AppError::BadRequest("Message cannot be empty".to_string()));
    }

    match state.controller.submit_query(trimmed).await {
        SubmitOutcome::Replied(reply) => Ok(Json(QueryResponse { reply })),
        SubmitOutcome::Busy => Err(AppError::Busy),
    }
}

pub async fn messages_handler(State(state): State<SharedState>) -> Json<Vec<ChatMessage>> {
    Json(state.controller.messages().await)
}
